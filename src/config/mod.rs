use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::core::error::{ConfigError, ConfigResult};

/// 默认会话ID前缀
pub const DEFAULT_SESSION_ID_PREFIX: &str = "session_";

/// bcrypt 允许的代价范围
const BCRYPT_MIN_COST: u32 = 4;
const BCRYPT_MAX_COST: u32 = 31;

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    pub auth: AuthConfig,
    pub log: LogConfig,
}

/// 认证相关配置
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct AuthConfig {
    /// 连续登录失败多少次后锁定主体，0 表示不限制
    pub failed_login_attempts: u32,
    /// 会话ID前缀，会话ID = 前缀 + 用户名
    pub session_id_prefix: String,
    /// bcrypt 哈希代价
    pub bcrypt_cost: u32,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            failed_login_attempts: 5,
            session_id_prefix: DEFAULT_SESSION_ID_PREFIX.to_string(),
            bcrypt_cost: bcrypt::DEFAULT_COST,
        }
    }
}

/// 日志配置
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct LogConfig {
    pub level: String,
    pub dir: String,
    pub file: String,
    pub max_file_size: u64,
    pub max_files: usize,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            dir: "logs".to_string(),
            file: "authsession".to_string(),
            max_file_size: 100 * 1024 * 1024, // 100MB
            max_files: 5,
        }
    }
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> ConfigResult<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> ConfigResult<Self> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> ConfigResult<()> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    pub fn validate(&self) -> ConfigResult<()> {
        if !(BCRYPT_MIN_COST..=BCRYPT_MAX_COST).contains(&self.auth.bcrypt_cost) {
            return Err(ConfigError::Invalid {
                field: "auth.bcrypt_cost",
                reason: format!(
                    "must be between {} and {}, got {}",
                    BCRYPT_MIN_COST,
                    BCRYPT_MAX_COST,
                    self.auth.bcrypt_cost
                ),
            });
        }
        if self.log.file.is_empty() {
            return Err(ConfigError::Invalid {
                field: "log.file",
                reason: "must not be empty".to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.auth.session_id_prefix, "session_");
        assert_eq!(config.auth.failed_login_attempts, 5);
        assert_eq!(config.log.level, "info");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_load_save() {
        let mut temp_file = NamedTempFile::new().expect("Failed to create temporary file");

        let mut config = Config::default();
        config.auth.failed_login_attempts = 3;
        config.auth.bcrypt_cost = 4;
        let toml_content =
            toml::to_string_pretty(&config).expect("Failed to serialize config to TOML");
        temp_file
            .write_all(toml_content.as_bytes())
            .expect("Failed to write TOML content to temporary file");

        let loaded_config =
            Config::load(temp_file.path()).expect("Failed to load config from temporary file");
        assert_eq!(config, loaded_config);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config = Config::from_toml_str("[auth]\nsession_id_prefix = \"sid-\"\n")
            .expect("Failed to parse partial config");
        assert_eq!(config.auth.session_id_prefix, "sid-");
        assert_eq!(config.auth.failed_login_attempts, 5);
        assert_eq!(config.log, LogConfig::default());
    }

    #[test]
    fn test_invalid_bcrypt_cost_rejected() {
        let result = Config::from_toml_str("[auth]\nbcrypt_cost = 2\n");
        assert!(matches!(
            result,
            Err(ConfigError::Invalid { field: "auth.bcrypt_cost", .. })
        ));
    }

    #[test]
    fn test_malformed_toml_rejected() {
        let result = Config::from_toml_str("[auth\n");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }
}
