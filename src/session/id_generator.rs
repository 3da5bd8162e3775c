//! 会话ID生成策略
//!
//! 默认策略 `PrefixedIdGenerator` 是确定性的：前缀 + 用户名。同一用户的
//! 第二次登录会覆盖前一个会话，且不具备抗碰撞能力。需要同一用户并存多个
//! 会话时改用 `RandomIdGenerator`。

use uuid::Uuid;

use crate::config::{AuthConfig, DEFAULT_SESSION_ID_PREFIX};

/// 会话ID生成 trait
pub trait SessionIdGenerator: Send + Sync {
    fn generate(&self, username: &str) -> String;
}

/// 前缀 + 用户名
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrefixedIdGenerator {
    prefix: String,
}

impl PrefixedIdGenerator {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    pub fn from_config(config: &AuthConfig) -> Self {
        Self::new(config.session_id_prefix.clone())
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }
}

impl Default for PrefixedIdGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_SESSION_ID_PREFIX)
    }
}

impl SessionIdGenerator for PrefixedIdGenerator {
    fn generate(&self, username: &str) -> String {
        format!("{}{}", self.prefix, username)
    }
}

/// 前缀 + 随机 UUID v4，与用户名无关
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RandomIdGenerator {
    prefix: String,
}

impl RandomIdGenerator {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    pub fn from_config(config: &AuthConfig) -> Self {
        Self::new(config.session_id_prefix.clone())
    }
}

impl Default for RandomIdGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_SESSION_ID_PREFIX)
    }
}

impl SessionIdGenerator for RandomIdGenerator {
    fn generate(&self, _username: &str) -> String {
        format!("{}{}", self.prefix, Uuid::new_v4().simple())
    }
}
