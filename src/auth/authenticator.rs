use chrono::{DateTime, Utc};
use log::{info, warn};
use std::sync::Arc;

use super::verifier::{CredentialVerifier, SharedVerifier};
use crate::config::AuthConfig;
use crate::core::error::{AuthError, AuthResult};

/// 认证 trait
///
/// 由可以充当认证者的主体变体实现。实现必须允许对同一实例并发调用，
/// 内部状态的修改需要在实例自己的锁内串行化。
pub trait Authenticator: Send + Sync {
    /// 校验凭据，成功返回 `true`。认证失败是正常的否定结果，不是错误。
    fn authenticate(&self, username: &str, password: &str) -> bool;

    /// 清除主体的临时认证状态。幂等，已登出时调用不做任何事。
    fn logout(&self);

    /// 当前是否处于已认证状态
    fn is_authenticated(&self) -> bool;

    /// 与 `authenticate` 相同，但返回失败原因
    fn try_authenticate(&self, username: &str, password: &str) -> AuthResult<()> {
        if self.authenticate(username, password) {
            Ok(())
        } else {
            Err(AuthError::InvalidCredentials)
        }
    }
}

/// 单个主体的登录状态
///
/// 由持有它的主体放在自己的锁内，不单独加锁。
#[derive(Debug, Clone, Default)]
pub struct LoginState {
    logged_in: bool,
    failed_attempts: u32,
    last_login_at: Option<DateTime<Utc>>,
}

impl LoginState {
    pub fn is_logged_in(&self) -> bool {
        self.logged_in
    }

    /// 连续失败次数
    pub fn failed_attempts(&self) -> u32 {
        self.failed_attempts
    }

    pub fn last_login_at(&self) -> Option<DateTime<Utc>> {
        self.last_login_at
    }

    /// 登出，返回调用前是否处于登录状态
    pub fn logout(&mut self) -> bool {
        std::mem::replace(&mut self.logged_in, false)
    }

    /// 清除失败计数（解除锁定）
    pub fn reset_failures(&mut self) {
        self.failed_attempts = 0;
    }
}

/// 密码检查与登录失败限制
///
/// 每个主体变体持有一个 `CredentialGuard`，在自己的锁内对 `LoginState` 调用
/// [`attempt`](Self::attempt)。
pub struct CredentialGuard {
    verifier: SharedVerifier,
    /// 连续失败多少次后锁定，0 表示不限制
    max_failed_attempts: u32,
}

impl CredentialGuard {
    pub fn new(verifier: SharedVerifier, max_failed_attempts: u32) -> Self {
        Self {
            verifier,
            max_failed_attempts,
        }
    }

    pub fn from_config<V>(verifier: V, config: &AuthConfig) -> Self
    where
        V: CredentialVerifier + 'static,
    {
        Self::new(Arc::new(verifier), config.failed_login_attempts)
    }

    pub fn set_max_failed_attempts(&mut self, max_failed_attempts: u32) {
        self.max_failed_attempts = max_failed_attempts;
    }

    /// 是否已达到失败上限
    pub fn is_locked(&self, state: &LoginState) -> bool {
        self.max_failed_attempts > 0 && state.failed_attempts >= self.max_failed_attempts
    }

    /// 对 `owner` 主体执行一次登录尝试
    ///
    /// 用户名必须与主体自身的用户名一致。用户名不匹配和空凭据不计入失败次数；
    /// 校验器出错时同样不计数，但按失败处理。
    pub fn attempt(
        &self,
        owner: &str,
        state: &mut LoginState,
        username: &str,
        password: &str,
    ) -> AuthResult<()> {
        if username.is_empty() || password.is_empty() {
            return Err(AuthError::EmptyCredentials);
        }

        if username != owner {
            warn!("Authentication for {} rejected: username mismatch ({})", owner, username);
            return Err(AuthError::InvalidCredentials);
        }

        if self.is_locked(state) {
            warn!("Authentication for {} rejected: account locked", owner);
            return Err(AuthError::AccountLocked(owner.to_string()));
        }

        match self.validate_password(username, password) {
            Ok(true) => {
                state.logged_in = true;
                state.failed_attempts = 0;
                state.last_login_at = Some(Utc::now());
                info!("User {} authenticated", owner);
                Ok(())
            }
            Ok(false) => {
                state.failed_attempts = state.failed_attempts.saturating_add(1);
                if self.is_locked(state) {
                    warn!(
                        "User {} locked after {} failed attempts",
                        owner, state.failed_attempts
                    );
                    Err(AuthError::AccountLocked(owner.to_string()))
                } else {
                    warn!(
                        "Invalid credentials for {} (failed attempts: {})",
                        owner, state.failed_attempts
                    );
                    Err(AuthError::InvalidCredentials)
                }
            }
            Err(e) => {
                warn!("Credential verifier failed for {}: {}", owner, e);
                Err(e)
            }
        }
    }

    fn validate_password(&self, username: &str, password: &str) -> AuthResult<bool> {
        self.verifier.verify(username, password)
    }
}

impl std::fmt::Debug for CredentialGuard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialGuard")
            .field("max_failed_attempts", &self.max_failed_attempts)
            .finish_non_exhaustive()
    }
}
