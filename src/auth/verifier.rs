//! 凭据校验器
//!
//! 主体的密码检查委托给外部协作者。默认提供基于 bcrypt 哈希的实现，
//! 也可以直接传入闭包。

use std::sync::Arc;

use crate::core::error::{AuthError, AuthResult};

/// 凭据校验 trait
///
/// 返回 `Ok(false)` 表示凭据不匹配；`Err` 表示校验器本身出错（例如后端不可用）。
pub trait CredentialVerifier: Send + Sync {
    fn verify(&self, username: &str, password: &str) -> AuthResult<bool>;
}

impl<F> CredentialVerifier for F
where
    F: Fn(&str, &str) -> AuthResult<bool> + Send + Sync,
{
    fn verify(&self, username: &str, password: &str) -> AuthResult<bool> {
        self(username, password)
    }
}

/// 共享的校验器句柄
pub type SharedVerifier = Arc<dyn CredentialVerifier>;

/// 基于 bcrypt 哈希的单密码校验器
#[derive(Debug, Clone)]
pub struct BcryptVerifier {
    password_hash: String,
}

impl BcryptVerifier {
    /// 对明文密码做哈希后创建校验器
    pub fn new(password: &str, cost: u32) -> AuthResult<Self> {
        let password_hash = bcrypt::hash(password, cost)
            .map_err(|e| AuthError::VerifierError(format!("密码加密失败: {}", e)))?;
        Ok(Self { password_hash })
    }

    /// 使用已有的 bcrypt 哈希创建校验器
    pub fn from_hash(password_hash: impl Into<String>) -> Self {
        Self {
            password_hash: password_hash.into(),
        }
    }

    pub fn password_hash(&self) -> &str {
        &self.password_hash
    }
}

impl CredentialVerifier for BcryptVerifier {
    fn verify(&self, _username: &str, password: &str) -> AuthResult<bool> {
        bcrypt::verify(password, &self.password_hash)
            .map_err(|e| AuthError::VerifierError(format!("密码校验失败: {}", e)))
    }
}
