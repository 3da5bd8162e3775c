//! 认证错误类型
//!
//! 涵盖登录、密码验证和账户锁定相关的错误

use thiserror::Error;

use crate::core::error::codes::{StatusCode, ToStatusCode};

/// 认证操作结果类型别名
pub type AuthResult<T> = Result<T, AuthError>;

/// 认证相关错误
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("用户名或密码不能为空")]
    EmptyCredentials,

    #[error("用户名或密码错误")]
    InvalidCredentials,

    #[error("账户已锁定: {0}")]
    AccountLocked(String),

    #[error("凭据校验器错误: {0}")]
    VerifierError(String),
}

impl ToStatusCode for AuthError {
    fn to_status_code(&self) -> StatusCode {
        StatusCode::Unauthorized
    }
}
