//! 会话错误类型
//!
//! 涵盖会话查找、主体认证状态检查和基于会话的权限检查

use thiserror::Error;

use crate::core::error::codes::{StatusCode, ToStatusCode};

/// 会话操作结果类型别名
pub type SessionResult<T> = Result<T, SessionError>;

/// 会话相关错误
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error("会话不存在: {0}")]
    SessionNotFound(String),

    #[error("会话主体未认证: {0}")]
    NotAuthenticated(String),

    #[error("权限不足: 会话 {session_id} 缺少权限 {permission}")]
    PermissionDenied {
        session_id: String,
        permission: String,
    },
}

impl ToStatusCode for SessionError {
    fn to_status_code(&self) -> StatusCode {
        match self {
            SessionError::SessionNotFound(_) => StatusCode::NotFound,
            SessionError::NotAuthenticated(_) => StatusCode::Unauthorized,
            SessionError::PermissionDenied { .. } => StatusCode::Forbidden,
        }
    }
}
