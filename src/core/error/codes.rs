//! 对外状态码定义
//!
//! 传输层（HTTP、IPC 等）在本 crate 之上构建时使用的封闭状态码集合。
//! 协议结果到状态码的映射：
//! - 认证失败 -> `Unauthorized`
//! - 会话不存在 -> `NotFound`
//! - 权限不足 -> `Forbidden`

use serde::{Deserialize, Serialize};

/// 对外状态码
///
/// 数值与 HTTP 状态码保持一致，一旦定义不应修改。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StatusCode {
    Success = 200,
    Unauthorized = 401,
    Forbidden = 403,
    NotFound = 404,
}

impl StatusCode {
    /// 获取状态码的数值
    pub fn as_u16(&self) -> u16 {
        *self as u16
    }

    /// 根据数值获取状态码
    pub fn from_u16(code: u16) -> Option<Self> {
        match code {
            200 => Some(StatusCode::Success),
            401 => Some(StatusCode::Unauthorized),
            403 => Some(StatusCode::Forbidden),
            404 => Some(StatusCode::NotFound),
            _ => None,
        }
    }

    /// 获取默认的状态消息
    pub fn message(&self) -> &'static str {
        match self {
            StatusCode::Success => "OK",
            StatusCode::Unauthorized => "Unauthorized",
            StatusCode::Forbidden => "Forbidden",
            StatusCode::NotFound => "Not Found",
        }
    }
}

impl std::fmt::Display for StatusCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.as_u16(), self.message())
    }
}

/// 将内部错误映射为对外状态码
pub trait ToStatusCode {
    fn to_status_code(&self) -> StatusCode;
}

impl<T, E: ToStatusCode> ToStatusCode for Result<T, E> {
    fn to_status_code(&self) -> StatusCode {
        match self {
            Ok(_) => StatusCode::Success,
            Err(e) => e.to_status_code(),
        }
    }
}
