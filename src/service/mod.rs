//! 会话服务模块
//!
//! - `issuance`: 认证并签发会话的协议函数
//! - `session_service`: 带错误原因、可映射状态码的门面

pub mod issuance;
pub mod session_service;

pub use issuance::{
    authenticate_and_create_session, authenticate_and_create_session_with, issue_session,
};
pub use session_service::SessionService;
