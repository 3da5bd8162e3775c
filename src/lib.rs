//! AuthSession - 可插拔认证器、带角色的主体和按类型区分的并发会话注册表
//!
//! 调用流程：调用方提供凭据 -> 签发协议调用主体的 `Authenticator::authenticate`
//! -> 成功时派生会话ID并写入 `SessionManager` -> 之后凭会话ID查找或撤销会话。
//!
//! ```
//! use std::sync::Arc;
//! use authsession::core::AuthResult;
//! use authsession::principal::AdminUser;
//! use authsession::service::authenticate_and_create_session;
//! use authsession::session::SessionManager;
//!
//! let admin1 = Arc::new(AdminUser::new(
//!     "admin1",
//!     7,
//!     Arc::new(|_username: &str, password: &str| -> AuthResult<bool> { Ok(password == "p@ss") }),
//! ));
//! let manager = SessionManager::new();
//!
//! let (ok, session_id) = authenticate_and_create_session(&admin1, "admin1", "p@ss", &manager);
//! assert!(ok);
//! assert_eq!(session_id, "session_admin1");
//! assert!(manager.get_session("session_admin1").is_some());
//!
//! manager.remove_session("session_admin1");
//! assert!(manager.get_session("session_admin1").is_none());
//! ```

pub mod auth;
pub mod config;
pub mod core;
pub mod principal;
pub mod service;
pub mod session;
pub mod utils;
