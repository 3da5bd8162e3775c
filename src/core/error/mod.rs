//! 统一错误处理
//!
//! 按关注点拆分错误类型，每类错误提供 `XxxResult<T>` 别名。
//! 认证失败、会话不存在等预期的否定结果在核心 API 中以 `bool` / `Option`
//! 返回；这里的错误类型供上层门面（`SessionService`）和配置加载使用，
//! 并通过 [`ToStatusCode`] 映射到对外状态码。

pub mod auth;
pub mod codes;
pub mod config;
pub mod session;

pub use auth::{AuthError, AuthResult};
pub use codes::{StatusCode, ToStatusCode};
pub use config::{ConfigError, ConfigResult};
pub use session::{SessionError, SessionResult};
