pub mod error;
pub mod permission;

// 错误和结果类型
pub use error::{
    AuthError, AuthResult, ConfigError, ConfigResult, SessionError, SessionResult, StatusCode,
    ToStatusCode,
};

// 角色类型
pub use permission::RoleType;
