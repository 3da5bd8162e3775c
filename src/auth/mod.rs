//! 认证模块
//!
//! 提供认证能力契约和凭据校验
//!
//! - `Authenticator`: 主体变体实现的 {authenticate, logout} 契约
//! - `CredentialGuard` / `LoginState`: 密码检查、登录失败计数和锁定
//! - `AuthenticationContext`: 作用域结束时自动登出的守卫
//! - `CredentialVerifier`: 外部凭据校验协作者，默认实现为 `BcryptVerifier`

pub mod authenticator;
pub mod context;
pub mod verifier;

pub use authenticator::{Authenticator, CredentialGuard, LoginState};
pub use context::AuthenticationContext;
pub use verifier::{BcryptVerifier, CredentialVerifier, SharedVerifier};
