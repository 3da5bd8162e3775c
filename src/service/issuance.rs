//! 会话签发协议
//!
//! 两个终态：
//! - 认证通过：由用户名派生会话ID，写入注册表，返回 `(true, session_id)`
//! - 认证失败：不修改注册表，返回 `(false, "")`
//!
//! 不做重试，重试由调用方决定。

use log::{info, warn};
use std::sync::Arc;

use crate::auth::Authenticator;
use crate::core::error::AuthResult;
use crate::session::{PrefixedIdGenerator, SessionIdGenerator, SessionManager};

/// 认证主体并在成功时创建会话，会话ID为 `"session_" + username`
pub fn authenticate_and_create_session<T>(
    principal: &Arc<T>,
    username: &str,
    password: &str,
    manager: &SessionManager<T>,
) -> (bool, String)
where
    T: Authenticator + ?Sized,
{
    authenticate_and_create_session_with(
        &PrefixedIdGenerator::default(),
        principal,
        username,
        password,
        manager,
    )
}

/// 与 [`authenticate_and_create_session`] 相同，使用调用方提供的会话ID策略
pub fn authenticate_and_create_session_with<T, G>(
    generator: &G,
    principal: &Arc<T>,
    username: &str,
    password: &str,
    manager: &SessionManager<T>,
) -> (bool, String)
where
    T: Authenticator + ?Sized,
    G: SessionIdGenerator + ?Sized,
{
    match issue_session(generator, principal, username, password, manager) {
        Ok(session_id) => (true, session_id),
        Err(_) => (false, String::new()),
    }
}

/// 签发协议的带原因版本，失败时返回具体的认证错误
///
/// 主体的锁只在 `try_authenticate` 内部持有，写注册表前已释放。
pub fn issue_session<T, G>(
    generator: &G,
    principal: &Arc<T>,
    username: &str,
    password: &str,
    manager: &SessionManager<T>,
) -> AuthResult<String>
where
    T: Authenticator + ?Sized,
    G: SessionIdGenerator + ?Sized,
{
    if let Err(e) = principal.try_authenticate(username, password) {
        warn!("Session issuance rejected for {}: {}", username, e);
        return Err(e);
    }

    let session_id = generator.generate(username);
    manager.create_session(session_id.clone(), Arc::clone(principal));
    info!("Issued session {} for {}", session_id, username);
    Ok(session_id)
}
