use log::{info, warn};
use std::ops::Deref;
use std::sync::Arc;

use super::issuance::issue_session;
use crate::config::AuthConfig;
use crate::core::error::{AuthResult, SessionError, SessionResult};
use crate::principal::Principal;
use crate::session::{PrefixedIdGenerator, SessionIdGenerator, SessionManager};

/// 注入的注册表实例或进程级单例
enum ManagerHandle<T: ?Sized + 'static> {
    Owned(Arc<SessionManager<T>>),
    Global(&'static SessionManager<T>),
}

impl<T: ?Sized + 'static> Deref for ManagerHandle<T> {
    type Target = SessionManager<T>;

    fn deref(&self) -> &Self::Target {
        match self {
            ManagerHandle::Owned(manager) => manager.as_ref(),
            ManagerHandle::Global(manager) => *manager,
        }
    }
}

/// 面向传输层的会话服务
///
/// 在签发协议和注册表之上提供带错误原因的接口，错误可通过
/// [`ToStatusCode`](crate::core::ToStatusCode) 映射为状态码：
/// 认证失败或主体已登出 -> 401，权限不足 -> 403，会话不存在 -> 404。
pub struct SessionService<T: ?Sized + 'static> {
    manager: ManagerHandle<T>,
    id_generator: Box<dyn SessionIdGenerator>,
}

impl<T: Principal + ?Sized + 'static> SessionService<T> {
    /// 使用注入的注册表
    pub fn new(manager: Arc<SessionManager<T>>, config: &AuthConfig) -> Self {
        Self {
            manager: ManagerHandle::Owned(manager),
            id_generator: Box::new(PrefixedIdGenerator::from_config(config)),
        }
    }

    /// 使用类型 `T` 的进程级单例注册表
    pub fn global(config: &AuthConfig) -> Self {
        Self {
            manager: ManagerHandle::Global(SessionManager::<T>::instance()),
            id_generator: Box::new(PrefixedIdGenerator::from_config(config)),
        }
    }

    pub fn with_id_generator<G>(mut self, generator: G) -> Self
    where
        G: SessionIdGenerator + 'static,
    {
        self.id_generator = Box::new(generator);
        self
    }

    pub fn manager(&self) -> &SessionManager<T> {
        &self.manager
    }

    /// 认证并创建会话，返回会话ID
    pub fn login(&self, principal: &Arc<T>, username: &str, password: &str) -> AuthResult<String> {
        issue_session(
            self.id_generator.as_ref(),
            principal,
            username,
            password,
            &self.manager,
        )
    }

    /// 根据会话ID查找主体
    ///
    /// 主体已登出（`is_authenticated()` 为假）时会话不再有效，返回
    /// `NotAuthenticated`。会话条目保留在注册表中，由 `logout` 负责撤销。
    pub fn resolve(&self, session_id: &str) -> SessionResult<Arc<T>> {
        let principal = self
            .manager
            .get_session(session_id)
            .ok_or_else(|| SessionError::SessionNotFound(session_id.to_string()))?;
        if !principal.is_authenticated() {
            warn!(
                "Session {} rejected: {} is not authenticated",
                session_id,
                principal.username()
            );
            return Err(SessionError::NotAuthenticated(session_id.to_string()));
        }
        Ok(principal)
    }

    /// 查找主体并检查其是否持有指定权限
    pub fn authorize(&self, session_id: &str, permission: &str) -> SessionResult<Arc<T>> {
        let principal = self.resolve(session_id)?;
        if principal.has_permission(permission) {
            Ok(principal)
        } else {
            warn!(
                "Session {} ({}) denied permission {}",
                session_id,
                principal.username(),
                permission
            );
            Err(SessionError::PermissionDenied {
                session_id: session_id.to_string(),
                permission: permission.to_string(),
            })
        }
    }

    /// 撤销会话并登出主体
    ///
    /// 会话的查找与删除是一次原子操作，并发登出同一会话时只有一个调用成功。
    /// 主体的 `logout` 在注册表锁释放后调用。
    pub fn logout(&self, session_id: &str) -> SessionResult<()> {
        let principal = self
            .manager
            .take_session(session_id)
            .ok_or_else(|| SessionError::SessionNotFound(session_id.to_string()))?;
        principal.logout();
        info!("Session {} logged out ({})", session_id, principal.username());
        Ok(())
    }
}
