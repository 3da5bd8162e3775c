use chrono::{DateTime, Utc};
use log::{debug, info};
use parking_lot::Mutex;

use super::user::{User, UserIdentity};
use crate::auth::{Authenticator, BcryptVerifier, CredentialGuard, LoginState, SharedVerifier};
use crate::config::AuthConfig;
use crate::core::error::AuthResult;
use crate::core::RoleType;

/// 管理员主体的可变状态，全部由同一把锁保护
#[derive(Debug, Default)]
struct AdminState {
    login: LoginState,
    permissions: Vec<String>,
}

/// 管理员主体
///
/// 同时实现 [`User`]（角色固定为 `ADMIN`）和 [`Authenticator`]。
/// `add_permission`、认证和登出共享一把锁；读取权限时返回锁内拷贝。
pub struct AdminUser {
    identity: UserIdentity,
    guard: CredentialGuard,
    state: Mutex<AdminState>,
}

impl AdminUser {
    pub fn new(username: impl Into<String>, id: i64, verifier: SharedVerifier) -> Self {
        Self::with_guard(
            username,
            id,
            CredentialGuard::new(verifier, AuthConfig::default().failed_login_attempts),
        )
    }

    pub fn with_guard(username: impl Into<String>, id: i64, guard: CredentialGuard) -> Self {
        Self {
            identity: UserIdentity::new(username, id),
            guard,
            state: Mutex::new(AdminState::default()),
        }
    }

    /// 用明文密码创建，密码按配置的代价做 bcrypt 哈希
    pub fn with_password(
        username: impl Into<String>,
        id: i64,
        password: &str,
        config: &AuthConfig,
    ) -> AuthResult<Self> {
        let verifier = BcryptVerifier::new(password, config.bcrypt_cost)?;
        Ok(Self::with_guard(
            username,
            id,
            CredentialGuard::from_config(verifier, config),
        ))
    }

    pub fn with_max_failed_attempts(mut self, max_failed_attempts: u32) -> Self {
        self.guard.set_max_failed_attempts(max_failed_attempts);
        self
    }

    /// 追加权限，允许重复
    pub fn add_permission(&self, permission: impl Into<String>) {
        let permission = permission.into();
        debug!("Adding permission {} to {}", permission, self.identity.username());
        self.state.lock().permissions.push(permission);
    }

    pub fn permission_count(&self) -> usize {
        self.state.lock().permissions.len()
    }

    pub fn is_locked(&self) -> bool {
        self.guard.is_locked(&self.state.lock().login)
    }

    pub fn failed_attempts(&self) -> u32 {
        self.state.lock().login.failed_attempts()
    }

    pub fn reset_lockout(&self) {
        self.state.lock().login.reset_failures();
        info!("Lockout cleared for {}", self.identity.username());
    }

    pub fn last_login_at(&self) -> Option<DateTime<Utc>> {
        self.state.lock().login.last_login_at()
    }
}

impl User for AdminUser {
    fn identity(&self) -> &UserIdentity {
        &self.identity
    }

    fn role(&self) -> RoleType {
        RoleType::Admin
    }

    fn permissions(&self) -> Vec<String> {
        self.state.lock().permissions.clone()
    }

    fn has_permission(&self, permission: &str) -> bool {
        self.state
            .lock()
            .permissions
            .iter()
            .any(|p| p == permission)
    }
}

impl Authenticator for AdminUser {
    fn authenticate(&self, username: &str, password: &str) -> bool {
        self.try_authenticate(username, password).is_ok()
    }

    fn logout(&self) {
        if self.state.lock().login.logout() {
            info!("Admin {} logged out", self.identity.username());
        }
    }

    fn is_authenticated(&self) -> bool {
        self.state.lock().login.is_logged_in()
    }

    fn try_authenticate(&self, username: &str, password: &str) -> AuthResult<()> {
        let mut state = self.state.lock();
        self.guard
            .attempt(self.identity.username(), &mut state.login, username, password)
    }
}

impl std::fmt::Debug for AdminUser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminUser")
            .field("identity", &self.identity)
            .field("guard", &self.guard)
            .field("permissions", &self.permissions())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::AuthError;
    use std::sync::Arc;
    use std::thread;

    fn test_admin() -> AdminUser {
        AdminUser::new(
            "admin1",
            7,
            Arc::new(|_username: &str, password: &str| -> AuthResult<bool> {
                Ok(password == "p@ss")
            }),
        )
    }

    #[test]
    fn test_identity_and_role() {
        let admin = test_admin();
        assert_eq!(admin.username(), "admin1");
        assert_eq!(admin.id(), 7);
        assert_eq!(admin.role(), RoleType::Admin);
        assert_eq!(admin.role_name(), "ADMIN");
    }

    #[test]
    fn test_add_permission_order_and_duplicates() {
        let admin = test_admin();
        admin.add_permission("read");
        admin.add_permission("write");
        admin.add_permission("read");

        assert_eq!(admin.permissions(), vec!["read", "write", "read"]);
        assert!(admin.has_permission("write"));
        assert!(!admin.has_permission("delete"));
    }

    #[test]
    fn test_add_permission_appends_at_end() {
        let admin = test_admin();
        admin.add_permission("a");
        admin.add_permission("x");

        let permissions = admin.permissions();
        assert_eq!(permissions.last().map(String::as_str), Some("x"));
        assert_eq!(permissions.iter().filter(|p| *p == "x").count(), 1);
    }

    #[test]
    fn test_concurrent_add_permission() {
        let admin = Arc::new(test_admin());
        let handles: Vec<_> = (0..32)
            .map(|i| {
                let admin = Arc::clone(&admin);
                thread::spawn(move || admin.add_permission(format!("perm{}", i)))
            })
            .collect();
        for handle in handles {
            handle.join().expect("thread panicked");
        }

        assert_eq!(admin.permission_count(), 32);
        for i in 0..32 {
            assert!(admin.has_permission(&format!("perm{}", i)));
        }
    }

    #[test]
    fn test_authenticate_and_logout() {
        let admin = test_admin();
        assert!(!admin.is_authenticated());

        assert!(admin.authenticate("admin1", "p@ss"));
        assert!(admin.is_authenticated());
        assert!(admin.last_login_at().is_some());

        admin.logout();
        assert!(!admin.is_authenticated());
        // 幂等
        admin.logout();
        assert!(!admin.is_authenticated());
    }

    #[test]
    fn test_authenticate_rejects_invalid() {
        let admin = test_admin();
        assert!(!admin.authenticate("admin1", "wrong"));
        assert!(!admin.authenticate("someone", "p@ss"));
        assert!(!admin.authenticate("", ""));
        assert!(!admin.is_authenticated());
    }

    #[test]
    fn test_lockout_and_reset() {
        let admin = test_admin().with_max_failed_attempts(2);
        assert!(!admin.authenticate("admin1", "x"));
        assert_eq!(
            admin.try_authenticate("admin1", "y"),
            Err(AuthError::AccountLocked("admin1".to_string()))
        );
        assert!(admin.is_locked());
        assert!(!admin.authenticate("admin1", "p@ss"));

        admin.reset_lockout();
        assert!(!admin.is_locked());
        assert_eq!(admin.failed_attempts(), 0);
        assert!(admin.authenticate("admin1", "p@ss"));
    }

    #[test]
    fn test_concurrent_authenticate() {
        let admin = Arc::new(test_admin().with_max_failed_attempts(0));
        let handles: Vec<_> = (0..16)
            .map(|i| {
                let admin = Arc::clone(&admin);
                thread::spawn(move || {
                    let password = if i % 2 == 0 { "p@ss" } else { "wrong" };
                    admin.authenticate("admin1", password)
                })
            })
            .collect();

        let accepted = handles
            .into_iter()
            .map(|h| h.join().expect("thread panicked"))
            .filter(|ok| *ok)
            .count();
        assert_eq!(accepted, 8);
        assert!(admin.is_authenticated());
    }

    #[test]
    fn test_with_password_uses_bcrypt() {
        let config = AuthConfig {
            bcrypt_cost: 4,
            ..AuthConfig::default()
        };
        let admin = AdminUser::with_password("admin1", 7, "p@ss", &config)
            .expect("Failed to create admin");
        assert!(admin.authenticate("admin1", "p@ss"));
        assert!(!admin.authenticate("admin1", "P@ss"));
    }
}
