use chrono::{DateTime, Utc};
use log::info;
use parking_lot::Mutex;

use super::user::{User, UserIdentity};
use crate::auth::{Authenticator, BcryptVerifier, CredentialGuard, LoginState, SharedVerifier};
use crate::config::AuthConfig;
use crate::core::error::AuthResult;
use crate::core::RoleType;

/// 普通用户主体，角色固定为 `USER`，不持有权限
pub struct StandardUser {
    identity: UserIdentity,
    guard: CredentialGuard,
    login: Mutex<LoginState>,
}

impl StandardUser {
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
            login: Mutex::new(LoginState::default()),
        }
    }

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

    pub fn is_locked(&self) -> bool {
        self.guard.is_locked(&self.login.lock())
    }

    pub fn reset_lockout(&self) {
        self.login.lock().reset_failures();
    }

    pub fn last_login_at(&self) -> Option<DateTime<Utc>> {
        self.login.lock().last_login_at()
    }
}

impl User for StandardUser {
    fn identity(&self) -> &UserIdentity {
        &self.identity
    }

    fn role(&self) -> RoleType {
        RoleType::User
    }
}

impl Authenticator for StandardUser {
    fn authenticate(&self, username: &str, password: &str) -> bool {
        self.try_authenticate(username, password).is_ok()
    }

    fn logout(&self) {
        if self.login.lock().logout() {
            info!("User {} logged out", self.identity.username());
        }
    }

    fn is_authenticated(&self) -> bool {
        self.login.lock().is_logged_in()
    }

    fn try_authenticate(&self, username: &str, password: &str) -> AuthResult<()> {
        let mut login = self.login.lock();
        self.guard
            .attempt(self.identity.username(), &mut login, username, password)
    }
}

impl std::fmt::Debug for StandardUser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StandardUser")
            .field("identity", &self.identity)
            .field("guard", &self.guard)
            .finish()
    }
}
