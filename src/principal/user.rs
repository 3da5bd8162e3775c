use serde::{Deserialize, Serialize};

use crate::core::RoleType;

/// 主体的不可变身份信息
///
/// 构造后用户名和ID不再改变。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserIdentity {
    username: String,
    id: i64,
}

impl UserIdentity {
    pub fn new(username: impl Into<String>, id: i64) -> Self {
        Self {
            username: username.into(),
            id,
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn id(&self) -> i64 {
        self.id
    }
}

/// 带角色的身份
///
/// 角色由具体变体决定，是固定值。权限列表默认为空，
/// 持有权限的变体覆盖 `permissions` / `has_permission`。
pub trait User: Send + Sync {
    fn identity(&self) -> &UserIdentity;

    fn role(&self) -> RoleType;

    fn username(&self) -> &str {
        self.identity().username()
    }

    fn id(&self) -> i64 {
        self.identity().id()
    }

    /// 角色标签，例如 `"ADMIN"`
    fn role_name(&self) -> &'static str {
        self.role().as_str()
    }

    /// 权限列表的副本，按添加顺序
    fn permissions(&self) -> Vec<String> {
        Vec::new()
    }

    fn has_permission(&self, permission: &str) -> bool {
        self.permissions().iter().any(|p| p == permission)
    }
}
