//! 角色类型定义

use serde::{Deserialize, Serialize};

/// 主体角色
///
/// 每种主体变体对应一个固定的角色标签，`as_str` 的结果即对外展示的角色名。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoleType {
    Admin,
    User,
}

impl RoleType {
    /// 角色标签，例如 `"ADMIN"`
    pub fn as_str(&self) -> &'static str {
        match self {
            RoleType::Admin => "ADMIN",
            RoleType::User => "USER",
        }
    }
}

impl std::fmt::Display for RoleType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
