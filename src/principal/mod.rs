//! 主体模型
//!
//! 身份（[`User`]）和认证能力（[`Authenticator`]）是两个独立的契约，
//! 具体主体类型同时实现两者。[`Principal`] 是二者的组合，可用作
//! `SessionManager<dyn Principal>` 以在同一注册表中保存不同变体。

pub mod admin;
pub mod standard;
pub mod user;

pub use admin::AdminUser;
pub use standard::StandardUser;
pub use user::{User, UserIdentity};

use crate::auth::Authenticator;

/// 可认证的带角色身份
pub trait Principal: User + Authenticator {}

impl<T: User + Authenticator + ?Sized> Principal for T {}
