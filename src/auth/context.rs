//! 作用域认证上下文
//!
//! `AuthenticationContext` 持有主体的借用，离开作用域时调用 `logout()`，
//! 无论作用域是正常结束还是提前返回。

use log::debug;
use std::ops::Deref;

use super::authenticator::Authenticator;
use crate::core::error::AuthResult;

/// 认证作用域守卫
///
/// 解引用为主体本身；`Drop` 时登出主体。
pub struct AuthenticationContext<'a, T: Authenticator + ?Sized> {
    principal: &'a T,
}

impl<'a, T: Authenticator + ?Sized> AuthenticationContext<'a, T> {
    /// 包装一个主体，不做认证
    pub fn new(principal: &'a T) -> Self {
        Self { principal }
    }

    /// 认证成功后才进入作用域；失败时直接返回错误，不会触发登出
    pub fn login(principal: &'a T, username: &str, password: &str) -> AuthResult<Self> {
        principal.try_authenticate(username, password)?;
        Ok(Self::new(principal))
    }
}

impl<T: Authenticator + ?Sized> Deref for AuthenticationContext<'_, T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        self.principal
    }
}

impl<T: Authenticator + ?Sized> Drop for AuthenticationContext<'_, T> {
    fn drop(&mut self) {
        debug!("Authentication context closed");
        self.principal.logout();
    }
}
