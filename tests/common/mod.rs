//! 集成测试共享工具模块
//!
//! 提供测试用配置和主体构造函数

#![allow(dead_code)]

use std::sync::Arc;

use authsession::auth::{BcryptVerifier, SharedVerifier};
use authsession::config::AuthConfig;
use authsession::core::AuthResult;
use authsession::principal::{AdminUser, StandardUser};

/// 测试用 bcrypt 代价，取最小值以加快测试
pub const TEST_BCRYPT_COST: u32 = 4;

/// 测试用认证配置
pub fn test_auth_config() -> AuthConfig {
    AuthConfig {
        failed_login_attempts: 3,
        bcrypt_cost: TEST_BCRYPT_COST,
        ..AuthConfig::default()
    }
}

/// 只接受指定密码的校验器
pub fn password_verifier(expected: &'static str) -> SharedVerifier {
    Arc::new(move |_username: &str, password: &str| -> AuthResult<bool> {
        Ok(password == expected)
    })
}

/// 使用 bcrypt 哈希密码的管理员
pub fn bcrypt_admin(username: &str, id: i64, password: &str) -> Arc<AdminUser> {
    Arc::new(
        AdminUser::with_password(username, id, password, &test_auth_config())
            .expect("创建管理员失败"),
    )
}

/// 使用闭包校验器的管理员，不做哈希
pub fn admin(username: &str, id: i64, password: &'static str) -> Arc<AdminUser> {
    Arc::new(AdminUser::new(username, id, password_verifier(password)))
}

pub fn standard_user(username: &str, id: i64, password: &'static str) -> Arc<StandardUser> {
    Arc::new(StandardUser::new(username, id, password_verifier(password)))
}

/// 使用 bcrypt 哈希的普通用户
pub fn bcrypt_standard_user(username: &str, id: i64, password: &str) -> Arc<StandardUser> {
    let verifier = BcryptVerifier::new(password, TEST_BCRYPT_COST).expect("密码哈希失败");
    Arc::new(StandardUser::new(username, id, Arc::new(verifier)))
}
