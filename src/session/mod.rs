//! 会话管理模块
//!
//! 提供按主体类型区分、并发安全的会话注册表，以及会话ID生成策略

pub mod id_generator;
mod registry;
pub mod session_manager;

pub use id_generator::{PrefixedIdGenerator, RandomIdGenerator, SessionIdGenerator};
pub use registry::registry_count;
pub use session_manager::SessionManager;
