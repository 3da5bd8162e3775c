//! 按主体类型区分的会话注册表单例
//!
//! Rust 不支持泛型静态变量，这里用一张以 `TypeId` 为键的全局表保存每个
//! 类型的 `SessionManager<T>`。实例在首次访问时创建并泄漏为 `'static`，
//! 与进程同生命周期。

use log::info;
use parking_lot::Mutex;
use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::sync::OnceLock;

use super::session_manager::SessionManager;

type RegistryTable = Mutex<HashMap<TypeId, &'static (dyn Any + Send + Sync)>>;

static REGISTRIES: OnceLock<RegistryTable> = OnceLock::new();

pub(crate) fn instance_for<T>() -> &'static SessionManager<T>
where
    T: ?Sized + Send + Sync + 'static,
{
    let table = REGISTRIES.get_or_init(|| Mutex::new(HashMap::new()));
    let key = TypeId::of::<T>();

    // 持表锁完成查找和插入，保证同一类型只创建一次
    let mut registries = table.lock();
    if let Some(existing) = registries
        .get(&key)
        .and_then(|entry| entry.downcast_ref::<SessionManager<T>>())
    {
        return existing;
    }

    let manager: &'static SessionManager<T> = Box::leak(Box::new(SessionManager::new()));
    registries.insert(key, manager);
    info!(
        "Initialized session registry for {}",
        std::any::type_name::<T>()
    );
    manager
}

/// 已初始化的注册表数量
pub fn registry_count() -> usize {
    REGISTRIES.get().map(|table| table.lock().len()).unwrap_or(0)
}
