use log::{debug, info};
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Arc;

use super::registry;

/// 会话注册表：会话ID -> 主体
///
/// 整个键空间由一把互斥锁保护，每个操作在整个执行期间持锁、返回前释放。
/// 主体以 `Arc` 共享，注册表只持有其中一个引用。
///
/// 注册表不可复制。可以显式创建实例（`new`）并注入使用，也可以通过
/// [`instance`](SessionManager::instance) 获取按主体类型区分的进程级单例。
pub struct SessionManager<T: ?Sized> {
    sessions: Mutex<HashMap<String, Arc<T>>>,
}

impl<T: ?Sized> SessionManager<T> {
    pub fn new() -> Self {
        Self {
            sessions: Mutex::new(HashMap::new()),
        }
    }

    /// 创建会话，已存在的ID会被覆盖
    pub fn create_session(&self, session_id: impl Into<String>, principal: Arc<T>) {
        let session_id = session_id.into();
        let replaced = {
            let mut sessions = self.sessions.lock();
            sessions.insert(session_id.clone(), principal).is_some()
        };

        if replaced {
            info!("Replaced existing session: {}", session_id);
        } else {
            info!("Created session: {}", session_id);
        }
    }

    /// 查找会话，不存在时返回 `None`
    pub fn get_session(&self, session_id: &str) -> Option<Arc<T>> {
        let found = self.sessions.lock().get(session_id).cloned();
        debug!("Session lookup {}: {}", session_id, found.is_some());
        found
    }

    /// 删除会话，不存在时不做任何事
    pub fn remove_session(&self, session_id: &str) {
        if self.sessions.lock().remove(session_id).is_some() {
            info!("Removed session: {}", session_id);
        }
    }

    /// 原子地查找并删除会话
    pub fn take_session(&self, session_id: &str) -> Option<Arc<T>> {
        let taken = self.sessions.lock().remove(session_id);
        if taken.is_some() {
            info!("Took session: {}", session_id);
        }
        taken
    }

    pub fn contains(&self, session_id: &str) -> bool {
        self.sessions.lock().contains_key(session_id)
    }

    pub fn len(&self) -> usize {
        self.sessions.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.lock().is_empty()
    }

    /// 当前所有会话ID，已排序
    pub fn session_ids(&self) -> Vec<String> {
        let mut ids: Vec<String> = self.sessions.lock().keys().cloned().collect();
        ids.sort();
        ids
    }

    /// 清空所有会话，返回清除的数量
    pub fn clear(&self) -> usize {
        let count = {
            let mut sessions = self.sessions.lock();
            let count = sessions.len();
            sessions.clear();
            count
        };
        info!("Cleared {} sessions", count);
        count
    }
}

impl<T: ?Sized + Send + Sync + 'static> SessionManager<T> {
    /// 获取主体类型 `T` 的进程级单例
    ///
    /// 第一次调用时惰性创建且只创建一次，之后对同一类型的调用返回同一实例。
    pub fn instance() -> &'static Self {
        registry::instance_for::<T>()
    }
}

impl<T: ?Sized> Default for SessionManager<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ?Sized> std::fmt::Debug for SessionManager<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionManager")
            .field("session_count", &self.len())
            .finish()
    }
}
