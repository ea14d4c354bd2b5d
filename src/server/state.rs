//! In-memory task collection backing `taskdeck serve`

use std::sync::{Arc, Mutex, MutexGuard};

use serde::{Deserialize, Serialize};

/// Task as stored and returned by the development backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredTask {
    pub id: u64,
    pub title: String,
    pub completed: bool,
}

#[derive(Debug, Default)]
struct Inner {
    tasks: Vec<StoredTask>,
    next_id: u64,
}

/// 共享任务存储（进程内，重启即清空）
#[derive(Debug, Default)]
pub struct TaskStore {
    inner: Mutex<Inner>,
}

pub type SharedStore = Arc<TaskStore>;

impl TaskStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        // 持锁期间不会 panic，中毒时直接沿用内部数据
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }

    pub fn list(&self) -> Vec<StoredTask> {
        self.lock().tasks.clone()
    }

    pub fn create(&self, title: &str, completed: bool) -> StoredTask {
        let mut inner = self.lock();
        inner.next_id += 1;
        let task = StoredTask {
            id: inner.next_id,
            title: title.to_string(),
            completed,
        };
        inner.tasks.push(task.clone());
        task
    }

    /// 翻转完成状态，返回更新后的任务
    pub fn toggle(&self, id: u64) -> Option<StoredTask> {
        let mut inner = self.lock();
        let task = inner.tasks.iter_mut().find(|t| t.id == id)?;
        task.completed = !task.completed;
        Some(task.clone())
    }

    pub fn delete(&self, id: u64) -> bool {
        let mut inner = self.lock();
        let before = inner.tasks.len();
        inner.tasks.retain(|t| t.id != id);
        inner.tasks.len() != before
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_increase_and_order_is_kept() {
        let store = TaskStore::new();
        let a = store.create("a", false);
        let b = store.create("b", false);
        assert!(b.id > a.id);
        assert_eq!(store.list(), vec![a, b]);
    }

    #[test]
    fn test_toggle_flips() {
        let store = TaskStore::new();
        let a = store.create("a", false);
        assert!(store.toggle(a.id).unwrap().completed);
        assert!(!store.toggle(a.id).unwrap().completed);
        assert!(store.toggle(a.id + 100).is_none());
    }

    #[test]
    fn test_delete() {
        let store = TaskStore::new();
        let a = store.create("a", false);
        assert!(store.delete(a.id));
        assert!(!store.delete(a.id));
        assert!(store.list().is_empty());
    }

    #[test]
    fn test_ids_not_reused_after_delete() {
        let store = TaskStore::new();
        let a = store.create("a", false);
        store.delete(a.id);
        let b = store.create("b", false);
        assert_ne!(a.id, b.id);
    }
}
