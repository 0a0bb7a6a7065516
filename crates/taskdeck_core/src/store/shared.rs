//! Thread-safe handle over one `TaskListStore`.
//!
//! # Invariants
//! - The lock is held for exactly one store operation.
//! - Reads hand out clones; no caller keeps a reference into the store.

use crate::clock::Clock;
use crate::model::task::{Task, TaskId, TaskView};
use crate::store::task_store::{TaskListStore, TaskStats};
use log::warn;
use std::sync::{Arc, Mutex, MutexGuard};

/// Cloneable, shared task list. Clones observe the same state.
#[derive(Debug, Clone, Default)]
pub struct SharedTaskStore {
    inner: Arc<Mutex<TaskListStore>>,
}

impl SharedTaskStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self::from_store(TaskListStore::with_clock(clock))
    }

    pub fn from_store(store: TaskListStore) -> Self {
        Self {
            inner: Arc::new(Mutex::new(store)),
        }
    }

    /// Runs `read` against the store under the lock.
    pub fn read<T>(&self, read: impl FnOnce(&TaskListStore) -> T) -> T {
        read(&self.lock())
    }

    pub fn add(&self, text: impl Into<String>) -> TaskId {
        self.lock().add(text)
    }

    pub fn toggle_completed(&self, id: TaskId) -> bool {
        self.lock().toggle_completed(id)
    }

    pub fn edit(&self, id: TaskId, new_text: impl Into<String>) -> bool {
        self.lock().edit(id, new_text)
    }

    pub fn archive(&self, id: TaskId) -> bool {
        self.lock().archive(id)
    }

    pub fn restore(&self, id: TaskId) -> bool {
        self.lock().restore(id)
    }

    pub fn delete(&self, id: TaskId) -> bool {
        self.lock().delete(id)
    }

    pub fn clear_completed(&self) -> usize {
        self.lock().clear_completed()
    }

    pub fn query(&self, view: TaskView) -> Vec<Task> {
        self.read(|store| store.query(view).into_iter().cloned().collect())
    }

    pub fn get(&self, id: TaskId) -> Option<Task> {
        self.read(|store| store.get(id).cloned())
    }

    /// Full sequence in insertion order.
    pub fn snapshot(&self) -> Vec<Task> {
        self.read(|store| store.tasks().to_vec())
    }

    pub fn stats(&self) -> TaskStats {
        self.read(TaskListStore::stats)
    }

    pub fn len(&self) -> usize {
        self.read(TaskListStore::len)
    }

    pub fn is_empty(&self) -> bool {
        self.read(TaskListStore::is_empty)
    }

    fn lock(&self) -> MutexGuard<'_, TaskListStore> {
        // Store operations are total and leave no partial state, so a
        // poisoned lock still guards a consistent list.
        self.inner.lock().unwrap_or_else(|poisoned| {
            warn!("event=store_lock module=store status=recovered reason=poisoned");
            poisoned.into_inner()
        })
    }
}
