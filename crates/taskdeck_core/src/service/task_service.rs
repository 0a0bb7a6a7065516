//! Task use-case service.
//!
//! # Responsibility
//! - Provide the entry points presentation code dispatches user gestures to.
//! - Reject blank text before it reaches the store.
//! - Report per-view statistics.
//!
//! # Invariants
//! - Text is trimmed before `add`/`edit`.
//! - Unknown ids remain silent no-ops, never errors.
//! - Service APIs never bypass the store's named operations.

use crate::model::task::{normalize_task_text, Task, TaskId, TaskValidationError, TaskView};
use crate::store::shared::SharedTaskStore;
use crate::store::task_store::TaskStats;
use log::warn;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type TaskServiceResult<T> = Result<T, TaskServiceError>;

/// Service error for task use-cases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskServiceError {
    /// User-supplied text failed validation.
    InvalidText(TaskValidationError),
}

impl Display for TaskServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidText(err) => write!(f, "{err}"),
        }
    }
}

impl Error for TaskServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidText(err) => Some(err),
        }
    }
}

impl From<TaskValidationError> for TaskServiceError {
    fn from(value: TaskValidationError) -> Self {
        Self::InvalidText(value)
    }
}

/// Use-case wrapper over a shared task list.
#[derive(Debug, Clone, Default)]
pub struct TaskService {
    store: SharedTaskStore,
}

impl TaskService {
    pub fn new(store: SharedTaskStore) -> Self {
        Self { store }
    }

    /// Underlying shared store, for callers that render views directly.
    pub fn store(&self) -> &SharedTaskStore {
        &self.store
    }

    /// Creates an active task from trimmed `text`.
    ///
    /// # Errors
    /// - `InvalidText` when `text` is blank after trimming.
    pub fn add_task(&self, text: &str) -> TaskServiceResult<TaskId> {
        let text = normalize_task_text(text).inspect_err(|_| {
            warn!("event=task_add module=service status=rejected reason=blank_text");
        })?;
        Ok(self.store.add(text))
    }

    /// Replaces task text with trimmed `text`.
    ///
    /// Returns `Ok(false)` when `id` is unknown or the text is unchanged.
    ///
    /// # Errors
    /// - `InvalidText` when `text` is blank after trimming.
    pub fn edit_task(&self, id: TaskId, text: &str) -> TaskServiceResult<bool> {
        let text = normalize_task_text(text).inspect_err(|_| {
            warn!("event=task_edit module=service status=rejected reason=blank_text task_id={id}");
        })?;
        Ok(self.store.edit(id, text))
    }

    pub fn toggle_task(&self, id: TaskId) -> bool {
        self.store.toggle_completed(id)
    }

    pub fn archive_task(&self, id: TaskId) -> bool {
        self.store.archive(id)
    }

    pub fn restore_task(&self, id: TaskId) -> bool {
        self.store.restore(id)
    }

    pub fn delete_task(&self, id: TaskId) -> bool {
        self.store.delete(id)
    }

    /// Removes completed, non-archived tasks.
    pub fn clear_completed(&self) -> usize {
        self.store.clear_completed()
    }

    pub fn get_task(&self, id: TaskId) -> Option<Task> {
        self.store.get(id)
    }

    /// Lists one view in insertion order.
    pub fn list(&self, view: TaskView) -> Vec<Task> {
        self.store.query(view)
    }

    pub fn active_tasks(&self) -> Vec<Task> {
        self.list(TaskView::Active)
    }

    pub fn completed_tasks(&self) -> Vec<Task> {
        self.list(TaskView::Completed)
    }

    pub fn archived_tasks(&self) -> Vec<Task> {
        self.list(TaskView::Archived)
    }

    /// Every task in insertion order.
    pub fn all_tasks(&self) -> Vec<Task> {
        self.store.snapshot()
    }

    /// Counters shown on the profile screen.
    pub fn stats(&self) -> TaskStats {
        self.store.stats()
    }
}
