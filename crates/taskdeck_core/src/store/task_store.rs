//! Ordered task list store.
//!
//! # Responsibility
//! - Create, mutate and remove tasks through named operations only.
//! - Serve the active/completed/archived views as stable filters.
//!
//! # Invariants
//! - Task ids are unique within the store.
//! - Every state-changing mutation refreshes `updated_at`.
//! - `edit` with identical text leaves the task untouched.
//! - `clear_completed` never removes archived tasks.
//! - Unknown ids never raise errors.

use crate::clock::{Clock, SystemClock};
use crate::model::task::{Task, TaskId, TaskView};
use log::debug;
use serde::{Deserialize, Serialize};
use std::fmt::{Debug, Formatter};
use std::sync::Arc;
use uuid::Uuid;

/// Per-view task counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskStats {
    pub total: usize,
    pub active: usize,
    pub completed: usize,
    pub archived: usize,
}

impl TaskStats {
    /// Returns the counter for one view.
    pub fn count(&self, view: TaskView) -> usize {
        match view {
            TaskView::Active => self.active,
            TaskView::Completed => self.completed,
            TaskView::Archived => self.archived,
        }
    }
}

/// Owner of the ordered task sequence.
pub struct TaskListStore {
    tasks: Vec<Task>,
    clock: Arc<dyn Clock>,
}

impl Default for TaskListStore {
    fn default() -> Self {
        Self::new()
    }
}

impl Debug for TaskListStore {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TaskListStore")
            .field("tasks", &self.tasks)
            .finish_non_exhaustive()
    }
}

impl TaskListStore {
    /// Creates an empty store stamped by the system clock.
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    /// Creates an empty store stamped by `clock`.
    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self {
            tasks: Vec::new(),
            clock,
        }
    }

    /// Appends a new active task and returns its id.
    ///
    /// The store keeps `text` as given; trimming and blank rejection belong
    /// to callers (see `TaskService`).
    pub fn add(&mut self, text: impl Into<String>) -> TaskId {
        let id = self.fresh_id();
        let task = Task::new(id, text, self.clock.now_epoch_ms());
        debug!(
            "event=task_add module=store status=ok task_id={} text_len={}",
            id,
            task.text.chars().count()
        );
        self.tasks.push(task);
        id
    }

    /// Flips `completed`. Returns false when `id` is unknown.
    pub fn toggle_completed(&mut self, id: TaskId) -> bool {
        self.mutate(id, "task_toggle", |task| {
            task.completed = !task.completed;
            true
        })
    }

    /// Replaces text when it differs from the current text.
    ///
    /// Returns false when `id` is unknown or the text is unchanged; in both
    /// cases `updated_at` stays as it was.
    pub fn edit(&mut self, id: TaskId, new_text: impl Into<String>) -> bool {
        let new_text = new_text.into();
        self.mutate(id, "task_edit", move |task| {
            if task.text == new_text {
                return false;
            }
            task.text = new_text;
            true
        })
    }

    /// Moves a task to the archived view, keeping its completion state.
    pub fn archive(&mut self, id: TaskId) -> bool {
        self.mutate(id, "task_archive", |task| {
            task.archived = true;
            true
        })
    }

    /// Brings an archived task back to the active or completed view.
    pub fn restore(&mut self, id: TaskId) -> bool {
        self.mutate(id, "task_restore", |task| {
            task.archived = false;
            true
        })
    }

    /// Removes a task permanently. Returns false when `id` is unknown.
    pub fn delete(&mut self, id: TaskId) -> bool {
        let Some(index) = self.position(id) else {
            debug!("event=task_delete module=store status=noop task_id={id}");
            return false;
        };
        self.tasks.remove(index);
        debug!("event=task_delete module=store status=ok task_id={id}");
        true
    }

    /// Removes completed, non-archived tasks and returns how many went.
    pub fn clear_completed(&mut self) -> usize {
        let before = self.tasks.len();
        self.tasks.retain(|task| !TaskView::Completed.contains(task));
        let removed = before - self.tasks.len();
        debug!("event=task_clear_completed module=store status=ok removed={removed}");
        removed
    }

    /// Returns tasks in `view`, in insertion order.
    pub fn query(&self, view: TaskView) -> Vec<&Task> {
        self.tasks.iter().filter(|task| view.contains(task)).collect()
    }

    pub fn active(&self) -> Vec<&Task> {
        self.query(TaskView::Active)
    }

    pub fn completed(&self) -> Vec<&Task> {
        self.query(TaskView::Completed)
    }

    pub fn archived(&self) -> Vec<&Task> {
        self.query(TaskView::Archived)
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    /// Full sequence in insertion order.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Counts tasks per view in one pass.
    pub fn stats(&self) -> TaskStats {
        self.tasks
            .iter()
            .fold(TaskStats::default(), |mut stats, task| {
                stats.total += 1;
                match task.view() {
                    TaskView::Active => stats.active += 1,
                    TaskView::Completed => stats.completed += 1,
                    TaskView::Archived => stats.archived += 1,
                }
                stats
            })
    }

    fn position(&self, id: TaskId) -> Option<usize> {
        self.tasks.iter().position(|task| task.id == id)
    }

    fn fresh_id(&self) -> TaskId {
        loop {
            let id = Uuid::new_v4();
            if self.position(id).is_none() {
                return id;
            }
        }
    }

    /// Applies `change` to the task with `id` and stamps it when `change`
    /// reports a modification.
    fn mutate<F>(&mut self, id: TaskId, event: &str, change: F) -> bool
    where
        F: FnOnce(&mut Task) -> bool,
    {
        let now_ms = self.clock.now_epoch_ms();
        let Some(task) = self.tasks.iter_mut().find(|task| task.id == id) else {
            debug!("event={event} module=store status=noop reason=not_found task_id={id}");
            return false;
        };

        // Work on a copy so the stored task is replaced in one step.
        let mut next = task.clone();
        if !change(&mut next) {
            debug!("event={event} module=store status=noop reason=unchanged task_id={id}");
            return false;
        }
        next.touch(now_ms);
        *task = next;
        debug!("event={event} module=store status=ok task_id={id}");
        true
    }
}
