//! Task domain model.
//!
//! # Responsibility
//! - Define the task record shared by the active/completed/archived views.
//! - Provide the timestamp refresh rule used by every store mutation.
//!
//! # Invariants
//! - `id` is stable and never reused for another task.
//! - `updated_at >= created_at`.
//! - Each refresh moves `updated_at` strictly forward.
//! - `archived` never changes `completed`.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for a task.
pub type TaskId = Uuid;

/// One of the three disjoint list views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskView {
    /// Neither completed nor archived.
    Active,
    /// Completed and not archived.
    Completed,
    /// Archived, regardless of completion.
    Archived,
}

impl TaskView {
    /// All views in display order.
    pub const ALL: [TaskView; 3] = [TaskView::Active, TaskView::Completed, TaskView::Archived];

    /// Returns whether `task` is visible in this view.
    pub fn contains(self, task: &Task) -> bool {
        task.view() == self
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Completed => "completed",
            Self::Archived => "archived",
        }
    }

    /// Parses a view name (case-insensitive, surrounding whitespace ignored).
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "active" => Some(Self::Active),
            "completed" | "done" => Some(Self::Completed),
            "archived" | "archive" => Some(Self::Archived),
            _ => None,
        }
    }
}

impl Display for TaskView {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Validation errors for user-supplied task input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskValidationError {
    /// Text is empty after trimming surrounding whitespace.
    BlankText,
}

impl Display for TaskValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BlankText => write!(f, "task text must not be blank"),
        }
    }
}

impl Error for TaskValidationError {}

/// Canonical task record.
///
/// Only `TaskListStore` creates and mutates tasks; callers receive shared
/// references or clones.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub text: String,
    pub completed: bool,
    pub archived: bool,
    /// Unix epoch milliseconds.
    pub created_at: i64,
    /// Unix epoch milliseconds. Always >= `created_at`.
    pub updated_at: i64,
}

impl Task {
    pub(crate) fn new(id: TaskId, text: impl Into<String>, now_ms: i64) -> Self {
        Self {
            id,
            text: text.into(),
            completed: false,
            archived: false,
            created_at: now_ms,
            updated_at: now_ms,
        }
    }

    /// Returns the single view this task belongs to.
    pub fn view(&self) -> TaskView {
        if self.archived {
            TaskView::Archived
        } else if self.completed {
            TaskView::Completed
        } else {
            TaskView::Active
        }
    }

    pub fn is_active(&self) -> bool {
        self.view() == TaskView::Active
    }

    /// Stamps a mutation.
    ///
    /// A clock that stalls or steps backwards still yields a strictly larger
    /// `updated_at` than before.
    pub(crate) fn touch(&mut self, now_ms: i64) {
        self.updated_at = now_ms.max(self.updated_at.saturating_add(1));
    }
}

/// Trims task text and rejects blank input.
pub fn normalize_task_text(text: &str) -> Result<String, TaskValidationError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(TaskValidationError::BlankText);
    }
    Ok(trimmed.to_string())
}
