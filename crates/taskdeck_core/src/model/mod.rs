//! Domain model for the task list.
//!
//! # Responsibility
//! - Define the canonical task record rendered by every list view.
//! - Define the three-way view partition used by queries.
//!
//! # Invariants
//! - Every task is identified by a stable `TaskId`.
//! - A task belongs to exactly one `TaskView` at any time.

pub mod task;
