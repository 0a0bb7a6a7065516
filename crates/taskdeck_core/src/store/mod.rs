//! In-memory task list state.
//!
//! # Responsibility
//! - Own the ordered task sequence and every mutation applied to it.
//! - Provide a thread-safe handle for callers that share one list.
//!
//! # Invariants
//! - Insertion order is display order; queries never re-sort.
//! - Operations on unknown ids are silent no-ops.

pub mod shared;
pub mod task_store;
