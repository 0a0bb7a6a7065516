//! Core use-case services.
//!
//! # Responsibility
//! - Turn presentation-level gestures into store operations.
//! - Keep input validation out of the store itself.

pub mod task_service;
