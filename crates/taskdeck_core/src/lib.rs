//! Core domain logic for Taskdeck.
//! This crate is the single source of truth for task list invariants.

pub mod clock;
pub mod config;
pub mod logging;
pub mod model;
pub mod service;
pub mod store;

pub use clock::{Clock, SystemClock};
pub use config::{default_log_level, CoreConfig, LOG_DIR_ENV, LOG_LEVEL_ENV};
pub use logging::{init_logging, init_logging_from_config, logging_status};
pub use model::task::{normalize_task_text, Task, TaskId, TaskValidationError, TaskView};
pub use service::task_service::{TaskService, TaskServiceError, TaskServiceResult};
pub use store::shared::SharedTaskStore;
pub use store::task_store::{TaskListStore, TaskStats};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
