//! Line-oriented task shell.
//!
//! # Responsibility
//! - Stand in for the presentation layer: read gestures from stdin and
//!   dispatch them to `TaskService`.
//! - Resolve config from the environment and start file logging when asked.

mod shell;

use std::io;
use std::process::ExitCode;
use taskdeck_core::{init_logging_from_config, CoreConfig, TaskService};

fn main() -> ExitCode {
    let config = match CoreConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("taskdeck: {err}");
            return ExitCode::FAILURE;
        }
    };
    if let Err(err) = init_logging_from_config(&config) {
        // The shell still works without file logs.
        eprintln!("taskdeck: logging disabled: {err}");
    }

    let service = TaskService::default();
    let stdin = io::stdin();
    let stdout = io::stdout();
    match shell::run(&service, stdin.lock(), stdout.lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("event=shell_exit module=cli status=error error={err}");
            eprintln!("taskdeck: {err}");
            ExitCode::FAILURE
        }
    }
}
