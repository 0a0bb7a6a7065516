//! Runtime configuration for the core.
//!
//! # Responsibility
//! - Resolve log level and log directory from defaults or the environment.
//! - Normalize user-facing values with one set of rules.
//!
//! # Invariants
//! - `log_level` is always one of `trace|debug|info|warn|error`.
//! - `log_dir`, when set, is an absolute path.

use std::path::{Path, PathBuf};

/// Environment variable overriding the log level.
pub const LOG_LEVEL_ENV: &str = "TASKDECK_LOG_LEVEL";
/// Environment variable enabling file logging into a directory.
pub const LOG_DIR_ENV: &str = "TASKDECK_LOG_DIR";

/// Resolved core settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoreConfig {
    pub log_level: &'static str,
    /// File logging stays off while this is `None`.
    pub log_dir: Option<PathBuf>,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_dir: None,
        }
    }
}

impl CoreConfig {
    /// Builds config from process environment variables.
    ///
    /// # Errors
    /// - Returns an error when a variable is set to an invalid value.
    pub fn from_env() -> Result<Self, String> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds config from an arbitrary key lookup. Blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, String> {
        let mut config = Self::default();
        if let Some(level) = lookup(LOG_LEVEL_ENV).filter(|value| !value.trim().is_empty()) {
            config = config.with_log_level(&level)?;
        }
        if let Some(dir) = lookup(LOG_DIR_ENV).filter(|value| !value.trim().is_empty()) {
            config = config.with_log_dir(&dir)?;
        }
        Ok(config)
    }

    pub fn with_log_level(mut self, level: &str) -> Result<Self, String> {
        self.log_level = normalize_level(level)?;
        Ok(self)
    }

    pub fn with_log_dir(mut self, log_dir: &str) -> Result<Self, String> {
        self.log_dir = Some(normalize_log_dir(log_dir)?);
        Ok(self)
    }
}

/// Returns the default log level for current build mode.
///
/// - `debug` builds -> `debug`
/// - `release` builds -> `info`
pub fn default_log_level() -> &'static str {
    if cfg!(debug_assertions) {
        "debug"
    } else {
        "info"
    }
}

pub(crate) fn normalize_level(level: &str) -> Result<&'static str, String> {
    match level.trim().to_ascii_lowercase().as_str() {
        "trace" => Ok("trace"),
        "debug" => Ok("debug"),
        "info" => Ok("info"),
        "warn" | "warning" => Ok("warn"),
        "error" => Ok("error"),
        other => Err(format!(
            "unsupported log level `{other}`; expected trace|debug|info|warn|error"
        )),
    }
}

pub(crate) fn normalize_log_dir(log_dir: &str) -> Result<PathBuf, String> {
    let trimmed = log_dir.trim();
    if trimmed.is_empty() {
        return Err("log_dir cannot be empty".to_string());
    }
    let path = Path::new(trimmed);
    if !path.is_absolute() {
        return Err(format!("log_dir must be an absolute path, got `{trimmed}`"));
    }
    Ok(path.to_path_buf())
}
