//! Diagnostic tracing and the on-disk history log.
//!
//! The terminal belongs to the UI, so `tracing` output goes to a file
//! (default: `~/.local/share/skincalc/skincalc.log`). When history logging is
//! enabled, completed computations are appended to daily files named
//! `history_<date>.log` in the configured directory.

use crate::config::{DiagnosticsConfig, HistoryConfig};
use anyhow::{anyhow, Context, Result};
use std::collections::HashMap;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::warn;
use tracing_subscriber::EnvFilter;

/// Environment variable that overrides the configured filter.
pub const LOG_ENV: &str = "SKINCALC_LOG";

fn default_log_file() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("skincalc")
        .join("skincalc.log")
}

/// Install the global subscriber. Returns the file it writes to.
pub fn init_tracing(config: &DiagnosticsConfig) -> Result<PathBuf> {
    let path = config.file.clone().unwrap_or_else(default_log_file);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory {}", parent.display()))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;

    let filter = EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_new(&config.level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow!("Failed to install tracing subscriber: {}", e))?;
    Ok(path)
}

/// Expand a leading `~/` against the home directory.
pub fn expand_home(dir: &str) -> PathBuf {
    match dir.strip_prefix("~/") {
        Some(rest) => dirs::home_dir()
            .map(|home| home.join(rest))
            .unwrap_or_else(|| PathBuf::from(dir)),
        None => PathBuf::from(dir),
    }
}

/// Appends completed computations to daily history files.
///
/// File handles are cached for the lifetime of the logger. A file that
/// cannot be opened is reported once per line and the line is dropped.
pub struct HistoryLogger {
    enabled: bool,
    log_dir: PathBuf,
    file_handles: HashMap<String, fs::File>,
}

impl HistoryLogger {
    pub fn new(config: &HistoryConfig) -> Self {
        Self {
            enabled: config.enabled,
            log_dir: expand_home(&config.log_dir),
            file_handles: HashMap::new(),
        }
    }

    pub fn log_dir(&self) -> &Path {
        &self.log_dir
    }

    /// Write one history line. No-op when disabled.
    pub fn log_line(&mut self, line: &str) {
        if !self.enabled {
            return;
        }

        let now = chrono::Local::now();
        let filename = format!("history_{}.log", now.format("%Y-%m-%d"));

        if !self.file_handles.contains_key(&filename) {
            match self.open(&filename) {
                Ok(file) => {
                    self.file_handles.insert(filename.clone(), file);
                }
                Err(e) => {
                    warn!(error = %e, "history line dropped");
                    return;
                }
            }
        }

        if let Some(handle) = self.file_handles.get_mut(&filename) {
            if let Err(e) = writeln!(handle, "[{}] {}", now.format("%H:%M:%S"), line) {
                warn!(error = %e, file = %filename, "failed to append history");
            }
        }
    }

    fn open(&self, filename: &str) -> Result<fs::File> {
        fs::create_dir_all(&self.log_dir).with_context(|| {
            format!("Failed to create history directory {}", self.log_dir.display())
        })?;
        let path = self.log_dir.join(filename);
        OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .with_context(|| format!("Failed to open history file {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn history_config(dir: &Path, enabled: bool) -> HistoryConfig {
        HistoryConfig {
            enabled,
            log_dir: dir.display().to_string(),
            max_entries: 10,
        }
    }

    #[test]
    fn test_log_lines_to_daily_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut logger = HistoryLogger::new(&history_config(dir.path(), true));
        logger.log_line("3 + 4 = 7");
        logger.log_line("2 x 5 = 10");

        let filename = format!("history_{}.log", chrono::Local::now().format("%Y-%m-%d"));
        let contents = fs::read_to_string(dir.path().join(filename)).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with("] 3 + 4 = 7"));
        assert!(lines[1].ends_with("] 2 x 5 = 10"));
    }

    #[test]
    fn test_disabled_logger_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("history");
        let mut logger = HistoryLogger::new(&history_config(&target, false));
        logger.log_line("1 + 1 = 2");
        assert!(!target.exists());
    }

    #[test]
    fn test_expand_home() {
        assert_eq!(expand_home("/var/log"), PathBuf::from("/var/log"));
        if let Some(home) = dirs::home_dir() {
            assert_eq!(expand_home("~/calc"), home.join("calc"));
        }
    }
}
