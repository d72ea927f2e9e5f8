//! Configuration loading and parsing.
//!
//! Parses `chisel.toml`, currently a single `[limits]` table carrying the
//! four resource bounds. Every field defaults independently, unknown fields
//! are ignored, and an unreadable or unparsable file falls back to the
//! defaults with a log line — a broken config must never keep the editor
//! from starting.

use anyhow::Result;
use chisel_state::{CLIPBOARD_CAPACITY, HISTORY_DEPTH};
use chisel_text::BufferLimits;
use serde::Deserialize;
use std::{fs, path::PathBuf};
use tracing::{info, warn};

/// The `[limits]` table. Documented effects:
/// * `max_lines` — maximum document lines; loads truncate beyond it.
/// * `line_capacity` — per-line char budget (one slot stays spare).
/// * `history_depth` — undo/redo stack depth (FIFO eviction beyond it).
/// * `clipboard_capacity` — max copyable characters per copy.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct LimitsConfig {
    #[serde(default = "LimitsConfig::default_max_lines")]
    pub max_lines: usize,
    #[serde(default = "LimitsConfig::default_line_capacity")]
    pub line_capacity: usize,
    #[serde(default = "LimitsConfig::default_history_depth")]
    pub history_depth: usize,
    #[serde(default = "LimitsConfig::default_clipboard_capacity")]
    pub clipboard_capacity: usize,
}

impl LimitsConfig {
    const fn default_max_lines() -> usize {
        BufferLimits::DEFAULT_MAX_LINES
    }
    const fn default_line_capacity() -> usize {
        BufferLimits::DEFAULT_LINE_CAPACITY
    }
    const fn default_history_depth() -> usize {
        HISTORY_DEPTH
    }
    const fn default_clipboard_capacity() -> usize {
        CLIPBOARD_CAPACITY
    }
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_lines: Self::default_max_lines(),
            line_capacity: Self::default_line_capacity(),
            history_depth: Self::default_history_depth(),
            clipboard_capacity: Self::default_clipboard_capacity(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub limits: LimitsConfig,
}

#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Original file content, kept for diagnostics.
    pub raw: Option<String>,
    pub file: ConfigFile,
}

impl Config {
    /// Buffer bounds with floors applied: a document holds at least one
    /// line, and a line budget below 2 would leave no room for content.
    pub fn buffer_limits(&self) -> BufferLimits {
        BufferLimits {
            max_lines: self.file.limits.max_lines.max(1),
            line_capacity: self.file.limits.line_capacity.max(2),
        }
    }

    pub fn history_depth(&self) -> usize {
        self.file.limits.history_depth
    }

    pub fn clipboard_capacity(&self) -> usize {
        self.file.limits.clipboard_capacity
    }
}

/// Best-effort config path: working-directory `chisel.toml` first, then the
/// platform config dir.
pub fn discover() -> PathBuf {
    let local = PathBuf::from("chisel.toml");
    if local.exists() {
        return local;
    }
    if let Some(dir) = dirs::config_dir() {
        return dir.join("chisel").join("chisel.toml");
    }
    PathBuf::from("chisel.toml")
}

pub fn load_from(path: Option<PathBuf>) -> Result<Config> {
    let path = path.unwrap_or_else(discover);
    if let Ok(content) = fs::read_to_string(&path) {
        match toml::from_str::<ConfigFile>(&content) {
            Ok(file) => {
                info!(target: "config", path = %path.display(), "config_loaded");
                Ok(Config {
                    raw: Some(content),
                    file,
                })
            }
            Err(e) => {
                warn!(target: "config", path = %path.display(), error = %e, "config_parse_failed_using_defaults");
                Ok(Config::default())
            }
        }
    } else {
        Ok(Config::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn defaults_when_file_missing() {
        let cfg = load_from(Some(PathBuf::from("__no_such_chisel_config__.toml"))).unwrap();
        assert_eq!(cfg.file.limits.max_lines, 100);
        assert_eq!(cfg.file.limits.line_capacity, 256);
        assert_eq!(cfg.file.limits.history_depth, 100);
        assert_eq!(cfg.file.limits.clipboard_capacity, 10_000);
    }

    #[test]
    fn parses_full_limits_table() {
        let tmp = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(
            tmp.path(),
            "[limits]\nmax_lines = 50\nline_capacity = 128\nhistory_depth = 20\nclipboard_capacity = 4096\n",
        )
        .unwrap();
        let cfg = load_from(Some(tmp.path().to_path_buf())).unwrap();
        assert_eq!(cfg.file.limits.max_lines, 50);
        assert_eq!(cfg.file.limits.line_capacity, 128);
        assert_eq!(cfg.file.limits.history_depth, 20);
        assert_eq!(cfg.file.limits.clipboard_capacity, 4096);
    }

    #[test]
    fn partial_table_keeps_remaining_defaults() {
        let tmp = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(tmp.path(), "[limits]\nmax_lines = 10\n").unwrap();
        let cfg = load_from(Some(tmp.path().to_path_buf())).unwrap();
        assert_eq!(cfg.file.limits.max_lines, 10);
        assert_eq!(cfg.file.limits.line_capacity, 256);
    }

    #[test]
    fn garbage_file_falls_back_to_defaults() {
        let tmp = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(tmp.path(), "not even { toml").unwrap();
        let cfg = load_from(Some(tmp.path().to_path_buf())).unwrap();
        assert_eq!(cfg.file.limits.max_lines, 100);
        assert!(cfg.raw.is_none());
    }

    #[test]
    fn unknown_fields_are_tolerated() {
        let tmp = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(
            tmp.path(),
            "[limits]\nmax_lines = 7\n[future]\nshiny = true\n",
        )
        .unwrap();
        let cfg = load_from(Some(tmp.path().to_path_buf())).unwrap();
        assert_eq!(cfg.file.limits.max_lines, 7);
    }

    #[test]
    fn buffer_limits_apply_floors() {
        let tmp = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(tmp.path(), "[limits]\nmax_lines = 0\nline_capacity = 0\n").unwrap();
        let cfg = load_from(Some(tmp.path().to_path_buf())).unwrap();
        let limits = cfg.buffer_limits();
        assert_eq!(limits.max_lines, 1);
        assert_eq!(limits.line_capacity, 2);
    }
}
