//! File load/save for editor sessions.
//!
//! Synchronous and minimal. Load applies the deliberate truncation policy:
//! lines beyond the document bound are dropped and the count is reported to
//! the caller, never raised as an error. Save reconstructs newlines from the
//! per-line markers: every line except the last always ends with `\n` in the
//! file; the last line ends with `\n` only if its marker is set.

use chisel_text::{BufferLimits, LineBuffer};
use std::{
    fs, io,
    path::{Path, PathBuf},
};
use thiserror::Error;
use tracing::{error, warn};

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("file not found: {0}")]
    NotFound(PathBuf),
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: io::Error,
    },
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: io::Error,
    },
}

#[derive(Debug)]
pub struct LoadedFile {
    pub buffer: LineBuffer,
    pub dropped_lines: usize,
}

pub fn load(path: &Path, limits: BufferLimits) -> Result<LoadedFile, StorageError> {
    let content = fs::read_to_string(path).map_err(|source| {
        if source.kind() == io::ErrorKind::NotFound {
            StorageError::NotFound(path.to_path_buf())
        } else {
            error!(target: "io", path = %path.display(), %source, "file_read_error");
            StorageError::Read {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;
    let (buffer, dropped_lines) = LineBuffer::from_text(&content, limits);
    if dropped_lines > 0 {
        warn!(
            target: "io",
            path = %path.display(),
            dropped_lines,
            max_lines = limits.max_lines,
            "load_truncated"
        );
    }
    Ok(LoadedFile {
        buffer,
        dropped_lines,
    })
}

pub fn save(path: &Path, buffer: &LineBuffer) -> Result<(), StorageError> {
    let count = buffer.line_count();
    let mut content = String::new();
    for (i, line) in buffer.iter().enumerate() {
        content.push_str(line.content());
        if line.has_newline() || i + 1 < count {
            content.push('\n');
        }
    }
    fs::write(path, content.as_bytes()).map_err(|source| {
        error!(target: "io", path = %path.display(), %source, "file_write_error");
        StorageError::Write {
            path: path.to_path_buf(),
            source,
        }
    })
}
