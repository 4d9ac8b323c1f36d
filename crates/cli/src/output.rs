//! Timestamped JSON output.
//!
//! Responsibilities:
//! - Name each run with a fixed-width UTC timestamp.
//! - Create `<root>/<timestamp>/` and write the result set to
//!   `splunk_fields.json` atomically.
//!
//! Invariants:
//! - Timestamps sort lexicographically in chronological order.
//! - An existing run directory is never reused.
//! - A failed write leaves neither a partial file nor an empty run directory.

use std::fmt;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::Serialize;
use splunk_config::constants::RESULT_FILE_NAME;
use tempfile::NamedTempFile;
use thiserror::Error;
use tracing::{debug, info};

/// Run directory name format, e.g. `20261019T101530.123Z`.
const RUN_TIMESTAMP_FORMAT: &str = "%Y%m%dT%H%M%S%.3fZ";

/// Errors raised while writing run artifacts (results and log files).
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("Failed to create directory {}: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to open log file in {}: {source}", dir.display())]
    LogFile {
        dir: PathBuf,
        #[source]
        source: tracing_appender::rolling::InitError,
    },

    #[error("Failed to serialize results: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// UTC instant that names one run's output directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RunTimestamp(DateTime<Utc>);

impl RunTimestamp {
    pub fn now() -> Self {
        Self(Utc::now())
    }

    #[cfg(test)]
    fn from_datetime(at: DateTime<Utc>) -> Self {
        Self(at)
    }
}

impl fmt::Display for RunTimestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(RUN_TIMESTAMP_FORMAT))
    }
}

/// Writes result files below an output root.
#[derive(Debug, Clone)]
pub struct OutputWriter {
    root: PathBuf,
}

impl OutputWriter {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Create the output root ahead of time so a bad path fails early.
    pub fn prepare(&self) -> Result<(), OutputError> {
        fs::create_dir_all(&self.root).map_err(|source| OutputError::CreateDir {
            path: self.root.clone(),
            source,
        })
    }

    /// Render `value` as the pretty-printed JSON document that gets written.
    pub fn render<T: Serialize>(value: &T) -> Result<String, OutputError> {
        let mut json = serde_json::to_string_pretty(value)?;
        json.push('\n');
        Ok(json)
    }

    /// Write `value` to `<root>/<timestamp>/splunk_fields.json`.
    ///
    /// Returns the path of the written file.
    pub fn write<T: Serialize>(
        &self,
        value: &T,
        timestamp: RunTimestamp,
    ) -> Result<PathBuf, OutputError> {
        let content = Self::render(value)?;
        self.prepare()?;

        let run_dir = self.root.join(timestamp.to_string());
        fs::create_dir(&run_dir).map_err(|source| OutputError::CreateDir {
            path: run_dir.clone(),
            source,
        })?;
        debug!(path = %run_dir.display(), "Created run directory");

        let path = run_dir.join(RESULT_FILE_NAME);
        match write_atomically(&content, &run_dir, &path) {
            Ok(()) => {
                info!(path = %path.display(), bytes = content.len(), "Wrote results");
                Ok(path)
            }
            Err(source) => {
                // The temp file is already gone; the run dir is empty.
                if let Err(e) = fs::remove_dir(&run_dir) {
                    debug!(path = %run_dir.display(), error = %e, "Could not remove run directory");
                }
                Err(OutputError::Write { path, source })
            }
        }
    }
}

/// Write through a temp file in `dir`, then rename over `path`.
///
/// On error the temp file is dropped, which deletes it.
fn write_atomically(content: &str, dir: &Path, path: &Path) -> io::Result<()> {
    let mut temp_file = NamedTempFile::new_in(dir)?;
    temp_file.write_all(content.as_bytes())?;
    temp_file.flush()?;
    temp_file.as_file().sync_all()?;
    temp_file.persist(path).map_err(|e| e.error)?;
    Ok(())
}
