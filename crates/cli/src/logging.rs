//! Per-run logging setup.
//!
//! Every run writes plain-text lines to `<log_dir>/splunk_fields_<ts>.log`
//! and mirrors the same events to stderr. The level filter comes from
//! `RUST_LOG` and defaults to `info`.
//!
//! Before a new file is opened, older run logs are pruned: anything older
//! than [`LOG_RETENTION_DAYS`] goes, and at most [`MAX_LOG_FILES`] files
//! (the new one included) are kept. Files that do not follow the
//! `splunk_fields_<ts>.log` pattern are never touched.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local, NaiveDateTime, TimeDelta};
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::output::OutputError;

const LOG_FILE_PREFIX: &str = "splunk_fields_";
const LOG_FILE_SUFFIX: &str = "log";
const DEFAULT_FILTER: &str = "info";
const LOG_STAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Run logs older than this many days are deleted.
pub const LOG_RETENTION_DAYS: i64 = 10;

/// Upper bound on run logs kept in the log directory.
pub const MAX_LOG_FILES: usize = 50;

/// Keeps the log file open; dropping it flushes buffered lines.
#[must_use = "dropping the guard stops file logging"]
pub struct LogGuard {
    path: PathBuf,
    _worker: WorkerGuard,
}

impl LogGuard {
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Base name (without extension) of the log file for a run started at `at`.
pub fn log_file_stem(at: DateTime<Local>) -> String {
    format!("{}{}", LOG_FILE_PREFIX, at.format(LOG_STAMP_FORMAT))
}

/// Start time encoded in a run log's file name, if it is one.
fn parse_log_stamp(file_name: &str) -> Option<NaiveDateTime> {
    let stamp = file_name
        .strip_prefix(LOG_FILE_PREFIX)?
        .strip_suffix(LOG_FILE_SUFFIX)?
        .strip_suffix('.')?;
    NaiveDateTime::parse_from_str(stamp, LOG_STAMP_FORMAT).ok()
}

/// Delete run logs past retention, making room for one more file.
///
/// Best effort: unreadable entries and failed deletions are skipped.
/// Returns the number of files removed.
fn prune_old_logs(log_dir: &Path, now: DateTime<Local>) -> usize {
    let Ok(entries) = fs::read_dir(log_dir) else {
        return 0;
    };

    let mut logs: Vec<(NaiveDateTime, PathBuf)> = entries
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_ok_and(|t| t.is_file()))
        .filter_map(|entry| {
            let stamp = parse_log_stamp(entry.file_name().to_str()?)?;
            Some((stamp, entry.path()))
        })
        .collect();
    // Newest first.
    logs.sort_by(|a, b| b.0.cmp(&a.0));

    let cutoff = now.naive_local() - TimeDelta::days(LOG_RETENTION_DAYS);
    let keep = MAX_LOG_FILES.saturating_sub(1);

    logs.iter()
        .enumerate()
        .filter(|(i, (stamp, _))| *i >= keep || *stamp < cutoff)
        .filter(|(_, (_, path))| fs::remove_file(path).is_ok())
        .count()
}

/// Create `log_dir`, prune old run logs and open this run's log file behind a
/// non-blocking writer.
fn open_log_file(log_dir: &Path) -> Result<(NonBlocking, LogGuard, usize), OutputError> {
    fs::create_dir_all(log_dir).map_err(|source| OutputError::CreateDir {
        path: log_dir.to_path_buf(),
        source,
    })?;

    let now = Local::now();
    let pruned = prune_old_logs(log_dir, now);
    let stem = log_file_stem(now);
    let appender = RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(&stem)
        .filename_suffix(LOG_FILE_SUFFIX)
        .build(log_dir)
        .map_err(|source| OutputError::LogFile {
            dir: log_dir.to_path_buf(),
            source,
        })?;

    let (writer, worker) = tracing_appender::non_blocking(appender);
    let guard = LogGuard {
        path: log_dir.join(format!("{}.{}", stem, LOG_FILE_SUFFIX)),
        _worker: worker,
    };
    Ok((writer, guard, pruned))
}

/// Install the global subscriber: a plain-text file layer plus stderr.
///
/// Must be called once, before any other logging.
pub fn init(log_dir: &Path) -> Result<LogGuard, OutputError> {
    let (file_writer, guard, pruned) = open_log_file(log_dir)?;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_ansi(false).with_writer(file_writer))
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::debug!(path = %guard.path().display(), "Logging initialized");
    if pruned > 0 {
        tracing::debug!(count = pruned, "Removed old log files");
    }
    Ok(guard)
}
