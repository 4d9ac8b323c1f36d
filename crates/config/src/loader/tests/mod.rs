//! Tests for the configuration loader.
//!
//! Invariants:
//! - Tests use `serial_test` to prevent environment variable pollution.
//! - Tests use `global_test_lock()` for additional synchronization.
//! - Temporary directories are cleaned up automatically via `tempfile`.

use std::sync::{Mutex, MutexGuard};


/// Acquire the global lock guarding process-wide state (env vars, cwd).
pub fn env_lock() -> MutexGuard<'static, ()> {
    let lock: &'static Mutex<()> = crate::test_util::global_test_lock();
    lock.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Every variable the loader reads, cleared so the host environment cannot leak in.
pub const CLEARED_VARS: [(&str, Option<&str>); 4] = [
    ("SPLUNK_URL", None),
    ("SPLUNK_API_TOKEN", None),
    ("SPLUNK_TIMEOUT", None),
    ("SPLUNK_SKIP_VERIFY", None),
];
