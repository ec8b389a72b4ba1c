//! Helpers shared by unit tests in this crate.

use std::sync::{Mutex, MutexGuard};

static ENV_LOCK: Mutex<()> = Mutex::new(());

/// Serialize tests that read or write process environment variables.
///
/// A test that panicked while holding the lock leaves it poisoned; the
/// guard is recovered so later tests still run.
pub fn lock_env() -> MutexGuard<'static, ()> {
    ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}
