//! Degraded mode: a configured log file that cannot be opened
//!
//! Lives in its own test binary so the singleton has never successfully
//! opened a stream when this runs.

use ldcp_logging::{info, init_console_logger, Settings, ENV_LOGFILE, ENV_LOGLEVEL};
use std::env;
use std::sync::Arc;
use tempfile::TempDir;

#[test]
fn test_unwritable_logfile_falls_back_to_stderr() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("no-such-subdir").join("client.log");

    env::set_var(ENV_LOGFILE, &path);
    env::set_var(ENV_LOGLEVEL, "2");

    // The open failure is reported to stderr but never fails initialization:
    // the level still enables the sink, writing to stderr instead.
    let handle = init_console_logger().expect("sink stays enabled in degraded mode");

    let mut settings = Settings::new(1);
    settings.logger = Some(Arc::clone(&handle));
    info!(&settings, "io", "running degraded");

    assert!(!path.exists(), "the unopenable path must never be created");

    // A later init finds the stream slot still empty, retries the open, and
    // fails the same way; the sink stays on stderr.
    let again = init_console_logger().expect("still enabled");
    assert!(Arc::ptr_eq(&handle, &again));
    assert!(!path.exists());
}
