//! Environment-driven initialization of the process-wide console sink
//!
//! The default sink is a process singleton, so every scenario lives in one
//! sequential test function; the open-failure path has its own test binary
//! (a fresh process is a fresh singleton).

use ldcp_logging::{debug, info, init_console_logger, warn, Settings, ENV_LOGFILE, ENV_LOGLEVEL};
use std::env;
use std::fs;
use std::sync::Arc;
use tempfile::TempDir;

#[test]
fn test_env_driven_singleton_lifecycle() {
    // Disabled outcomes first, before any file is configured.
    env::remove_var(ENV_LOGFILE);
    env::remove_var(ENV_LOGLEVEL);
    assert!(init_console_logger().is_none(), "unset level must disable the sink");

    env::set_var(ENV_LOGLEVEL, "");
    assert!(init_console_logger().is_none(), "empty level must disable the sink");

    env::set_var(ENV_LOGLEVEL, "verbose");
    assert!(init_console_logger().is_none(), "non-numeric level must disable the sink");

    env::set_var(ENV_LOGLEVEL, "0");
    assert!(init_console_logger().is_none(), "zero must disable the sink");

    // Happy path: verbosity 1 exposes Warn and above, output to a file.
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("client.log");
    env::set_var(ENV_LOGFILE, &path);
    env::set_var(ENV_LOGLEVEL, "1");

    let handle = init_console_logger().expect("level 1 enables the sink");
    assert_eq!(handle.version(), 0);

    let mut settings = Settings::new(7);
    settings.logger = Some(Arc::clone(&handle));

    info!(&settings, "conn", "below the threshold");
    warn!(&settings, "conn", "spilling to {}", "file");

    let content = fs::read_to_string(&path).expect("read log file");
    assert_eq!(content.lines().count(), 1, "info must be filtered at verbosity 1");
    assert!(content.contains("[WARN] (conn - L:"));
    assert!(content.contains("[I7]"));
    assert!(content.contains("spilling to file"));

    // Re-init is idempotent on the stream and returns the same handle, but
    // re-applies the threshold: verbosity 3 now exposes Debug.
    env::set_var(ENV_LOGLEVEL, "3");
    let again = init_console_logger().expect("level 3 keeps the sink enabled");
    assert!(Arc::ptr_eq(&handle, &again), "repeated init must hand out the same handle");

    settings.logger = Some(again);
    debug!(&settings, "conn", "now visible");

    let content = fs::read_to_string(&path).expect("read log file");
    assert_eq!(content.lines().count(), 2, "file must not have been reopened or truncated");
    assert!(content.contains("[DEBUG] (conn - L:"));
}
