//! The built-in console/file sink
//!
//! A ready-to-use [`LogHandler`] that formats one annotated line per message
//! and writes it to standard error, or to the file named by `LDCP_LOGFILE`.
//! The library installs it through [`init_console_logger`] when the host has
//! not supplied a sink of its own.
//!
//! Line format (stable — tooling greps it):
//!
//! ```text
//! <elapsed_ms>ms [I<iid>] {<thread_id>} [<SEVERITY>] (<subsys> - L:<line>) <message>
//! ```
//!
//! The source file name is accepted by the contract but not printed here;
//! alternate sinks are free to use it.

use crate::core::clock;
use crate::core::error::{LoggerError, Result};
use crate::core::handle::{LogHandler, LoggerHandle};
use crate::core::severity::{min_level_for_verbosity, Severity};
use crate::sinks::thread_id;
use parking_lot::Mutex;
use std::fmt;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;
use std::sync::atomic::{AtomicI32, Ordering};
use std::sync::{Arc, OnceLock};

/// Path to open in append mode for log output; unset or empty means
/// standard error.
pub const ENV_LOGFILE: &str = "LDCP_LOGFILE";

/// Integer verbosity count; unset, empty, unparseable, or `0` leaves the
/// default sink disabled.
pub const ENV_LOGLEVEL: &str = "LDCP_LOGLEVEL";

/// The default sink: severity filtering, elapsed-time stamping, one locked
/// line write per message.
///
/// The process-wide instance behind [`init_console_logger`] is the usual way
/// to get one; standalone instances exist so embedders and tests can point a
/// [`LoggerHandle`] at a private file.
pub struct ConsoleLogger {
    /// Output stream; `None` means standard error. The mutex doubles as the
    /// per-stream write lock, held for the duration of one line.
    out: Mutex<Option<File>>,
    min_level: AtomicI32,
}

impl ConsoleLogger {
    /// A sink writing to standard error at the default minimum severity.
    pub fn new() -> Self {
        Self {
            out: Mutex::new(None),
            min_level: AtomicI32::new(Severity::default() as i32),
        }
    }

    /// A sink writing to an already-open file.
    pub fn with_output(file: File) -> Self {
        Self {
            out: Mutex::new(Some(file)),
            min_level: AtomicI32::new(Severity::default() as i32),
        }
    }

    /// Set the minimum severity; messages below it are complete no-ops.
    ///
    /// Consumes and returns `self` so the threshold is fixed before the sink
    /// is shared between threads.
    pub fn with_min_level(self, min_level: i32) -> Self {
        self.min_level.store(min_level, Ordering::Relaxed);
        self
    }

    pub fn min_level(&self) -> i32 {
        self.min_level.load(Ordering::Relaxed)
    }
}

impl Default for ConsoleLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl LogHandler for ConsoleLogger {
    fn log(
        &self,
        iid: u16,
        subsys: &str,
        severity: i32,
        _srcfile: &str,
        srcline: u32,
        args: fmt::Arguments<'_>,
    ) {
        if severity < self.min_level.load(Ordering::Relaxed) {
            return;
        }

        let elapsed = clock::elapsed();
        let line = format!(
            "{}ms [I{}] {{{}}} [{}] ({} - L:{}) {}\n",
            elapsed.as_millis(),
            iid,
            thread_id::current(),
            Severity::label(severity),
            subsys,
            srcline,
            args,
        );

        // Write failures are swallowed: logging never fails the caller.
        let mut out = self.out.lock();
        match out.as_mut() {
            Some(file) => {
                let _ = file.write_all(line.as_bytes());
                // The append handle lives for the whole process with no
                // close path, so durability is per-line.
                let _ = file.flush();
            }
            None => {
                let stderr = std::io::stderr();
                let mut stderr = stderr.lock();
                let _ = stderr.write_all(line.as_bytes());
            }
        }
    }
}

fn env_nonempty(key: &str) -> Option<String> {
    match std::env::var(key) {
        Ok(value) if !value.is_empty() => Some(value),
        _ => None,
    }
}

fn open_log_file(path: &Path) -> Result<File> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|err| LoggerError::open_log_file(path, err))
}

fn parse_verbosity(value: &str) -> Result<i32> {
    value
        .trim()
        .parse::<i32>()
        .map_err(|_| LoggerError::invalid_log_level(value))
}

fn console() -> &'static Arc<ConsoleLogger> {
    static CONSOLE: OnceLock<Arc<ConsoleLogger>> = OnceLock::new();
    CONSOLE.get_or_init(|| Arc::new(ConsoleLogger::new()))
}

/// Configure the process-wide console sink from the environment.
///
/// Reads [`ENV_LOGFILE`] and, if no stream is open yet on the singleton,
/// opens the named path for appending; an open failure is reported once to
/// standard error (the one surfaced failure in this crate — losing the
/// configured log destination silently would be worse) and the sink stays on
/// standard error. Then reads [`ENV_LOGLEVEL`]: absent, non-numeric, or `0`
/// means "no default logger" and `None` is returned. Any other value is a
/// verbosity count (see [`min_level_for_verbosity`]).
///
/// Safe to call repeatedly; the file-open step only takes effect the first
/// time it finds no stream open, and every successful call returns the same
/// process-wide handle. Expected to run during single-threaded startup,
/// before concurrent logging begins.
pub fn init_console_logger() -> Option<Arc<LoggerHandle>> {
    let sink = console();

    if let Some(path) = env_nonempty(ENV_LOGFILE) {
        let mut out = sink.out.lock();
        if out.is_none() {
            match open_log_file(Path::new(&path)) {
                Ok(file) => *out = Some(file),
                Err(err) => eprintln!("ldcp: {}", err),
            }
        }
    }

    let raw = env_nonempty(ENV_LOGLEVEL)?;
    let verbosity = parse_verbosity(&raw).ok()?;
    if verbosity == 0 {
        return None;
    }
    sink.min_level
        .store(min_level_for_verbosity(verbosity), Ordering::Relaxed);

    static HANDLE: OnceLock<Arc<LoggerHandle>> = OnceLock::new();
    let handle = HANDLE
        .get_or_init(|| Arc::new(LoggerHandle::v0(Arc::clone(console()) as Arc<dyn LogHandler>)));
    Some(Arc::clone(handle))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_verbosity() {
        assert_eq!(parse_verbosity("2").unwrap(), 2);
        assert_eq!(parse_verbosity(" 5 ").unwrap(), 5);
        assert_eq!(parse_verbosity("-1").unwrap(), -1);
        assert!(parse_verbosity("debug").is_err());
        assert!(parse_verbosity("").is_err());
    }

    #[test]
    fn test_min_level_builder() {
        let sink = ConsoleLogger::new().with_min_level(Severity::Warn as i32);
        assert_eq!(sink.min_level(), Severity::Warn as i32);
    }

    #[test]
    fn test_default_min_level_is_info() {
        assert_eq!(ConsoleLogger::new().min_level(), Severity::Info as i32);
    }

    #[test]
    fn test_env_nonempty() {
        std::env::set_var("LDCP_TEST_NONEMPTY", "x");
        assert_eq!(env_nonempty("LDCP_TEST_NONEMPTY").as_deref(), Some("x"));

        std::env::set_var("LDCP_TEST_EMPTY", "");
        assert_eq!(env_nonempty("LDCP_TEST_EMPTY"), None);
        assert_eq!(env_nonempty("LDCP_TEST_UNSET_VARIABLE"), None);
    }

    #[test]
    fn test_open_log_file_failure_names_path() {
        let err = open_log_file(Path::new("/ldcp-no-such-dir/out.log")).unwrap_err();
        assert!(err.to_string().contains("/ldcp-no-such-dir/out.log"));
    }
}
