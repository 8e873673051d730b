//! # LDCP Logging
//!
//! Pluggable, severity-filtered logging core for the LDCP client library.
//!
//! ## Features
//!
//! - **Pluggable**: a versioned [`LoggerHandle`] contract lets the host
//!   process substitute its own sink without relinking the library
//! - **Optional by design**: an absent or unrecognized handle makes every
//!   emission a silent no-op; logging never fails the caller
//! - **Built-in sink**: console/file output with minimum-severity filtering,
//!   monotonic elapsed-time stamps, and environment-driven configuration
//!   (`LDCP_LOGFILE`, `LDCP_LOGLEVEL`)
//! - **Thread safe**: concurrent callers never interleave partial lines
//!
//! ## Usage
//!
//! ```
//! use ldcp_logging::{info, init_console_logger, Settings};
//!
//! let mut settings = Settings::new(0);
//! settings.logger = init_console_logger();
//!
//! info!(&settings, "conn", "connected to {}", "127.0.0.1:11210");
//! ```

pub mod core;
pub mod macros;
pub mod sinks;

pub mod prelude {
    pub use crate::core::{
        dump_bytes, log, min_level_for_verbosity, LogHandler, LoggerError, LoggerHandle, Result,
        Settings, Severity, HANDLE_VERSION,
    };
    pub use crate::sinks::{init_console_logger, ConsoleLogger, ENV_LOGFILE, ENV_LOGLEVEL};
}

pub use crate::core::{
    dump_bytes, log, min_level_for_verbosity, LogHandler, LoggerError, LoggerHandle, Result,
    Settings, Severity, HANDLE_VERSION,
};
pub use crate::sinks::{init_console_logger, ConsoleLogger, ENV_LOGFILE, ENV_LOGLEVEL};
