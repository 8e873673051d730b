//! Logging macros for library call sites.
//!
//! These capture the source location and bind format arguments at the call
//! site, then hand everything to [`log`](crate::core::dispatch::log). They
//! are the usual way a subsystem emits a message; the bare function exists
//! for callers that already carry a location.
//!
//! # Examples
//!
//! ```
//! use ldcp_logging::{info, warn, Settings};
//!
//! let settings = Settings::new(0);
//!
//! // With no logger installed every emission is a no-op.
//! info!(&settings, "conn", "bootstrap attempt {}", 1);
//! warn!(&settings, "io", "short read: {} of {} bytes", 12, 512);
//! ```

/// Log a message at an explicit severity.
///
/// # Examples
///
/// ```
/// use ldcp_logging::{log, Settings, Severity};
///
/// let settings = Settings::new(0);
/// log!(&settings, "topo", Severity::Debug, "rebalance in {}ms", 250);
/// ```
#[macro_export]
macro_rules! log {
    ($settings:expr, $subsys:expr, $sev:expr, $($arg:tt)+) => {
        $crate::log(
            $settings,
            $subsys,
            ($sev) as i32,
            file!(),
            line!(),
            format_args!($($arg)+),
        )
    };
}

/// Log a trace-level message.
#[macro_export]
macro_rules! trace {
    ($settings:expr, $subsys:expr, $($arg:tt)+) => {
        $crate::log!($settings, $subsys, $crate::Severity::Trace, $($arg)+)
    };
}

/// Log a debug-level message.
#[macro_export]
macro_rules! debug {
    ($settings:expr, $subsys:expr, $($arg:tt)+) => {
        $crate::log!($settings, $subsys, $crate::Severity::Debug, $($arg)+)
    };
}

/// Log an info-level message.
#[macro_export]
macro_rules! info {
    ($settings:expr, $subsys:expr, $($arg:tt)+) => {
        $crate::log!($settings, $subsys, $crate::Severity::Info, $($arg)+)
    };
}

/// Log a warning-level message.
#[macro_export]
macro_rules! warn {
    ($settings:expr, $subsys:expr, $($arg:tt)+) => {
        $crate::log!($settings, $subsys, $crate::Severity::Warn, $($arg)+)
    };
}

/// Log an error-level message.
#[macro_export]
macro_rules! error {
    ($settings:expr, $subsys:expr, $($arg:tt)+) => {
        $crate::log!($settings, $subsys, $crate::Severity::Error, $($arg)+)
    };
}

/// Log a fatal-level message.
#[macro_export]
macro_rules! fatal {
    ($settings:expr, $subsys:expr, $($arg:tt)+) => {
        $crate::log!($settings, $subsys, $crate::Severity::Fatal, $($arg)+)
    };
}
