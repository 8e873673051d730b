//! The versioned logger contract
//!
//! A [`LoggerHandle`] is what a settings object points at: an interface
//! version number plus the callback registered for that version. The version
//! field exists so a host built against a newer revision of this contract can
//! hand the library a handle it does not understand yet; dispatch skips such
//! handles instead of erroring.

use std::fmt;
use std::sync::Arc;

/// The interface version this crate knows how to dispatch.
pub const HANDLE_VERSION: u32 = 0;

/// Version-0 callback shape.
///
/// Invoked once per emitted message. The handler recovers its own state
/// through `&self`; everything else arrives as arguments:
///
/// - `iid`: instance id of the emitting client instance
/// - `subsys`: short tag for the component that produced the message
/// - `severity`: raw severity value (see [`Severity`](crate::Severity))
/// - `srcfile` / `srcline`: source location of the call site
/// - `args`: the message, pre-bound to its format arguments; interpolation
///   happens inside the handler (or not at all, if it filters the call out)
pub trait LogHandler: Send + Sync {
    fn log(
        &self,
        iid: u16,
        subsys: &str,
        severity: i32,
        srcfile: &str,
        srcline: u32,
        args: fmt::Arguments<'_>,
    );
}

/// A logging sink as installed into a settings object.
pub struct LoggerHandle {
    version: u32,
    pub(crate) handler: Arc<dyn LogHandler>,
}

impl LoggerHandle {
    /// Wrap a handler at the current interface version.
    pub fn v0(handler: Arc<dyn LogHandler>) -> Self {
        Self {
            version: HANDLE_VERSION,
            handler,
        }
    }

    /// Wrap a handler under an explicit interface version.
    ///
    /// Handles carrying a version other than [`HANDLE_VERSION`] are silently
    /// skipped by dispatch; this constructor exists for hosts targeting a
    /// future contract revision.
    pub fn with_version(version: u32, handler: Arc<dyn LogHandler>) -> Self {
        Self { version, handler }
    }

    pub fn version(&self) -> u32 {
        self.version
    }
}

impl fmt::Debug for LoggerHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoggerHandle")
            .field("version", &self.version)
            .finish_non_exhaustive()
    }
}
