//! Message dispatch
//!
//! [`log`] is the single call site every subsystem routes its messages
//! through; callers never touch a sink directly. The function validates the
//! handle and forwards, nothing more — filtering and formatting belong to
//! the handler. It performs no allocation and never fails back to the
//! caller, whatever state the handle is in.

use super::settings::Settings;
use std::fmt;

/// Deliver one message through the installed logger, if any.
///
/// No-ops when `settings` carries no logger, or when the handle's interface
/// version is not one this crate understands (unknown future versions are
/// skipped, not errors).
///
/// Prefer the [`log!`](macro@crate::log) family of macros, which capture
/// the source location and build `args` for you.
pub fn log(
    settings: &Settings,
    subsys: &str,
    severity: i32,
    srcfile: &str,
    srcline: u32,
    args: fmt::Arguments<'_>,
) {
    let Some(handle) = settings.logger.as_ref() else {
        return;
    };

    if handle.version() != super::handle::HANDLE_VERSION {
        return;
    }

    handle
        .handler
        .log(settings.iid, subsys, severity, srcfile, srcline, args);
}
