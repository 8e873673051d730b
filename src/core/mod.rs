//! Core contract types

pub(crate) mod clock;
pub mod dispatch;
pub mod dump;
pub mod error;
pub mod handle;
pub mod settings;
pub mod severity;

pub use dispatch::log;
pub use dump::dump_bytes;
pub use error::{LoggerError, Result};
pub use handle::{LogHandler, LoggerHandle, HANDLE_VERSION};
pub use settings::Settings;
pub use severity::{min_level_for_verbosity, Severity};
