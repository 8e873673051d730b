//! Built-in sink implementations

pub mod console;
mod thread_id;

pub use console::{init_console_logger, ConsoleLogger, ENV_LOGFILE, ENV_LOGLEVEL};
