//! Core logger types

pub mod error;
pub mod level;
pub mod logger;
pub mod registry;
pub mod sink;

pub use error::{LoggerError, Result};
pub use level::Level;
pub use logger::{Logger, LoggerBuilder};
pub use sink::LogSink;
