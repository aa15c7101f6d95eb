//! # ranklog
//!
//! A small leveled logging facility with per-rank output filtering, plus a
//! set of string conversion utilities. The two parts are independent: the
//! [`Logger`] wraps an output destination (a caller-provided stream or an
//! owned per-rank log file) and gates every piece of output by severity and
//! by an optional rank filter; [`strings`] provides pure join/parse/split
//! helpers.
//!
//! ## Logging
//!
//! ```
//! use ranklog::prelude::*;
//!
//! let mut log = Logger::builder()
//!     .threshold(Level::Info)
//!     .to_writer(Box::new(std::io::stdout()));
//!
//! log.info().append("read ").append(128).append(" records").newline_and_flush();
//! log.debug().append("suppressed at Info threshold").newline_and_flush();
//! ```
//!
//! Messages are composed incrementally and terminated explicitly with
//! [`newline_and_flush`](Logger::newline_and_flush); output left unterminated
//! stays in the sink's buffer and may be lost.
//!
//! ## String utilities
//!
//! ```
//! use ranklog::strings::{join, split};
//!
//! assert_eq!(join(&[1, 2, 3], ", "), "1, 2, 3");
//! assert_eq!(split::<i32>("1,2,3", ","), vec![1, 2, 3]);
//! ```

pub mod core;
pub mod macros;
pub mod strings;

pub mod prelude {
    pub use crate::core::{Level, LogSink, Logger, LoggerBuilder, LoggerError, Result};
}

pub use crate::core::registry;
pub use crate::core::{Level, LogSink, Logger, LoggerBuilder, LoggerError, Result};
