//! Logging macros for ergonomic single-line messages.
//!
//! The method API composes messages piece by piece and requires an explicit
//! [`newline_and_flush`](crate::Logger::newline_and_flush). These macros wrap
//! the full protocol for the common one-line case: start the message, append
//! the formatted text, terminate and flush.
//!
//! # Examples
//!
//! ```
//! use ranklog::prelude::*;
//! use ranklog::info_line;
//!
//! let mut logger = Logger::builder()
//!     .threshold(Level::Info)
//!     .to_writer(Box::new(std::io::stdout()));
//!
//! let port = 8080;
//! info_line!(logger, "listening on port {}", port);
//! ```

/// Log a complete line at an explicit level.
///
/// # Examples
///
/// ```
/// # use ranklog::prelude::*;
/// # let mut logger = Logger::builder().to_writer(Box::new(std::io::stdout()));
/// use ranklog::log_line;
/// log_line!(logger, Level::Error, "error code: {}", 500);
/// ```
#[macro_export]
macro_rules! log_line {
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        $logger
            .message($level)
            .append(format_args!($($arg)+))
            .newline_and_flush()
    };
}

/// Log a complete fatal-level line.
#[macro_export]
macro_rules! fatal_line {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log_line!($logger, $crate::Level::Fatal, $($arg)+)
    };
}

/// Log a complete error-level line.
#[macro_export]
macro_rules! error_line {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log_line!($logger, $crate::Level::Error, $($arg)+)
    };
}

/// Log a complete warning-level line.
#[macro_export]
macro_rules! warning_line {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log_line!($logger, $crate::Level::Warning, $($arg)+)
    };
}

/// Log a complete info-level line.
#[macro_export]
macro_rules! info_line {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log_line!($logger, $crate::Level::Info, $($arg)+)
    };
}

/// Log a complete debug-level line.
#[macro_export]
macro_rules! debug_line {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log_line!($logger, $crate::Level::Debug, $($arg)+)
    };
}
