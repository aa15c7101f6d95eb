//! Process-wide logger slot with an explicit lifecycle.
//!
//! Replaces the usual mutable global-logger pointer with an
//! explicitly-initialized slot: the hosting application calls [`init`] once
//! during startup, components access the logger through [`with`], and
//! teardown happens through [`shutdown`]. Nothing is constructed implicitly.
//!
//! ```
//! use ranklog::prelude::*;
//! use ranklog::registry;
//!
//! # registry::shutdown();
//! let logger = Logger::builder()
//!     .threshold(Level::Info)
//!     .to_writer(Box::new(std::io::stdout()));
//! registry::init(logger).expect("first init");
//!
//! registry::with(|log| {
//!     log.info().append("started").newline_and_flush();
//! });
//!
//! registry::shutdown();
//! ```

use super::{
    error::{LoggerError, Result},
    logger::Logger,
};
use parking_lot::Mutex;

static GLOBAL: Mutex<Option<Logger>> = Mutex::new(None);

/// Install the process-wide logger.
///
/// Fails with [`LoggerError::AlreadyInitialized`] if a logger is already
/// installed; the rejected logger is dropped (and thereby flushed).
pub fn init(logger: Logger) -> Result<()> {
    let mut slot = GLOBAL.lock();
    if slot.is_some() {
        return Err(LoggerError::AlreadyInitialized);
    }
    *slot = Some(logger);
    Ok(())
}

/// Run `f` against the installed logger.
///
/// Returns `None` when no logger is installed. The slot's lock is held for
/// the duration of `f`, which also serializes concurrent callers.
pub fn with<R>(f: impl FnOnce(&mut Logger) -> R) -> Option<R> {
    GLOBAL.lock().as_mut().map(f)
}

/// Whether a process-wide logger is currently installed.
pub fn is_initialized() -> bool {
    GLOBAL.lock().is_some()
}

/// Remove and return the installed logger, if any.
///
/// Dropping the returned logger flushes its sink and closes an owned file
/// sink. Idempotent: a second call returns `None`.
pub fn shutdown() -> Option<Logger> {
    GLOBAL.lock().take()
}
