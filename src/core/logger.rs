//! Main logger implementation

use super::{error::Result, level::Level, sink::LogSink};
use chrono::Local;
use std::fmt;
use std::io::Write;
use std::path::Path;
use std::time::Instant;

/// Width of the elapsed-seconds field in message headers.
const ELAPSED_FIELD_WIDTH: usize = 12;

/// A leveled message sink wrapping an output destination.
///
/// Each message begins with one of the level shorthands ([`fatal`](Logger::fatal),
/// [`error`](Logger::error), [`warning`](Logger::warning), [`info`](Logger::info),
/// [`debug`](Logger::debug)), which writes a header when the message passes the
/// threshold and rank gate. Content is then added with the [`append`](Logger::append)
/// family and the message is terminated explicitly with
/// [`newline_and_flush`](Logger::newline_and_flush):
///
/// ```
/// use ranklog::prelude::*;
///
/// let mut log = Logger::builder()
///     .threshold(Level::Info)
///     .to_writer(Box::new(std::io::stdout()));
/// log.info().append("processed ").append(42).append(" items").newline_and_flush();
/// ```
///
/// There is no implicit line termination: a message left without
/// `newline_and_flush` stays in the sink's buffer and may be lost.
///
/// A `Logger` owns its sink and start timer and is deliberately not `Clone`;
/// it is single-writer and provides no internal locking.
#[derive(Debug)]
pub struct Logger {
    threshold: Level,
    /// Level of the message currently being composed.
    pending: Level,
    /// Rank-filter gate, independent of severity.
    emit_enabled: bool,
    sink: LogSink,
    start: Instant,
    rank: u32,
}

impl Logger {
    /// Create a builder for Logger
    ///
    /// # Example
    /// ```
    /// use ranklog::prelude::*;
    ///
    /// let logger = Logger::builder()
    ///     .threshold(Level::Debug)
    ///     .to_writer(Box::new(std::io::stderr()));
    /// ```
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    fn from_parts(threshold: Level, sink: LogSink, rank: u32) -> Self {
        Self {
            threshold,
            pending: Level::Error,
            emit_enabled: true,
            sink,
            start: Instant::now(),
            rank,
        }
    }

    /// Whether output currently passes both the severity and rank gates.
    #[inline]
    fn gate_open(&self) -> bool {
        self.pending <= self.threshold && self.emit_enabled
    }

    /// Begin a new message at `level`, writing the header if the gate is open.
    ///
    /// The header line prefix is
    /// `<TAG>:\t<local timestamp> <elapsed seconds, width 12> [<rank>]\t`,
    /// with elapsed seconds measured from construction on the monotonic clock.
    pub fn message(&mut self, level: Level) -> &mut Self {
        self.pending = level;
        if self.gate_open() {
            let tag = level.tag().unwrap_or("");
            let timestamp = Local::now().format("%Y-%m-%dT%H:%M:%S%Z");
            let elapsed = self.start.elapsed().as_secs_f64();
            let _ = write!(
                self.sink.writer(),
                "{}:\t{} {:>width$.6} [{}]\t",
                tag,
                timestamp,
                elapsed,
                self.rank,
                width = ELAPSED_FIELD_WIDTH,
            );
        }
        self
    }

    /// Begin a fatal-level message.
    pub fn fatal(&mut self) -> &mut Self {
        self.message(Level::Fatal)
    }

    /// Begin an error-level message.
    pub fn error(&mut self) -> &mut Self {
        self.message(Level::Error)
    }

    /// Begin a warning-level message.
    pub fn warning(&mut self) -> &mut Self {
        self.message(Level::Warning)
    }

    /// Begin an info-level message.
    pub fn info(&mut self) -> &mut Self {
        self.message(Level::Info)
    }

    /// Begin a debug-level message.
    pub fn debug(&mut self) -> &mut Self {
        self.message(Level::Debug)
    }

    /// Append a value to the current message.
    ///
    /// Gated like the header: written only while the pending level passes the
    /// threshold and the rank gate is open. Writes are best-effort; IO errors
    /// are swallowed.
    pub fn append<T: fmt::Display>(&mut self, value: T) -> &mut Self {
        if self.gate_open() {
            let _ = write!(self.sink.writer(), "{}", value);
        }
        self
    }

    /// Append a value in hexadecimal (the base manipulator of the append family).
    pub fn append_hex<T: fmt::LowerHex>(&mut self, value: T) -> &mut Self {
        if self.gate_open() {
            let _ = write!(self.sink.writer(), "{:x}", value);
        }
        self
    }

    /// Append a value right-aligned in a field of `width` characters.
    pub fn append_width<T: fmt::Display>(&mut self, value: T, width: usize) -> &mut Self {
        if self.gate_open() {
            let _ = write!(self.sink.writer(), "{:>width$}", value, width = width);
        }
        self
    }

    /// Terminate the current message with a newline and flush the sink.
    ///
    /// Gated like any append. This is the only line terminator; callers that
    /// skip it leave the message in the sink's buffer.
    pub fn newline_and_flush(&mut self) -> &mut Self {
        if self.gate_open() {
            let _ = writeln!(self.sink.writer());
            self.sink.flush();
        }
        self
    }

    /// Set the threshold and return the new value.
    pub fn set_threshold(&mut self, level: Level) -> Level {
        self.threshold = level;
        self.threshold
    }

    /// Current threshold.
    pub fn threshold(&self) -> Level {
        self.threshold
    }

    /// Rank shown in headers and used by the rank filter.
    pub fn rank(&self) -> u32 {
        self.rank
    }

    /// Path of the owned log file, `None` for stream-backed loggers.
    pub fn file_path(&self) -> Option<&Path> {
        self.sink.file_path()
    }

    /// Restart the elapsed-time origin shown in headers.
    pub fn reset_start_time(&mut self) {
        self.start = Instant::now();
    }

    /// Allow output only for the single rank `id`.
    ///
    /// Shares the semantics of [`enable_for_set`](Logger::enable_for_set),
    /// including its inverted-membership behavior.
    pub fn enable_for_single(&mut self, id: u32) -> bool {
        self.enable_for_set(&[id])
    }

    /// Unconditionally enable output for this logger.
    pub fn enable_for_all(&mut self) -> bool {
        self.emit_enabled = true;
        self.emit_enabled
    }

    /// Gate output by rank-set membership.
    ///
    /// Historical quirk, kept bug-for-bug: a rank IN `ids` has its output
    /// DISABLED, a rank not in the set stays enabled. Callers depend on the
    /// existing behavior. Returns the resulting gate value.
    pub fn enable_for_set(&mut self, ids: &[u32]) -> bool {
        self.emit_enabled = !ids.contains(&self.rank);
        self.emit_enabled
    }

    /// Flush the sink without terminating the current message.
    pub fn flush(&mut self) {
        self.sink.flush();
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        // An owned file sink then closes with its handle; a caller-provided
        // writer is only flushed, never closed.
        self.sink.flush();
    }
}

/// Builder for constructing Logger with a fluent API
///
/// # Example
/// ```no_run
/// use ranklog::prelude::*;
///
/// let logger = Logger::builder()
///     .threshold(Level::Debug)
///     .rank(3)
///     .to_file("run")
///     .expect("open log file");
/// ```
pub struct LoggerBuilder {
    threshold: Level,
    rank: Option<u32>,
}

impl LoggerBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self {
            threshold: Level::Error,
            rank: None,
        }
    }

    /// Set the severity threshold (default `Level::Error`).
    #[must_use = "builder methods return a new value"]
    pub fn threshold(mut self, level: Level) -> Self {
        self.threshold = level;
        self
    }

    /// Supply the rank of this process or worker.
    ///
    /// The rank appears in every header, feeds the rank filter, and is
    /// appended to file-sink names as `_R<rank>`. Defaults to 0 (header and
    /// filter) with no filename suffix when absent.
    #[must_use = "builder methods return a new value"]
    pub fn rank(mut self, rank: u32) -> Self {
        self.rank = Some(rank);
        self
    }

    /// Build a logger writing to a caller-provided stream.
    ///
    /// The logger flushes the stream but never closes it.
    pub fn to_writer(self, writer: Box<dyn Write + Send>) -> Logger {
        Logger::from_parts(
            self.threshold,
            LogSink::Writer(writer),
            self.rank.unwrap_or(0),
        )
    }

    /// Build a logger owning the file `<prefix>[_R<rank>].log`.
    pub fn to_file(self, prefix: &str) -> Result<Logger> {
        let sink = LogSink::open_file(prefix, self.rank)?;
        Ok(Logger::from_parts(
            self.threshold,
            sink,
            self.rank.unwrap_or(0),
        ))
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;
    use std::sync::Arc;

    /// Shared in-memory writer so tests can observe output after handing the
    /// sink to the logger.
    #[derive(Clone, Default)]
    struct SharedBuf(Arc<Mutex<Vec<u8>>>);

    impl SharedBuf {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().clone()).expect("utf8 log output")
        }
    }

    impl Write for SharedBuf {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    fn writer_logger(threshold: Level) -> (Logger, SharedBuf) {
        let buf = SharedBuf::default();
        let logger = Logger::builder()
            .threshold(threshold)
            .to_writer(Box::new(buf.clone()));
        (logger, buf)
    }

    #[test]
    fn test_builder_defaults() {
        let (logger, _) = writer_logger(Level::Error);
        assert_eq!(logger.threshold(), Level::Error);
        assert_eq!(logger.rank(), 0);
        assert!(logger.file_path().is_none());
    }

    #[test]
    fn test_message_below_threshold_is_dropped() {
        let (mut logger, buf) = writer_logger(Level::Warning);
        logger.info().append("too verbose").newline_and_flush();
        assert_eq!(buf.contents(), "");
    }

    #[test]
    fn test_message_at_threshold_is_emitted() {
        let (mut logger, buf) = writer_logger(Level::Warning);
        logger.warning().append("just right").newline_and_flush();
        let out = buf.contents();
        assert!(out.starts_with("WARNING:\t"));
        assert!(out.contains("just right"));
        assert!(out.ends_with('\n'));
    }

    #[test]
    fn test_header_shape() {
        let (mut logger, buf) = writer_logger(Level::Debug);
        logger.debug().append("x").newline_and_flush();
        let out = buf.contents();
        // <TAG>:\t<timestamp> <elapsed w12> [<rank>]\t<body>\n
        let after_tag = out.strip_prefix("DEBUG:\t").expect("tag prefix");
        let (header, body) = after_tag.split_once("]\t").expect("header terminator");
        assert_eq!(body, "x\n");
        assert!(header.ends_with("[0"));
        let fields: Vec<&str> = header.split_whitespace().collect();
        // timestamp, elapsed, [rank
        assert_eq!(fields.len(), 3);
        let elapsed: f64 = fields[1].parse().expect("elapsed seconds");
        assert!(elapsed >= 0.0);
    }

    #[test]
    fn test_elapsed_field_width() {
        let (mut logger, buf) = writer_logger(Level::Info);
        logger.info().newline_and_flush();
        let out = buf.contents();
        let after_tag = out.strip_prefix("INFO:\t").unwrap();
        let (header, _) = after_tag.split_once(" [").unwrap();
        // The elapsed value is right-aligned in a 12-wide field with 6 decimals.
        let field = &header[header.len() - ELAPSED_FIELD_WIDTH..];
        let value = field.trim_start();
        assert!(value.parse::<f64>().is_ok(), "field was '{}'", field);
        let decimals = value.rsplit_once('.').expect("decimal point").1;
        assert_eq!(decimals.len(), 6);
    }

    #[test]
    fn test_each_append_is_gated_independently() {
        let (mut logger, buf) = writer_logger(Level::Error);
        logger.debug().append("hidden");
        // Raising the threshold mid-message opens the gate for later appends.
        logger.set_threshold(Level::All);
        logger.append("visible").newline_and_flush();
        let out = buf.contents();
        assert!(!out.contains("hidden"));
        assert!(out.contains("visible"));
    }

    #[test]
    fn test_new_shorthand_starts_fresh_header() {
        let (mut logger, buf) = writer_logger(Level::Debug);
        logger.info().append("first");
        logger.error().append("second").newline_and_flush();
        let out = buf.contents();
        assert!(out.contains("INFO:\t"));
        assert!(out.contains("ERROR:\t"));
    }

    #[test]
    fn test_append_manipulators() {
        let (mut logger, buf) = writer_logger(Level::Info);
        logger
            .info()
            .append_hex(255u32)
            .append(' ')
            .append_width(7, 5)
            .newline_and_flush();
        let out = buf.contents();
        assert!(out.contains("ff     7\n"));
    }

    #[test]
    fn test_set_threshold_returns_new_value() {
        let (mut logger, _) = writer_logger(Level::Error);
        assert_eq!(logger.set_threshold(Level::Debug), Level::Debug);
        assert_eq!(logger.threshold(), Level::Debug);
    }

    #[test]
    fn test_enable_for_set_inverted_membership() {
        let buf = SharedBuf::default();
        let mut logger = Logger::builder()
            .threshold(Level::Info)
            .rank(2)
            .to_writer(Box::new(buf.clone()));

        // Own rank in the set disables output.
        assert!(!logger.enable_for_set(&[1, 2, 3]));
        logger.info().append("silenced").newline_and_flush();
        assert_eq!(buf.contents(), "");

        // Own rank outside the set enables output.
        assert!(logger.enable_for_set(&[0, 1]));
        logger.info().append("audible").newline_and_flush();
        assert!(buf.contents().contains("audible"));
    }

    #[test]
    fn test_enable_for_single_and_all() {
        let buf = SharedBuf::default();
        let mut logger = Logger::builder()
            .threshold(Level::Info)
            .rank(0)
            .to_writer(Box::new(buf.clone()));

        // Same inverted semantics as enable_for_set.
        assert!(!logger.enable_for_single(0));
        logger.info().append("gone").newline_and_flush();
        assert_eq!(buf.contents(), "");

        assert!(logger.enable_for_all());
        logger.info().append("back").newline_and_flush();
        assert!(buf.contents().contains("back"));
    }

    #[test]
    fn test_reset_start_time() {
        let (mut logger, buf) = writer_logger(Level::Info);
        std::thread::sleep(std::time::Duration::from_millis(20));
        logger.reset_start_time();
        logger.info().newline_and_flush();
        let out = buf.contents();
        let after_tag = out.strip_prefix("INFO:\t").unwrap();
        let (header, _) = after_tag.split_once(" [").unwrap();
        let elapsed: f64 = header.rsplit_once(' ').unwrap().1.trim().parse().unwrap();
        assert!(elapsed < 0.02, "elapsed {} not reset", elapsed);
    }
}
