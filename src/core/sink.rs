//! Output destinations for the logger

use crate::core::error::{LoggerError, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Destination receiving formatted log text.
///
/// A `Writer` sink wraps a caller-provided stream: the logger flushes it but
/// never closes the caller's resource. A `File` sink is opened and owned by
/// the logger and closes when the logger is dropped.
///
/// Output is buffered. Callers must terminate messages with
/// [`Logger::newline_and_flush`](crate::core::Logger::newline_and_flush);
/// omitting it risks buffered, possibly lost output.
pub enum LogSink {
    Writer(Box<dyn Write + Send>),
    File {
        path: PathBuf,
        writer: BufWriter<File>,
    },
}

impl std::fmt::Debug for LogSink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogSink::Writer(_) => f.debug_tuple("Writer").finish_non_exhaustive(),
            LogSink::File { path, .. } => f
                .debug_struct("File")
                .field("path", path)
                .finish_non_exhaustive(),
        }
    }
}

impl LogSink {
    /// Open an owned file sink named `<prefix>.log`, or `<prefix>_R<rank>.log`
    /// when a rank is supplied.
    pub fn open_file(prefix: &str, rank: Option<u32>) -> Result<Self> {
        let path = PathBuf::from(match rank {
            Some(rank) => format!("{}_R{}.log", prefix, rank),
            None => format!("{}.log", prefix),
        });
        let file = File::create(&path)
            .map_err(|e| LoggerError::file_open(path.display().to_string(), e))?;
        Ok(LogSink::File {
            path,
            writer: BufWriter::new(file),
        })
    }

    /// Path of the owned log file, `None` for caller-provided streams.
    pub fn file_path(&self) -> Option<&Path> {
        match self {
            LogSink::Writer(_) => None,
            LogSink::File { path, .. } => Some(path),
        }
    }

    pub(crate) fn writer(&mut self) -> &mut dyn Write {
        match self {
            LogSink::Writer(w) => w.as_mut(),
            LogSink::File { writer, .. } => writer,
        }
    }

    pub(crate) fn flush(&mut self) {
        // Best effort, mirrors the append path.
        let _ = self.writer().flush();
    }
}

impl Drop for LogSink {
    fn drop(&mut self) {
        self.flush();
    }
}
