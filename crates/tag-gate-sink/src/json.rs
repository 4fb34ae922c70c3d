// crates/tag-gate-sink/src/json.rs
// ============================================================================
// Module: JSON Lines Sink
// Description: Serializes log records as newline-delimited JSON.
// Purpose: Persist gate output in a machine-readable form.
// Dependencies: serde_json, tag-gate-core, std
// ============================================================================

//! ## Overview
//! [`JsonLinesSink`] writes each [`LogRecord`] as a single JSON object
//! followed by `\n`. The writer is guarded by a mutex so concurrent loggers
//! never interleave partial lines.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::io::Write;
use std::sync::Mutex;

use tag_gate_core::LogRecord;
use tag_gate_core::LogSink;
use tag_gate_core::SinkError;

// ============================================================================
// SECTION: JSON Lines Sink
// ============================================================================

/// Newline-delimited JSON sink.
pub struct JsonLinesSink<W: Write + Send> {
    /// Output writer for serialized records.
    writer: Mutex<W>,
    /// Flush after every record when set.
    flush_each: bool,
}

impl<W: Write + Send> JsonLinesSink<W> {
    /// Creates a sink that leaves flushing to the writer.
    pub const fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
            flush_each: false,
        }
    }

    /// Creates a sink that flushes after every record.
    pub const fn flushing(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
            flush_each: true,
        }
    }

    /// Consumes the sink and returns the writer.
    ///
    /// # Errors
    ///
    /// Returns [`SinkError::WriteFailed`] when the writer mutex is poisoned.
    pub fn into_inner(self) -> Result<W, SinkError> {
        self.writer
            .into_inner()
            .map_err(|_| SinkError::WriteFailed("log writer mutex poisoned".to_string()))
    }
}

impl<W: Write + Send> LogSink for JsonLinesSink<W> {
    fn deliver(&self, record: &LogRecord) -> Result<(), SinkError> {
        let mut guard = self
            .writer
            .lock()
            .map_err(|_| SinkError::WriteFailed("log writer mutex poisoned".to_string()))?;
        serde_json::to_writer(&mut *guard, record)
            .map_err(|err| SinkError::WriteFailed(err.to_string()))?;
        guard.write_all(b"\n").map_err(|err| SinkError::WriteFailed(err.to_string()))?;
        if self.flush_each {
            guard.flush().map_err(|err| SinkError::WriteFailed(err.to_string()))?;
        }
        drop(guard);
        Ok(())
    }
}
