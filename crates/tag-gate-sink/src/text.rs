// crates/tag-gate-sink/src/text.rs
// ============================================================================
// Module: Text Sink
// Description: Human-readable line sink.
// Purpose: Render records for terminals and plain log files.
// Dependencies: tag-gate-core, std
// ============================================================================

//! ## Overview
//! [`TextSink`] renders each record as `[level] text`, with gate notices
//! marked `[level:notice]` and an optional ` (context)` suffix. Multi-line
//! texts are written as-is.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::io::Stderr;
use std::io::Write;
use std::sync::Mutex;

use tag_gate_core::LogRecord;
use tag_gate_core::LogSink;
use tag_gate_core::RecordKind;
use tag_gate_core::SinkError;

// ============================================================================
// SECTION: Text Sink
// ============================================================================

/// Plain-text line sink.
pub struct TextSink<W: Write + Send> {
    /// Output writer for rendered lines.
    writer: Mutex<W>,
}

impl<W: Write + Send> TextSink<W> {
    /// Creates a text sink over `writer`.
    pub const fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }
}

impl TextSink<Stderr> {
    /// Creates a text sink writing to standard error.
    #[must_use]
    pub fn stderr() -> Self {
        Self::new(std::io::stderr())
    }
}

/// Renders one record without the trailing newline.
#[must_use]
pub fn render_line(record: &LogRecord) -> String {
    let marker = match record.kind {
        RecordKind::Message => record.level.to_string(),
        RecordKind::Notice => format!("{}:notice", record.level),
    };
    match record.context.as_deref() {
        Some(context) => format!("[{marker}] {} ({context})", record.text),
        None => format!("[{marker}] {}", record.text),
    }
}

impl<W: Write + Send> LogSink for TextSink<W> {
    fn deliver(&self, record: &LogRecord) -> Result<(), SinkError> {
        let line = render_line(record);
        let mut guard = self
            .writer
            .lock()
            .map_err(|_| SinkError::WriteFailed("text writer mutex poisoned".to_string()))?;
        writeln!(guard, "{line}").map_err(|err| SinkError::WriteFailed(err.to_string()))?;
        drop(guard);
        Ok(())
    }
}
