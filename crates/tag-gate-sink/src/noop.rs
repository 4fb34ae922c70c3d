// crates/tag-gate-sink/src/noop.rs
// ============================================================================
// Module: No-op Sink
// Description: Sink that discards every record.
// Purpose: Run the gate for its decisions alone.
// Dependencies: tag-gate-core
// ============================================================================

//! ## Overview
//! [`NoopSink`] accepts and drops records.

use tag_gate_core::LogRecord;
use tag_gate_core::LogSink;
use tag_gate_core::SinkError;

/// Sink that discards records.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSink;

impl LogSink for NoopSink {
    fn deliver(&self, _record: &LogRecord) -> Result<(), SinkError> {
        Ok(())
    }
}
