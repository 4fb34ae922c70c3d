// crates/tag-gate-core/src/runtime/memory.rs
// ============================================================================
// Module: Tag Gate In-Memory Sink
// Description: Record-collecting sink for tests and embedding hosts.
// Purpose: Capture delivered records without external dependencies.
// Dependencies: crate::interfaces
// ============================================================================

//! ## Overview
//! [`MemorySink`] stores every delivered record. Clones share storage, so a
//! test can hand one clone to a logger and inspect the other.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::sync::Arc;
use std::sync::Mutex;

use crate::interfaces::LogRecord;
use crate::interfaces::LogSink;
use crate::interfaces::SinkError;

// ============================================================================
// SECTION: Memory Sink
// ============================================================================

/// In-memory record sink.
#[derive(Debug, Default, Clone)]
pub struct MemorySink {
    /// Delivered records in order.
    records: Arc<Mutex<Vec<LogRecord>>>,
}

impl MemorySink {
    /// Creates an empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of the delivered records.
    #[must_use]
    pub fn records(&self) -> Vec<LogRecord> {
        self.records.lock().map(|guard| guard.clone()).unwrap_or_default()
    }

    /// Removes and returns the delivered records.
    #[must_use]
    pub fn drain(&self) -> Vec<LogRecord> {
        self.records.lock().map(|mut guard| std::mem::take(&mut *guard)).unwrap_or_default()
    }
}

impl LogSink for MemorySink {
    fn deliver(&self, record: &LogRecord) -> Result<(), SinkError> {
        self.records
            .lock()
            .map_err(|_| SinkError::WriteFailed("memory sink mutex poisoned".to_string()))?
            .push(record.clone());
        Ok(())
    }
}
