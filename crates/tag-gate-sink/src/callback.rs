// crates/tag-gate-sink/src/callback.rs
// ============================================================================
// Module: Callback Sink
// Description: Callback-based sink for synchronous delivery.
// Purpose: Hand records to a user-provided function.
// Dependencies: tag-gate-core, std
// ============================================================================

//! ## Overview
//! [`CallbackSink`] delivers records by invoking a user-supplied function.
//! Errors returned by the function are passed through unchanged.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::sync::Arc;

use tag_gate_core::LogRecord;
use tag_gate_core::LogSink;
use tag_gate_core::SinkError;

// ============================================================================
// SECTION: Callback Sink
// ============================================================================

/// Callback handler signature used by the sink.
type CallbackHandler = dyn Fn(&LogRecord) -> Result<(), SinkError> + Send + Sync;

/// Callback-based log sink.
#[derive(Clone)]
pub struct CallbackSink {
    /// Handler invoked with each record.
    handler: Arc<CallbackHandler>,
}

impl CallbackSink {
    /// Creates a callback sink from a handler function.
    pub fn new<F>(handler: F) -> Self
    where
        F: Fn(&LogRecord) -> Result<(), SinkError> + Send + Sync + 'static,
    {
        Self {
            handler: Arc::new(handler),
        }
    }
}

impl LogSink for CallbackSink {
    fn deliver(&self, record: &LogRecord) -> Result<(), SinkError> {
        (self.handler)(record)
    }
}
