// crates/tag-gate-core/src/runtime/logger.rs
// ============================================================================
// Module: Tag Gate Logger
// Description: Facade combining the configuration cache, engine, and a sink.
// Purpose: Evaluate log calls and forward the resulting records.
// Dependencies: crate::{core, interfaces, runtime}
// ============================================================================

//! ## Overview
//! [`TagLogger`] is what call sites use. Each call evaluates under the cache
//! lock, then delivers the decision's notices followed by the message itself
//! (when emitted) to the sink. A poisoned configuration lock degrades to a
//! suppressed decision; only sink failures are reported to the caller.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::sync::Arc;

use crate::core::Decision;
use crate::core::LogLevel;
use crate::core::LogRequest;
use crate::interfaces::ConfigSource;
use crate::interfaces::LogRecord;
use crate::interfaces::LogSink;
use crate::runtime::cache::GateCache;
use crate::runtime::cache::GateError;
use crate::runtime::engine::evaluate;

// ============================================================================
// SECTION: Logger
// ============================================================================

/// Shared sink handle.
type SharedSink = Arc<dyn LogSink + Send + Sync>;

/// Gate-aware logger.
pub struct TagLogger {
    /// Cached configuration.
    cache: GateCache,
    /// Destination for emitted records.
    sink: SharedSink,
}

impl TagLogger {
    /// Creates a logger that loads its configuration from `source`.
    #[must_use]
    pub fn new(
        source: impl ConfigSource + Send + Sync + 'static,
        sink: impl LogSink + Send + Sync + 'static,
    ) -> Self {
        Self::with_cache(GateCache::new(source), Arc::new(sink))
    }

    /// Creates a logger from an existing cache and shared sink.
    #[must_use]
    pub fn with_cache(cache: GateCache, sink: SharedSink) -> Self {
        Self {
            cache,
            sink,
        }
    }

    /// Returns the configuration cache.
    #[must_use]
    pub const fn cache(&self) -> &GateCache {
        &self.cache
    }

    /// Evaluates and forwards one log call.
    ///
    /// # Errors
    ///
    /// Returns [`GateError::Sink`] when a record cannot be delivered.
    pub fn log(&self, request: &LogRequest<'_>) -> Result<Decision, GateError> {
        self.log_with_context(request, None)
    }

    /// Evaluates and forwards one log call, attaching `context` to the
    /// emitted message record.
    ///
    /// # Errors
    ///
    /// Returns [`GateError::Sink`] when a record cannot be delivered.
    pub fn log_with_context(
        &self,
        request: &LogRequest<'_>,
        context: Option<&str>,
    ) -> Result<Decision, GateError> {
        let decision = match self.cache.with_config(&*self.sink, |config| evaluate(config, request))
        {
            Ok(decision) => decision,
            Err(GateError::Poisoned) => return Ok(Decision::suppress(request.level)),
            Err(err) => return Err(err),
        };
        for notice in &decision.notices {
            self.sink.deliver(&LogRecord::notice(notice.level, notice.text.clone()))?;
        }
        if decision.should_emit {
            let record =
                LogRecord::message(decision.level, decision.text.clone()).with_context(context);
            self.sink.deliver(&record)?;
        }
        Ok(decision)
    }

    /// Logs an untagged info message.
    ///
    /// # Errors
    ///
    /// Returns [`GateError::Sink`] when a record cannot be delivered.
    pub fn info(&self, message: &str) -> Result<Decision, GateError> {
        self.log(&LogRequest::new(LogLevel::Info, message))
    }

    /// Logs an untagged warning message.
    ///
    /// # Errors
    ///
    /// Returns [`GateError::Sink`] when a record cannot be delivered.
    pub fn warning(&self, message: &str) -> Result<Decision, GateError> {
        self.log(&LogRequest::new(LogLevel::Warning, message))
    }

    /// Logs an untagged error message.
    ///
    /// # Errors
    ///
    /// Returns [`GateError::Sink`] when a record cannot be delivered.
    pub fn error(&self, message: &str) -> Result<Decision, GateError> {
        self.log(&LogRequest::new(LogLevel::Error, message))
    }

    /// Logs a tagged message at `level`.
    ///
    /// # Errors
    ///
    /// Returns [`GateError::Sink`] when a record cannot be delivered.
    pub fn tagged(&self, level: LogLevel, tag: &str, message: &str) -> Result<Decision, GateError> {
        self.log(&LogRequest::new(level, message).with_tag(tag))
    }

    /// Drops the cached configuration so the next call reloads it.
    ///
    /// # Errors
    ///
    /// Returns [`GateError::Poisoned`] when the lock is poisoned.
    pub fn invalidate(&self) -> Result<(), GateError> {
        self.cache.invalidate()
    }
}
