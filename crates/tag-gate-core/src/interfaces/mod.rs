// crates/tag-gate-core/src/interfaces/mod.rs
// ============================================================================
// Module: Tag Gate Interfaces
// Description: Contracts for configuration sources and log sinks.
// Purpose: Define the seams the runtime uses to load config and emit records.
// Dependencies: crate::core, serde, thiserror
// ============================================================================

//! ## Overview
//! Interfaces keep the engine independent of storage and transport. A
//! [`ConfigSource`] supplies a [`GateConfig`]; a [`LogSink`] receives every
//! non-suppressed message and every notice as a [`LogRecord`].

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::sync::Arc;

use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

use crate::core::GateConfig;
use crate::core::LogLevel;

// ============================================================================
// SECTION: Configuration Source
// ============================================================================

/// Configuration source errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigSourceError {
    /// No configuration was found at the expected location.
    #[error("configuration not found: {0}")]
    NotFound(String),
    /// Configuration was found but could not be read or parsed.
    #[error("configuration load failed: {0}")]
    Load(String),
}

/// Supplier of gate configuration.
pub trait ConfigSource {
    /// Loads a fresh configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigSourceError`] when no usable configuration exists.
    fn load(&self) -> Result<GateConfig, ConfigSourceError>;
}

/// Source returning a fixed configuration.
#[derive(Debug, Clone, Default)]
pub struct StaticConfigSource {
    /// Configuration cloned on every load.
    config: GateConfig,
}

impl StaticConfigSource {
    /// Creates a source that always yields `config`.
    #[must_use]
    pub const fn new(config: GateConfig) -> Self {
        Self {
            config,
        }
    }
}

impl ConfigSource for StaticConfigSource {
    fn load(&self) -> Result<GateConfig, ConfigSourceError> {
        Ok(self.config.clone())
    }
}

impl<T: ConfigSource + ?Sized> ConfigSource for Arc<T> {
    fn load(&self) -> Result<GateConfig, ConfigSourceError> {
        (**self).load()
    }
}

impl<T: ConfigSource + ?Sized> ConfigSource for Box<T> {
    fn load(&self) -> Result<GateConfig, ConfigSourceError> {
        (**self).load()
    }
}

// ============================================================================
// SECTION: Log Sink
// ============================================================================

/// Origin of a log record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordKind {
    /// A caller message that passed the gate.
    Message,
    /// A notice raised by the gate itself.
    Notice,
}

/// Record delivered to a sink.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogRecord {
    /// Record kind.
    pub kind: RecordKind,
    /// Severity.
    pub level: LogLevel,
    /// Final text.
    pub text: String,
    /// Optional caller-supplied context label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
}

impl LogRecord {
    /// Creates a message record.
    #[must_use]
    pub fn message(level: LogLevel, text: impl Into<String>) -> Self {
        Self {
            kind: RecordKind::Message,
            level,
            text: text.into(),
            context: None,
        }
    }

    /// Creates a notice record.
    #[must_use]
    pub fn notice(level: LogLevel, text: impl Into<String>) -> Self {
        Self {
            kind: RecordKind::Notice,
            level,
            text: text.into(),
            context: None,
        }
    }

    /// Attaches a context label.
    #[must_use]
    pub fn with_context(mut self, context: Option<&str>) -> Self {
        self.context = context.map(str::to_string);
        self
    }
}

/// Log sink errors.
#[derive(Debug, Error)]
pub enum SinkError {
    /// Writing the record failed.
    #[error("log sink write failed: {0}")]
    WriteFailed(String),
    /// Sink rejected the record.
    #[error("log sink rejected record: {0}")]
    Rejected(String),
}

/// Destination for emitted records.
pub trait LogSink {
    /// Delivers one record.
    ///
    /// # Errors
    ///
    /// Returns [`SinkError`] when the record cannot be delivered.
    fn deliver(&self, record: &LogRecord) -> Result<(), SinkError>;
}

impl<T: LogSink + ?Sized> LogSink for Arc<T> {
    fn deliver(&self, record: &LogRecord) -> Result<(), SinkError> {
        (**self).deliver(record)
    }
}

impl<T: LogSink + ?Sized> LogSink for Box<T> {
    fn deliver(&self, record: &LogRecord) -> Result<(), SinkError> {
        (**self).deliver(record)
    }
}
