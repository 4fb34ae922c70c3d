// crates/tag-gate-core/src/core/decision.rs
// ============================================================================
// Module: Tag Gate Decisions
// Description: Evaluation requests and their outcomes.
// Purpose: Carry the per-call input and the emit/suppress result.
// Dependencies: crate::core::tag, serde
// ============================================================================

//! ## Overview
//! A [`LogRequest`] describes one log call; a [`Decision`] is the transient
//! result. Suppressed decisions carry no text. Notices are side-channel
//! records the engine itself wants surfaced, independent of whether the
//! original message was emitted.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Serialize;

use crate::core::tag::LogLevel;

// ============================================================================
// SECTION: Request
// ============================================================================

/// Input of a single evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogRequest<'a> {
    /// Severity of the call.
    pub level: LogLevel,
    /// Raw message text.
    pub message: &'a str,
    /// Optional tag. Blank tags are treated as absent.
    pub tag: Option<&'a str>,
    /// Optional originating component name used for decoration.
    pub origin: Option<&'a str>,
}

impl<'a> LogRequest<'a> {
    /// Creates an untagged request without an origin.
    #[must_use]
    pub const fn new(level: LogLevel, message: &'a str) -> Self {
        Self {
            level,
            message,
            tag: None,
            origin: None,
        }
    }

    /// Sets the tag.
    #[must_use]
    pub const fn with_tag(mut self, tag: &'a str) -> Self {
        self.tag = Some(tag);
        self
    }

    /// Sets the originating component name.
    #[must_use]
    pub const fn with_origin(mut self, origin: &'a str) -> Self {
        self.origin = Some(origin);
        self
    }
}

// ============================================================================
// SECTION: Decision
// ============================================================================

/// Side-channel record produced by the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    /// Severity of the notice.
    pub level: LogLevel,
    /// Notice text.
    pub text: String,
}

/// Outcome of a single evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Decision {
    /// Whether the original message should be emitted.
    pub should_emit: bool,
    /// Level to emit at.
    pub level: LogLevel,
    /// Decorated text; empty when suppressed.
    pub text: String,
    /// Side-channel notices, in the order they were raised.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub notices: Vec<Notice>,
}

impl Decision {
    /// Creates an emitting decision.
    #[must_use]
    pub const fn emit(level: LogLevel, text: String) -> Self {
        Self {
            should_emit: true,
            level,
            text,
            notices: Vec::new(),
        }
    }

    /// Creates a suppressing decision.
    #[must_use]
    pub const fn suppress(level: LogLevel) -> Self {
        Self {
            should_emit: false,
            level,
            text: String::new(),
            notices: Vec::new(),
        }
    }

    /// Appends a notice.
    #[must_use]
    pub fn with_notice(mut self, level: LogLevel, text: String) -> Self {
        self.notices.push(Notice {
            level,
            text,
        });
        self
    }
}
