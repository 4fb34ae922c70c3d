// crates/tag-gate-core/src/core/tag.rs
// ============================================================================
// Module: Tag Gate Tags
// Description: Named per-level logging policy overrides.
// Purpose: Provide the tag record and severity level enums used by the engine.
// Dependencies: serde, thiserror
// ============================================================================

//! ## Overview
//! A [`Tag`] names a logging category and carries one enable flag per
//! [`LogLevel`]. Tags compare equal only when the name and all three flags
//! match, so two tags sharing a name but differing in a flag are distinct
//! values (the registry still keeps only the first one in its lookup).

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

// ============================================================================
// SECTION: Log Level
// ============================================================================

/// Severity level of a log call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogLevel {
    /// Informational message.
    Info,
    /// Warning message.
    Warning,
    /// Error message.
    Error,
}

impl LogLevel {
    /// All levels in ascending severity.
    pub const ALL: [Self; 3] = [Self::Info, Self::Warning, Self::Error];

    /// Returns the lowercase label for the level.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// SECTION: Tag
// ============================================================================

/// Tag construction errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TagError {
    /// Tag name is empty or whitespace-only.
    #[error("tag name must be non-empty")]
    InvalidName,
}

/// Named logging policy with one enable flag per level.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tag {
    /// Tag name (case-sensitive).
    pub name: String,
    /// Whether info messages with this tag may be emitted.
    #[serde(default = "enabled")]
    pub log_info: bool,
    /// Whether warning messages with this tag may be emitted.
    #[serde(default = "enabled")]
    pub log_warning: bool,
    /// Whether error messages with this tag may be emitted.
    #[serde(default = "enabled")]
    pub log_error: bool,
}

impl Tag {
    /// Creates a tag with every level enabled.
    ///
    /// # Errors
    ///
    /// Returns [`TagError::InvalidName`] when `name` is blank.
    pub fn new(name: impl Into<String>) -> Result<Self, TagError> {
        Self::with_levels(name, true, true, true)
    }

    /// Creates a tag with explicit per-level flags.
    ///
    /// # Errors
    ///
    /// Returns [`TagError::InvalidName`] when `name` is blank.
    pub fn with_levels(
        name: impl Into<String>,
        log_info: bool,
        log_warning: bool,
        log_error: bool,
    ) -> Result<Self, TagError> {
        let name = name.into();
        if is_blank(&name) {
            return Err(TagError::InvalidName);
        }
        Ok(Self {
            name,
            log_info,
            log_warning,
            log_error,
        })
    }

    /// Returns the flag for the given level.
    #[must_use]
    pub const fn allows(&self, level: LogLevel) -> bool {
        match level {
            LogLevel::Info => self.log_info,
            LogLevel::Warning => self.log_warning,
            LogLevel::Error => self.log_error,
        }
    }

    /// Sets the flag for the given level.
    pub const fn set_allows(&mut self, level: LogLevel, enabled: bool) {
        match level {
            LogLevel::Info => self.log_info = enabled,
            LogLevel::Warning => self.log_warning = enabled,
            LogLevel::Error => self.log_error = enabled,
        }
    }

    /// Renames the tag. Blank names are ignored and the old name is kept.
    ///
    /// Returns true when the name changed.
    pub fn rename(&mut self, name: impl Into<String>) -> bool {
        let name = name.into();
        if is_blank(&name) {
            return false;
        }
        self.name = name;
        true
    }

    /// Returns true when the tag name is usable in a registry.
    #[must_use]
    pub fn has_valid_name(&self) -> bool {
        !is_blank(&self.name)
    }
}

/// Serde default for per-level flags.
const fn enabled() -> bool {
    true
}

/// Returns true for empty or whitespace-only strings.
#[must_use]
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}
