// crates/tag-gate-core/src/core/config.rs
// ============================================================================
// Module: Tag Gate Configuration Model
// Description: Global gates, missing-tag policy, and decoration options.
// Purpose: Hold the in-memory configuration read by the decision engine.
// Dependencies: crate::core::{registry, tag}, serde
// ============================================================================

//! ## Overview
//! [`GateConfig`] is the value the engine consults on every log call. It is
//! format-agnostic: loaders build it from whatever persisted representation
//! they own, and [`GateConfig::default`] is the all-enabled fallback used when
//! loading fails.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;

use crate::core::registry::TagRegistry;
use crate::core::tag::LogLevel;
use crate::core::tag::Tag;
use crate::core::tag::is_blank;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Common tag names offered as registry defaults.
pub const DEFAULT_TAGS: [&str; 9] = [
    "Init",
    "CleanUp",
    "Audio",
    "Input",
    "Camera",
    "SceneManagement",
    "AI",
    "Terrain",
    "Misc",
];

// ============================================================================
// SECTION: Enums
// ============================================================================

/// Global per-level gate mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LevelGate {
    /// Nothing at this level is emitted.
    None,
    /// Untagged messages pass; tagged messages need the tag's flag.
    Explicit,
    /// Everything at this level is emitted.
    #[default]
    All,
}

/// Resolution policy for tags without a registered policy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingTagBehavior {
    /// Suppress silently.
    #[default]
    Ignore,
    /// Suppress and report the missing tag at info level.
    Info,
    /// Suppress and report the missing tag at warning level.
    Warning,
    /// Suppress and report the missing tag at error level.
    Error,
    /// Emit the message at its own level behind a "not available" notice.
    Print,
    /// Register the tag and emit the message.
    Add,
}

impl MissingTagBehavior {
    /// Returns the notice level for the reporting behaviors.
    #[must_use]
    pub const fn notice_level(self) -> Option<LogLevel> {
        match self {
            Self::Info => Some(LogLevel::Info),
            Self::Warning => Some(LogLevel::Warning),
            Self::Error => Some(LogLevel::Error),
            Self::Ignore | Self::Print | Self::Add => None,
        }
    }
}

// ============================================================================
// SECTION: Gate Configuration
// ============================================================================

/// In-memory logging gate configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GateConfig {
    /// Prefix messages with the originating component name.
    pub use_class_prefix: bool,
    /// Strip a known suffix from the component name before prefixing.
    pub remove_class_suffixes: bool,
    /// Policy for tags missing from the registry.
    pub missing_tag_behavior: MissingTagBehavior,
    /// Gate for info messages.
    pub info: LevelGate,
    /// Gate for warning messages.
    pub warning: LevelGate,
    /// Gate for error messages.
    pub error: LevelGate,
    /// Registered tag policies.
    pub registry: TagRegistry,
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            use_class_prefix: true,
            remove_class_suffixes: true,
            missing_tag_behavior: MissingTagBehavior::Ignore,
            info: LevelGate::All,
            warning: LevelGate::All,
            error: LevelGate::All,
            registry: TagRegistry::new(),
        }
    }
}

impl GateConfig {
    /// Returns the gate for a level.
    #[must_use]
    pub const fn gate(&self, level: LogLevel) -> LevelGate {
        match level {
            LogLevel::Info => self.info,
            LogLevel::Warning => self.warning,
            LogLevel::Error => self.error,
        }
    }

    /// Sets the gate for a level.
    pub const fn set_gate(&mut self, level: LogLevel, gate: LevelGate) {
        match level {
            LogLevel::Info => self.info = gate,
            LogLevel::Warning => self.warning = gate,
            LogLevel::Error => self.error = gate,
        }
    }

    /// Appends an all-enabled tag for each name not already registered.
    ///
    /// Names are matched case-sensitively; blank names are skipped. Returns
    /// the number of tags added.
    pub fn add_missing_defaults<I, S>(&mut self, names: I) -> usize
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut added = 0;
        for name in names {
            let name = name.as_ref();
            if is_blank(name) || self.registry.contains_name(name) {
                continue;
            }
            if let Ok(tag) = Tag::new(name)
                && self.registry.add(tag)
            {
                added += 1;
            }
        }
        added
    }

    /// Appends any of [`DEFAULT_TAGS`] not already registered.
    pub fn add_default_tags(&mut self) -> usize {
        self.add_missing_defaults(DEFAULT_TAGS)
    }
}
