// crates/tag-gate-core/src/runtime/decorate.rs
// ============================================================================
// Module: Tag Gate Message Decoration
// Description: Placeholder substitution and origin-name prefixing.
// Purpose: Produce the final text of an emitted message.
// Dependencies: crate::core
// ============================================================================

//! ## Overview
//! Decoration replaces blank messages with a placeholder and, when enabled,
//! prefixes the message with `[<origin>] `. The origin may lose at most one
//! known suffix first; suffixes are tried in [`CLASS_SUFFIXES`] order.

// ============================================================================
// SECTION: Imports
// ============================================================================

use crate::core::GateConfig;
use crate::core::is_blank;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Text substituted for blank messages.
pub const MISSING_MESSAGE: &str = "missing message";

/// Origin-name suffixes stripped before prefixing, in priority order.
pub const CLASS_SUFFIXES: [&str; 3] = ["Mono", "So", "SO"];

// ============================================================================
// SECTION: Decoration
// ============================================================================

/// Decorates `message` according to the configuration.
#[must_use]
pub fn decorate_message(config: &GateConfig, message: &str, origin: Option<&str>) -> String {
    let message = if is_blank(message) { MISSING_MESSAGE } else { message };
    match origin.filter(|origin| !is_blank(origin)) {
        Some(origin) if config.use_class_prefix => {
            let display =
                if config.remove_class_suffixes { strip_class_suffix(origin) } else { origin };
            format!("[{display}] {message}")
        }
        _ => message.to_string(),
    }
}

/// Removes the first matching suffix from [`CLASS_SUFFIXES`].
///
/// A name that consists only of a suffix is returned unchanged.
#[must_use]
pub fn strip_class_suffix(name: &str) -> &str {
    CLASS_SUFFIXES
        .iter()
        .find_map(|suffix| name.strip_suffix(suffix))
        .filter(|stripped| !stripped.is_empty())
        .unwrap_or(name)
}

// ============================================================================
// SECTION: Tests
// ============================================================================
