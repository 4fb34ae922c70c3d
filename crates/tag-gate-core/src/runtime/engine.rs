// crates/tag-gate-core/src/runtime/engine.rs
// ============================================================================
// Module: Tag Gate Decision Engine
// Description: Per-call gating for untagged, tagged, and missing-tag messages.
// Purpose: Turn a configuration and a log request into a decision.
// Dependencies: crate::core, crate::runtime::decorate
// ============================================================================

//! ## Overview
//! [`evaluate`] is the only entry point. Untagged calls pass whenever the
//! level's gate is not [`LevelGate::None`]. Tagged calls consult the registry:
//! a registered tag emits when the gate is [`LevelGate::All`], or when it is
//! [`LevelGate::Explicit`] and the tag enables the level. Unregistered tags are
//! resolved by [`MissingTagBehavior`].
//!
//! The engine mutates the configuration in two places only: the registry
//! lookup is rebuilt on demand, and [`MissingTagBehavior::Add`] registers the
//! tag. Callers sharing a configuration must serialize calls.

// ============================================================================
// SECTION: Imports
// ============================================================================

use crate::core::Decision;
use crate::core::GateConfig;
use crate::core::LevelGate;
use crate::core::LogLevel;
use crate::core::LogRequest;
use crate::core::MissingTagBehavior;
use crate::core::Notice;
use crate::core::RegistryConflict;
use crate::core::Tag;
use crate::core::is_blank;
use crate::runtime::decorate::decorate_message;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Component name the engine uses when decorating its own notices.
pub const ENGINE_ORIGIN: &str = "TagGate";

/// Fixed prefix of engine notices that are never decorated.
pub const ENGINE_LABEL: &str = "[TagGate]";

// ============================================================================
// SECTION: Evaluation
// ============================================================================

/// Evaluates one log call against the configuration.
pub fn evaluate(config: &mut GateConfig, request: &LogRequest<'_>) -> Decision {
    match request.tag.filter(|tag| !is_blank(tag)) {
        None => evaluate_untagged(config, request),
        Some(tag) => evaluate_tagged(config, request, tag),
    }
}

/// Gates a call that carries no tag.
fn evaluate_untagged(config: &GateConfig, request: &LogRequest<'_>) -> Decision {
    if config.gate(request.level) == LevelGate::None {
        return Decision::suppress(request.level);
    }
    Decision::emit(request.level, decorate_message(config, request.message, request.origin))
}

/// Gates a call that carries a non-blank tag.
fn evaluate_tagged(config: &mut GateConfig, request: &LogRequest<'_>, tag: &str) -> Decision {
    let level = request.level;
    let rebuilt = !config.registry.is_built();
    let allowed = config.registry.lookup(tag).map(|entry| entry.allows(level));
    let conflicts =
        if rebuilt { conflict_notices(config.registry.conflicts()) } else { Vec::new() };

    let mut decision = match allowed {
        Some(tag_allows) => {
            let emit = match config.gate(level) {
                LevelGate::None => false,
                LevelGate::Explicit => tag_allows,
                LevelGate::All => true,
            };
            if emit {
                Decision::emit(level, decorate_message(config, request.message, request.origin))
            } else {
                Decision::suppress(level)
            }
        }
        None => resolve_missing(config, request, tag),
    };

    // Conflicts surface before the notices raised by this call.
    if !conflicts.is_empty() {
        let mut notices = conflicts;
        notices.append(&mut decision.notices);
        decision.notices = notices;
    }
    decision
}

/// Converts registry conflicts into error-level engine notices.
#[must_use]
pub fn conflict_notices(conflicts: &[RegistryConflict]) -> Vec<Notice> {
    conflicts
        .iter()
        .map(|conflict| Notice {
            level: LogLevel::Error,
            text: format!("{ENGINE_LABEL} {conflict}"),
        })
        .collect()
}

/// Applies the missing-tag policy.
fn resolve_missing(config: &mut GateConfig, request: &LogRequest<'_>, tag: &str) -> Decision {
    let level = request.level;
    match config.missing_tag_behavior {
        MissingTagBehavior::Ignore => Decision::suppress(level),
        MissingTagBehavior::Info | MissingTagBehavior::Warning | MissingTagBehavior::Error => {
            let notice_level = config.missing_tag_behavior.notice_level().unwrap_or(level);
            let notice = format!("Tag '{tag}' does not exist.");
            let text = decorate_message(config, &notice, Some(ENGINE_ORIGIN));
            Decision::suppress(level).with_notice(notice_level, text)
        }
        MissingTagBehavior::Print => {
            let message = decorate_message(config, request.message, request.origin);
            Decision::emit(
                level,
                format!(
                    "{ENGINE_LABEL} Tag '{tag}' is not available. Original Message below:\n{message}"
                ),
            )
        }
        MissingTagBehavior::Add => {
            let added = Tag::new(tag).is_ok_and(|entry| config.registry.add(entry));
            if added {
                let message = decorate_message(config, request.message, request.origin);
                Decision::emit(level, message)
                    .with_notice(LogLevel::Info, format!("{ENGINE_LABEL} Tag '{tag}' was added."))
            } else {
                Decision::suppress(level)
            }
        }
    }
}
