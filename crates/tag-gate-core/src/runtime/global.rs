// crates/tag-gate-core/src/runtime/global.rs
// ============================================================================
// Module: Tag Gate Global Logger
// Description: Process-wide logger slot with an invalidation hook.
// Purpose: Let call sites log without threading a logger handle through.
// Dependencies: crate::runtime::logger
// ============================================================================

//! ## Overview
//! The host installs one [`TagLogger`] per process. [`reset`] is the host's
//! restart hook: it drops the cached configuration so the next call reloads.
//! Logging before installation is a no-op that reports a suppressed decision.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::sync::OnceLock;

use crate::core::Decision;
use crate::core::LogRequest;
use crate::runtime::cache::GateError;
use crate::runtime::logger::TagLogger;

// ============================================================================
// SECTION: Global Slot
// ============================================================================

/// Process-wide logger.
static GLOBAL_LOGGER: OnceLock<TagLogger> = OnceLock::new();

/// Installs the process-wide logger.
///
/// # Errors
///
/// Returns the logger back when one is already installed.
pub fn install(logger: TagLogger) -> Result<(), TagLogger> {
    GLOBAL_LOGGER.set(logger)
}

/// Returns the process-wide logger, if installed.
#[must_use]
pub fn logger() -> Option<&'static TagLogger> {
    GLOBAL_LOGGER.get()
}

/// Evaluates and forwards a log call through the process-wide logger.
///
/// # Errors
///
/// Returns [`GateError::Sink`] when a record cannot be delivered.
pub fn log(request: &LogRequest<'_>) -> Result<Decision, GateError> {
    match GLOBAL_LOGGER.get() {
        Some(logger) => logger.log(request),
        None => Ok(Decision::suppress(request.level)),
    }
}

/// Drops the process-wide cached configuration.
///
/// # Errors
///
/// Returns [`GateError::Poisoned`] when the lock is poisoned.
pub fn reset() -> Result<(), GateError> {
    GLOBAL_LOGGER.get().map_or(Ok(()), TagLogger::invalidate)
}
