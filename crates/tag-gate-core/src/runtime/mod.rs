// crates/tag-gate-core/src/runtime/mod.rs
// ============================================================================
// Module: Tag Gate Runtime
// Description: Decision engine, decoration, caching, and logger facade.
// Purpose: Evaluate log calls against configuration and forward results.
// Dependencies: crate::{core, interfaces}
// ============================================================================

//! ## Overview
//! Runtime modules implement the decision engine and the plumbing around it.
//! Every entry point funnels through [`engine::evaluate`] so the gating rules
//! live in one place.

// ============================================================================
// SECTION: Submodules
// ============================================================================

pub mod cache;
pub mod decorate;
pub mod engine;
pub mod global;
pub mod logger;
pub mod memory;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use cache::GateCache;
pub use cache::GateError;
pub use decorate::CLASS_SUFFIXES;
pub use decorate::MISSING_MESSAGE;
pub use decorate::decorate_message;
pub use decorate::strip_class_suffix;
pub use engine::ENGINE_LABEL;
pub use engine::ENGINE_ORIGIN;
pub use engine::evaluate;
pub use logger::TagLogger;
pub use memory::MemorySink;
