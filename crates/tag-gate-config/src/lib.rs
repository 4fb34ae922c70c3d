// crates/tag-gate-config/src/lib.rs
// ============================================================================
// Module: Tag Gate Config Library
// Description: Canonical config model, validation, and file-backed loading.
// Purpose: Single source of truth for tag-gate.toml semantics.
// Dependencies: tag-gate-core, serde, toml
// ============================================================================

//! ## Overview
//! `tag-gate-config` defines the on-disk TOML model for Tag Gate, converts it
//! to and from the runtime [`tag_gate_core::GateConfig`], and provides a
//! [`FileConfigSource`] so loggers can load their gate settings lazily.
//! Limit violations fail closed; duplicate or blank tag names are reported as
//! diagnostics and left for the registry to resolve.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod config;
pub mod examples;
pub mod source;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use config::*;
pub use examples::config_toml_example;
pub use source::FileConfigSource;
