// crates/tag-gate-core/src/core/mod.rs
// ============================================================================
// Module: Tag Gate Core Types
// Description: Data model for tags, registries, configuration, and decisions.
// Purpose: Group the format-agnostic types the engine operates on.
// Dependencies: serde, thiserror
// ============================================================================

//! ## Overview
//! Core types are plain data plus the registry bookkeeping. They carry no
//! I/O; loading and emission live behind the interfaces module.

// ============================================================================
// SECTION: Submodules
// ============================================================================

pub mod config;
pub mod decision;
pub mod registry;
pub mod tag;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use config::DEFAULT_TAGS;
pub use config::GateConfig;
pub use config::LevelGate;
pub use config::MissingTagBehavior;
pub use decision::Decision;
pub use decision::LogRequest;
pub use decision::Notice;
pub use registry::RegistryConflict;
pub use registry::TagRegistry;
pub use tag::LogLevel;
pub use tag::Tag;
pub use tag::TagError;
pub use tag::is_blank;
