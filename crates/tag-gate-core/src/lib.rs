// crates/tag-gate-core/src/lib.rs
// ============================================================================
// Module: Tag Gate Core Library
// Description: Public API surface for the Tag Gate core.
// Purpose: Expose core types, interfaces, and runtime helpers.
// Dependencies: crate::{core, interfaces, runtime}
// ============================================================================

//! ## Overview
//! Tag Gate decides, per log call, whether a message is emitted and with what
//! text. Global per-level gates and per-tag policies combine into a single
//! [`Decision`]; tags missing from the registry are resolved by a configurable
//! policy. The core is storage- and transport-agnostic and integrates through
//! the [`ConfigSource`] and [`LogSink`] interfaces.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod core;
pub mod interfaces;
pub mod runtime;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use core::*;

pub use interfaces::ConfigSource;
pub use interfaces::ConfigSourceError;
pub use interfaces::LogRecord;
pub use interfaces::LogSink;
pub use interfaces::RecordKind;
pub use interfaces::SinkError;
pub use interfaces::StaticConfigSource;
pub use runtime::GateCache;
pub use runtime::GateError;
pub use runtime::MemorySink;
pub use runtime::TagLogger;
pub use runtime::evaluate;
