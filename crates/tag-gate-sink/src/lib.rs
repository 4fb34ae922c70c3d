// crates/tag-gate-sink/src/lib.rs
// ============================================================================
// Module: Tag Gate Sink Library
// Description: Concrete log sinks for Tag Gate records.
// Purpose: Deliver emitted messages and gate notices to writers and callbacks.
// Dependencies: tag-gate-core, serde_json
// ============================================================================

//! ## Overview
//! Reference [`tag_gate_core::LogSink`] implementations. Every sink delivers
//! a record fully or returns a [`tag_gate_core::SinkError`]; none of them
//! panic on writer failure.
//!
//! - [`JsonLinesSink`] writes one JSON object per record.
//! - [`TextSink`] writes `[level] text` lines for terminals.
//! - [`CallbackSink`] forwards records to a user function.
//! - [`NoopSink`] discards everything.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod callback;
pub mod json;
pub mod noop;
pub mod text;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use callback::CallbackSink;
pub use json::JsonLinesSink;
pub use noop::NoopSink;
pub use text::TextSink;
