// crates/tag-gate-sink/tests/sinks/logger_tests.rs
// ============================================================================
// Module: Logger Integration Tests
// Description: Tag logger wired to concrete sinks.
// Purpose: Check end-to-end output from gate decision to rendered line.
// Dependencies: tag-gate-core, tag-gate-sink, serde_json
// ============================================================================

//! ## Overview
//! Runs a [`tag_gate_core::TagLogger`] over the JSON lines sink.

use serde_json::Value;
use tag_gate_core::GateConfig;
use tag_gate_core::LevelGate;
use tag_gate_core::LogLevel;
use tag_gate_core::LogRequest;
use tag_gate_core::MissingTagBehavior;
use tag_gate_core::StaticConfigSource;
use tag_gate_core::TagLogger;
use tag_gate_sink::JsonLinesSink;
use tag_gate_sink::TextSink;

use super::common::SharedBuffer;

#[test]
fn logger_writes_notice_then_message() {
    let buffer = SharedBuffer::new();
    let config = GateConfig {
        missing_tag_behavior: MissingTagBehavior::Add,
        ..GateConfig::default()
    };
    let logger =
        TagLogger::new(StaticConfigSource::new(config), JsonLinesSink::new(buffer.clone()));
    logger
        .log(&LogRequest::new(LogLevel::Info, "ready").with_tag("Net").with_origin("ClientMono"))
        .expect("log");

    let output = buffer.to_string_lossy();
    let lines: Vec<Value> =
        output.lines().map(|line| serde_json::from_str(line).expect("json")).collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0]["kind"], "notice");
    assert_eq!(lines[0]["text"], "[TagGate] Tag 'Net' was added.");
    assert_eq!(lines[1]["kind"], "message");
    assert_eq!(lines[1]["text"], "[Client] ready");
}

#[test]
fn suppressed_messages_leave_writer_untouched() {
    let buffer = SharedBuffer::new();
    let config = GateConfig {
        error: LevelGate::None,
        ..GateConfig::default()
    };
    let logger = TagLogger::new(StaticConfigSource::new(config), TextSink::new(buffer.clone()));
    assert!(!logger.error("hidden").expect("log").should_emit);
    assert!(buffer.is_empty());
}
