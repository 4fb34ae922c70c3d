// crates/tag-gate-sink/tests/sinks/text_tests.rs
// ============================================================================
// Module: Text Sink Tests
// Description: Line rendering for the plain-text sink.
// Purpose: Pin the human-readable record format.
// Dependencies: tag-gate-sink
// ============================================================================

//! ## Overview
//! Exercises [`tag_gate_sink::TextSink`] and its line renderer.

use tag_gate_core::LogLevel;
use tag_gate_core::LogRecord;
use tag_gate_core::LogSink;
use tag_gate_core::SinkError;
use tag_gate_sink::TextSink;
use tag_gate_sink::text::render_line;

use super::common::FailingWriter;
use super::common::SharedBuffer;

#[test]
fn render_line_marks_messages_and_notices() {
    assert_eq!(render_line(&LogRecord::message(LogLevel::Info, "hi")), "[info] hi");
    assert_eq!(
        render_line(&LogRecord::notice(LogLevel::Error, "[TagGate] oops")),
        "[error:notice] [TagGate] oops"
    );
}

#[test]
fn render_line_appends_context() {
    let record = LogRecord::message(LogLevel::Warning, "spawned").with_context(Some("enemy-7"));
    assert_eq!(render_line(&record), "[warning] spawned (enemy-7)");
}

#[test]
fn text_sink_writes_lines() {
    let buffer = SharedBuffer::new();
    let sink = TextSink::new(buffer.clone());
    sink.deliver(&LogRecord::message(LogLevel::Info, "one")).expect("deliver");
    sink.deliver(&LogRecord::message(LogLevel::Error, "two")).expect("deliver");
    assert_eq!(buffer.to_string_lossy(), "[info] one\n[error] two\n");
}

#[test]
fn text_sink_reports_write_failure() {
    let sink = TextSink::new(FailingWriter);
    let err = sink.deliver(&LogRecord::message(LogLevel::Info, "x")).unwrap_err();
    assert!(matches!(err, SinkError::WriteFailed(_)));
}
