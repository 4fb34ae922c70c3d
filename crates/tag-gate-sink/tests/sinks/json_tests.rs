// crates/tag-gate-sink/tests/sinks/json_tests.rs
// ============================================================================
// Module: JSON Lines Sink Tests
// Description: Output format and error handling of the JSON lines sink.
// Purpose: Ensure each record becomes exactly one parseable line.
// Dependencies: tag-gate-sink, serde_json, tempfile
// ============================================================================

//! ## Overview
//! Exercises [`tag_gate_sink::JsonLinesSink`] against in-memory, failing,
//! and file-backed writers.

use std::fs;
use std::fs::File;

use serde_json::Value;
use tag_gate_core::LogLevel;
use tag_gate_core::LogRecord;
use tag_gate_core::LogSink;
use tag_gate_core::SinkError;
use tag_gate_sink::JsonLinesSink;

use super::common::FailingWriter;
use super::common::SharedBuffer;

#[test]
fn json_sink_writes_one_object_per_line() {
    let buffer = SharedBuffer::new();
    let sink = JsonLinesSink::new(buffer.clone());
    sink.deliver(&LogRecord::message(LogLevel::Info, "hello")).expect("deliver");
    sink.deliver(&LogRecord::notice(LogLevel::Warning, "Tag 'x' does not exist."))
        .expect("deliver");

    let output = buffer.to_string_lossy();
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(output.ends_with('\n'));

    let first: Value = serde_json::from_str(lines[0]).expect("json");
    assert_eq!(first["kind"], "message");
    assert_eq!(first["level"], "info");
    assert_eq!(first["text"], "hello");
    assert!(first.get("context").is_none());

    let second: Value = serde_json::from_str(lines[1]).expect("json");
    assert_eq!(second["kind"], "notice");
    assert_eq!(second["level"], "warning");
}

#[test]
fn json_sink_keeps_multiline_text_on_one_line() {
    let buffer = SharedBuffer::new();
    let sink = JsonLinesSink::new(buffer.clone());
    let record = LogRecord::message(LogLevel::Error, "first\nsecond").with_context(Some("ctx"));
    sink.deliver(&record).expect("deliver");

    let output = buffer.to_string_lossy();
    assert_eq!(output.lines().count(), 1);
    let parsed: LogRecord = serde_json::from_str(output.trim_end()).expect("json");
    assert_eq!(parsed, record);
}

#[test]
fn json_sink_reports_write_failure() {
    let sink = JsonLinesSink::new(FailingWriter);
    let err = sink.deliver(&LogRecord::message(LogLevel::Info, "x")).unwrap_err();
    assert!(matches!(err, SinkError::WriteFailed(_)));
}

#[test]
fn json_sink_flushing_writes_to_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("gate.jsonl");
    let file = File::create(&path).expect("create");
    let sink = JsonLinesSink::flushing(file);
    sink.deliver(&LogRecord::message(LogLevel::Warning, "low fuel")).expect("deliver");

    let contents = fs::read_to_string(&path).expect("read");
    let parsed: Value = serde_json::from_str(contents.trim_end()).expect("json");
    assert_eq!(parsed["text"], "low fuel");
}

#[test]
fn json_sink_into_inner_returns_writer() {
    let sink = JsonLinesSink::new(Vec::new());
    sink.deliver(&LogRecord::message(LogLevel::Info, "a")).expect("deliver");
    let bytes = sink.into_inner().expect("writer");
    assert!(bytes.ends_with(b"\n"));
}
