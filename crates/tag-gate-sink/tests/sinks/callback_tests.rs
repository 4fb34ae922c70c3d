// crates/tag-gate-sink/tests/sinks/callback_tests.rs
// ============================================================================
// Module: Callback and No-op Sink Tests
// Description: Handler invocation and error pass-through.
// Purpose: Ensure callbacks see every record and their errors propagate.
// Dependencies: tag-gate-sink
// ============================================================================

//! ## Overview
//! Exercises [`tag_gate_sink::CallbackSink`] and [`tag_gate_sink::NoopSink`].

use std::sync::Arc;
use std::sync::Mutex;

use tag_gate_core::LogLevel;
use tag_gate_core::LogRecord;
use tag_gate_core::LogSink;
use tag_gate_core::SinkError;
use tag_gate_sink::CallbackSink;
use tag_gate_sink::NoopSink;

#[test]
fn callback_sink_invokes_handler() {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let captured = Arc::clone(&seen);
    let sink = CallbackSink::new(move |record: &LogRecord| {
        captured.lock().expect("lock").push(record.text.clone());
        Ok(())
    });
    sink.deliver(&LogRecord::message(LogLevel::Info, "a")).expect("deliver");
    sink.clone().deliver(&LogRecord::message(LogLevel::Info, "b")).expect("deliver");
    assert_eq!(*seen.lock().expect("lock"), vec!["a".to_string(), "b".to_string()]);
}

#[test]
fn callback_sink_propagates_errors() {
    let sink = CallbackSink::new(|_record: &LogRecord| {
        Err(SinkError::Rejected("closed".to_string()))
    });
    let err = sink.deliver(&LogRecord::message(LogLevel::Info, "a")).unwrap_err();
    assert_eq!(err.to_string(), "log sink rejected record: closed");
}

#[test]
fn noop_sink_accepts_everything() {
    assert!(NoopSink.deliver(&LogRecord::notice(LogLevel::Error, "x")).is_ok());
}
