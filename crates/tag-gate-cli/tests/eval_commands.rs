// crates/tag-gate-cli/tests/eval_commands.rs
// ============================================================================
// Module: CLI Eval Command Tests
// Description: Integration tests for dry-run gate evaluation.
// Purpose: Ensure eval prints decisions and degrades to defaults on bad config.
// Dependencies: tag-gate-cli binary, serde_json
// ============================================================================

//! ## Overview
//! Runs `tag-gate eval` and checks the decision JSON and stderr records.

#![allow(
    clippy::panic,
    clippy::print_stdout,
    clippy::print_stderr,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::use_debug,
    clippy::dbg_macro,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    reason = "Test-only output and panic-based assertions are permitted."
)]

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fs;
use std::path::PathBuf;
use std::process::Command;
use std::process::Output;

use serde_json::Value;

// ============================================================================
// SECTION: Helpers
// ============================================================================

fn tag_gate_bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_tag-gate"))
}

fn eval(args: &[&str]) -> (Output, Value) {
    let output = Command::new(tag_gate_bin())
        .env_remove("TAG_GATE_CONFIG")
        .arg("eval")
        .args(args)
        .output()
        .expect("run tag-gate");
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    let decision = serde_json::from_slice(&output.stdout).expect("json");
    (output, decision)
}

// ============================================================================
// SECTION: Tests
// ============================================================================

#[test]
fn eval_missing_config_falls_back_with_warning() {
    let dir = tempfile::tempdir().expect("tempdir");
    let config = dir.path().join("absent.toml");
    let (output, decision) = eval(&[
        "--level",
        "info",
        "--origin",
        "PlayerMono",
        "--config",
        config.to_string_lossy().as_ref(),
        "",
    ]);
    assert_eq!(decision["should_emit"], true);
    assert_eq!(decision["level"], "info");
    assert_eq!(decision["text"], "[Player] missing message");
    assert!(String::from_utf8_lossy(&output.stderr).contains("Falling back"));
}

#[test]
fn eval_missing_tag_warning_notice() {
    let dir = tempfile::tempdir().expect("tempdir");
    let config = dir.path().join("tag-gate.toml");
    fs::write(&config, "[missing_tags]\nbehavior = \"warning\"\n").expect("write");
    let (output, decision) = eval(&[
        "--level",
        "error",
        "--tag",
        "Physics",
        "--config",
        config.to_string_lossy().as_ref(),
        "--records",
        "text",
        "collision",
    ]);
    assert_eq!(decision["should_emit"], false);
    assert_eq!(decision["notices"][0]["level"], "warning");
    assert_eq!(decision["notices"][0]["text"], "[TagGate] Tag 'Physics' does not exist.");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("[warning:notice] [TagGate] Tag 'Physics' does not exist."));
    assert!(!stderr.contains("collision"));
}

#[test]
fn eval_json_records_go_to_stderr() {
    let dir = tempfile::tempdir().expect("tempdir");
    let config = dir.path().join("tag-gate.toml");
    fs::write(&config, "[[tags]]\nname = \"AI\"\n").expect("write");
    let (output, decision) = eval(&[
        "--level",
        "warning",
        "--tag",
        "AI",
        "--config",
        config.to_string_lossy().as_ref(),
        "--records",
        "json",
        "path found",
    ]);
    assert_eq!(decision["text"], "path found");
    let line = String::from_utf8_lossy(&output.stderr).lines().next().map(str::to_string);
    let record: Value = serde_json::from_str(&line.expect("record line")).expect("json");
    assert_eq!(record["kind"], "message");
    assert_eq!(record["text"], "path found");
}
