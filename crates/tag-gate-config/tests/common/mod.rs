// crates/tag-gate-config/tests/common/mod.rs
// =============================================================================
// Module: Config Test Helpers
// Description: Shared helpers for config validation tests.
// Purpose: Reduce duplication across integration tests for tag-gate-config.
// =============================================================================

#![allow(dead_code, reason = "Test helpers are selectively used across suites.")]

use std::fs;
use std::path::PathBuf;

use tag_gate_config::ConfigError;
use tag_gate_config::TagEntry;
use tag_gate_config::TagGateConfig;
use tempfile::TempDir;

/// Parses and validates a TOML string.
pub fn config_from_toml(toml_str: &str) -> Result<TagGateConfig, ConfigError> {
    TagGateConfig::from_toml_str(toml_str)
}

/// Returns a minimal config with all defaults applied.
pub fn minimal_config() -> Result<TagGateConfig, ConfigError> {
    config_from_toml("")
}

/// Returns a tag entry with every level enabled.
pub fn entry(name: &str) -> TagEntry {
    TagEntry {
        name: name.to_string(),
        log_info: true,
        log_warning: true,
        log_error: true,
    }
}

/// Writes `content` to `tag-gate.toml` inside a fresh temp directory.
pub fn write_config(content: &[u8]) -> Result<(TempDir, PathBuf), String> {
    let dir = tempfile::tempdir().map_err(|err| err.to_string())?;
    let path = dir.path().join("tag-gate.toml");
    fs::write(&path, content).map_err(|err| err.to_string())?;
    Ok((dir, path))
}

/// Asserts that `result` failed with a message containing `needle`.
pub fn assert_error<T>(result: Result<T, ConfigError>, needle: &str) -> Result<(), String> {
    match result {
        Err(error) => {
            let message = error.to_string();
            if message.contains(needle) {
                Ok(())
            } else {
                Err(format!("error {message} did not contain {needle}"))
            }
        }
        Ok(_) => Err("expected config error".to_string()),
    }
}
