//! Write-back, normalization, and example tests for tag-gate-config.
// crates/tag-gate-config/tests/config_artifacts.rs
// =============================================================================
// Module: Config Artifact Tests
// Description: Serialization, save, normalize, and the canonical example.
// Purpose: Ensure written configs reload to the same settings.
// =============================================================================

use std::fs;

use tag_gate_config::NormalizeReport;
use tag_gate_config::TagGateConfig;
use tag_gate_config::config_toml_example;
use tag_gate_core::DEFAULT_TAGS;
use tag_gate_core::GateConfig;
use tag_gate_core::LevelGate;
use tag_gate_core::MissingTagBehavior;
use tag_gate_core::Tag;

mod common;

type TestResult = Result<(), String>;

// ============================================================================
// SECTION: Example
// ============================================================================

#[test]
fn example_parses_and_lists_default_tags() -> TestResult {
    let config = common::config_from_toml(&config_toml_example()).map_err(|err| err.to_string())?;
    let names: Vec<&str> = config.tags.iter().map(|entry| entry.name.as_str()).collect();
    if names != DEFAULT_TAGS.to_vec() {
        return Err(format!("unexpected example tags: {names:?}"));
    }
    if !config.diagnostics().is_empty() {
        return Err("example should have no diagnostics".to_string());
    }
    let mut expected = GateConfig::default();
    expected.add_default_tags();
    if config.to_gate_config() != expected {
        return Err("example should match the default config with default tags".to_string());
    }
    Ok(())
}

// ============================================================================
// SECTION: Write-Back
// ============================================================================

#[test]
fn save_and_reload_preserves_settings() -> TestResult {
    let mut gate = GateConfig {
        use_class_prefix: false,
        missing_tag_behavior: MissingTagBehavior::Warning,
        warning: LevelGate::Explicit,
        ..GateConfig::default()
    };
    gate.registry.add(Tag::with_levels("AI", true, false, true).map_err(|err| err.to_string())?);
    gate.registry.add(Tag::new("Audio").map_err(|err| err.to_string())?);

    let dir = tempfile::tempdir().map_err(|err| err.to_string())?;
    let path = dir.path().join("tag-gate.toml");
    TagGateConfig::from_gate_config(&gate).save(&path).map_err(|err| err.to_string())?;

    let reloaded = TagGateConfig::load(Some(&path)).map_err(|err| err.to_string())?;
    if reloaded.to_gate_config() != gate {
        return Err("reloaded config differs".to_string());
    }
    Ok(())
}

#[test]
fn toml_output_uses_section_names() -> TestResult {
    let mut config = common::minimal_config().map_err(|err| err.to_string())?;
    config.tags.push(common::entry("Camera"));
    let text = config.to_toml_string().map_err(|err| err.to_string())?;
    for needle in ["[decoration]", "[gates]", "[missing_tags]", "[[tags]]", "name = \"Camera\""] {
        if !text.contains(needle) {
            return Err(format!("output missing {needle}:\n{text}"));
        }
    }
    Ok(())
}

#[test]
fn save_rejects_invalid_config() -> TestResult {
    let mut config = common::minimal_config().map_err(|err| err.to_string())?;
    config.tags.push(common::entry(&"x".repeat(200)));
    let dir = tempfile::tempdir().map_err(|err| err.to_string())?;
    let path = dir.path().join("tag-gate.toml");
    common::assert_error(config.save(&path), "exceeds max length")?;
    if fs::metadata(&path).is_ok() {
        return Err("invalid config should not be written".to_string());
    }
    Ok(())
}

// ============================================================================
// SECTION: Normalize
// ============================================================================

#[test]
fn normalize_removes_blank_and_duplicate_entries() -> TestResult {
    let mut config = common::minimal_config().map_err(|err| err.to_string())?;
    let mut muted = common::entry("AI");
    muted.log_info = false;
    config.tags = vec![common::entry("AI"), common::entry(""), muted, common::entry("Misc")];

    let report = config.normalize(false);
    if report
        != (NormalizeReport {
            removed: 2,
            added: 0,
        })
    {
        return Err(format!("unexpected report: {report:?}"));
    }
    let names: Vec<&str> = config.tags.iter().map(|entry| entry.name.as_str()).collect();
    if names != ["AI", "Misc"] || !config.tags[0].log_info {
        return Err(format!("unexpected tags: {:?}", config.tags));
    }
    Ok(())
}

#[test]
fn normalize_with_defaults_appends_missing_only() -> TestResult {
    let mut config = common::minimal_config().map_err(|err| err.to_string())?;
    config.tags = vec![common::entry("Audio"), common::entry("Custom")];
    let report = config.normalize(true);
    if report.added != DEFAULT_TAGS.len() - 1 {
        return Err(format!("unexpected report: {report:?}"));
    }
    if config.tags[0].name != "Audio" || config.tags[1].name != "Custom" {
        return Err("existing entries should keep their order".to_string());
    }
    if config.normalize(true) != NormalizeReport::default() {
        return Err("second normalize should be a no-op".to_string());
    }
    Ok(())
}
