// crates/tag-gate-config/src/examples.rs
// ============================================================================
// Module: Config Examples
// Description: Canonical example configuration payload.
// Purpose: Deterministic example for docs and tooling.
// Dependencies: tag-gate-core
// ============================================================================

//! ## Overview
//! Canonical example for Tag Gate configuration: every gate open, missing
//! tags ignored, and the built-in default tags registered with all levels
//! enabled. Output is deterministic.

use tag_gate_core::DEFAULT_TAGS;

/// Returns a canonical example `tag-gate.toml` configuration.
#[must_use]
pub fn config_toml_example() -> String {
    let mut output = String::from(
        r#"[decoration]
use_class_prefix = true
remove_class_suffixes = true

[gates]
# none | explicit | all
info = "all"
warning = "all"
error = "all"

[missing_tags]
# ignore | info | warning | error | print | add
behavior = "ignore"
"#,
    );
    for name in DEFAULT_TAGS {
        output.push_str(&format!(
            "\n[[tags]]\nname = \"{name}\"\nlog_info = true\nlog_warning = true\nlog_error = true\n"
        ));
    }
    output
}
