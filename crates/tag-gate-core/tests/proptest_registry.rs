// crates/tag-gate-core/tests/proptest_registry.rs
// ============================================================================
// Module: Registry Property-Based Tests
// Description: Property tests for registry cleanup and default seeding.
// Purpose: Check idempotence and lookup consistency across arbitrary inputs.
// ============================================================================

//! Property-based tests for registry invariants.

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
    reason = "Test-only assertions and helpers are permitted."
)]

use std::collections::HashSet;

use proptest::prelude::*;
use tag_gate_core::GateConfig;
use tag_gate_core::Tag;
use tag_gate_core::TagRegistry;

fn name_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        Just("  ".to_string()),
        "[A-C][a-c]{0,2}",
    ]
}

fn tag_strategy() -> impl Strategy<Value = Tag> {
    (name_strategy(), any::<bool>(), any::<bool>(), any::<bool>()).prop_map(
        |(name, log_info, log_warning, log_error)| Tag {
            name,
            log_info,
            log_warning,
            log_error,
        },
    )
}

proptest! {
    #[test]
    fn remove_invalid_or_duplicate_is_idempotent(tags in prop::collection::vec(tag_strategy(), 0 .. 24)) {
        let mut once = TagRegistry::from_tags(tags);
        once.remove_invalid_or_duplicate();
        let mut twice = once.clone();
        prop_assert_eq!(twice.remove_invalid_or_duplicate(), 0);
        prop_assert_eq!(once.tags(), twice.tags());

        let mut seen = HashSet::new();
        for tag in once.iter() {
            prop_assert!(!tag.name.trim().is_empty());
            prop_assert!(seen.insert(tag.name.clone()));
        }
    }

    #[test]
    fn lookup_returns_first_occurrence(tags in prop::collection::vec(tag_strategy(), 0 .. 24)) {
        let mut registry = TagRegistry::from_tags(tags.clone());
        for tag in &tags {
            let expected = tags.iter().find(|candidate| candidate.name == tag.name);
            let found = registry.lookup(&tag.name).cloned();
            if tag.name.trim().is_empty() {
                prop_assert!(found.is_none());
            } else {
                prop_assert_eq!(found.as_ref(), expected);
            }
        }
    }

    #[test]
    fn add_missing_defaults_second_run_adds_nothing(
        existing in prop::collection::vec(tag_strategy(), 0 .. 12),
        defaults in prop::collection::vec(name_strategy(), 0 .. 12),
    ) {
        let mut config = GateConfig {
            registry: TagRegistry::from_tags(existing),
            ..GateConfig::default()
        };
        config.add_missing_defaults(&defaults);
        let snapshot = config.registry.tags().to_vec();
        prop_assert_eq!(config.add_missing_defaults(&defaults), 0);
        prop_assert_eq!(config.registry.tags(), snapshot.as_slice());
        for name in defaults.iter().filter(|name| !name.trim().is_empty()) {
            prop_assert!(config.registry.contains_name(name));
        }
    }
}
