//! Property-based tests for the domain crate.
//!
//! These tests use proptest to verify invariants around:
//! - disabled-algorithm short-circuiting
//! - the missing/undersized asymmetry of key-size checks
//! - the attribute gate's default-false and first-failure behavior

use crate::checks::{algorithm_set, attribute_gate, parse_decimal_suffix};
use crate::policy::PolicyTable;
use crate::test_support::{attribute_policy, codes, req, table_with};
use fipsgate_types::ids;
use proptest::prelude::*;

// ============================================================================
// Strategies for generating arbitrary values
// ============================================================================

/// Algorithm names that never collide with the built-in disabled list or a
/// key-size prefix.
fn arb_safe_algorithm() -> impl Strategy<Value = String> {
    prop::string::string_regex("(aes|rsa|ecc|sha|hmac)[0-9]{0,3}")
        .unwrap()
}

fn arb_disabled_algorithm() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("camellia".to_string()),
        Just("rsaes".to_string()),
        Just("tdes".to_string()),
    ]
}

fn arb_prefix() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z]{2,6}-min-size=").unwrap()
}

// ============================================================================
// Algorithm set
// ============================================================================

proptest! {
    #[test]
    fn disabled_algorithm_always_fails_with_a_single_finding(
        mut safe in prop::collection::vec(arb_safe_algorithm(), 0..8),
        bad in arb_disabled_algorithm(),
        position in any::<prop::sample::Index>(),
    ) {
        let table = PolicyTable::builtin();
        let at = position.index(safe.len() + 1);
        safe.insert(at, bad);

        let mut out = Vec::new();
        let ok = algorithm_set::run(
            &safe,
            &table.disabled_algorithms,
            &table.key_sizes,
            None,
            &mut out,
        );

        prop_assert!(!ok);
        prop_assert_eq!(codes(&out), vec![ids::CODE_DISABLED_ALGORITHM_ENABLED]);
    }

    #[test]
    fn satisfied_statements_pass(
        safe in prop::collection::vec(arb_safe_algorithm(), 0..8),
        min in 0u64..10_000,
        extra in 0u64..10_000,
    ) {
        let mut assertions = safe;
        assertions.push(format!("ecc-min-size={}", min + extra));

        let mut out = Vec::new();
        let ok = algorithm_set::run(
            &assertions,
            &[],
            &[req("ecc-min-size=", min)],
            None,
            &mut out,
        );

        prop_assert!(ok);
        prop_assert!(out.is_empty());
    }

    #[test]
    fn every_missing_requirement_is_reported(
        prefixes in prop::collection::btree_set(arb_prefix(), 1..6),
        safe in prop::collection::vec(arb_safe_algorithm(), 0..8),
    ) {
        let requirements: Vec<_> = prefixes.iter().map(|p| req(p, 1)).collect();

        let mut out = Vec::new();
        let ok = algorithm_set::run(&safe, &[], &requirements, None, &mut out);

        prop_assert!(!ok);
        prop_assert_eq!(out.len(), requirements.len());
        for (finding, requirement) in out.iter().zip(&requirements) {
            prop_assert_eq!(&finding.code, ids::CODE_MISSING_KEY_SIZE_STATEMENT);
            prop_assert_eq!(finding.data["prefix"].as_str(), Some(requirement.prefix.as_str()));
        }
    }

    #[test]
    fn undersized_requirement_is_the_last_finding(
        prefixes in prop::collection::btree_set(arb_prefix(), 2..6),
        undersized in any::<prop::sample::Index>(),
    ) {
        let prefixes: Vec<String> = prefixes.into_iter().collect();
        let undersized = undersized.index(prefixes.len());
        let requirements: Vec<_> = prefixes.iter().map(|p| req(p, 100)).collect();

        // Everything before the undersized requirement is satisfied; nothing
        // after it is asserted.
        let mut assertions = Vec::new();
        for (i, p) in prefixes.iter().enumerate() {
            if i < undersized {
                assertions.push(format!("{p}100"));
            } else if i == undersized {
                assertions.push(format!("{p}99"));
            }
        }

        let mut out = Vec::new();
        let ok = algorithm_set::run(&assertions, &[], &requirements, None, &mut out);

        prop_assert!(!ok);
        prop_assert_eq!(codes(&out), vec![ids::CODE_INSUFFICIENT_KEY_SIZE]);
    }

    #[test]
    fn parse_decimal_suffix_round_trips_plain_numbers(n in any::<u64>()) {
        prop_assert_eq!(parse_decimal_suffix(&n.to_string()), n);
    }

    #[test]
    fn parse_decimal_suffix_never_panics(s in ".*") {
        let _ = parse_decimal_suffix(&s);
    }
}

// ============================================================================
// Attribute gate
// ============================================================================

proptest! {
    #[test]
    fn no_table_attribute_asserted_means_false(
        attributes in prop::collection::vec("[a-z]{1,8}-attr", 0..6),
        algorithms in prop::collection::vec(arb_safe_algorithm(), 0..8),
    ) {
        let table = PolicyTable::builtin();
        let mut out = Vec::new();
        let outcome = attribute_gate::run(&table, &attributes, &algorithms, &mut out);

        prop_assert!(!outcome.satisfied);
        prop_assert!(outcome.evaluated.is_empty());
    }

    #[test]
    fn gate_is_true_iff_every_asserted_policy_passes(
        failing in prop::collection::vec(any::<bool>(), 1..6),
        asserted in prop::collection::vec(any::<bool>(), 1..6),
    ) {
        let n = failing.len().min(asserted.len());
        let policies = (0..n)
            .map(|i| {
                let disabled: &[&str] = if failing[i] { &["bad"] } else { &[] };
                attribute_policy(&format!("attr{i}"), disabled, Vec::new())
            })
            .collect();
        let table = table_with(policies);
        let attributes: Vec<String> = (0..n)
            .filter(|&i| asserted[i])
            .map(|i| format!("attr{i}"))
            .collect();

        let mut out = Vec::new();
        let outcome = attribute_gate::run(&table, &attributes, &["bad"], &mut out);

        let any_asserted = !attributes.is_empty();
        let first_failure = (0..n).find(|&i| asserted[i] && failing[i]);
        prop_assert_eq!(outcome.satisfied, any_asserted && first_failure.is_none());

        if let Some(stop) = first_failure {
            let expected: Vec<String> = (0..=stop)
                .filter(|&i| asserted[i])
                .map(|i| format!("attr{i}"))
                .collect();
            prop_assert_eq!(outcome.evaluated, expected);
        }
    }
}
