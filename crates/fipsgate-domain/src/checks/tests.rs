use super::{algorithm_set, attribute_gate, parse_decimal_suffix, AlgorithmSetChecker, AttributePolicyGate};
use crate::policy::PolicyTable;
use crate::test_support::{
    attribute_policy, codes, fips_disabled, fips_key_sizes, req, strings, table_with,
};
use fipsgate_types::{ids, Severity};

#[test]
fn sufficient_ecc_size_passes() {
    let assertions = strings(&["ecc-min-size=256"]);
    let mut out = Vec::new();
    let ok = algorithm_set::run(&assertions, &fips_disabled(), &fips_key_sizes(), None, &mut out);

    assert!(ok);
    assert!(out.is_empty());
}

#[test]
fn exact_minimum_passes() {
    let assertions = strings(&["ecc-min-size=224"]);
    assert!(AlgorithmSetChecker::evaluate(
        &assertions,
        &fips_disabled(),
        &fips_key_sizes()
    ));
}

#[test]
fn empty_assertions_report_missing_statement() {
    let assertions: Vec<String> = Vec::new();
    let mut out = Vec::new();
    let ok = algorithm_set::run(&assertions, &fips_disabled(), &fips_key_sizes(), None, &mut out);

    assert!(!ok);
    assert_eq!(codes(&out), [ids::CODE_MISSING_KEY_SIZE_STATEMENT]);
    assert_eq!(out[0].severity, Severity::Warning);
    assert_eq!(
        out[0].message,
        "missing statement 'ecc-min-size=224' to restrict key size"
    );
    assert_eq!(out[0].data["prefix"], "ecc-min-size=");
    assert_eq!(out[0].data["required"], 224);
}

#[test]
fn disabled_algorithm_short_circuits_key_size_checks() {
    // No ecc statement at all: a missing-statement warning would follow if the
    // scan went on.
    let assertions = strings(&["camellia"]);
    let mut out = Vec::new();
    let ok = algorithm_set::run(&assertions, &fips_disabled(), &fips_key_sizes(), None, &mut out);

    assert!(!ok);
    assert_eq!(codes(&out), [ids::CODE_DISABLED_ALGORITHM_ENABLED]);
    assert_eq!(out[0].message, "enabled algorithms contain 'camellia'");
    assert_eq!(out[0].data["algorithm"], "camellia");
}

#[test]
fn only_first_disabled_algorithm_in_list_order_is_reported() {
    // Assertion order does not matter: the disabled list is scanned in its own order.
    let assertions = strings(&["tdes", "rsaes", "ecc-min-size=256"]);
    let mut out = Vec::new();
    algorithm_set::run(&assertions, &fips_disabled(), &fips_key_sizes(), None, &mut out);

    assert_eq!(out.len(), 1);
    assert_eq!(out[0].data["algorithm"], "rsaes");
}

#[test]
fn disabled_match_is_whole_string() {
    let assertions = strings(&["tdes-cbc", "camellia128", "xrsaes", "ecc-min-size=256"]);
    assert!(AlgorithmSetChecker::evaluate(
        &assertions,
        &fips_disabled(),
        &fips_key_sizes()
    ));
}

#[test]
fn missing_statement_keeps_scanning_requirements() {
    let requirements = vec![
        req("rsa-min-size=", 2048),
        req("ecc-min-size=", 224),
        req("hmac-min-size=", 112),
    ];
    let assertions = strings(&["ecc-min-size=256"]);
    let mut out = Vec::new();
    let ok = algorithm_set::run(&assertions, &[], &requirements, None, &mut out);

    assert!(!ok);
    assert_eq!(
        codes(&out),
        [
            ids::CODE_MISSING_KEY_SIZE_STATEMENT,
            ids::CODE_MISSING_KEY_SIZE_STATEMENT
        ]
    );
    assert_eq!(out[0].data["prefix"], "rsa-min-size=");
    assert_eq!(out[1].data["prefix"], "hmac-min-size=");
}

#[test]
fn undersized_statement_stops_requirement_scan() {
    let requirements = vec![
        req("ecc-min-size=", 224),
        req("rsa-min-size=", 2048),
    ];
    // rsa statement is missing, but the scan never gets there.
    let assertions = strings(&["ecc-min-size=192"]);
    let mut out = Vec::new();
    let ok = algorithm_set::run(&assertions, &[], &requirements, None, &mut out);

    assert!(!ok);
    assert_eq!(codes(&out), [ids::CODE_INSUFFICIENT_KEY_SIZE]);
    assert_eq!(
        out[0].message,
        "enabled key size ecc-min-size=192 is smaller than required 224"
    );
    assert_eq!(out[0].data["actual"], 192);
    assert_eq!(out[0].data["required"], 224);
}

#[test]
fn missing_then_undersized_reports_both() {
    let requirements = vec![
        req("rsa-min-size=", 2048),
        req("ecc-min-size=", 224),
        req("hmac-min-size=", 112),
    ];
    let assertions = strings(&["ecc-min-size=160"]);
    let mut out = Vec::new();
    algorithm_set::run(&assertions, &[], &requirements, None, &mut out);

    assert_eq!(
        codes(&out),
        [
            ids::CODE_MISSING_KEY_SIZE_STATEMENT,
            ids::CODE_INSUFFICIENT_KEY_SIZE
        ]
    );
}

#[test]
fn first_prefixed_statement_is_the_one_read() {
    let assertions = strings(&["ecc-min-size=128", "ecc-min-size=384"]);
    assert!(!AlgorithmSetChecker::evaluate(
        &assertions,
        &[],
        &fips_key_sizes()
    ));

    let assertions = strings(&["ecc-min-size=384", "ecc-min-size=128"]);
    assert!(AlgorithmSetChecker::evaluate(
        &assertions,
        &[],
        &fips_key_sizes()
    ));
}

#[test]
fn malformed_suffix_counts_as_zero() {
    let assertions = strings(&["ecc-min-size=large"]);
    let mut out = Vec::new();
    let ok = algorithm_set::run(&assertions, &[], &fips_key_sizes(), None, &mut out);

    assert!(!ok);
    assert_eq!(out[0].data["actual"], 0);
}

#[test]
fn malformed_suffix_passes_a_zero_minimum() {
    let assertions = strings(&["ecc-min-size="]);
    assert!(AlgorithmSetChecker::evaluate(
        &assertions,
        &[],
        &[req("ecc-min-size=", 0)]
    ));
}

#[test]
fn parse_decimal_suffix_reads_leading_digits() {
    assert_eq!(parse_decimal_suffix("256"), 256);
    assert_eq!(parse_decimal_suffix("256bits"), 256);
    assert_eq!(parse_decimal_suffix("  +384"), 384);
    assert_eq!(parse_decimal_suffix("0042"), 42);
    assert_eq!(parse_decimal_suffix(""), 0);
    assert_eq!(parse_decimal_suffix("abc"), 0);
    assert_eq!(parse_decimal_suffix("-5"), 0);
    assert_eq!(parse_decimal_suffix("+"), 0);
    assert_eq!(parse_decimal_suffix("99999999999999999999999"), u64::MAX);
}

#[test]
fn findings_name_the_governing_attribute() {
    let table = PolicyTable::builtin();
    let mut out = Vec::new();
    let outcome = attribute_gate::run(&table, &strings(&["fips-host"]), &strings(&["tdes"]), &mut out);

    assert!(!outcome.satisfied);
    assert_eq!(out[0].data["attribute"], "fips-host");

    let mut plain = Vec::new();
    algorithm_set::run(&strings(&["tdes"]), &fips_disabled(), &fips_key_sizes(), None, &mut plain);
    assert!(plain[0].data["attribute"].is_null());
    assert_ne!(out[0].fingerprint, plain[0].fingerprint);
}

#[test]
fn gate_with_no_attributes_is_false() {
    let table = PolicyTable::builtin();
    let gate = AttributePolicyGate::new(&table);
    let none: Vec<String> = Vec::new();

    assert!(!gate.evaluate(&none, &strings(&["ecc-min-size=256"])));
}

#[test]
fn gate_with_unknown_attributes_only_is_false() {
    let table = PolicyTable::builtin();
    let mut out = Vec::new();
    let outcome = attribute_gate::run(
        &table,
        &strings(&["no-unpadded-encryption", "something-else"]),
        &strings(&["ecc-min-size=256"]),
        &mut out,
    );

    assert!(!outcome.satisfied);
    assert!(outcome.evaluated.is_empty());
    assert_eq!(codes(&out), [ids::CODE_NO_POLICY_ATTRIBUTE]);
    assert_eq!(out[0].severity, Severity::Info);
    assert_eq!(
        out[0].message,
        "host asserts none of the policy attributes (fips-host)"
    );
}

#[test]
fn gate_with_empty_table_is_false() {
    let table = PolicyTable::empty("none");
    let mut out = Vec::new();
    let outcome = attribute_gate::run(&table, &strings(&["fips-host"]), &strings(&["rsa"]), &mut out);

    assert!(!outcome.satisfied);
    assert_eq!(out[0].message, "policy table defines no attributes");
}

#[test]
fn gate_passes_when_asserted_attribute_passes() {
    let table = PolicyTable::builtin();
    let gate = AttributePolicyGate::new(&table);

    assert!(gate.evaluate(
        &strings(&["fips-host"]),
        &strings(&["rsa", "ecc", "ecc-min-size=224"])
    ));
}

#[test]
fn gate_stops_at_first_failing_attribute() {
    let table = table_with(vec![
        attribute_policy("a", &["tdes"], Vec::new()),
        attribute_policy("b", &["camellia"], Vec::new()),
        attribute_policy("c", &[], vec![req("ecc-min-size=", 224)]),
    ]);
    let mut out = Vec::new();
    let outcome = attribute_gate::run(
        &table,
        &strings(&["c", "b", "a"]),
        &strings(&["camellia"]),
        &mut out,
    );

    assert!(!outcome.satisfied);
    // Table order, not assertion order: "a" passes, "b" fails, "c" never runs.
    assert_eq!(outcome.evaluated, ["a", "b"]);
    assert_eq!(codes(&out), [ids::CODE_DISABLED_ALGORITHM_ENABLED]);
    assert_eq!(out[0].data["attribute"], "b");
}

#[test]
fn gate_skips_unasserted_attributes() {
    let table = table_with(vec![
        attribute_policy("strict", &["rsa"], Vec::new()),
        attribute_policy("lenient", &[], Vec::new()),
    ]);
    let gate = AttributePolicyGate::new(&table);

    // "strict" would fail on rsa, but it is not asserted.
    assert!(gate.evaluate(&strings(&["lenient"]), &strings(&["rsa"])));
}

#[test]
fn gate_requires_every_asserted_attribute_to_pass() {
    let table = table_with(vec![
        attribute_policy("lenient", &[], Vec::new()),
        attribute_policy("strict", &[], vec![req("rsa-min-size=", 2048)]),
    ]);
    let gate = AttributePolicyGate::new(&table);

    assert!(!gate.evaluate(&strings(&["lenient", "strict"]), &strings(&["rsa"])));
    assert!(gate.evaluate(
        &strings(&["lenient", "strict"]),
        &strings(&["rsa", "rsa-min-size=3072"])
    ));
}

#[test]
fn top_level_helpers_match_checker_and_gate() {
    let table = PolicyTable::builtin();
    assert!(crate::algorithms_are_disabled(&table, &["ecc-min-size=256"]));
    assert!(!crate::algorithms_are_disabled(&table, &["rsaes", "ecc-min-size=256"]));
    assert!(crate::attributes_disable_bad_algorithms(
        &table,
        &["fips-host"],
        &["ecc-min-size=256"]
    ));
    assert!(!crate::attributes_disable_bad_algorithms(
        &table,
        &[] as &[&str],
        &["ecc-min-size=256"]
    ));
}

#[test]
fn checker_evaluate_into_appends_what_the_scan_emits() {
    let algorithms = strings(&["rsa", "ecc-min-size=192"]);
    let disabled = fips_disabled();
    let requirements = fips_key_sizes();

    let mut expected = Vec::new();
    let expected_ok = algorithm_set::run(&algorithms, &disabled, &requirements, None, &mut expected);

    let mut out = Vec::new();
    let ok = AlgorithmSetChecker::evaluate_into(&algorithms, &disabled, &requirements, &mut out);

    assert_eq!(ok, expected_ok);
    assert!(!ok);
    assert_eq!(out, expected);
    assert_eq!(codes(&out), [ids::CODE_INSUFFICIENT_KEY_SIZE]);
    assert_eq!(ok, AlgorithmSetChecker::evaluate(&algorithms, &disabled, &requirements));
}

#[test]
fn gate_evaluate_into_appends_after_existing_findings() {
    let table = PolicyTable::builtin();
    let attributes = strings(&["fips-host"]);
    let algorithms = strings(&["tdes", "ecc-min-size=256"]);

    let mut expected = Vec::new();
    let expected_outcome = attribute_gate::run(&table, &attributes, &algorithms, &mut expected);

    let mut out = Vec::new();
    algorithm_set::run(&algorithms, &[], &[req("rsa-min-size=", 2048)], None, &mut out);
    let prior = out.len();
    assert_eq!(prior, 1);
    let outcome = AttributePolicyGate::new(&table).evaluate_into(&attributes, &algorithms, &mut out);

    assert_eq!(outcome, expected_outcome);
    assert!(!outcome.satisfied);
    assert_eq!(outcome.evaluated, ["fips-host"]);
    assert_eq!(out[prior..], expected[..]);
    assert_eq!(codes(&out[prior..]), [ids::CODE_DISABLED_ALGORITHM_ENABLED]);
}
