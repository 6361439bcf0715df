//! Fuzz target for the algorithm set checker and attribute gate.
//!
//! Goal: evaluation should **never panic**, whatever the assertion lists
//! contain (non-numeric suffixes, huge numbers, duplicates, empty strings).
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_algorithm_set
//! ```

#![no_main]

use arbitrary::Arbitrary;
use fipsgate_domain::{AssertionSet, Gate, PolicyTable};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct CheckerInput {
    /// Enabled algorithms, e.g. "rsa", "ecc-min-size=256"
    algorithms: Vec<String>,
    /// Host attributes, e.g. "fips-host"
    attributes: Vec<String>,
}

fuzz_target!(|input: CheckerInput| {
    // Limit input size to keep fuzzing fast
    if input.algorithms.len() > 64 || input.attributes.len() > 16 {
        return;
    }

    let table = PolicyTable::builtin();
    let gated = fipsgate_domain::attributes_disable_bad_algorithms(
        &table,
        &input.attributes,
        &input.algorithms,
    );
    let plain = fipsgate_domain::algorithms_are_disabled(&table, &input.algorithms);

    let assertions = AssertionSet::new(input.algorithms, input.attributes);
    let report = fipsgate_domain::evaluate(&assertions, &table, Gate::Attributes);
    assert_eq!(report.satisfied, gated);
    assert_eq!(report.findings.is_empty(), gated);

    let report = fipsgate_domain::evaluate(&assertions, &table, Gate::Algorithms);
    assert_eq!(report.satisfied, plain);
});
