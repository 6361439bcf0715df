use crate::checks::{AlgorithmSetChecker, AttributePolicyGate};
use crate::model::AssertionSet;
use crate::policy::{Gate, PolicyTable};
use crate::report::DomainReport;
use fipsgate_types::{FipsgateData, Verdict};

pub fn evaluate(input: &AssertionSet, table: &PolicyTable, gate: Gate) -> DomainReport {
    let mut findings = Vec::new();

    let (satisfied, attributes_matched) = match gate {
        Gate::Attributes => {
            let outcome = AttributePolicyGate::new(table).evaluate_into(
                &input.attributes,
                &input.algorithms,
                &mut findings,
            );
            (outcome.satisfied, outcome.evaluated)
        }
        Gate::Algorithms => {
            let satisfied = AlgorithmSetChecker::evaluate_into(
                &input.algorithms,
                &table.disabled_algorithms,
                &table.key_sizes,
                &mut findings,
            );
            (satisfied, Vec::new())
        }
    };

    // Findings stay in emission order: which warnings appear, and in what
    // order, follows the scan order of the checks.
    let verdict = if satisfied {
        Verdict::Pass
    } else {
        Verdict::Fail
    };

    let data = FipsgateData {
        gate: gate.as_str().to_string(),
        profile: table.profile.clone(),
        algorithms_scanned: saturating_count(input.algorithms.len()),
        attributes_scanned: saturating_count(input.attributes.len()),
        attributes_matched,
        host_action: None,
    };

    DomainReport {
        satisfied,
        verdict,
        findings,
        data,
    }
}

fn saturating_count(len: usize) -> u32 {
    u32::try_from(len).unwrap_or(u32::MAX)
}
