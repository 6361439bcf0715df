use super::algorithm_set;
use super::utils::contains_exact;
use crate::policy::PolicyTable;
use fipsgate_types::{ids, Finding, Severity};
use serde_json::json;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GateOutcome {
    pub satisfied: bool,
    /// Table attributes that were asserted and evaluated, in table order.
    pub evaluated: Vec<String>,
}

/// Walk the table's attribute policies in order. Each asserted attribute
/// replaces the result with its own algorithm set verdict; the first failing
/// one stops the walk. With no asserted attribute the result stays `false`.
pub fn run<A, S>(
    table: &PolicyTable,
    attributes: &[A],
    algorithms: &[S],
    out: &mut Vec<Finding>,
) -> GateOutcome
where
    A: AsRef<str>,
    S: AsRef<str>,
{
    let mut outcome = GateOutcome::default();

    for policy in &table.attributes {
        if !contains_exact(attributes, &policy.attribute) {
            continue;
        }
        outcome.evaluated.push(policy.attribute.clone());
        outcome.satisfied = algorithm_set::run(
            algorithms,
            &policy.disabled_algorithms,
            &policy.key_sizes,
            Some(&policy.attribute),
            out,
        );
        if !outcome.satisfied {
            break;
        }
    }

    if outcome.evaluated.is_empty() {
        out.push(no_policy_attribute_finding(table));
    }

    outcome
}

fn no_policy_attribute_finding(table: &PolicyTable) -> Finding {
    let known: Vec<&str> = table
        .attributes
        .iter()
        .map(|p| p.attribute.as_str())
        .collect();
    let message = if known.is_empty() {
        "policy table defines no attributes".to_string()
    } else {
        format!(
            "host asserts none of the policy attributes ({})",
            known.join(", ")
        )
    };
    Finding {
        severity: Severity::Info,
        check_id: ids::CHECK_FIPS_ATTRIBUTE_GATE.to_string(),
        code: ids::CODE_NO_POLICY_ATTRIBUTE.to_string(),
        message,
        help: Some(
            "Without a policy attribute the algorithm set is not known to be FIPS compatible."
                .to_string(),
        ),
        fingerprint: None,
        data: json!({ "known_attributes": known }),
    }
}
