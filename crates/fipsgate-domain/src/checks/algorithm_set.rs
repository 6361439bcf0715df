use super::utils::{contains_exact, find_prefixed, parse_decimal_suffix};
use crate::fingerprint::fingerprint_for_finding;
use crate::policy::KeySizeRequirement;
use fipsgate_types::{ids, Finding, Severity};
use serde_json::json;

/// Evaluate one restriction set against the enabled algorithms.
///
/// `attribute` names the table attribute that selected this set, if any; it is
/// only used to annotate findings.
///
/// A disabled algorithm ends the evaluation at once. A missing key-size
/// statement fails the set but the remaining requirements are still checked;
/// an undersized statement fails the set and ends the requirement scan.
pub fn run<S: AsRef<str>>(
    assertions: &[S],
    disabled: &[String],
    requirements: &[KeySizeRequirement],
    attribute: Option<&str>,
    out: &mut Vec<Finding>,
) -> bool {
    if let Some(algorithm) = disabled
        .iter()
        .find(|name| contains_exact(assertions, name))
    {
        out.push(disabled_algorithm_finding(algorithm, attribute));
        return false;
    }

    let mut all_good = true;
    for req in requirements {
        match find_prefixed(assertions, &req.prefix) {
            Some(suffix) => {
                let actual = parse_decimal_suffix(suffix);
                if actual < req.min_size {
                    out.push(insufficient_key_size_finding(req, actual, attribute));
                    all_good = false;
                    break;
                }
            }
            None => {
                out.push(missing_statement_finding(req, attribute));
                all_good = false;
            }
        }
    }
    all_good
}

fn disabled_algorithm_finding(algorithm: &str, attribute: Option<&str>) -> Finding {
    let code = ids::CODE_DISABLED_ALGORITHM_ENABLED;
    Finding {
        severity: Severity::Warning,
        check_id: ids::CHECK_FIPS_ALGORITHM_SET.to_string(),
        code: code.to_string(),
        message: format!("enabled algorithms contain '{algorithm}'"),
        help: Some(format!(
            "Remove '{algorithm}' from the enabled algorithms; FIPS mode disables it."
        )),
        fingerprint: Some(fingerprint_for_finding(
            ids::CHECK_FIPS_ALGORITHM_SET,
            code,
            attribute,
            algorithm,
        )),
        data: json!({
            "algorithm": algorithm,
            "attribute": attribute,
        }),
    }
}

fn missing_statement_finding(req: &KeySizeRequirement, attribute: Option<&str>) -> Finding {
    let code = ids::CODE_MISSING_KEY_SIZE_STATEMENT;
    Finding {
        severity: Severity::Warning,
        check_id: ids::CHECK_FIPS_ALGORITHM_SET.to_string(),
        code: code.to_string(),
        message: format!(
            "missing statement '{}{}' to restrict key size",
            req.prefix, req.min_size
        ),
        help: Some(format!(
            "Add '{}{}' (or a larger value) to the enabled algorithms.",
            req.prefix, req.min_size
        )),
        fingerprint: Some(fingerprint_for_finding(
            ids::CHECK_FIPS_ALGORITHM_SET,
            code,
            attribute,
            &req.prefix,
        )),
        data: json!({
            "prefix": req.prefix,
            "required": req.min_size,
            "attribute": attribute,
        }),
    }
}

fn insufficient_key_size_finding(
    req: &KeySizeRequirement,
    actual: u64,
    attribute: Option<&str>,
) -> Finding {
    let code = ids::CODE_INSUFFICIENT_KEY_SIZE;
    Finding {
        severity: Severity::Warning,
        check_id: ids::CHECK_FIPS_ALGORITHM_SET.to_string(),
        code: code.to_string(),
        message: format!(
            "enabled key size {}{} is smaller than required {}",
            req.prefix, actual, req.min_size
        ),
        help: Some(format!(
            "Raise '{}' to at least {}.",
            req.prefix, req.min_size
        )),
        fingerprint: Some(fingerprint_for_finding(
            ids::CHECK_FIPS_ALGORITHM_SET,
            code,
            attribute,
            &req.prefix,
        )),
        data: json!({
            "prefix": req.prefix,
            "actual": actual,
            "required": req.min_size,
            "attribute": attribute,
        }),
    }
}
