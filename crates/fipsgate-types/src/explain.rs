//! Explain registry for checks and codes.
//!
//! Maps check IDs and codes to human-readable explanations with remediation guidance.

use crate::ids;

/// Explanation entry for a check or code.
#[derive(Debug, Clone)]
pub struct Explanation {
    /// Short description of the check/code.
    pub title: &'static str,
    /// What the check does and why it exists.
    pub description: &'static str,
    /// How to fix violations.
    pub remediation: &'static str,
    /// Before/after examples.
    pub examples: ExamplePair,
}

/// Before and after examples, written as TOML assertion lists.
#[derive(Debug, Clone)]
pub struct ExamplePair {
    /// Input that would trigger a finding.
    pub before: &'static str,
    /// Input that passes the check.
    pub after: &'static str,
}

/// Look up an explanation by check_id or code.
///
/// Returns `None` if the identifier is not recognized.
pub fn lookup_explanation(identifier: &str) -> Option<Explanation> {
    match identifier {
        // Check IDs
        ids::CHECK_FIPS_ALGORITHM_SET => Some(explain_algorithm_set()),
        ids::CHECK_FIPS_ATTRIBUTE_GATE => Some(explain_attribute_gate()),
        ids::CHECK_HOST_FIPS_MODE => Some(explain_host_fips_mode()),

        // Codes
        ids::CODE_DISABLED_ALGORITHM_ENABLED => Some(explain_disabled_algorithm_enabled()),
        ids::CODE_MISSING_KEY_SIZE_STATEMENT => Some(explain_missing_key_size_statement()),
        ids::CODE_INSUFFICIENT_KEY_SIZE => Some(explain_insufficient_key_size()),
        ids::CODE_NO_POLICY_ATTRIBUTE => Some(explain_no_policy_attribute()),
        ids::CODE_FIPS_MODE_DISABLED => Some(explain_fips_mode_disabled()),
        ids::CODE_FIPS_DISABLE_FAILED => Some(explain_fips_disable_failed()),

        _ => None,
    }
}

/// List all known check IDs.
pub fn all_check_ids() -> &'static [&'static str] {
    &[
        ids::CHECK_FIPS_ALGORITHM_SET,
        ids::CHECK_FIPS_ATTRIBUTE_GATE,
        ids::CHECK_HOST_FIPS_MODE,
    ]
}

/// List all known codes.
pub fn all_codes() -> &'static [&'static str] {
    &[
        ids::CODE_DISABLED_ALGORITHM_ENABLED,
        ids::CODE_MISSING_KEY_SIZE_STATEMENT,
        ids::CODE_INSUFFICIENT_KEY_SIZE,
        ids::CODE_NO_POLICY_ATTRIBUTE,
        ids::CODE_FIPS_MODE_DISABLED,
        ids::CODE_FIPS_DISABLE_FAILED,
    ]
}

// --- Check-level explanations ---

fn explain_algorithm_set() -> Explanation {
    Explanation {
        title: "FIPS Algorithm Set",
        description: "\
Compares the algorithms a software TPM has enabled against the algorithms and
key sizes a host library refuses to run while it is in FIPS mode.

The check fails when:
- an enabled algorithm is on the disabled list (for example `tdes`)
- a required key-size statement such as `ecc-min-size=` is missing
- a key-size statement is present but below the required minimum

If the check fails, the TPM's self-tests would trip over algorithms the host
library has switched off, so FIPS mode has to be disabled for the process.",
        remediation: "\
Restrict the TPM profile so it matches what FIPS mode allows:
- Remove every disabled algorithm from the enabled set
- Add a key-size statement for every required prefix
- Raise each key-size statement to at least the required minimum

Run `fipsgate policy` to see the disabled algorithms and minimum key sizes in effect.",
        examples: ExamplePair {
            before: r#"algorithms = ["rsa", "tdes", "camellia", "ecc"]"#,
            after: r#"algorithms = ["rsa", "ecc", "ecc-min-size=224"]"#,
        },
    }
}

fn explain_attribute_gate() -> Explanation {
    Explanation {
        title: "FIPS Attribute Gate",
        description: "\
Decides which restriction sets apply, based on the attributes the host asserts.

Each policy table entry names an attribute (for example `fips-host`). For every
entry whose attribute the host asserts, the algorithm set check runs with that
entry's disabled algorithms and key sizes. The first failing entry ends the
evaluation.

If the host asserts none of the table's attributes, the verdict is `fail`: the
TPM did not declare that it runs a FIPS-compatible profile, so nothing
guarantees its algorithms survive FIPS mode.",
        remediation: "\
Assert a policy attribute for the TPM profile (for example `fips-host`) and make
sure its algorithm set passes the checks for that attribute.",
        examples: ExamplePair {
            before: r#"attributes = []"#,
            after: r#"attributes = ["fips-host"]"#,
        },
    }
}

fn explain_host_fips_mode() -> Explanation {
    Explanation {
        title: "Host FIPS Mode",
        description: "\
Reports what happened to the host library's FIPS enforcement flag.

`fipsgate apply` only touches the flag when the library is enforcing FIPS mode
and the policy evaluation failed. Disabling is attempted once and is not retried.",
        remediation: "\
If disabling failed, check that the process is allowed to change the library's
default properties and that the FIPS provider configuration is not locked.",
        examples: ExamplePair {
            before: r#"# host enforcing FIPS mode, policy failed
attributes = []"#,
            after: r#"# policy passes, FIPS mode can stay on
attributes = ["fips-host"]
algorithms = ["rsa", "ecc", "ecc-min-size=224"]"#,
        },
    }
}

// --- Code-level explanations ---

fn explain_disabled_algorithm_enabled() -> Explanation {
    Explanation {
        title: "Disabled Algorithm Enabled",
        description: "\
An enabled algorithm matches, exactly, an entry on the disabled list.

Matching is whole-string: `tdes` matches `tdes` but not `tdes-cbc`. The scan
stops at the first disabled algorithm found, and key sizes are not checked.",
        remediation: "\
Remove the algorithm from the TPM profile's enabled set.",
        examples: ExamplePair {
            before: r#"algorithms = ["rsa", "camellia", "ecc-min-size=256"]"#,
            after: r#"algorithms = ["rsa", "ecc-min-size=256"]"#,
        },
    }
}

fn explain_missing_key_size_statement() -> Explanation {
    Explanation {
        title: "Missing Key Size Statement",
        description: "\
No enabled algorithm entry starts with a required key-size prefix, so the key
size is unrestricted.

Evaluation continues with the next requirement, so several of these findings can
appear in one run.",
        remediation: "\
Add a statement with the required prefix and a value at or above the minimum.",
        examples: ExamplePair {
            before: r#"algorithms = ["rsa", "ecc"]"#,
            after: r#"algorithms = ["rsa", "ecc", "ecc-min-size=224"]"#,
        },
    }
}

fn explain_insufficient_key_size() -> Explanation {
    Explanation {
        title: "Insufficient Key Size",
        description: "\
A key-size statement is present but its value is below the required minimum.

Only the first entry with the prefix is read. A value that is not a decimal
number counts as 0. Once an undersized statement is found, later key-size
requirements are not evaluated.",
        remediation: "\
Raise the statement's value to at least the required minimum.",
        examples: ExamplePair {
            before: r#"algorithms = ["ecc", "ecc-min-size=192"]"#,
            after: r#"algorithms = ["ecc", "ecc-min-size=224"]"#,
        },
    }
}

fn explain_no_policy_attribute() -> Explanation {
    let mut exp = explain_attribute_gate();
    exp.title = "No Policy Attribute Asserted";
    exp
}

fn explain_fips_mode_disabled() -> Explanation {
    let mut exp = explain_host_fips_mode();
    exp.title = "FIPS Mode Disabled";
    exp
}

fn explain_fips_disable_failed() -> Explanation {
    Explanation {
        title: "Disabling FIPS Mode Failed",
        description: "\
The policy evaluation failed, so `fipsgate apply` asked the host library to turn
FIPS mode off, and the library refused. The finding carries the library's own
error text in `data.message`.

FIPS mode is still enforced. The TPM will trip over the algorithms the library
has switched off, so `apply` exits with status 1.",
        remediation: "\
Read the library error in the finding. Usual causes are a locked FIPS provider
configuration or a library built without the FIPS property API. Either restrict
the TPM profile so the policy passes, or fix the host configuration.",
        examples: ExamplePair {
            before: r#"# data.message
"error:1C8000E9:Provider routines::fips module entering error state""#,
            after: r#"# profile restricted, policy passes, nothing to disable
attributes = ["fips-host"]
algorithms = ["rsa", "ecc", "ecc-min-size=224"]"#,
        },
    }
}
