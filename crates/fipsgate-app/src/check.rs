//! The `check` use case: evaluate the policy gate and produce a report.

use fipsgate_domain::report::DomainReport;
use fipsgate_domain::{AssertionSet, Gate};
use fipsgate_settings::{Overrides, ResolvedConfig};
use fipsgate_types::{FipsgateReport, Verdict};
use time::OffsetDateTime;

use crate::policy::resolve_policy;
use crate::report::{envelope, log_finding};

/// Input for the check use case.
#[derive(Clone, Debug)]
pub struct CheckInput<'a> {
    /// Config file contents (empty string if not found).
    pub config_text: &'a str,
    /// CLI overrides.
    pub overrides: Overrides,
    /// Enabled algorithms and host attributes, in scan order.
    pub assertions: AssertionSet,
    pub gate: Gate,
}

/// Output from the check use case.
#[derive(Clone, Debug)]
pub struct CheckOutput {
    pub report: FipsgateReport,
    /// The resolved configuration used.
    pub resolved_config: ResolvedConfig,
    /// `false` means the host library's FIPS mode has to be turned off.
    pub satisfied: bool,
}

/// Parse config, resolve the policy table, evaluate, and wrap the result in a report.
pub fn run_check(input: CheckInput<'_>) -> anyhow::Result<CheckOutput> {
    let started_at = OffsetDateTime::now_utc();
    let (resolved, domain) = evaluate(&input)?;
    let satisfied = domain.satisfied;

    Ok(CheckOutput {
        report: envelope(started_at, domain),
        resolved_config: resolved,
        satisfied,
    })
}

pub(crate) fn evaluate(input: &CheckInput<'_>) -> anyhow::Result<(ResolvedConfig, DomainReport)> {
    let resolved = resolve_policy(input.config_text, input.overrides.clone())?;

    tracing::debug!(
        profile = %resolved.table.profile,
        gate = input.gate.as_str(),
        algorithms = input.assertions.algorithms.len(),
        attributes = input.assertions.attributes.len(),
        "evaluating FIPS restrictions"
    );

    let domain = fipsgate_domain::evaluate(&input.assertions, &resolved.table, input.gate);
    domain.findings.iter().for_each(log_finding);

    Ok((resolved, domain))
}

/// Map verdict to exit code: 0 = pass, 2 = fail.
pub fn verdict_exit_code(verdict: Verdict) -> i32 {
    match verdict {
        Verdict::Pass => 0,
        Verdict::Fail => 2,
    }
}
