//! The `apply` use case: decide whether the host's FIPS mode survives the
//! asserted algorithm set, and turn it off when it does not.

use fipsgate_domain::{AssertionSet, Gate};
use fipsgate_host::{FipsModeController, HostError};
use fipsgate_settings::Overrides;
use fipsgate_types::{ids, Finding, FipsgateReport, HostAction, Severity};
use serde_json::json;
use time::OffsetDateTime;

use crate::check::{self, CheckInput};
use crate::report::envelope;

#[derive(Clone, Debug)]
pub struct ApplyInput<'a> {
    pub config_text: &'a str,
    pub overrides: Overrides,
    pub assertions: AssertionSet,
    pub gate: Gate,
    /// Evaluate and report, but leave the host library untouched.
    pub dry_run: bool,
}

/// The host library refused to turn FIPS mode off.
///
/// Carries the report built up to that point, ending with a
/// `fips_disable_failed` finding, so callers can still write it out.
#[derive(Debug, thiserror::Error)]
#[error("FIPS mode is still enforced")]
pub struct DisableFailed {
    pub report: Box<FipsgateReport>,
    #[source]
    pub source: HostError,
}

#[derive(Clone, Debug)]
pub struct ApplyOutput {
    pub action: HostAction,
    /// `None` when the host was not enforcing FIPS mode and nothing was evaluated.
    pub report: Option<FipsgateReport>,
}

/// Query the host first, evaluate only when it enforces FIPS mode, and call
/// `disable()` only when the evaluation fails. A failed disable is logged and
/// returned as a [`DisableFailed`] error; it is never retried.
pub fn run_apply(
    controller: &dyn FipsModeController,
    input: ApplyInput<'_>,
) -> anyhow::Result<ApplyOutput> {
    let started_at = OffsetDateTime::now_utc();
    let library = controller.library();

    if !controller.is_enabled() {
        tracing::debug!(library, "FIPS mode not enforced; nothing to do");
        return Ok(ApplyOutput {
            action: HostAction::NotEnforced,
            report: None,
        });
    }

    let ApplyInput {
        config_text,
        overrides,
        assertions,
        gate,
        dry_run,
    } = input;
    let (_, mut domain) = check::evaluate(&CheckInput {
        config_text,
        overrides,
        assertions,
        gate,
    })?;

    let action = if domain.satisfied {
        HostAction::RestrictionsSatisfied
    } else if dry_run {
        tracing::info!(library, "dry run: would disable {library} FIPS mode");
        HostAction::WouldDisable
    } else {
        match controller.disable() {
            Ok(()) => {
                tracing::info!(library, "Disabled {library} FIPS mode");
                domain.findings.push(disabled_finding(library));
                HostAction::Disabled
            }
            Err(source) => {
                tracing::error!(library, "{source}");
                domain.findings.push(disable_failed_finding(library, &source));
                domain.data.host_action = Some(HostAction::DisableFailed);
                let report = Box::new(envelope(started_at, domain));
                return Err(DisableFailed { report, source }.into());
            }
        }
    };

    domain.data.host_action = Some(action);
    Ok(ApplyOutput {
        action,
        report: Some(envelope(started_at, domain)),
    })
}

fn disabled_finding(library: &str) -> Finding {
    Finding {
        severity: Severity::Info,
        check_id: ids::CHECK_HOST_FIPS_MODE.to_string(),
        code: ids::CODE_FIPS_MODE_DISABLED.to_string(),
        message: format!("disabled {library} FIPS mode"),
        help: None,
        fingerprint: None,
        data: json!({ "library": library }),
    }
}

fn disable_failed_finding(library: &str, source: &HostError) -> Finding {
    let HostError::Disable { message, .. } = source;
    Finding {
        severity: Severity::Error,
        check_id: ids::CHECK_HOST_FIPS_MODE.to_string(),
        code: ids::CODE_FIPS_DISABLE_FAILED.to_string(),
        message: source.to_string(),
        help: Some(
            "FIPS mode is still enforced; see `fipsgate explain fips_disable_failed`.".to_string(),
        ),
        fingerprint: None,
        data: json!({ "library": library, "message": message }),
    }
}
