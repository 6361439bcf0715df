//! Report envelope construction and serialization.

use anyhow::Context;
use fipsgate_domain::report::DomainReport;
use fipsgate_types::{
    ids, Finding, FipsgateData, FipsgateReport, Severity, ToolMeta, Verdict, SCHEMA_REPORT_V1,
};
use time::OffsetDateTime;

pub(crate) fn tool_meta() -> ToolMeta {
    ToolMeta {
        name: "fipsgate".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    }
}

pub(crate) fn envelope(started_at: OffsetDateTime, domain: DomainReport) -> FipsgateReport {
    FipsgateReport {
        schema: SCHEMA_REPORT_V1.to_string(),
        tool: tool_meta(),
        started_at,
        finished_at: OffsetDateTime::now_utc(),
        verdict: domain.verdict,
        findings: domain.findings,
        data: domain.data,
    }
}

/// Log a finding at the level matching its severity.
pub(crate) fn log_finding(finding: &Finding) {
    match finding.severity {
        Severity::Info => tracing::info!(
            check_id = %finding.check_id,
            code = %finding.code,
            "{}",
            finding.message
        ),
        Severity::Warning => tracing::warn!(
            check_id = %finding.check_id,
            code = %finding.code,
            "{}",
            finding.message
        ),
        Severity::Error => tracing::error!(
            check_id = %finding.check_id,
            code = %finding.code,
            "{}",
            finding.message
        ),
    }
}

pub fn serialize_report(report: &FipsgateReport) -> anyhow::Result<Vec<u8>> {
    let mut data = serde_json::to_vec_pretty(report).context("serialize report")?;
    data.push(b'\n');
    Ok(data)
}

/// Report written when the tool itself failed (bad config, unreadable input).
pub fn runtime_error_report(message: &str) -> FipsgateReport {
    let now = OffsetDateTime::now_utc();
    FipsgateReport {
        schema: SCHEMA_REPORT_V1.to_string(),
        tool: tool_meta(),
        started_at: now,
        finished_at: now,
        verdict: Verdict::Fail,
        findings: vec![Finding {
            severity: Severity::Error,
            check_id: ids::CHECK_TOOL_RUNTIME.to_string(),
            code: ids::CODE_RUNTIME_ERROR.to_string(),
            message: message.to_string(),
            help: Some("Fix the error above and re-run fipsgate.".to_string()),
            fingerprint: None,
            data: serde_json::Value::Null,
        }],
        data: FipsgateData {
            gate: "none".to_string(),
            profile: "unknown".to_string(),
            ..FipsgateData::default()
        },
    }
}
