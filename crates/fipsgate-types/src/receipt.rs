use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use time::OffsetDateTime;

/// Stable schema identifier for fipsgate reports.
pub const SCHEMA_REPORT_V1: &str = "fipsgate.report.v1";

/// Severity is intentionally small: it maps cleanly onto log levels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Warning,
    Error,
}

impl Severity {
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Warning => "warning",
            Severity::Error => "error",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Finding {
    pub severity: Severity,
    pub check_id: String,
    pub code: String,
    pub message: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub help: Option<String>,

    /// Stable identifier intended for dedup across runs. A hash of
    /// `check_id + code + salient fields`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fingerprint: Option<String>,

    /// Check-specific structured payload (kept open-ended for forward compatibility).
    #[serde(default, skip_serializing_if = "serde_json::Value::is_null")]
    pub data: JsonValue,
}

/// `pass` means the asserted algorithm set already satisfies every restriction
/// FIPS mode would impose; `fail` means FIPS mode has to be turned off.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Pass,
    Fail,
}

/// What happened to the host's FIPS enforcement flag, when the run touched it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum HostAction {
    /// The host library was not enforcing FIPS mode; nothing was evaluated.
    NotEnforced,
    /// FIPS mode stays on: the assertions satisfy the policy.
    RestrictionsSatisfied,
    /// Dry run: FIPS mode would have been disabled.
    WouldDisable,
    /// FIPS mode was disabled.
    Disabled,
    /// Disabling was attempted and the host library refused; FIPS mode is still on.
    DisableFailed,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ToolMeta {
    pub name: String,
    pub version: String,
}

/// Fipsgate-specific summary payload for the report.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema, Default)]
pub struct FipsgateData {
    /// `attributes` (attribute-gated) or `algorithms` (default restriction set only).
    pub gate: String,
    pub profile: String,

    pub algorithms_scanned: u32,
    pub attributes_scanned: u32,

    /// Table attributes that were asserted by the host, in table order.
    #[serde(default)]
    pub attributes_matched: Vec<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub host_action: Option<HostAction>,
}

/// Report envelope written by `fipsgate check` and `fipsgate apply`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct FipsgateReport {
    /// Versioned schema identifier for the envelope shape.
    pub schema: String,
    pub tool: ToolMeta,
    #[schemars(with = "String")]
    #[serde(with = "time::serde::rfc3339")]
    pub started_at: OffsetDateTime,
    #[schemars(with = "String")]
    #[serde(with = "time::serde::rfc3339")]
    pub finished_at: OffsetDateTime,
    pub verdict: Verdict,
    pub findings: Vec<Finding>,
    pub data: FipsgateData,
}
