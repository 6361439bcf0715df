//! Config resolution shared by every use case, and the `policy` use case that
//! prints the effective table.

use anyhow::Context;
use fipsgate_settings::{FipsgateConfigV1, Overrides, ResolvedConfig};

/// Output encoding for `run_policy`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PolicyFormat {
    /// A `fipsgate.toml` that resolves back to the same table.
    Toml,
    Json,
}

/// Parse `config_text` (empty means the preset alone) and resolve the policy table.
pub fn resolve_policy(config_text: &str, overrides: Overrides) -> anyhow::Result<ResolvedConfig> {
    let cfg = if config_text.trim().is_empty() {
        FipsgateConfigV1::default()
    } else {
        fipsgate_settings::parse_config_toml(config_text).context("parse config")?
    };

    fipsgate_settings::resolve_config(cfg, overrides).context("resolve config")
}

/// Render the effective policy table.
pub fn run_policy(
    config_text: &str,
    overrides: Overrides,
    format: PolicyFormat,
) -> anyhow::Result<String> {
    let resolved = resolve_policy(config_text, overrides)?;
    match format {
        PolicyFormat::Toml => {
            fipsgate_settings::render_config_toml(&resolved.table).context("render policy")
        }
        PolicyFormat::Json => {
            let mut json = serde_json::to_string_pretty(&resolved.table)
                .context("serialize policy")?;
            json.push('\n');
            Ok(json)
        }
    }
}
