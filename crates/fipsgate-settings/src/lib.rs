//! Config parsing and preset resolution.
//!
//! This crate is intentionally IO-free: it parses and resolves configuration provided as strings.

#![forbid(unsafe_code)]

mod model;
mod presets;
mod resolve;

pub use model::{AttributeConfig, FipsgateConfigV1, KeySizeConfig, SCHEMA_CONFIG_V1};
pub use presets::{available_profiles, DEFAULT_PROFILE};
pub use resolve::{to_config, Overrides, ResolvedConfig, SettingsError};

/// Parse `fipsgate.toml` (or equivalent) into a typed model.
pub fn parse_config_toml(input: &str) -> anyhow::Result<FipsgateConfigV1> {
    let cfg: FipsgateConfigV1 = toml::from_str(input)?;
    Ok(cfg)
}

/// Resolve the policy table used by the engine (preset + config + overrides).
pub fn resolve_config(
    cfg: FipsgateConfigV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    resolve::resolve_config(cfg, overrides)
}

/// Render a policy table as a `fipsgate.toml` document with every list spelled out.
pub fn render_config_toml(table: &fipsgate_domain::PolicyTable) -> anyhow::Result<String> {
    Ok(toml::to_string(&to_config(table))?)
}
