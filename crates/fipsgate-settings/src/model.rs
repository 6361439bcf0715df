use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

pub const SCHEMA_CONFIG_V1: &str = "fipsgate.config.v1";

/// `fipsgate.toml` schema v1.
///
/// This is a *user-facing* config model: it is intentionally permissive so forward-compat is easy.
/// A list left out inherits from the preset (top level) or from the top level (attribute entries).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct FipsgateConfigV1 {
    /// Optional schema string for tooling (`fipsgate.config.v1`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    /// Preset to start from: `swtpm` (default) or `none`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile: Option<String>,

    /// Algorithms a FIPS-mode host library refuses to run.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disabled_algorithms: Option<Vec<String>>,

    /// Minimum key sizes, keyed by assertion prefix.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key_sizes: Option<Vec<KeySizeConfig>>,

    /// Attribute-gated restriction sets, evaluated in order.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attributes: Option<Vec<AttributeConfig>>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct KeySizeConfig {
    /// Assertion prefix, e.g. `ecc-min-size=`.
    pub prefix: String,
    pub min_size: u64,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct AttributeConfig {
    /// Host attribute that activates this entry, e.g. `fips-host`.
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disabled_algorithms: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key_sizes: Option<Vec<KeySizeConfig>>,
}
