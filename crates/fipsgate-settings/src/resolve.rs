use crate::model::{AttributeConfig, FipsgateConfigV1, KeySizeConfig, SCHEMA_CONFIG_V1};
use crate::presets::{self, available_profiles, DEFAULT_PROFILE};
use anyhow::Context;
use fipsgate_domain::{AttributePolicy, KeySizeRequirement, PolicyTable};
use std::collections::BTreeSet;

#[derive(Clone, Debug, Default)]
pub struct Overrides {
    pub profile: Option<String>,
}

#[derive(Clone, Debug)]
pub struct ResolvedConfig {
    pub table: PolicyTable,
}

#[derive(Clone, Debug, thiserror::Error, PartialEq, Eq)]
pub enum SettingsError {
    #[error("unknown profile: {profile} (expected one of: {expected})")]
    UnknownProfile { profile: String, expected: String },

    #[error("unsupported config schema: {0} (expected fipsgate.config.v1)")]
    UnsupportedSchema(String),

    #[error("empty algorithm name in {context}")]
    EmptyAlgorithm { context: String },

    #[error("empty key size prefix in {context}")]
    EmptyPrefix { context: String },

    #[error("duplicate key size prefix '{prefix}' in {context}")]
    DuplicatePrefix { prefix: String, context: String },

    #[error("attribute entry {index} has an empty name")]
    EmptyAttribute { index: usize },

    #[error("duplicate attribute '{0}'")]
    DuplicateAttribute(String),
}

pub fn resolve_config(
    cfg: FipsgateConfigV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    if let Some(schema) = cfg.schema.as_deref()
        && schema != SCHEMA_CONFIG_V1
    {
        return Err(SettingsError::UnsupportedSchema(schema.to_string()).into());
    }

    let profile = overrides
        .profile
        .clone()
        .or(cfg.profile.clone())
        .unwrap_or_else(|| DEFAULT_PROFILE.to_string());

    let preset = presets::preset(&profile).ok_or_else(|| SettingsError::UnknownProfile {
        profile: profile.clone(),
        expected: available_profiles().join(", "),
    })?;

    let disabled_algorithms = cfg
        .disabled_algorithms
        .unwrap_or(preset.disabled_algorithms);
    validate_algorithms("disabled_algorithms", &disabled_algorithms)?;

    let key_sizes = cfg.key_sizes.unwrap_or(preset.key_sizes);
    let key_sizes = resolve_key_sizes("key_sizes", key_sizes)?;

    let attribute_configs = cfg.attributes.unwrap_or(preset.attributes);
    let mut seen = BTreeSet::new();
    let mut attributes = Vec::with_capacity(attribute_configs.len());
    for (index, ac) in attribute_configs.into_iter().enumerate() {
        if ac.name.trim().is_empty() {
            return Err(SettingsError::EmptyAttribute { index }.into());
        }
        if !seen.insert(ac.name.clone()) {
            return Err(SettingsError::DuplicateAttribute(ac.name).into());
        }
        attributes.push(
            resolve_attribute(ac, &disabled_algorithms, &key_sizes)
                .with_context(|| format!("invalid attribute entry {index}"))?,
        );
    }

    Ok(ResolvedConfig {
        table: PolicyTable {
            profile: preset.profile.to_string(),
            disabled_algorithms,
            key_sizes,
            attributes,
        },
    })
}

/// Lists left out of an attribute entry share the top-level lists.
fn resolve_attribute(
    ac: AttributeConfig,
    default_disabled: &[String],
    default_key_sizes: &[KeySizeRequirement],
) -> anyhow::Result<AttributePolicy> {
    let context = format!("attribute '{}'", ac.name);

    let disabled_algorithms = match ac.disabled_algorithms {
        Some(list) => {
            validate_algorithms(&context, &list)?;
            list
        }
        None => default_disabled.to_vec(),
    };
    let key_sizes = match ac.key_sizes {
        Some(list) => resolve_key_sizes(&context, list)?,
        None => default_key_sizes.to_vec(),
    };

    Ok(AttributePolicy {
        attribute: ac.name,
        disabled_algorithms,
        key_sizes,
    })
}

fn validate_algorithms(context: &str, algorithms: &[String]) -> Result<(), SettingsError> {
    if algorithms.iter().any(|a| a.trim().is_empty()) {
        return Err(SettingsError::EmptyAlgorithm {
            context: context.to_string(),
        });
    }
    Ok(())
}

fn resolve_key_sizes(
    context: &str,
    key_sizes: Vec<KeySizeConfig>,
) -> Result<Vec<KeySizeRequirement>, SettingsError> {
    let mut seen = BTreeSet::new();
    key_sizes
        .into_iter()
        .map(|k| {
            // An empty prefix would match every assertion.
            if k.prefix.is_empty() {
                return Err(SettingsError::EmptyPrefix {
                    context: context.to_string(),
                });
            }
            if !seen.insert(k.prefix.clone()) {
                return Err(SettingsError::DuplicatePrefix {
                    prefix: k.prefix,
                    context: context.to_string(),
                });
            }
            Ok(KeySizeRequirement::new(k.prefix, k.min_size))
        })
        .collect()
}

/// The config document that resolves back to `table`, with every list explicit.
pub fn to_config(table: &PolicyTable) -> FipsgateConfigV1 {
    let key_sizes = |reqs: &[KeySizeRequirement]| {
        reqs.iter()
            .map(|k| KeySizeConfig {
                prefix: k.prefix.clone(),
                min_size: k.min_size,
            })
            .collect::<Vec<_>>()
    };

    FipsgateConfigV1 {
        schema: Some(SCHEMA_CONFIG_V1.to_string()),
        profile: Some(table.profile.clone()),
        disabled_algorithms: Some(table.disabled_algorithms.clone()),
        key_sizes: Some(key_sizes(&table.key_sizes)),
        attributes: Some(
            table
                .attributes
                .iter()
                .map(|p| AttributeConfig {
                    name: p.attribute.clone(),
                    disabled_algorithms: Some(p.disabled_algorithms.clone()),
                    key_sizes: Some(key_sizes(&p.key_sizes)),
                })
                .collect(),
        ),
    }
}
