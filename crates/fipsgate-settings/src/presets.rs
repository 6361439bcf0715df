use crate::model::{AttributeConfig, KeySizeConfig};
use fipsgate_domain::policy::{ATTRIBUTE_FIPS_HOST, BUILTIN_PROFILE};
use fipsgate_domain::PolicyTable;

pub const DEFAULT_PROFILE: &str = BUILTIN_PROFILE;
pub const PROFILE_NONE: &str = "none";

/// Preset before inheritance is applied. Attribute entries without lists
/// share the top-level ones.
pub(crate) struct Preset {
    pub profile: &'static str,
    pub disabled_algorithms: Vec<String>,
    pub key_sizes: Vec<KeySizeConfig>,
    pub attributes: Vec<AttributeConfig>,
}

/// Preset profiles are opinionated defaults.
///
/// Keep these small and readable. Anything complex should go into config.
pub(crate) fn preset(profile: &str) -> Option<Preset> {
    match profile {
        BUILTIN_PROFILE => Some(swtpm_profile()),
        PROFILE_NONE => Some(none_profile()),
        _ => None,
    }
}

pub fn available_profiles() -> &'static [&'static str] {
    &[BUILTIN_PROFILE, PROFILE_NONE]
}

fn swtpm_profile() -> Preset {
    let builtin = PolicyTable::builtin();
    Preset {
        profile: BUILTIN_PROFILE,
        disabled_algorithms: builtin.disabled_algorithms,
        key_sizes: builtin
            .key_sizes
            .into_iter()
            .map(|k| KeySizeConfig {
                prefix: k.prefix,
                min_size: k.min_size,
            })
            .collect(),
        // disables a few algorithms and key sizes itself, but still needs the defaults
        attributes: vec![AttributeConfig {
            name: ATTRIBUTE_FIPS_HOST.to_string(),
            disabled_algorithms: None,
            key_sizes: None,
        }],
    }
}

fn none_profile() -> Preset {
    Preset {
        profile: PROFILE_NONE,
        disabled_algorithms: Vec::new(),
        key_sizes: Vec::new(),
        attributes: Vec::new(),
    }
}
