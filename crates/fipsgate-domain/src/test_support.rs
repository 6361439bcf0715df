use crate::policy::{AttributePolicy, KeySizeRequirement, PolicyTable};
use fipsgate_types::Finding;

pub fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub fn req(prefix: &str, min_size: u64) -> KeySizeRequirement {
    KeySizeRequirement::new(prefix, min_size)
}

pub fn fips_disabled() -> Vec<String> {
    strings(&["camellia", "rsaes", "tdes"])
}

pub fn fips_key_sizes() -> Vec<KeySizeRequirement> {
    vec![req("ecc-min-size=", 224)]
}

pub fn attribute_policy(
    attribute: &str,
    disabled: &[&str],
    key_sizes: Vec<KeySizeRequirement>,
) -> AttributePolicy {
    AttributePolicy {
        attribute: attribute.to_string(),
        disabled_algorithms: strings(disabled),
        key_sizes,
    }
}

pub fn table_with(attributes: Vec<AttributePolicy>) -> PolicyTable {
    PolicyTable {
        profile: "test".to_string(),
        disabled_algorithms: fips_disabled(),
        key_sizes: fips_key_sizes(),
        attributes,
    }
}

pub fn codes(findings: &[Finding]) -> Vec<&str> {
    findings.iter().map(|f| f.code.as_str()).collect()
}
