use serde::Serialize;

pub const BUILTIN_PROFILE: &str = "swtpm";
pub const ATTRIBUTE_FIPS_HOST: &str = "fips-host";

/// A prefix such as `ecc-min-size=` and the smallest number that may follow it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct KeySizeRequirement {
    pub prefix: String,
    pub min_size: u64,
}

impl KeySizeRequirement {
    pub fn new(prefix: impl Into<String>, min_size: u64) -> Self {
        Self {
            prefix: prefix.into(),
            min_size,
        }
    }
}

/// Restrictions that apply while the host asserts `attribute`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct AttributePolicy {
    pub attribute: String,
    pub disabled_algorithms: Vec<String>,
    pub key_sizes: Vec<KeySizeRequirement>,
}

/// Immutable policy data. Built once (preset or resolved config) and shared by reference.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PolicyTable {
    pub profile: String,

    /// Default restriction set: algorithms a FIPS-mode host library refuses to run.
    pub disabled_algorithms: Vec<String>,

    /// Default restriction set: minimum key sizes under FIPS mode.
    pub key_sizes: Vec<KeySizeRequirement>,

    /// Attribute-gated restriction sets, evaluated in this order.
    pub attributes: Vec<AttributePolicy>,
}

impl PolicyTable {
    /// The table a software TPM needs on a FIPS-mode OpenSSL host.
    pub fn builtin() -> Self {
        let disabled_algorithms: Vec<String> = ["camellia", "rsaes", "tdes"]
            .into_iter()
            .map(String::from)
            .collect();
        let key_sizes = vec![KeySizeRequirement::new("ecc-min-size=", 224)];

        Self {
            profile: BUILTIN_PROFILE.to_string(),
            attributes: vec![AttributePolicy {
                attribute: ATTRIBUTE_FIPS_HOST.to_string(),
                disabled_algorithms: disabled_algorithms.clone(),
                key_sizes: key_sizes.clone(),
            }],
            disabled_algorithms,
            key_sizes,
        }
    }

    /// A table with no restrictions and no attributes.
    pub fn empty(profile: impl Into<String>) -> Self {
        Self {
            profile: profile.into(),
            disabled_algorithms: Vec::new(),
            key_sizes: Vec::new(),
            attributes: Vec::new(),
        }
    }

    pub fn attribute_policy(&self, attribute: &str) -> Option<&AttributePolicy> {
        self.attributes.iter().find(|p| p.attribute == attribute)
    }
}

impl Default for PolicyTable {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Which decision procedure the engine runs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Gate {
    /// Attribute-gated restriction sets (the usual startup check).
    #[default]
    Attributes,
    /// The table's default restriction set, ignoring attributes.
    Algorithms,
}

impl Gate {
    pub fn as_str(self) -> &'static str {
        match self {
            Gate::Attributes => "attributes",
            Gate::Algorithms => "algorithms",
        }
    }
}
