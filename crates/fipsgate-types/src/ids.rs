//! Stable identifiers for checks and finding codes.
//!
//! `check_id` is a dotted namespace. `code` is a short snake_case discriminator.

// Checks
pub const CHECK_FIPS_ALGORITHM_SET: &str = "fips.algorithm_set";
pub const CHECK_FIPS_ATTRIBUTE_GATE: &str = "fips.attribute_gate";
pub const CHECK_HOST_FIPS_MODE: &str = "host.fips_mode";

// Codes: fips.algorithm_set
pub const CODE_DISABLED_ALGORITHM_ENABLED: &str = "disabled_algorithm_enabled";
pub const CODE_MISSING_KEY_SIZE_STATEMENT: &str = "missing_key_size_statement";
pub const CODE_INSUFFICIENT_KEY_SIZE: &str = "insufficient_key_size";

// Codes: fips.attribute_gate
pub const CODE_NO_POLICY_ATTRIBUTE: &str = "no_policy_attribute";

// Codes: host.fips_mode
pub const CODE_FIPS_MODE_DISABLED: &str = "fips_mode_disabled";
pub const CODE_FIPS_DISABLE_FAILED: &str = "fips_disable_failed";

// Tool-level
pub const CHECK_TOOL_RUNTIME: &str = "tool.runtime";
pub const CODE_RUNTIME_ERROR: &str = "runtime_error";
