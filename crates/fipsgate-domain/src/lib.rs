//! Pure policy evaluation (no IO).
//!
//! Input: algorithm and attribute assertions plus a policy table constructed elsewhere.
//! Output: findings + verdict + summary data.

#![forbid(unsafe_code)]

pub mod checks;
pub mod model;
pub mod policy;
pub mod report;

mod engine;
mod fingerprint;

#[cfg(test)]
mod proptest;
#[cfg(test)]
mod test_support;

pub use checks::{AlgorithmSetChecker, AttributePolicyGate};
pub use engine::evaluate;
pub use model::AssertionSet;
pub use policy::{AttributePolicy, Gate, KeySizeRequirement, PolicyTable};

/// Whether `algorithms` avoids everything the table's default restriction set
/// forbids, without consulting host attributes.
///
/// `false` means the host library's FIPS mode must be turned off.
pub fn algorithms_are_disabled<S: AsRef<str>>(table: &PolicyTable, algorithms: &[S]) -> bool {
    AlgorithmSetChecker::evaluate(algorithms, &table.disabled_algorithms, &table.key_sizes)
}

/// Whether the attributes asserted by the host switch off every algorithm and
/// key size that would be a problem under FIPS mode.
///
/// `false` means the host library's FIPS mode must be turned off. This is also
/// the answer when none of the table's attributes is asserted.
pub fn attributes_disable_bad_algorithms<A, S>(
    table: &PolicyTable,
    attributes: &[A],
    algorithms: &[S],
) -> bool
where
    A: AsRef<str>,
    S: AsRef<str>,
{
    AttributePolicyGate::new(table).evaluate(attributes, algorithms)
}
