use crate::policy::{KeySizeRequirement, PolicyTable};
use fipsgate_types::Finding;

pub mod algorithm_set;
pub mod attribute_gate;
mod utils;

pub use utils::parse_decimal_suffix;

#[cfg(test)]
mod tests;

/// Checks one disabled-algorithm list and one key-size list against the
/// enabled algorithms.
pub struct AlgorithmSetChecker;

impl AlgorithmSetChecker {
    pub fn evaluate<S: AsRef<str>>(
        assertions: &[S],
        disabled: &[String],
        requirements: &[KeySizeRequirement],
    ) -> bool {
        let mut out = Vec::new();
        algorithm_set::run(assertions, disabled, requirements, None, &mut out)
    }

    /// Like [`AlgorithmSetChecker::evaluate`], appending the warnings to `out`.
    pub fn evaluate_into<S: AsRef<str>>(
        assertions: &[S],
        disabled: &[String],
        requirements: &[KeySizeRequirement],
        out: &mut Vec<Finding>,
    ) -> bool {
        algorithm_set::run(assertions, disabled, requirements, None, out)
    }
}

/// Runs the algorithm set check for every table attribute the host asserts.
#[derive(Clone, Copy, Debug)]
pub struct AttributePolicyGate<'t> {
    table: &'t PolicyTable,
}

impl<'t> AttributePolicyGate<'t> {
    pub fn new(table: &'t PolicyTable) -> Self {
        Self { table }
    }

    pub fn evaluate<A, S>(&self, attributes: &[A], algorithms: &[S]) -> bool
    where
        A: AsRef<str>,
        S: AsRef<str>,
    {
        let mut out = Vec::new();
        attribute_gate::run(self.table, attributes, algorithms, &mut out).satisfied
    }

    /// Like [`AttributePolicyGate::evaluate`], appending findings to `out` and
    /// reporting which attributes were evaluated.
    pub fn evaluate_into<A, S>(
        &self,
        attributes: &[A],
        algorithms: &[S],
        out: &mut Vec<Finding>,
    ) -> attribute_gate::GateOutcome
    where
        A: AsRef<str>,
        S: AsRef<str>,
    {
        attribute_gate::run(self.table, attributes, algorithms, out)
    }
}
