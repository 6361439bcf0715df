use fipsgate_types::{Finding, FipsgateData, Verdict};

#[derive(Clone, Debug)]
pub struct DomainReport {
    /// The boolean answer: `false` means FIPS mode has to be turned off.
    pub satisfied: bool,
    pub verdict: Verdict,
    /// Findings in emission order.
    pub findings: Vec<Finding>,
    pub data: FipsgateData,
}
