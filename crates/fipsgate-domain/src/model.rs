/// The two assertion lists a caller hands to the engine.
///
/// Both are ordered and may contain duplicates. Evaluation never reorders them.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AssertionSet {
    /// Enabled algorithms and `<prefix><number>` statements, e.g. `ecc-min-size=256`.
    pub algorithms: Vec<String>,

    /// Capabilities the host asserts, e.g. `fips-host`.
    pub attributes: Vec<String>,
}

impl AssertionSet {
    pub fn new<A, B>(algorithms: A, attributes: B) -> Self
    where
        A: IntoIterator,
        A::Item: Into<String>,
        B: IntoIterator,
        B::Item: Into<String>,
    {
        Self {
            algorithms: algorithms.into_iter().map(Into::into).collect(),
            attributes: attributes.into_iter().map(Into::into).collect(),
        }
    }
}
