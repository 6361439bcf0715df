use sha2::{Digest, Sha256};

/// Compute a stable SHA-256 fingerprint for a policy finding.
///
/// Identity fields:
/// - check_id
/// - code
/// - governing attribute (if the finding came from an attribute-gated set)
/// - subject (the algorithm name or key-size prefix)
pub fn fingerprint_for_finding(
    check_id: &str,
    code: &str,
    attribute: Option<&str>,
    subject: &str,
) -> String {
    let mut parts = vec![check_id, code];
    if let Some(a) = attribute {
        parts.push(a);
    }
    parts.push(subject);
    let canonical = parts.join("|");

    let mut hasher = Sha256::new();
    hasher.update(canonical.as_bytes());
    let digest = hasher.finalize();
    hex::encode(digest)
}
