//! `OPENSSL_VERSION_NUMBER` handling shared by `build.rs` and the unit tests.

/// Whether the hex version number (as exported by openssl-sys) is OpenSSL 3.x
/// or later. `None` when the text is not a hex number.
pub fn is_ossl300(version: &str) -> Option<bool> {
    let version = u64::from_str_radix(version.trim(), 16).ok()?;
    Some(version >= 0x3000_0000)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn three_x_selects_provider_api() {
        assert_eq!(is_ossl300("30000020"), Some(true));
        assert_eq!(is_ossl300("30500010\n"), Some(true));
    }

    #[test]
    fn one_one_selects_legacy_api() {
        assert_eq!(is_ossl300("101010bf"), Some(false));
    }

    #[test]
    fn non_hex_is_rejected() {
        assert_eq!(is_ossl300("garbage"), None);
        assert_eq!(is_ossl300(""), None);
    }
}
