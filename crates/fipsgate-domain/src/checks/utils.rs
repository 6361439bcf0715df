/// Read the number that follows a key-size prefix.
///
/// Skips leading ASCII whitespace and an optional `+`, then reads the leading
/// run of decimal digits. Anything else yields `0`; trailing text is ignored and
/// values too large for `u64` saturate.
pub fn parse_decimal_suffix(suffix: &str) -> u64 {
    let s = suffix.trim_start_matches(|c: char| c.is_ascii_whitespace());
    let s = s.strip_prefix('+').unwrap_or(s);

    s.bytes()
        .take_while(u8::is_ascii_digit)
        .fold(0u64, |acc, b| {
            acc.saturating_mul(10).saturating_add(u64::from(b - b'0'))
        })
}

pub fn contains_exact<S: AsRef<str>>(haystack: &[S], needle: &str) -> bool {
    haystack.iter().any(|s| s.as_ref() == needle)
}

/// First entry starting with `prefix`, and the text after it.
pub fn find_prefixed<'a, S: AsRef<str>>(haystack: &'a [S], prefix: &str) -> Option<&'a str> {
    haystack
        .iter()
        .find_map(|s| s.as_ref().strip_prefix(prefix))
}
