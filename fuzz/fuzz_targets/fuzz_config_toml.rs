//! Fuzz target for `fipsgate.toml` parsing and resolution.
//!
//! Goal: parsing and resolving should **never panic** on any input.
//! Invalid documents are errors, not crashes.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_config_toml
//! ```

#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(cfg) = fipsgate_settings::parse_config_toml(text) else {
        return;
    };
    if let Ok(resolved) = fipsgate_settings::resolve_config(cfg, Default::default()) {
        // A resolved table must render back to a document that resolves again.
        let rendered = fipsgate_settings::render_config_toml(&resolved.table)
            .expect("resolved table renders");
        let reparsed = fipsgate_settings::parse_config_toml(&rendered).expect("rendered toml parses");
        let again = fipsgate_settings::resolve_config(reparsed, Default::default())
            .expect("rendered config resolves");
        assert_eq!(again.table, resolved.table);
    }
});
