use std::env;

#[path = "src/ossl_version.rs"]
mod ossl_version;

fn main() {
    println!("cargo::rustc-check-cfg=cfg(ossl300)");
    if env::var_os("CARGO_FEATURE_OPENSSL").is_none() {
        return;
    }

    // Exported by openssl-sys (`links = "openssl"`).
    let version = env::var("DEP_OPENSSL_VERSION_NUMBER").unwrap_or_default();
    match ossl_version::is_ossl300(&version) {
        Some(true) => println!("cargo::rustc-cfg=ossl300"),
        Some(false) => {}
        None => println!(
            "cargo::warning=openssl feature is on but DEP_OPENSSL_VERSION_NUMBER is {version:?}; \
             building against the OpenSSL 1.x FIPS API"
        ),
    }
}
