#![allow(unsafe_code)]

use crate::{FipsModeController, HostError};
use ::openssl::error::ErrorStack;
use std::os::raw::c_int;
#[cfg(ossl300)]
use std::os::raw::c_void;

#[cfg(ossl300)]
unsafe extern "C" {
    fn EVP_default_properties_is_fips_enabled(libctx: *mut c_void) -> c_int;
    fn EVP_default_properties_enable_fips(libctx: *mut c_void, enable: c_int) -> c_int;
}

#[cfg(not(ossl300))]
unsafe extern "C" {
    fn FIPS_mode() -> c_int;
    fn FIPS_mode_set(onoff: c_int) -> c_int;
}

/// OpenSSL's process-wide FIPS flag (default library context).
#[derive(Debug)]
pub struct OpensslFipsMode {
    _private: (),
}

impl OpensslFipsMode {
    pub fn new() -> Self {
        openssl_sys::init();
        Self { _private: () }
    }
}

impl Default for OpensslFipsMode {
    fn default() -> Self {
        Self::new()
    }
}

impl FipsModeController for OpensslFipsMode {
    fn library(&self) -> &'static str {
        "OpenSSL"
    }

    fn is_enabled(&self) -> bool {
        // SAFETY: a null library context selects the default one; the call only reads state.
        #[cfg(ossl300)]
        let mode = unsafe { EVP_default_properties_is_fips_enabled(std::ptr::null_mut()) };
        // SAFETY: no arguments; reads the global FIPS flag.
        #[cfg(not(ossl300))]
        let mode = unsafe { FIPS_mode() };

        tracing::debug!(mode, "queried OpenSSL FIPS mode");
        mode != 0
    }

    fn disable(&self) -> Result<(), HostError> {
        // SAFETY: a null library context selects the default one.
        #[cfg(ossl300)]
        let rc = unsafe { EVP_default_properties_enable_fips(std::ptr::null_mut(), 0) };
        // SAFETY: plain integer argument.
        #[cfg(not(ossl300))]
        let rc = unsafe { FIPS_mode_set(0) };

        if rc == 1 {
            return Ok(());
        }

        let stack = ErrorStack::get();
        let message = if stack.errors().is_empty() {
            format!("call returned {rc} without an error code")
        } else {
            stack.to_string()
        };
        Err(HostError::Disable {
            library: self.library(),
            message,
        })
    }
}
