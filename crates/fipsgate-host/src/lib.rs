//! Adapters for the host cryptographic library's FIPS enforcement flag.
//!
//! The policy engine never touches the host library. Callers query
//! [`FipsModeController::is_enabled`], run the evaluation, and only call
//! [`FipsModeController::disable`] when the evaluation failed.
//!
//! # Safety
//!
//! With the `openssl` feature this crate calls into libcrypto. The `unsafe`
//! code is confined to the `openssl` module.

#![deny(unsafe_code)]

#[cfg(feature = "openssl")]
mod openssl;

#[cfg(test)]
mod ossl_version;

#[cfg(feature = "openssl")]
pub use crate::openssl::OpensslFipsMode;

/// Failure reported by the host library.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HostError {
    /// Turning enforcement off failed; `message` is the library's own error text.
    #[error("failed to disable {library} FIPS mode: {message}")]
    Disable {
        library: &'static str,
        message: String,
    },
}

/// Query and toggle the host library's FIPS enforcement.
pub trait FipsModeController {
    /// Library name used in log lines (`OpenSSL`).
    fn library(&self) -> &'static str;

    /// True if the library currently enforces restricted-mode behavior.
    fn is_enabled(&self) -> bool;

    /// Turn enforcement off. Attempted once; failures are not retried.
    fn disable(&self) -> Result<(), HostError>;
}

/// Host library without a FIPS API: never enforcing, nothing to disable.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoFipsHost;

impl FipsModeController for NoFipsHost {
    fn library(&self) -> &'static str {
        "host"
    }

    fn is_enabled(&self) -> bool {
        false
    }

    fn disable(&self) -> Result<(), HostError> {
        Ok(())
    }
}

/// The controller for the library this build links against.
pub fn host_controller() -> Box<dyn FipsModeController> {
    #[cfg(feature = "openssl")]
    {
        Box::new(OpensslFipsMode::new())
    }
    #[cfg(not(feature = "openssl"))]
    {
        tracing::debug!("built without the openssl feature; FIPS mode is never enforced");
        Box::new(NoFipsHost)
    }
}
