//! Use case orchestration for fipsgate.
//!
//! This crate provides the application layer: use cases that coordinate config resolution,
//! the policy engine, and the host FIPS controller. It is intentionally thin.
//!
//! The CLI crate depends on this; it only handles argument parsing and I/O.

#![forbid(unsafe_code)]

mod apply;
mod check;
mod explain;
mod policy;
mod render;
mod report;

pub use apply::{run_apply, ApplyInput, ApplyOutput, DisableFailed};
pub use check::{run_check, verdict_exit_code, CheckInput, CheckOutput};
pub use explain::{run_explain, ExplainOutput};
pub use policy::{resolve_policy, run_policy, PolicyFormat};
pub use render::{format_explanation, format_not_found, render_text};
pub use report::{runtime_error_report, serialize_report};

/// What `apply` did to the host's FIPS enforcement.
pub use fipsgate_types::HostAction as FipsAction;
