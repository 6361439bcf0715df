//! Shared test utilities for the fipsgate workspace.
//!
//! The app unit tests and the CLI integration tests both use these, so they
//! live in their own crate rather than behind `#[cfg(test)]`.

#![forbid(unsafe_code)]

use fipsgate_host::{FipsModeController, HostError};
use serde_json::Value;
use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};

/// Scripted [`FipsModeController`] that records how it was driven.
#[derive(Debug, Default)]
pub struct FakeFipsMode {
    enabled: AtomicBool,
    fail_with: Option<String>,
    disable_calls: AtomicU32,
}

impl FakeFipsMode {
    /// Enforcing host whose `disable()` succeeds.
    pub fn enabled() -> Self {
        Self {
            enabled: AtomicBool::new(true),
            ..Self::default()
        }
    }

    /// Host that does not enforce FIPS mode.
    pub fn not_enabled() -> Self {
        Self::default()
    }

    /// Enforcing host whose `disable()` fails with `message`.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            enabled: AtomicBool::new(true),
            fail_with: Some(message.into()),
            ..Self::default()
        }
    }

    pub fn disable_calls(&self) -> u32 {
        self.disable_calls.load(Ordering::SeqCst)
    }
}

impl FipsModeController for FakeFipsMode {
    fn library(&self) -> &'static str {
        "OpenSSL"
    }

    fn is_enabled(&self) -> bool {
        self.enabled.load(Ordering::SeqCst)
    }

    fn disable(&self) -> Result<(), HostError> {
        self.disable_calls.fetch_add(1, Ordering::SeqCst);
        match &self.fail_with {
            Some(message) => Err(HostError::Disable {
                library: self.library(),
                message: message.clone(),
            }),
            None => {
                self.enabled.store(false, Ordering::SeqCst);
                Ok(())
            }
        }
    }
}

/// Normalize non-deterministic JSON fields for golden comparison.
///
/// `tool.version` is replaced only on a root report envelope (`schema`,
/// `tool`, `verdict`, `findings` all present) so finding payloads that
/// happen to carry a `tool` object stay untouched. `started_at` and
/// `finished_at` are replaced at any depth.
pub fn normalize_nondeterministic(mut value: Value) -> Value {
    if let Some(obj) = value.as_object_mut() {
        let is_envelope = ["schema", "tool", "verdict", "findings"]
            .iter()
            .all(|key| obj.contains_key(*key));
        if is_envelope
            && let Some(tool) = obj.get_mut("tool").and_then(Value::as_object_mut)
            && tool.contains_key("version")
        {
            tool.insert("version".into(), Value::String("__VERSION__".into()));
        }
    }
    normalize_timestamps(&mut value);
    value
}

fn normalize_timestamps(value: &mut Value) {
    match value {
        Value::Object(map) => {
            for key in ["started_at", "finished_at"] {
                if let Some(slot) = map.get_mut(key) {
                    *slot = Value::String("__TIMESTAMP__".into());
                }
            }
            map.values_mut().for_each(normalize_timestamps);
        }
        Value::Array(items) => items.iter_mut().for_each(normalize_timestamps),
        _ => {}
    }
}
