// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! The override gate.
//!
//! A base cog marks a key as overridable by setting it to the literal
//! boolean `true`. Override files may replace those keys and nothing else:
//! they cannot add keys and cannot touch keys with any other value,
//! including truthy ones like `"true"` or `1`.

use serde_json::Value;
use std::collections::HashSet;

use super::schema::Cog;

/// Apply `source` onto `target` through the override gate.
///
/// Returns the target for chaining. A `source` that is not a JSON object
/// leaves the target untouched.
pub fn override_object<'a>(target: &'a mut Cog, source: &Value) -> &'a mut Cog {
    target.apply_override(source);
    target
}

/// Keys a base cog marked overridable, captured before any layer runs.
///
/// Gating every layer against the base file's flags rather than the
/// partially merged cog lets a later layer replace a value an earlier layer
/// already set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OverridableKeys(HashSet<String>);

impl OverridableKeys {
    pub fn contains(&self, key: &str) -> bool {
        self.0.contains(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Cog {
    /// Keys whose value is the literal `true`.
    pub fn overridable_keys(&self) -> OverridableKeys {
        OverridableKeys(
            self.as_map()
                .iter()
                .filter(|(_, value)| matches!(value, Value::Bool(true)))
                .map(|(key, _)| key.clone())
                .collect(),
        )
    }

    /// Apply an override layer gated on this cog's current values and
    /// return the keys that were replaced, in override file order.
    pub fn apply_override(&mut self, source: &Value) -> Vec<String> {
        self.apply_gated(source, |_, current| matches!(current, Value::Bool(true)))
    }

    /// Apply an override layer gated on flags captured from the base cog.
    pub fn apply_layer(&mut self, source: &Value, flags: &OverridableKeys) -> Vec<String> {
        self.apply_gated(source, |key, _| flags.contains(key))
    }

    fn apply_gated<F>(&mut self, source: &Value, is_open: F) -> Vec<String>
    where
        F: Fn(&str, &Value) -> bool,
    {
        let Value::Object(source) = source else {
            tracing::debug!("Ignoring override that is not a JSON object");
            return Vec::new();
        };

        let target = self.as_map_mut();
        let mut replaced = Vec::new();

        for (key, value) in source {
            if let Some(slot) = target.get_mut(key) {
                if is_open(key, slot) {
                    *slot = value.clone();
                    replaced.push(key.clone());
                }
            }
        }

        replaced
    }
}
