//! Masked output for logging boundaries.

use std::fmt;

use serde::Serialize;
use serde_json::Value as JsonValue;

use super::{masker::Masker, traversal::Maskable};
use crate::policy::NameComparison;

/// A document that has already been masked, held as JSON.
///
/// Only built from masked values; the logging adapters accept this type so
/// that an unmasked document cannot reach a sink by accident.
#[derive(Clone, Debug, PartialEq)]
pub struct MaskedJson(JsonValue);

impl MaskedJson {
    /// Masks `root` with `masker` and captures the result as JSON.
    ///
    /// If the masked value cannot be represented as JSON, the stored value is a
    /// JSON string starting with `"Failed to serialize masked value"`.
    pub fn capture<T, C>(root: &T, masker: &Masker<C>) -> Self
    where
        T: Maskable + Serialize,
        C: NameComparison,
    {
        let masked = masker.mask(root);
        let json = serde_json::to_value(&masked).unwrap_or_else(|err| {
            JsonValue::String(format!("Failed to serialize masked value: {err}"))
        });
        Self(json)
    }

    pub fn value(&self) -> &JsonValue {
        &self.0
    }

    pub fn into_value(self) -> JsonValue {
        self.0
    }
}

impl fmt::Display for MaskedJson {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Extension trait producing a [`MaskedJson`] from any serializable document.
pub trait MaskedJsonExt: Maskable + Serialize {
    /// Masks `self` and captures the result for logging.
    fn masked_json<C>(&self, masker: &Masker<C>) -> MaskedJson
    where
        C: NameComparison,
    {
        MaskedJson::capture(self, masker)
    }
}

impl<T> MaskedJsonExt for T where T: Maskable + Serialize {}
