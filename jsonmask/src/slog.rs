//! Adapters for emitting masked documents through `slog`.
//!
//! This module connects [`Masker`](crate::Masker) with `slog` by providing
//! `slog::Value` implementations that serialize masked documents as structured
//! JSON via `slog`'s nested-value support.
//!
//! It is responsible for:
//! - Ensuring the logged representation is the masked copy, never the input.
//! - Avoiding fallible logging APIs: serialization failures become placeholder
//!   strings rather than errors.
//!
//! It does not configure `slog` or decide which names are sensitive.

use serde::Serialize;
use slog::{Key, Record, Result as SlogResult, Serializer, Value as SlogValue};

pub use crate::mask::MaskedJson;
use crate::{
    mask::{Maskable, Masker},
    policy::NameComparison,
};

/// Marker trait for types whose `slog::Value` always emits masked output.
///
/// ```compile_fail
/// use jsonmask::slog::SlogMasked;
///
/// fn assert_slog_masked<T: SlogMasked>() {}
///
/// assert_slog_masked::<String>();
/// ```
pub trait SlogMasked: SlogValue {}

impl<T: SlogMasked + ?Sized> SlogMasked for &T {}

impl SlogValue for MaskedJson {
    fn serialize(
        &self,
        record: &Record<'_>,
        key: Key,
        serializer: &mut dyn Serializer,
    ) -> SlogResult {
        let nested = slog::Serde(self.value().clone());
        SlogValue::serialize(&nested, record, key, serializer)
    }
}

impl SlogMasked for MaskedJson {}

/// Extension trait for logging masked documents with `slog`.
///
/// ```ignore
/// use jsonmask::slog::SlogMaskedExt;
///
/// info!(logger, "request"; "body" => body.slog_masked_json(&masker));
/// ```
pub trait SlogMaskedExt: Maskable + Serialize {
    /// Masks `self` and returns a `slog::Value` that serializes as structured JSON.
    fn slog_masked_json<C>(&self, masker: &Masker<C>) -> MaskedJson
    where
        C: NameComparison,
    {
        MaskedJson::capture(self, masker)
    }
}

impl<T> SlogMaskedExt for T where T: Maskable + Serialize {}
