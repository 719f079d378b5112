//! Adapters for emitting masked documents through `tracing`.
//!
//! ```ignore
//! use jsonmask::tracing::TracingMaskedExt;
//!
//! tracing::info!(body = %body.tracing_masked(&masker), "request");
//! ```

use serde::Serialize;
use tracing::field::{DisplayValue, display};

use crate::{
    mask::{Maskable, MaskedJson, Masker},
    policy::NameComparison,
};

/// Marker trait for types whose `tracing` output is always masked.
///
/// ```compile_fail
/// use jsonmask::tracing::TracingMasked;
///
/// fn assert_tracing_masked<T: TracingMasked>() {}
///
/// assert_tracing_masked::<String>();
/// ```
pub trait TracingMasked {}

impl<T: TracingMasked + ?Sized> TracingMasked for &T {}

impl TracingMasked for MaskedJson {}

/// Extension trait for logging masked documents as compact JSON strings.
pub trait TracingMaskedExt: Maskable + Serialize {
    /// Masks `self` and wraps the compact JSON text as a tracing display value.
    fn tracing_masked<C>(&self, masker: &Masker<C>) -> DisplayValue<String>
    where
        C: NameComparison,
    {
        display(MaskedJson::capture(self, masker).to_string())
    }
}

impl<T> TracingMaskedExt for T where T: Maskable + Serialize {}
