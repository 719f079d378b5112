//! The masking engine.
//!
//! - **`masker`**: [`Masker`], a configured engine (names, comparison policy,
//!   replacement value)
//! - **`traversal`**: [`Maskable`], the type-preserving recursive transform,
//!   implemented for every token type
//! - **`entry`**: call-site helpers ([`mask`], [`MaskValuesExt`]) that treat
//!   absent inputs as no-ops
//! - **`output`**: [`MaskedJson`], masked documents captured for logging
//!   (requires `json`)
//!
//! Only scalar values are ever replaced. A property whose name matches but
//! whose value is an object or array is walked into, never replaced wholesale.

mod entry;
#[cfg(feature = "json")]
mod json;
mod masker;
#[cfg(feature = "json")]
mod output;
mod traversal;

pub use entry::{MaskValuesExt, mask};
pub use masker::Masker;
#[cfg(feature = "json")]
pub use output::{MaskedJson, MaskedJsonExt};
pub use traversal::Maskable;
