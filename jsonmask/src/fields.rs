//! Sensitive property names declared by Rust types.
//!
//! `#[derive(SensitiveFields)]` (from `jsonmask-derive`, re-exported behind the
//! `derive` feature) implements [`SensitiveFields`] from `#[sensitive]` field
//! attributes, so the names to mask can live next to the type that serializes
//! into the document.

/// A type that knows which of its serialized property names are sensitive.
///
/// ```rust
/// use jsonmask::{Masker, SensitiveFields};
///
/// #[derive(SensitiveFields)]
/// struct Login {
///     username: String,
///     #[sensitive]
///     password: String,
///     #[sensitive(rename = "apiKey")]
///     api_key: String,
/// }
///
/// assert_eq!(Login::sensitive_fields(), &["password", "apiKey"]);
///
/// let masker = Masker::for_type::<Login>();
/// assert!(masker.should_mask("APIKEY"));
/// ```
pub trait SensitiveFields {
    /// Property names to mask, in field declaration order.
    fn sensitive_fields() -> &'static [&'static str];
}
