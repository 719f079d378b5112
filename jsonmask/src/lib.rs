//! Property-name masking for JSON-like document trees.
//!
//! Given a document and a set of property names, this crate builds a copy of
//! the document in which every scalar value held by a matching property is
//! replaced with a marker (`"***"` by default), at any depth, inside objects
//! and inside arrays of objects.
//!
//! This crate provides:
//! - a generic token model ([`Token`]: object, array, property, scalar)
//! - the masking engine ([`Masker`], [`Maskable`]) and its call-site helpers
//! - pluggable name comparison ([`NameComparison`], [`CaseSensitivity`])
//! - integrations behind feature flags (`json`, `slog`, `tracing`)
//!
//! What it does not do:
//! - parse documents (use `serde_json` with the `json` feature)
//! - match on paths or values; only whole property names are compared
//! - mutate its input
//!
//! ```rust
//! use jsonmask::{Array, MaskValuesExt, Object, Token};
//!
//! let students: Array = [
//!     Object::new().with_member("name", "Bob").with_member("password", "abc"),
//!     Object::new().with_member("name", "Sue").with_member("password", 42),
//! ]
//! .into_iter()
//! .collect();
//! let document = Token::from(Object::new().with_member("students", students));
//!
//! let masked = document.mask_values(&["password"]);
//! assert_eq!(
//!     masked.to_string(),
//!     r#"{"students":[{"name":"Bob","password":"***"},{"name":"Sue","password":"***"}]}"#
//! );
//! ```

// <https://doc.rust-lang.org/rustc/lints/listing/allowed-by-default.html>
#![warn(
    anonymous_parameters,
    bare_trait_objects,
    elided_lifetimes_in_paths,
    missing_copy_implementations,
    rust_2018_idioms,
    trivial_casts,
    trivial_numeric_casts,
    unreachable_pub,
    unsafe_code,
    unused_extern_crates,
    unused_import_braces
)]
// <https://rust-lang.github.io/rust-clippy/stable>
#![warn(
    clippy::all,
    clippy::cargo,
    clippy::dbg_macro,
    clippy::float_cmp_const,
    clippy::get_unwrap,
    clippy::mem_forget,
    clippy::nursery,
    clippy::pedantic,
    clippy::todo,
    clippy::unwrap_used,
    clippy::uninlined_format_args
)]
// Allow some clippy lints
#![allow(
    clippy::default_trait_access,
    clippy::doc_markdown,
    clippy::if_not_else,
    clippy::module_name_repetitions,
    clippy::multiple_crate_versions,
    clippy::must_use_candidate,
    clippy::needless_pass_by_value,
    clippy::needless_ifs,
    clippy::use_self,
    clippy::cargo_common_metadata,
    clippy::missing_errors_doc,
    clippy::enum_glob_use,
    clippy::struct_excessive_bools,
    clippy::missing_const_for_fn,
    clippy::redundant_pub_crate,
    clippy::result_large_err,
    clippy::future_not_send,
    clippy::option_if_let_else,
    clippy::from_over_into,
    clippy::manual_inspect
)]
// Allow some lints while testing
#![cfg_attr(test, allow(clippy::non_ascii_literal, clippy::unwrap_used))]

#[cfg(feature = "derive")]
pub use jsonmask_derive::SensitiveFields;

#[allow(unused_extern_crates)]
extern crate self as jsonmask;

// Module declarations
mod fields;
mod mask;
pub mod policy;
#[cfg(feature = "slog")]
pub mod slog;
pub mod token;
#[cfg(feature = "tracing")]
pub mod tracing;

pub use fields::SensitiveFields;
// Re-exports from mask module
pub use mask::{MaskValuesExt, Maskable, Masker, mask};
#[cfg(feature = "json")]
pub use mask::{MaskedJson, MaskedJsonExt};
// Re-exports from policy module
pub use policy::{CaseSensitivity, DEFAULT_MASK, MaskOptions, NameComparison};
// Re-exports from token module
pub use token::{Array, Number, Object, Property, Scalar, Token, TokenKind};
