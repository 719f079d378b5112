//! Masking policy: how property names are matched and what replaces a match.
//!
//! - **Comparison** (`comparison`): the [`NameComparison`] trait and the
//!   built-in [`CaseSensitivity`] policies.
//! - **Options** (`options`): [`MaskOptions`], the configuration value passed
//!   to the masking entry points, and [`DEFAULT_MASK`].

pub mod comparison;
pub mod options;

pub use comparison::{CaseSensitivity, NameComparison};
pub use options::{DEFAULT_MASK, MaskOptions};
