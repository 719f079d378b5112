//! Masking configuration.

use super::comparison::{CaseSensitivity, NameComparison};
use crate::token::Scalar;

/// Default replacement for masked values.
pub const DEFAULT_MASK: &str = "***";

/// Configuration for a masking pass: how names are compared and what replaces
/// a masked value.
///
/// ```rust
/// use jsonmask::{CaseSensitivity, MaskOptions, Scalar};
///
/// let options = MaskOptions::new()
///     .with_comparison(CaseSensitivity::Sensitive)
///     .with_mask("[hidden]");
/// assert_eq!(options.mask_value(), &Scalar::from("[hidden]"));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct MaskOptions<C = CaseSensitivity> {
    comparison: C,
    mask: Scalar,
}

impl MaskOptions {
    /// Case-insensitive comparison, masking with [`DEFAULT_MASK`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Default for MaskOptions {
    fn default() -> Self {
        Self {
            comparison: CaseSensitivity::default(),
            mask: Scalar::String(DEFAULT_MASK.to_owned()),
        }
    }
}

impl<C> MaskOptions<C>
where
    C: NameComparison,
{
    /// Uses a different name comparison policy.
    #[must_use]
    pub fn with_comparison<D>(self, comparison: D) -> MaskOptions<D>
    where
        D: NameComparison,
    {
        MaskOptions {
            comparison,
            mask: self.mask,
        }
    }

    /// Replaces masked values with `mask`. An empty string is kept as is.
    #[must_use]
    pub fn with_mask(mut self, mask: impl Into<String>) -> Self {
        self.mask = Scalar::String(mask.into());
        self
    }

    /// Replaces masked values with JSON `null`.
    #[must_use]
    pub fn with_null_mask(mut self) -> Self {
        self.mask = Scalar::Null;
        self
    }

    /// Replaces masked values with `mask`, or with `null` when `mask` is `None`.
    #[must_use]
    pub fn with_optional_mask(self, mask: Option<impl Into<String>>) -> Self {
        match mask {
            Some(mask) => self.with_mask(mask),
            None => self.with_null_mask(),
        }
    }

    pub fn comparison(&self) -> &C {
        &self.comparison
    }

    /// The scalar substituted for every masked value.
    pub fn mask_value(&self) -> &Scalar {
        &self.mask
    }

    pub(crate) fn into_parts(self) -> (C, Scalar) {
        (self.comparison, self.mask)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_stars_and_insensitive() {
        let options = MaskOptions::new();
        assert_eq!(options.mask_value(), &Scalar::from("***"));
        assert_eq!(options.comparison(), &CaseSensitivity::Insensitive);
    }

    #[test]
    fn keeps_empty_mask_verbatim() {
        let options = MaskOptions::new().with_mask("");
        assert_eq!(options.mask_value(), &Scalar::from(""));
    }

    #[test]
    fn optional_mask_none_is_null() {
        let options = MaskOptions::new().with_optional_mask(None::<String>);
        assert!(options.mask_value().is_null());

        let options = MaskOptions::new().with_optional_mask(Some("x"));
        assert_eq!(options.mask_value(), &Scalar::from("x"));
    }

    #[test]
    fn switching_comparison_keeps_mask() {
        let options = MaskOptions::new()
            .with_mask("#")
            .with_comparison(CaseSensitivity::Sensitive);
        assert_eq!(options.mask_value(), &Scalar::from("#"));
        assert_eq!(options.comparison(), &CaseSensitivity::Sensitive);
    }
}
