//! Call-site entry points.
//!
//! These helpers own the no-op rules: an absent root stays absent, and an
//! absent or empty name list returns the root unchanged. Everything else is
//! delegated to [`Masker`].

use super::{masker::Masker, traversal::Maskable};
use crate::policy::{MaskOptions, NameComparison};

/// Masks `root` with the given names and options.
///
/// - `root == None` returns `None`.
/// - `names == None` or an empty slice returns a copy of `root`.
///
/// ```rust
/// use jsonmask::{MaskOptions, Property, mask};
///
/// let property = Property::new("password", "hunter2");
///
/// let masked = mask(Some(&property), Some(&["password"][..]), &MaskOptions::new());
/// assert_eq!(masked.unwrap().value().as_str(), Some("***"));
///
/// let untouched = mask(Some(&property), None::<&[&str]>, &MaskOptions::new());
/// assert_eq!(untouched, Some(property));
/// ```
pub fn mask<T, S, C>(
    root: Option<&T>,
    names: Option<&[S]>,
    options: &MaskOptions<C>,
) -> Option<T>
where
    T: Maskable,
    S: AsRef<str>,
    C: NameComparison + Clone,
{
    let root = root?;
    match names {
        Some(names) if !names.is_empty() => Some(root.mask_values_with(names, options)),
        _ => Some(root.clone()),
    }
}

/// Extension methods for masking any [`Maskable`] value in place of building a
/// [`Masker`] by hand.
pub trait MaskValuesExt: Maskable {
    /// Masks with the default options: case-insensitive names, `"***"` mask.
    #[must_use]
    fn mask_values<S>(&self, names: &[S]) -> Self
    where
        S: AsRef<str>,
    {
        self.mask_values_with(names, &MaskOptions::new())
    }

    /// Masks with explicit options.
    #[must_use]
    fn mask_values_with<S, C>(&self, names: &[S], options: &MaskOptions<C>) -> Self
    where
        S: AsRef<str>,
        C: NameComparison + Clone,
    {
        if names.is_empty() {
            return self.clone();
        }
        let masker = Masker::with_options(names.iter().map(|name| name.as_ref()), options.clone());
        masker.mask(self)
    }
}

impl<T> MaskValuesExt for T where T: Maskable {}
