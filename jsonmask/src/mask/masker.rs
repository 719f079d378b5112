//! A configured masking engine.

use super::traversal::Maskable;
use crate::{
    fields::SensitiveFields,
    policy::{CaseSensitivity, MaskOptions, NameComparison},
    token::{Scalar, Token},
};

/// Masks the values of named properties anywhere in a document tree.
///
/// A `Masker` holds no state between calls: it is the set of names to mask,
/// the comparison policy used to match them and the replacement value. The
/// input tree is only read; every call builds a new tree.
///
/// ```rust
/// use jsonmask::{Masker, Object, Token};
///
/// let masker = Masker::new(["password"]);
/// let document = Token::from(
///     Object::new()
///         .with_member("user", "sam")
///         .with_member("Password", "hunter2"),
/// );
///
/// let masked = masker.mask(&document);
/// assert_eq!(masked.to_string(), r#"{"user":"sam","Password":"***"}"#);
/// ```
#[derive(Clone, Debug)]
pub struct Masker<C = CaseSensitivity> {
    names: Vec<String>,
    comparison: C,
    mask: Scalar,
}

impl Masker {
    /// Builds a masker with [`MaskOptions::default`].
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::with_options(names, MaskOptions::new())
    }

    /// Builds a masker from the names a type declares with `#[sensitive]`.
    pub fn for_type<T>() -> Self
    where
        T: SensitiveFields,
    {
        Self::new(T::sensitive_fields().iter().copied())
    }
}

impl<C> Masker<C>
where
    C: NameComparison,
{
    pub fn with_options<I, S>(names: I, options: MaskOptions<C>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let (comparison, mask) = options.into_parts();
        Self {
            names: names.into_iter().map(Into::into).collect(),
            comparison,
            mask,
        }
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Returns `true` when there is nothing to mask.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn comparison(&self) -> &C {
        &self.comparison
    }

    /// The scalar substituted for every masked value.
    pub fn mask_value(&self) -> &Scalar {
        &self.mask
    }

    /// Returns `true` if `name` equals any configured name under the comparison
    /// policy.
    pub fn should_mask(&self, name: &str) -> bool {
        self.names
            .iter()
            .any(|candidate| self.comparison.names_equal(name, candidate))
    }

    /// Returns a masked copy of `root`, of the same type.
    ///
    /// With no configured names the result is a plain copy of `root`.
    pub fn mask<T>(&self, root: &T) -> T
    where
        T: Maskable,
    {
        #[cfg(feature = "tracing")]
        tracing::trace!(
            root = root.kind_label(),
            names = self.names.len(),
            null_mask = self.mask.is_null(),
            "masking document"
        );

        if self.is_empty() {
            return root.clone();
        }
        root.mask_with(self)
    }

    /// Like [`Masker::mask`], passing an absent root through as `None`.
    pub fn mask_option<T>(&self, root: Option<&T>) -> Option<T>
    where
        T: Maskable,
    {
        root.map(|root| self.mask(root))
    }

    /// Produces the new value for a member named `name`.
    ///
    /// Scalars under a matching name are replaced; anything else is walked.
    pub(crate) fn mask_member(&self, name: &str, value: &Token) -> Token {
        if value.is_scalar() && self.should_mask(name) {
            Token::Scalar(self.mask.clone())
        } else {
            value.mask_with(self)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::Property;

    #[test]
    fn should_mask_checks_every_name() {
        let masker = Masker::new(["password", "ssn"]);
        assert!(masker.should_mask("SSN"));
        assert!(masker.should_mask("Password"));
        assert!(!masker.should_mask("pass"));
    }

    #[test]
    fn mask_member_replaces_only_scalars() {
        let masker = Masker::new(["secret"]);
        assert_eq!(
            masker.mask_member("secret", &Token::from(42)),
            Token::from("***")
        );

        let nested = Token::from(Property::new("other", 1));
        assert_eq!(masker.mask_member("secret", &nested), nested);
    }

    #[test]
    fn empty_masker_copies_input() {
        let masker = Masker::new(Vec::<String>::new());
        assert!(masker.is_empty());

        let token = Token::from(Property::new("password", "x"));
        assert_eq!(masker.mask(&token), token);
    }

    #[test]
    fn mask_option_passes_none_through() {
        let masker = Masker::new(["password"]);
        assert_eq!(masker.mask_option::<Token>(None), None);
    }
}
