//! Recursive, type-preserving masking of token trees.

use super::masker::Masker;
use crate::{
    policy::NameComparison,
    token::{Array, Object, Property, Scalar, Token, TokenKind},
};

/// A node type that can be masked.
///
/// `mask_with` reads `self` and builds a new value of the same type; a
/// [`Property`] stays a `Property`, an [`Object`] stays an `Object`. Callers
/// normally go through [`Masker::mask`] or
/// [`MaskValuesExt`](super::MaskValuesExt) instead of calling this directly.
pub trait Maskable: Clone {
    /// Returns a masked copy of `self`.
    #[must_use]
    fn mask_with<C>(&self, masker: &Masker<C>) -> Self
    where
        C: NameComparison;

    /// Short label for the kind of node, recorded in trace events.
    fn kind_label(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}

impl Maskable for Token {
    fn mask_with<C>(&self, masker: &Masker<C>) -> Self
    where
        C: NameComparison,
    {
        match self {
            Self::Object(object) => Self::Object(object.mask_with(masker)),
            Self::Array(array) => Self::Array(array.mask_with(masker)),
            Self::Property(property) => Self::Property(property.mask_with(masker)),
            Self::Scalar(scalar) => Self::Scalar(scalar.mask_with(masker)),
        }
    }

    fn kind_label(&self) -> &'static str {
        self.kind().as_str()
    }
}

impl Maskable for Object {
    fn mask_with<C>(&self, masker: &Masker<C>) -> Self
    where
        C: NameComparison,
    {
        // Duplicate names are each checked on their own.
        self.iter().map(|member| member.mask_with(masker)).collect()
    }

    fn kind_label(&self) -> &'static str {
        TokenKind::Object.as_str()
    }
}

impl Maskable for Array {
    fn mask_with<C>(&self, masker: &Masker<C>) -> Self
    where
        C: NameComparison,
    {
        // Bare scalar elements have no name to match, so they come back as is.
        self.iter().map(|item| item.mask_with(masker)).collect()
    }

    fn kind_label(&self) -> &'static str {
        TokenKind::Array.as_str()
    }
}

impl Maskable for Property {
    fn mask_with<C>(&self, masker: &Masker<C>) -> Self
    where
        C: NameComparison,
    {
        Property::new(self.name(), masker.mask_member(self.name(), self.value()))
    }

    fn kind_label(&self) -> &'static str {
        TokenKind::Property.as_str()
    }
}

impl Maskable for Scalar {
    fn mask_with<C>(&self, _masker: &Masker<C>) -> Self
    where
        C: NameComparison,
    {
        self.clone()
    }

    fn kind_label(&self) -> &'static str {
        TokenKind::Scalar.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy::{CaseSensitivity, MaskOptions};

    fn masker() -> Masker {
        Masker::new(["password"])
    }

    #[test]
    fn scalar_root_is_unchanged() {
        let scalar = Scalar::from("password");
        assert_eq!(scalar.mask_with(&masker()), scalar);
    }

    #[test]
    fn property_with_matching_name_is_masked() {
        let property = Property::new("password", "badpassword123");
        let masked = property.mask_with(&masker());
        assert_eq!(masked.name(), "password");
        assert_eq!(masked.value(), &Token::from("***"));
    }

    #[test]
    fn property_with_other_name_is_kept() {
        let property = Property::new("name", "Sam");
        assert_eq!(property.mask_with(&masker()), property);
    }

    #[test]
    fn property_holding_object_is_walked() {
        let property = Property::new(
            "password",
            Object::new()
                .with_member("password", "x")
                .with_member("hint", "y"),
        );

        let masked = property.mask_with(&masker());
        let inner = masked.value().as_object().expect("object value");
        assert_eq!(inner.get("password"), Some(&Token::from("***")));
        assert_eq!(inner.get("hint"), Some(&Token::from("y")));
    }

    #[test]
    fn array_scalars_are_never_masked() {
        let array: Array = [Token::from("password"), Token::from(123)]
            .into_iter()
            .collect();
        assert_eq!(array.mask_with(&masker()), array);
    }

    #[test]
    fn duplicate_members_are_each_masked() {
        let object = Object::new()
            .with_member("password", "a")
            .with_member("PASSWORD", "b")
            .with_member("password", Object::new());

        let masked = object.mask_with(&masker());
        let values: Vec<&Token> = masked.iter().map(Property::value).collect();
        assert_eq!(
            values,
            [
                &Token::from("***"),
                &Token::from("***"),
                &Token::from(Object::new())
            ]
        );
    }

    #[test]
    fn respects_case_sensitive_policy() {
        let masker = Masker::with_options(
            ["password"],
            MaskOptions::new().with_comparison(CaseSensitivity::Sensitive),
        );
        let object = Object::new().with_member("PASSWORD", "x");
        assert_eq!(object.mask_with(&masker), object);
    }

    #[test]
    fn kind_labels_follow_token_kind() {
        assert_eq!(Token::from(Object::new()).kind_label(), "object");
        assert_eq!(Token::from(Array::new()).kind_label(), "array");
        assert_eq!(Property::new("pin", 1).kind_label(), "property");
        assert_eq!(Token::from(true).kind_label(), "scalar");
    }
}
