//! Masking `serde_json::Value` trees directly.
//!
//! The walk mirrors the token traversal: object members with scalar values are
//! masked when their name matches, everything else is walked. Values are never
//! converted to tokens and back, so no intermediate tree is built.

use serde_json::Value as JsonValue;

use super::{masker::Masker, traversal::Maskable};
use crate::{policy::NameComparison, token::TokenKind};

impl Maskable for JsonValue {
    fn mask_with<C>(&self, masker: &Masker<C>) -> Self
    where
        C: NameComparison,
    {
        match self {
            Self::Object(map) => Self::Object(
                map.iter()
                    .map(|(name, value)| {
                        let masked = if is_scalar(value) && masker.should_mask(name) {
                            JsonValue::from(masker.mask_value())
                        } else {
                            value.mask_with(masker)
                        };
                        (name.clone(), masked)
                    })
                    .collect(),
            ),
            Self::Array(items) => {
                Self::Array(items.iter().map(|item| item.mask_with(masker)).collect())
            }
            scalar => scalar.clone(),
        }
    }

    fn kind_label(&self) -> &'static str {
        match self {
            Self::Object(_) => TokenKind::Object.as_str(),
            Self::Array(_) => TokenKind::Array.as_str(),
            _ => TokenKind::Scalar.as_str(),
        }
    }
}

fn is_scalar(value: &JsonValue) -> bool {
    !matches!(value, JsonValue::Object(_) | JsonValue::Array(_))
}
