//! Parsing of `#[sensitive]` field attributes.
//!
//! This module maps attribute syntax to a per-field decision and produces
//! structured errors for invalid forms.

use proc_macro2::Span;
use syn::{Attribute, LitStr, Meta, Result, spanned::Spanned};

/// What a field contributes to the sensitive name list.
///
/// | Attribute                          | Strategy         | Contributed name |
/// |------------------------------------|------------------|------------------|
/// | None                               | `Skip`           | nothing          |
/// | `#[sensitive]`                     | `FieldName`      | the field name   |
/// | `#[sensitive(rename = "wireName")]`| `Renamed(name)`  | `wireName`       |
#[derive(Clone, Debug)]
pub(crate) enum Strategy {
    /// No annotation: the field is not sensitive.
    Skip,
    /// `#[sensitive]`: the Rust field name is the property name.
    FieldName,
    /// `#[sensitive(rename = "...")]`: an explicit property name.
    Renamed(LitStr),
}

fn set_strategy(target: &mut Option<Strategy>, next: Strategy, span: Span) -> Result<()> {
    if target.is_some() {
        return Err(syn::Error::new(
            span,
            "multiple #[sensitive] attributes on the same field",
        ));
    }
    *target = Some(next);
    Ok(())
}

pub(crate) fn parse_field_strategy(attrs: &[Attribute]) -> Result<Strategy> {
    let mut strategy: Option<Strategy> = None;
    for attr in attrs {
        if !attr.path().is_ident("sensitive") {
            continue;
        }

        match &attr.meta {
            Meta::Path(_) => {
                set_strategy(&mut strategy, Strategy::FieldName, attr.span())?;
            }
            Meta::List(list) => {
                let mut rename: Option<LitStr> = None;
                list.parse_nested_meta(|meta| {
                    if meta.path.is_ident("rename") {
                        if rename.is_some() {
                            return Err(meta.error("duplicate `rename` in #[sensitive(...)]"));
                        }
                        let name: LitStr = meta.value()?.parse()?;
                        if name.value().is_empty() {
                            return Err(syn::Error::new(
                                name.span(),
                                "`rename` must not be empty",
                            ));
                        }
                        rename = Some(name);
                        Ok(())
                    } else {
                        Err(meta.error(
                            "unsupported #[sensitive] option: expected `rename = \"...\"`",
                        ))
                    }
                })?;
                let next = rename.map_or(Strategy::FieldName, Strategy::Renamed);
                set_strategy(&mut strategy, next, attr.span())?;
            }
            Meta::NameValue(_) => {
                return Err(syn::Error::new(
                    attr.span(),
                    "expected #[sensitive] or #[sensitive(rename = \"...\")]",
                ));
            }
        }
    }

    Ok(strategy.unwrap_or(Strategy::Skip))
}
