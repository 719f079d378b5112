//! Struct-specific `SensitiveFields` derivation.
//!
//! Collects the property name contributed by each `#[sensitive]` field, in
//! declaration order.

use syn::{DataStruct, Fields, LitStr, Result, spanned::Spanned};

use crate::strategy::{Strategy, parse_field_strategy};

pub(crate) fn collect_sensitive_names(data: &DataStruct) -> Result<Vec<LitStr>> {
    let fields = match &data.fields {
        Fields::Named(fields) => fields,
        Fields::Unnamed(fields) => {
            return Err(syn::Error::new(
                fields.span(),
                "`SensitiveFields` requires named fields; tuple structs have no property names",
            ));
        }
        Fields::Unit => return Ok(Vec::new()),
    };

    let mut names = Vec::new();
    for field in &fields.named {
        let Some(ident) = &field.ident else {
            continue;
        };
        match parse_field_strategy(&field.attrs)? {
            Strategy::Skip => {}
            Strategy::FieldName => {
                let name = ident.to_string();
                let name = name.strip_prefix("r#").unwrap_or(&name);
                names.push(LitStr::new(name, ident.span()));
            }
            Strategy::Renamed(name) => names.push(name),
        }
    }
    Ok(names)
}

/// Rejects a second occurrence of the same property name.
pub(crate) fn reject_duplicates(names: &[LitStr]) -> Result<()> {
    for (index, name) in names.iter().enumerate() {
        let value = name.value();
        if names[..index].iter().any(|earlier| earlier.value() == value) {
            return Err(syn::Error::new(
                name.span(),
                format!("property name `{value}` is marked sensitive more than once"),
            ));
        }
    }
    Ok(())
}
