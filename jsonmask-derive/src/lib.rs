//! Derive macros for `jsonmask`.
//!
//! This crate generates the `jsonmask::SensitiveFields` implementation behind
//! `#[derive(SensitiveFields)]`. It:
//! - reads `#[sensitive]` and `#[sensitive(rename = "...")]` field attributes
//! - emits the list of sensitive property names as a `'static` slice
//!
//! It does **not** mask anything. Masking lives in the main `jsonmask` crate.

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

#[allow(unused_extern_crates)]
extern crate proc_macro;

use proc_macro_crate::{FoundCrate, crate_name};
use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::{Data, DeriveInput, Result, parse_macro_input};

mod derive_struct;
mod strategy;
use derive_struct::{collect_sensitive_names, reject_duplicates};

/// Derives `jsonmask::SensitiveFields` for structs with named fields.
///
/// # Field Attributes
///
/// - **No annotation**: the field is not sensitive and contributes no name.
/// - `#[sensitive]`: the field name (without any `r#` prefix) is a sensitive
///   property name.
/// - `#[sensitive(rename = "wireName")]`: `wireName` is the sensitive property
///   name. Use this when the serialized name differs from the Rust field name.
///
/// Names are emitted in field declaration order. Marking the same property
/// name twice is a compile error.
///
/// Enums, unions and tuple structs are rejected at compile time.
#[proc_macro_derive(SensitiveFields, attributes(sensitive))]
pub fn derive_sensitive_fields(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match expand(input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.into_compile_error().into(),
    }
}

fn expand(input: DeriveInput) -> Result<TokenStream> {
    let DeriveInput {
        ident,
        generics,
        data,
        ..
    } = input;

    let names = match &data {
        Data::Struct(data) => collect_sensitive_names(data)?,
        Data::Enum(data) => {
            return Err(syn::Error::new(
                data.enum_token.span,
                "`SensitiveFields` cannot be derived for enums",
            ));
        }
        Data::Union(data) => {
            return Err(syn::Error::new(
                data.union_token.span,
                "`SensitiveFields` cannot be derived for unions",
            ));
        }
    };
    reject_duplicates(&names)?;

    let trait_path = crate_path("SensitiveFields");
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics #trait_path for #ident #ty_generics #where_clause {
            fn sensitive_fields() -> &'static [&'static str] {
                &[#(#names),*]
            }
        }
    })
}

/// Returns the token stream to reference the jsonmask crate root.
///
/// Handles crate renaming (e.g., `masking = { package = "jsonmask", ... }`).
/// Inside `jsonmask` itself, including its doctests, the path is
/// `::jsonmask`, which the library provides through `extern crate self`.
fn crate_root() -> TokenStream {
    match crate_name("jsonmask") {
        Ok(FoundCrate::Itself) => quote! { ::jsonmask },
        Ok(FoundCrate::Name(name)) => {
            let ident = format_ident!("{}", name);
            quote! { ::#ident }
        }
        Err(_) => quote! { ::jsonmask },
    }
}

fn crate_path(item: &str) -> TokenStream {
    let root = crate_root();
    let item_ident = format_ident!("{}", item);
    quote! { #root::#item_ident }
}
