//! Struct-specific `Censorable` derivation.
//!
//! Only `#[censor]` fields are bound; everything else is matched with `..` so
//! it stays untouched and needs no bounds. Named fields are bound under
//! generated names so they cannot shadow the `policy` parameter.

use proc_macro2::{Ident, TokenStream};
use quote::{format_ident, quote, quote_spanned};
use syn::{spanned::Spanned, DataStruct, Field, Fields, Result};

use crate::{
    crate_path,
    generics::collect_generics_from_type,
    strategy::{parse_censor_strategy, CensorStrategy},
    types::is_scalar_type,
    CensorOutput,
};

/// Binding used for a named `#[censor]` field in generated patterns.
pub(crate) fn named_binding(field: &Ident) -> Ident {
    format_ident!("__censor_{}", field)
}

/// Returns the walk statement for a censored field, or `None` when the field
/// is not marked.
pub(crate) fn censor_field(
    field: &Field,
    binding: &Ident,
    generics: &syn::Generics,
    used_generics: &mut Vec<Ident>,
) -> Result<Option<TokenStream>> {
    let span = field.span();
    match parse_censor_strategy(&field.attrs)? {
        CensorStrategy::Untouched => Ok(None),
        CensorStrategy::Walk => {
            if is_scalar_type(&field.ty) {
                return Err(syn::Error::new(
                    span,
                    "scalar fields cannot be censored: only text and containers of text \
                    can carry #[censor]",
                ));
            }
            collect_generics_from_type(&field.ty, generics, used_generics);
            let censorable_path = crate_path("Censorable");
            Ok(Some(quote_spanned! { span =>
                #censorable_path::censor_with(#binding, policy);
            }))
        }
    }
}

pub(crate) fn derive_struct(generics: &syn::Generics, data: DataStruct) -> Result<CensorOutput> {
    let mut used_generics = Vec::new();
    let mut walks = Vec::new();

    let body = match data.fields {
        Fields::Named(fields) => {
            let mut bindings = Vec::new();
            for field in &fields.named {
                let Some(ident) = &field.ident else {
                    continue;
                };
                let binding = named_binding(ident);
                if let Some(walk) = censor_field(field, &binding, generics, &mut used_generics)? {
                    bindings.push(quote! { #ident: #binding });
                    walks.push(walk);
                }
            }
            quote! {
                let Self { #(#bindings,)* .. } = self;
                #(#walks)*
            }
        }
        Fields::Unnamed(fields) => {
            let mut patterns = Vec::new();
            for (index, field) in fields.unnamed.iter().enumerate() {
                let binding = format_ident!("field_{index}");
                if let Some(walk) = censor_field(field, &binding, generics, &mut used_generics)? {
                    patterns.push(quote! { #binding });
                    walks.push(walk);
                } else {
                    patterns.push(quote! { _ });
                }
            }
            quote! {
                let Self ( #(#patterns),* ) = self;
                #(#walks)*
            }
        }
        Fields::Unit => quote! {},
    };

    Ok(CensorOutput {
        body,
        used_generics,
    })
}
