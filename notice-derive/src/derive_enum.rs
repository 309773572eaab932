//! Enum-specific `Censorable` derivation.
//!
//! This module generates one match arm per variant. Variants without censored
//! fields become empty arms.

use proc_macro2::Ident;
use quote::{format_ident, quote};
use syn::{DataEnum, Fields, Result};

use crate::{
    derive_struct::{censor_field, named_binding},
    CensorOutput,
};

pub(crate) fn derive_enum(
    name: &Ident,
    generics: &syn::Generics,
    data: DataEnum,
) -> Result<CensorOutput> {
    let mut used_generics = Vec::new();
    let mut arms = Vec::new();

    for variant in &data.variants {
        let variant_ident = &variant.ident;
        let mut walks = Vec::new();

        let pattern = match &variant.fields {
            Fields::Unit => quote! { #name::#variant_ident },
            Fields::Named(fields) => {
                let mut bindings = Vec::new();
                for field in &fields.named {
                    let Some(ident) = &field.ident else {
                        continue;
                    };
                    let binding = named_binding(ident);
                    if let Some(walk) =
                        censor_field(field, &binding, generics, &mut used_generics)?
                    {
                        bindings.push(quote! { #ident: #binding });
                        walks.push(walk);
                    }
                }
                quote! { #name::#variant_ident { #(#bindings,)* .. } }
            }
            Fields::Unnamed(fields) => {
                let mut patterns = Vec::new();
                for (index, field) in fields.unnamed.iter().enumerate() {
                    let binding = format_ident!("field_{index}");
                    if let Some(walk) =
                        censor_field(field, &binding, generics, &mut used_generics)?
                    {
                        patterns.push(quote! { #binding });
                        walks.push(walk);
                    } else {
                        patterns.push(quote! { _ });
                    }
                }
                quote! { #name::#variant_ident ( #(#patterns),* ) }
            }
        };

        arms.push(quote! {
            #pattern => {
                #(#walks)*
            }
        });
    }

    let body = if arms.is_empty() {
        quote! { match *self {} }
    } else {
        quote! {
            match self {
                #(#arms),*
            }
        }
    };

    Ok(CensorOutput {
        body,
        used_generics,
    })
}
