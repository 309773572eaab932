//! `Cost` derivation.
//!
//! The generated impl multiplies the UTF-8 byte length of the `#[cost(body)]`
//! field by one of the two container rates.

use proc_macro2::{Literal, TokenStream};
use quote::{quote, quote_spanned};
use syn::{
    parse_quote, spanned::Spanned, Data, DeriveInput, Field, Fields, FieldsNamed, Result,
};

use crate::{
    container::parse_cost_options,
    crate_path,
    strategy::{parse_cost_role, CostRole},
    types::is_bool_type,
};

pub(crate) fn derive_cost(input: DeriveInput) -> Result<TokenStream> {
    let DeriveInput {
        ident,
        generics,
        data,
        attrs,
        ..
    } = input;

    let fields = match data {
        Data::Struct(data) => match data.fields {
            Fields::Named(fields) => fields,
            Fields::Unnamed(fields) => {
                return Err(syn::Error::new(
                    fields.span(),
                    "`Cost` requires named fields so the body can be marked with #[cost(body)]",
                ));
            }
            Fields::Unit => {
                return Err(syn::Error::new(
                    ident.span(),
                    "`Cost` cannot be derived for unit structs; they have no body to price",
                ));
            }
        },
        Data::Enum(data) => {
            return Err(syn::Error::new(
                data.enum_token.span(),
                "`Cost` cannot be derived for enums; implement it with an exhaustive match",
            ));
        }
        Data::Union(u) => {
            return Err(syn::Error::new(
                u.union_token.span(),
                "`Cost` cannot be derived for unions",
            ));
        }
    };

    let rates = parse_cost_options(&attrs)?.require(ident.span())?;

    let (body, subscription) = collect_cost_fields(&fields)?;
    let Some(body) = body else {
        return Err(syn::Error::new(
            ident.span(),
            "no field marked #[cost(body)]; mark the priced text field",
        ));
    };

    let body_ident = &body.ident;
    let body_ty = &body.ty;
    let subscribed = match subscription {
        Some(field) => {
            let field_ident = &field.ident;
            quote! { self.#field_ident }
        }
        None => quote! { false },
    };

    let cost_path = crate_path("Cost");
    let rate_path = crate_path("Rate");
    let rate = Literal::f64_suffixed(rates.rate);
    let subscribed_rate = Literal::f64_suffixed(rates.subscribed_rate);

    let mut generics = generics;
    generics
        .make_where_clause()
        .predicates
        .push(parse_quote!(#body_ty: ::core::convert::AsRef<str>));
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    let body_len = quote_spanned! { body.span() =>
        ::core::convert::AsRef::<str>::as_ref(&self.#body_ident).len()
    };

    Ok(quote! {
        impl #impl_generics #cost_path for #ident #ty_generics #where_clause {
            fn cost(&self) -> f64 {
                const RATE: #rate_path = #rate_path::new(#rate, #subscribed_rate);
                RATE.charge(#body_len, #subscribed)
            }
        }
    })
}

/// Fields marked `#[cost(body)]` and `#[cost(subscription)]`, at most one each.
type CostFields<'a> = (Option<&'a Field>, Option<&'a Field>);

fn collect_cost_fields(fields: &FieldsNamed) -> Result<CostFields<'_>> {
    let mut body = None;
    let mut subscription = None;
    for field in &fields.named {
        let Some(role) = parse_cost_role(&field.attrs)? else {
            continue;
        };
        match role {
            CostRole::Body => {
                if body.is_some() {
                    return Err(syn::Error::new(
                        field.span(),
                        "only one field can be marked #[cost(body)]",
                    ));
                }
                body = Some(field);
            }
            CostRole::Subscription => {
                if subscription.is_some() {
                    return Err(syn::Error::new(
                        field.span(),
                        "only one field can be marked #[cost(subscription)]",
                    ));
                }
                if !is_bool_type(&field.ty) {
                    return Err(syn::Error::new(
                        field.ty.span(),
                        "#[cost(subscription)] must be placed on a `bool` field",
                    ));
                }
                subscription = Some(field);
            }
        }
    }
    Ok((body, subscription))
}
