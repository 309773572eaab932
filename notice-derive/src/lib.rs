//! Derive macros for `notice`.
//!
//! This crate generates two kinds of code:
//! - `#[derive(Censor)]` emits a `Censorable` implementation that walks the
//!   fields marked `#[censor]` and rewrites them in place.
//! - `#[derive(Cost)]` emits a `Cost` implementation from a pair of per-byte
//!   rates and the fields marked `#[cost(body)]` / `#[cost(subscription)]`.
//!
//! It does **not** define the forbidden word list or the rates of built-in
//! expenses. Those live in the main `notice` crate.

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
    clippy::doc_markdown,
    clippy::module_name_repetitions,
    clippy::multiple_crate_versions,
    clippy::must_use_candidate,
    clippy::needless_pass_by_value,
    clippy::cargo_common_metadata,
    clippy::missing_errors_doc,
    clippy::missing_const_for_fn,
    clippy::redundant_pub_crate,
    clippy::option_if_let_else
)]
// Allow some lints while testing
#![cfg_attr(test, allow(clippy::unwrap_used))]

#[allow(unused_extern_crates)]
extern crate proc_macro;

use proc_macro2::TokenStream;
use proc_macro_crate::{crate_name, FoundCrate};
use quote::{format_ident, quote};
use syn::{parse_macro_input, spanned::Spanned, Data, DeriveInput, Result};

mod container;
mod cost;
mod derive_enum;
mod derive_struct;
mod generics;
mod strategy;
mod types;
use cost::derive_cost;
use derive_enum::derive_enum;
use derive_struct::derive_struct;
use generics::add_censorable_bounds;

/// Derives `notice::Censorable` for structs and enums.
///
/// # Field Attributes
///
/// - **No annotation**: the field is left untouched. Recipients, flags and
///   external types need nothing.
///
/// - `#[censor]`: the field is walked with `Censorable::censor_with`. Works for
///   `String`, `Cow<str>`, `Option<_>`, `Vec<_>`, `Box<_>`, maps (values only)
///   and any nested type that itself derives `Censor`.
///
/// Scalar fields (`bool`, integers, floats, `char`) cannot carry `#[censor]`.
/// Unions are rejected at compile time.
#[proc_macro_derive(Censor, attributes(censor))]
pub fn derive_censor(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match expand_censor(input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.into_compile_error().into(),
    }
}

/// Derives `notice::Cost` for structs with named fields.
///
/// # Container Attribute
///
/// - `#[cost(rate = 0.05, subscribed_rate = 0.01)]` - per-byte prices for
///   unsubscribed and subscribed senders. Both keys are required and must be
///   non-negative numeric literals.
///
/// # Field Attributes
///
/// - `#[cost(body)]` - exactly one field; its type must implement `AsRef<str>`.
///   The UTF-8 byte length of this field is what gets priced.
/// - `#[cost(subscription)]` - at most one `bool` field. Without it the
///   unsubscribed rate always applies.
#[proc_macro_derive(Cost, attributes(cost))]
pub fn derive_cost_impl(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match derive_cost(input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.into_compile_error().into(),
    }
}

/// Returns the token stream to reference the notice crate root.
///
/// Handles crate renaming (e.g., `my_notice = { package = "notice", ... }`)
/// and internal usage (when a derive is used inside the notice crate itself).
fn crate_root() -> TokenStream {
    match crate_name("notice") {
        Ok(FoundCrate::Itself) => quote! { crate },
        Ok(FoundCrate::Name(name)) => {
            let ident = format_ident!("{}", name);
            quote! { ::#ident }
        }
        Err(_) => quote! { ::notice },
    }
}

fn crate_path(item: &str) -> TokenStream {
    let root = crate_root();
    let item_ident = format_ident!("{}", item);
    quote! { #root::#item_ident }
}

fn expand_censor(input: DeriveInput) -> Result<TokenStream> {
    let DeriveInput {
        ident,
        generics,
        data,
        ..
    } = input;

    let output = match data {
        Data::Struct(data) => derive_struct(&generics, data)?,
        Data::Enum(data) => derive_enum(&ident, &generics, data)?,
        Data::Union(u) => {
            return Err(syn::Error::new(
                u.union_token.span(),
                "`Censor` cannot be derived for unions",
            ));
        }
    };

    let censorable_path = crate_path("Censorable");
    let policy_path = crate_path("CensorPolicy");
    let bounded = add_censorable_bounds(generics, &output.used_generics);
    let (impl_generics, ty_generics, where_clause) = bounded.split_for_impl();
    let body = &output.body;

    Ok(quote! {
        impl #impl_generics #censorable_path for #ident #ty_generics #where_clause {
            #[allow(unused_variables)]
            fn censor_with(&mut self, policy: &#policy_path) {
                #body
            }
        }
    })
}

pub(crate) struct CensorOutput {
    pub(crate) body: TokenStream,
    pub(crate) used_generics: Vec<syn::Ident>,
}
