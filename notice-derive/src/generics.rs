//! Generic type parameter handling and trait bound management.
//!
//! Bounds are added only for generics that appear in `#[censor]` fields.
//! `PhantomData<T>` never needs a bound: it is zero-sized and never walked.

use syn::{parse_quote, Ident};

use crate::crate_path;

pub(crate) fn collect_generics_from_type(
    ty: &syn::Type,
    generics: &syn::Generics,
    result: &mut Vec<Ident>,
) {
    match ty {
        syn::Type::Path(path) => {
            let Some(segment) = path.path.segments.last() else {
                return;
            };
            if segment.ident == "PhantomData" {
                return;
            }

            if let syn::PathArguments::AngleBracketed(args) = &segment.arguments {
                for arg in &args.args {
                    if let syn::GenericArgument::Type(inner_ty) = arg {
                        collect_generics_from_type(inner_ty, generics, result);
                    }
                }
            }

            for param in generics.type_params() {
                if segment.ident == param.ident && !result.iter().any(|g| g == &param.ident) {
                    result.push(param.ident.clone());
                }
            }
        }
        syn::Type::Array(array) => collect_generics_from_type(&array.elem, generics, result),
        syn::Type::Slice(slice) => collect_generics_from_type(&slice.elem, generics, result),
        syn::Type::Paren(paren) => collect_generics_from_type(&paren.elem, generics, result),
        _ => {}
    }
}

/// Adds `Censorable` bounds to generic parameters used in censored fields.
pub(crate) fn add_censorable_bounds(
    mut generics: syn::Generics,
    used_generics: &[Ident],
) -> syn::Generics {
    for param in generics.type_params_mut() {
        if used_generics.iter().any(|g| g == &param.ident) {
            let censorable_path = crate_path("Censorable");
            param.bounds.push(parse_quote!(#censorable_path));
        }
    }
    generics
}
