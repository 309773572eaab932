//! Container-level attribute parsing for `#[derive(Cost)]`.
//!
//! This module handles the `#[cost(...)]` attribute on the struct itself, not
//! on its fields.

use proc_macro2::Span;
use syn::{meta::ParseNestedMeta, Attribute, Lit, Meta, Result};

/// Rates parsed from the container-level `#[cost(...)]` attribute.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct CostOptions {
    /// Per-byte price when the sender is not subscribed.
    pub(crate) rate: Option<f64>,
    /// Per-byte price when the sender is subscribed.
    pub(crate) subscribed_rate: Option<f64>,
}

/// Both rates, once presence has been checked.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Rates {
    pub(crate) rate: f64,
    pub(crate) subscribed_rate: f64,
}

impl CostOptions {
    pub(crate) fn require(self, span: Span) -> Result<Rates> {
        match (self.rate, self.subscribed_rate) {
            (Some(rate), Some(subscribed_rate)) => Ok(Rates {
                rate,
                subscribed_rate,
            }),
            (None, _) => Err(syn::Error::new(
                span,
                "missing `rate`; add #[cost(rate = ..., subscribed_rate = ...)] to the struct",
            )),
            (_, None) => Err(syn::Error::new(
                span,
                "missing `subscribed_rate`; add #[cost(rate = ..., subscribed_rate = ...)] \
                to the struct",
            )),
        }
    }
}

fn parse_rate(meta: &ParseNestedMeta<'_>) -> Result<f64> {
    let lit: Lit = meta.value()?.parse().map_err(|_| {
        meta.error("expected a non-negative numeric literal (e.g., `rate = 0.05`)")
    })?;
    let value = match &lit {
        Lit::Float(lit) => lit.base10_parse::<f64>()?,
        Lit::Int(lit) => lit.base10_parse::<f64>()?,
        _ => {
            return Err(syn::Error::new_spanned(
                lit,
                "expected a non-negative numeric literal (e.g., `rate = 0.05`)",
            ))
        }
    };
    if !value.is_finite() {
        return Err(syn::Error::new_spanned(lit, "rate must be finite"));
    }
    if value.is_sign_negative() {
        return Err(syn::Error::new_spanned(
            lit,
            "expected a non-negative numeric literal (e.g., `rate = 0.05`)",
        ));
    }
    Ok(value)
}

fn set_rate(target: &mut Option<f64>, meta: &ParseNestedMeta<'_>) -> Result<()> {
    if target.is_some() {
        return Err(meta.error("rate specified more than once"));
    }
    *target = Some(parse_rate(meta)?);
    Ok(())
}

/// Parses container-level `#[cost(...)]` attributes.
pub(crate) fn parse_cost_options(attrs: &[Attribute]) -> Result<CostOptions> {
    let mut options = CostOptions::default();

    for attr in attrs {
        if !attr.path().is_ident("cost") {
            continue;
        }

        match &attr.meta {
            Meta::List(list) => {
                list.parse_nested_meta(|meta| {
                    if meta.path.is_ident("rate") {
                        set_rate(&mut options.rate, &meta)
                    } else if meta.path.is_ident("subscribed_rate") {
                        set_rate(&mut options.subscribed_rate, &meta)
                    } else {
                        Err(meta.error(format!(
                            "unknown cost option `{}`; expected `rate` or `subscribed_rate`",
                            meta.path
                                .get_ident()
                                .map_or_else(|| "?".to_string(), ToString::to_string)
                        )))
                    }
                })?;
            }
            Meta::Path(path) => {
                return Err(syn::Error::new_spanned(
                    path,
                    "expected #[cost(rate = ..., subscribed_rate = ...)]",
                ));
            }
            Meta::NameValue(nv) => {
                return Err(syn::Error::new_spanned(
                    nv,
                    "name-value syntax is not supported for container-level #[cost]",
                ));
            }
        }
    }

    Ok(options)
}
