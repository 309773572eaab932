//! Parsing of `#[censor]` and `#[cost(...)]` field attributes.
//!
//! This module maps attribute syntax to code generation decisions and produces
//! structured errors for invalid forms.

use proc_macro2::Span;
use syn::{spanned::Spanned, Attribute, Meta, Result};

/// Field handling for `#[derive(Censor)]`.
///
/// | Attribute | Strategy | Behavior |
/// |-----------|----------|----------|
/// | None | `Untouched` | Field is left as-is |
/// | `#[censor]` | `Walk` | Field is walked with `Censorable::censor_with` |
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum CensorStrategy {
    Untouched,
    Walk,
}

/// Role a field plays in `#[derive(Cost)]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum CostRole {
    /// `#[cost(body)]`: the priced text.
    Body,
    /// `#[cost(subscription)]`: selects the subscribed rate when `true`.
    Subscription,
}

pub(crate) fn parse_censor_strategy(attrs: &[Attribute]) -> Result<CensorStrategy> {
    let mut seen = false;
    for attr in attrs {
        if !attr.path().is_ident("censor") {
            continue;
        }
        if seen {
            return Err(syn::Error::new(
                attr.span(),
                "multiple #[censor] attributes specified on the same field",
            ));
        }

        match &attr.meta {
            Meta::Path(_) => seen = true,
            Meta::List(_) => {
                return Err(syn::Error::new(
                    attr.span(),
                    "#[censor] takes no arguments; the word list comes from the CensorPolicy",
                ));
            }
            Meta::NameValue(_) => {
                return Err(syn::Error::new(
                    attr.span(),
                    "name-value syntax is not supported for #[censor]",
                ));
            }
        }
    }

    Ok(if seen {
        CensorStrategy::Walk
    } else {
        CensorStrategy::Untouched
    })
}

fn set_role(target: &mut Option<CostRole>, next: CostRole, span: Span) -> Result<()> {
    if target.is_some() {
        return Err(syn::Error::new(
            span,
            "multiple #[cost] roles specified on the same field",
        ));
    }
    *target = Some(next);
    Ok(())
}

pub(crate) fn parse_cost_role(attrs: &[Attribute]) -> Result<Option<CostRole>> {
    let mut role: Option<CostRole> = None;
    for attr in attrs {
        if !attr.path().is_ident("cost") {
            continue;
        }

        match &attr.meta {
            Meta::List(list) => {
                list.parse_nested_meta(|meta| {
                    if meta.path.is_ident("body") {
                        set_role(&mut role, CostRole::Body, attr.span())
                    } else if meta.path.is_ident("subscription") {
                        set_role(&mut role, CostRole::Subscription, attr.span())
                    } else {
                        Err(meta.error(format!(
                            "unknown cost field role `{}`; expected `body` or `subscription`",
                            meta.path
                                .get_ident()
                                .map_or_else(|| "?".to_string(), ToString::to_string)
                        )))
                    }
                })?;
            }
            Meta::Path(_) => {
                return Err(syn::Error::new(
                    attr.span(),
                    "expected a role (e.g., #[cost(body)] or #[cost(subscription)])",
                ));
            }
            Meta::NameValue(_) => {
                return Err(syn::Error::new(
                    attr.span(),
                    "name-value syntax is not supported for field-level #[cost]",
                ));
            }
        }
    }

    Ok(role)
}
