//! Outbound message hygiene.
//!
//! This crate covers two independent concerns:
//! - **Censoring**: masking forbidden words in place, from a single `String`
//!   up to whole message structures walked by `#[derive(Censor)]`.
//! - **Expenses**: classifying a closed set of messages and pricing them per
//!   byte of body text.
//!
//! Key rules:
//! - Matching is literal and case-sensitive; every occurrence is masked with a
//!   run as long as the word.
//! - Use `#[censor]` on text fields (or containers of text, or nested types
//!   deriving `Censor`). Unannotated fields are never touched.
//! - Cost is the UTF-8 byte length of the body times the rate for the
//!   sender's subscription status.
//!
//! What this crate does not do:
//! - perform I/O or logging (the `slog` feature only provides values to log)
//! - round or store money; report lines format to two decimals
//!
//! The `Censor` and `Cost` derive macros live in `notice-derive` and are
//! re-exported here under the same names as their traits.

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
    clippy::cargo_common_metadata,
    clippy::missing_errors_doc,
    clippy::missing_const_for_fn,
    clippy::redundant_pub_crate,
    clippy::use_self
)]
// Allow some lints while testing
#![cfg_attr(test, allow(clippy::non_ascii_literal, clippy::unwrap_used))]

pub use notice_derive::{Censor, Cost};

mod censor;
#[cfg(feature = "expense")]
mod expense;
#[cfg(feature = "slog")]
pub mod slog;

pub use censor::{
    remove_profanity, Censor, CensorPolicy, Censorable, PolicyError, DEFAULT_MASK_CHAR,
    DEFAULT_WORDS,
};
#[cfg(feature = "expense")]
pub use expense::{
    get_expense_report, Cost, Email, Expense, ExpenseKind, ExpenseReport, Rate, Sms,
    REPORT_SEPARATOR,
};
