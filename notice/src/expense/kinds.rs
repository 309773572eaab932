//! The closed set of billable messages.

use std::fmt;

use crate::{Censor, Cost};

/// An email and the address it goes to.
#[derive(Clone, Debug, PartialEq, Eq, Censor, Cost)]
#[cfg_attr(feature = "slog", derive(serde::Serialize))]
#[cost(rate = 0.05, subscribed_rate = 0.01)]
pub struct Email {
    #[cost(subscription)]
    pub is_subscribed: bool,
    #[cost(body)]
    #[censor]
    pub body: String,
    pub to_address: String,
}

impl Email {
    #[must_use]
    pub fn new(
        is_subscribed: bool,
        body: impl Into<String>,
        to_address: impl Into<String>,
    ) -> Self {
        Self {
            is_subscribed,
            body: body.into(),
            to_address: to_address.into(),
        }
    }
}

/// A text message and the number it goes to.
#[derive(Clone, Debug, PartialEq, Eq, Censor, Cost)]
#[cfg_attr(feature = "slog", derive(serde::Serialize))]
#[cost(rate = 0.1, subscribed_rate = 0.03)]
pub struct Sms {
    #[cost(subscription)]
    pub is_subscribed: bool,
    #[cost(body)]
    #[censor]
    pub body: String,
    pub to_phone_number: String,
}

impl Sms {
    #[must_use]
    pub fn new(
        is_subscribed: bool,
        body: impl Into<String>,
        to_phone_number: impl Into<String>,
    ) -> Self {
        Self {
            is_subscribed,
            body: body.into(),
            to_phone_number: to_phone_number.into(),
        }
    }
}

/// Anything that may show up on an expense report.
///
/// `Invalid` stands for every expense the reporter does not recognize. It
/// carries nothing and always costs zero.
#[derive(Clone, Debug, Default, PartialEq, Eq, Censor)]
#[cfg_attr(feature = "slog", derive(serde::Serialize))]
pub enum Expense {
    Email(#[censor] Email),
    Sms(#[censor] Sms),
    #[default]
    Invalid,
}

impl Expense {
    /// The channel label, or `None` for [`Expense::Invalid`].
    #[must_use]
    pub fn kind(&self) -> Option<ExpenseKind> {
        match self {
            Expense::Email(_) => Some(ExpenseKind::Email),
            Expense::Sms(_) => Some(ExpenseKind::Sms),
            Expense::Invalid => None,
        }
    }
}

impl Cost for Expense {
    fn cost(&self) -> f64 {
        match self {
            Expense::Email(email) => email.cost(),
            Expense::Sms(sms) => sms.cost(),
            Expense::Invalid => 0.0,
        }
    }
}

impl From<Email> for Expense {
    fn from(email: Email) -> Self {
        Expense::Email(email)
    }
}

impl From<Sms> for Expense {
    fn from(sms: Sms) -> Self {
        Expense::Sms(sms)
    }
}

/// Channel label used in report lines.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "slog", derive(serde::Serialize))]
#[cfg_attr(feature = "slog", serde(rename_all = "lowercase"))]
pub enum ExpenseKind {
    Email,
    Sms,
}

impl ExpenseKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            ExpenseKind::Email => "email",
            ExpenseKind::Sms => "sms",
        }
    }
}

impl fmt::Display for ExpenseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
