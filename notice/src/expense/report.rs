//! Expense classification and report lines.

use std::fmt;

use super::kinds::{Expense, ExpenseKind};
use super::rate::Cost;

/// Line printed after every report.
pub const REPORT_SEPARATOR: &str = "====================================";

/// Classifies `expense` and returns who it goes to and what it costs.
///
/// Emails report their address and SMS their phone number. Anything else is
/// reported as `("", 0.0)`.
///
/// ```rust
/// use notice::{get_expense_report, Email, Expense};
///
/// let expense = Expense::from(Email::new(true, "hello there", "john@does.com"));
/// let (recipient, cost) = get_expense_report(&expense);
/// assert_eq!(recipient, "john@does.com");
/// assert!((cost - 0.11).abs() < 1e-9);
/// ```
#[must_use]
pub fn get_expense_report(expense: &Expense) -> (&str, f64) {
    match expense {
        Expense::Email(email) => (email.to_address.as_str(), email.cost()),
        Expense::Sms(sms) => (sms.to_phone_number.as_str(), sms.cost()),
        Expense::Invalid => ("", 0.0),
    }
}

/// A classified expense, ready to print or log.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "slog", derive(serde::Serialize))]
pub struct ExpenseReport {
    kind: Option<ExpenseKind>,
    recipient: String,
    cost: f64,
}

impl ExpenseReport {
    #[must_use]
    pub fn kind(&self) -> Option<ExpenseKind> {
        self.kind
    }

    #[must_use]
    pub fn recipient(&self) -> &str {
        &self.recipient
    }

    #[must_use]
    pub fn cost(&self) -> f64 {
        self.cost
    }
}

impl From<&Expense> for ExpenseReport {
    fn from(expense: &Expense) -> Self {
        let (recipient, cost) = get_expense_report(expense);
        Self {
            kind: expense.kind(),
            recipient: recipient.to_owned(),
            cost,
        }
    }
}

impl fmt::Display for ExpenseReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            Some(kind) => write!(
                f,
                "Report: The {kind} going to {} will cost: {:.2}",
                self.recipient, self.cost
            ),
            None => f.write_str("Report: Invalid expense"),
        }
    }
}
