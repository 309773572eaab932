//! Expense classification.
//!
//! - **`rate`**: pricing (`Cost`, `Rate`)
//! - **`kinds`**: the closed set of billable messages (`Email`, `Sms`, `Expense`)
//! - **`report`**: classification and report lines (`get_expense_report`, `ExpenseReport`)

mod kinds;
mod rate;
mod report;

pub use kinds::{Email, Expense, ExpenseKind, Sms};
pub use rate::{Cost, Rate};
pub use report::{get_expense_report, ExpenseReport, REPORT_SEPARATOR};
