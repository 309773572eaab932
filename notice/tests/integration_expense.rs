//! End-to-end tests for expense classification and pricing.
//!
//! These tests exercise:
//! - the built-in `Email` / `Sms` rates,
//! - `get_expense_report` over every variant,
//! - report formatting, and
//! - `#[derive(Cost)]` on user-defined messages.

use notice::{
    get_expense_report, Censor, Cost, Email, Expense, ExpenseKind, ExpenseReport, Rate, Sms,
};

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

fn fixtures() -> Vec<Expense> {
    vec![
        Email::new(true, "hello there", "john@does.com").into(),
        Email::new(false, "This meeting could have been an email", "jane@doe.com").into(),
        Email::new(false, "Wanna catch up later?", "elon@doe.com").into(),
        Sms::new(
            false,
            "I'm a Nigerian prince, please send me your bank info so I can deposit $1000 dollars",
            "+155555509832",
        )
        .into(),
        Sms::new(false, "I don't need this", "+155555504444").into(),
        Expense::Invalid,
    ]
}

#[test]
fn test_subscribed_email_report() {
    let expense = Expense::from(Email::new(true, "hello there", "john@does.com"));
    let (recipient, cost) = get_expense_report(&expense);
    assert_eq!(recipient, "john@does.com");
    assert_close(cost, 0.11);
}

#[test]
fn test_unsubscribed_rates_scale_with_length() {
    for body in ["", "a", "hello there", "This meeting could have been an email"] {
        let len = body.len() as f64;
        assert_close(Email::new(false, body, "x").cost(), len * 0.05);
        assert_close(Sms::new(false, body, "x").cost(), len * 0.10);
        assert_close(Email::new(true, body, "x").cost(), len * 0.01);
        assert_close(Sms::new(true, body, "x").cost(), len * 0.03);
    }
}

#[test]
fn test_fixture_costs() {
    let costs: Vec<f64> = fixtures().iter().map(Cost::cost).collect();
    let expected = [0.11, 1.85, 1.05, 8.3, 1.7, 0.0];
    for (actual, expected) in costs.into_iter().zip(expected) {
        assert_close(actual, expected);
    }
}

#[test]
fn test_costs_are_never_negative() {
    for expense in fixtures() {
        assert!(expense.cost() >= 0.0);
        assert!(get_expense_report(&expense).1 >= 0.0);
    }
}

#[test]
fn test_invalid_expense() {
    let (recipient, cost) = get_expense_report(&Expense::Invalid);
    assert_eq!(recipient, "");
    assert_close(cost, 0.0);

    let report = ExpenseReport::from(&Expense::default());
    assert_eq!(report.kind(), None);
    assert_eq!(report.to_string(), "Report: Invalid expense");
}

#[test]
fn test_report_lines() {
    let lines: Vec<String> = fixtures()
        .iter()
        .map(|expense| ExpenseReport::from(expense).to_string())
        .collect();
    assert_eq!(
        lines,
        [
            "Report: The email going to john@does.com will cost: 0.11",
            "Report: The email going to jane@doe.com will cost: 1.85",
            "Report: The email going to elon@doe.com will cost: 1.05",
            "Report: The sms going to +155555509832 will cost: 8.30",
            "Report: The sms going to +155555504444 will cost: 1.70",
            "Report: Invalid expense",
        ]
    );
}

#[test]
fn test_report_accessors() {
    let report = ExpenseReport::from(&Expense::from(Sms::new(true, "ok", "+1")));
    assert_eq!(report.kind(), Some(ExpenseKind::Sms));
    assert_eq!(report.recipient(), "+1");
    assert_close(report.cost(), 0.06);
}

#[test]
fn test_censoring_keeps_ascii_cost() {
    let mut expense = Expense::from(Email::new(false, "what the heck, dang", "a@b.c"));
    let before = expense.cost();
    expense.censor();
    assert_close(expense.cost(), before);
    let Expense::Email(email) = &expense else {
        panic!("unexpected variant {expense:?}");
    };
    assert_eq!(email.body, "what the ****, ****");
}

#[test]
fn test_derive_cost_on_custom_message() {
    #[derive(Cost)]
    #[cost(rate = 0.2, subscribed_rate = 0.05)]
    struct Push {
        #[cost(body)]
        text: &'static str,
        #[cost(subscription)]
        premium: bool,
        _device: u64,
    }

    #[derive(Cost)]
    #[cost(rate = 1, subscribed_rate = 0)]
    struct Telegram {
        #[cost(body)]
        words: String,
    }

    let push = Push {
        text: "ping",
        premium: false,
        _device: 7,
    };
    assert_close(push.cost(), 0.8);

    let push = Push {
        premium: true,
        ..push
    };
    assert_close(push.cost(), 0.2);

    let telegram = Telegram {
        words: "STOP".into(),
    };
    assert_close(telegram.cost(), 4.0);
}

#[test]
fn test_rate_accessors() {
    let rate = Rate::new(0.1, 0.03);
    assert_close(rate.standard(), 0.1);
    assert_close(rate.subscribed(), 0.03);
    assert_close(rate.charge(17, false), 1.7);
}
