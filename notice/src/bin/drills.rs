//! Prints the censored sample messages, then one report per sample expense.

use notice::{remove_profanity, Email, Expense, ExpenseReport, Sms, REPORT_SEPARATOR};

fn print_censored(messages: &[&str]) {
    for message in messages {
        let mut message = (*message).to_string();
        remove_profanity(&mut message);
        println!("{message}");
    }
}

fn print_report(expense: Expense) {
    println!("{}", ExpenseReport::from(&expense));
    println!("{REPORT_SEPARATOR}");
}

fn main() {
    print_censored(&[
        "well shoot, this is awful",
        "dang robots",
        "dang them to heck",
    ]);
    print_censored(&[
        "well shoot",
        "Allan is going straight to heck",
        "dang... that's a tough break",
    ]);

    print_report(Email::new(true, "hello there", "john@does.com").into());
    print_report(
        Email::new(
            false,
            "This meeting could have been an email",
            "jane@doe.com",
        )
        .into(),
    );
    print_report(Email::new(false, "Wanna catch up later?", "elon@doe.com").into());
    print_report(
        Sms::new(
            false,
            "I'm a Nigerian prince, please send me your bank info so I can deposit $1000 dollars",
            "+155555509832",
        )
        .into(),
    );
    print_report(Sms::new(false, "I don't need this", "+155555504444").into());
    print_report(Expense::Invalid);
}
