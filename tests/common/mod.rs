// Allow dead_code because these helpers are used across different test files
// which are compiled separately
#![allow(dead_code)]

use chrono::{Days, Local, NaiveDate};
use obligo::domain::{Cents, ObligationDraft, ObligationKind};
use obligo::LedgerService;

/// Today's local calendar date, the reference day for overdue checks.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// A date `days` in the future relative to today.
pub fn days_ahead(days: u64) -> NaiveDate {
    today().checked_add_days(Days::new(days)).unwrap()
}

/// A date `days` in the past relative to today.
pub fn days_ago(days: u64) -> NaiveDate {
    today().checked_sub_days(Days::new(days)).unwrap()
}

pub fn draft(
    description: &str,
    amount_cents: Cents,
    due_date: NaiveDate,
    kind: ObligationKind,
) -> ObligationDraft {
    ObligationDraft {
        description: description.into(),
        amount_cents,
        due_date,
        kind,
    }
}

pub fn payable(description: &str, amount_cents: Cents, due_date: NaiveDate) -> ObligationDraft {
    draft(description, amount_cents, due_date, ObligationKind::Payable)
}

pub fn receivable(description: &str, amount_cents: Cents, due_date: NaiveDate) -> ObligationDraft {
    draft(
        description,
        amount_cents,
        due_date,
        ObligationKind::Receivable,
    )
}

/// Ledger seeded with the standard fixture: rent due in 30 days, salary
/// expected in 5 days.
pub fn rent_and_salary_ledger() -> LedgerService {
    let mut ledger = LedgerService::new();
    ledger
        .create(payable("Rent", 150000, days_ahead(30)))
        .unwrap();
    ledger
        .create(receivable("Salary", 500000, days_ahead(5)))
        .unwrap();
    ledger
}
