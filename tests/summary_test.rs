mod common;

use common::{days_ago, days_ahead, payable, receivable, rent_and_salary_ledger};
use obligo::{LedgerService, SummaryService};

#[test]
fn test_rent_and_salary_scenario() {
    let ledger = rent_and_salary_ledger();
    let summary = SummaryService::new(&ledger);

    assert_eq!(summary.total_payable(), 150000);
    assert_eq!(summary.total_receivable(), 500000);
    assert_eq!(summary.net_balance(), 350000);
    assert!(ledger.list_overdue().is_empty());
}

#[test]
fn test_all_payable_ledger_has_zero_receivable() {
    let mut ledger = LedgerService::new();
    ledger.create(payable("Rent", 150000, days_ahead(30))).unwrap();
    ledger.create(payable("Water", 4500, days_ahead(7))).unwrap();

    let summary = SummaryService::new(&ledger);
    assert_eq!(summary.total_receivable(), 0);
    assert_eq!(summary.total_payable(), 154500);
    assert_eq!(
        summary.total_payable() + summary.total_receivable(),
        summary.total_payable()
    );
    assert_eq!(summary.net_balance(), -154500);
}

#[test]
fn test_settlement_does_not_change_totals() {
    let mut ledger = LedgerService::new();
    let internet = ledger
        .create(payable("Internet", 12090, days_ago(10)))
        .unwrap();
    ledger
        .create(receivable("Invoice", 80000, days_ahead(15)))
        .unwrap();

    let before = SummaryService::new(&ledger).summarize();
    ledger.settle(&internet.id.to_string());
    let after = SummaryService::new(&ledger).summarize();

    // Totals count settled obligations too; only the overdue/pending views move
    assert_eq!(before.total_payable, after.total_payable);
    assert_eq!(before.total_receivable, after.total_receivable);
    assert_eq!(before.net_balance, after.net_balance);
    assert!(ledger.list_overdue().is_empty());
}

#[test]
fn test_net_balance_tracks_every_mutation() {
    let mut ledger = LedgerService::new();
    assert_eq!(SummaryService::new(&ledger).net_balance(), 0);

    ledger.create(payable("Rent", 150000, days_ahead(30))).unwrap();
    assert_eq!(SummaryService::new(&ledger).net_balance(), -150000);

    ledger
        .create(receivable("Salary", 500000, days_ahead(5)))
        .unwrap();
    assert_eq!(SummaryService::new(&ledger).net_balance(), 350000);

    ledger.create(payable("Loan", 600000, days_ahead(60))).unwrap();
    let summary = SummaryService::new(&ledger).summarize();
    assert_eq!(summary.net_balance, -250000);
    assert_eq!(
        summary.net_balance,
        summary.total_receivable - summary.total_payable
    );
}
