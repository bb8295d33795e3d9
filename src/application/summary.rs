use serde::{Deserialize, Serialize};

use crate::domain::{Cents, ObligationKind};

use super::LedgerService;

/// Aggregate figures derived from the ledger. Settled obligations still
/// count toward the totals; settlement only affects the pending/overdue
/// views, not the financial picture.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FinancialSummary {
    pub total_payable: Cents,
    pub total_receivable: Cents,
    pub net_balance: Cents,
}

/// Derives summary figures from the live ledger. Holds nothing but a
/// borrow of the store and caches nothing, so every call reflects the
/// latest mutations.
pub struct SummaryService<'a> {
    ledger: &'a LedgerService,
}

impl<'a> SummaryService<'a> {
    pub fn new(ledger: &'a LedgerService) -> Self {
        Self { ledger }
    }

    pub fn total_payable(&self) -> Cents {
        self.total_for(ObligationKind::Payable)
    }

    pub fn total_receivable(&self) -> Cents {
        self.total_for(ObligationKind::Receivable)
    }

    /// Receivable minus payable; negative when the user owes more than
    /// they expect to collect.
    pub fn net_balance(&self) -> Cents {
        self.total_receivable() - self.total_payable()
    }

    pub fn summarize(&self) -> FinancialSummary {
        FinancialSummary {
            total_payable: self.total_payable(),
            total_receivable: self.total_receivable(),
            net_balance: self.net_balance(),
        }
    }

    fn total_for(&self, kind: ObligationKind) -> Cents {
        self.ledger
            .iter()
            .filter(|o| o.kind == kind)
            .map(|o| o.amount_cents)
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ObligationDraft;
    use chrono::Local;

    fn seed(ledger: &mut LedgerService, description: &str, amount_cents: i64, kind: ObligationKind) {
        ledger
            .create(ObligationDraft {
                description: description.into(),
                amount_cents,
                due_date: Local::now().date_naive(),
                kind,
            })
            .unwrap();
    }

    #[test]
    fn test_empty_ledger_sums_to_zero() {
        let ledger = LedgerService::new();
        let summary = SummaryService::new(&ledger);

        assert_eq!(summary.total_payable(), 0);
        assert_eq!(summary.total_receivable(), 0);
        assert_eq!(summary.net_balance(), 0);
    }

    #[test]
    fn test_net_balance_may_be_negative() {
        let mut ledger = LedgerService::new();
        seed(&mut ledger, "Rent", 150000, ObligationKind::Payable);
        seed(&mut ledger, "Refund", 5000, ObligationKind::Receivable);

        let summary = SummaryService::new(&ledger);
        assert_eq!(summary.net_balance(), -145000);
    }

    #[test]
    fn test_summary_is_not_cached() {
        let mut ledger = LedgerService::new();
        seed(&mut ledger, "Salary", 500000, ObligationKind::Receivable);
        assert_eq!(SummaryService::new(&ledger).total_receivable(), 500000);

        seed(&mut ledger, "Bonus", 100000, ObligationKind::Receivable);
        let summary = SummaryService::new(&ledger).summarize();
        assert_eq!(summary.total_receivable, 600000);
        assert_eq!(summary.net_balance, 600000);
    }
}
