use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Cents;

pub type ObligationId = Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ObligationKind {
    /// Money the user owes (a bill to pay)
    Payable,
    /// Money owed to the user (income to collect)
    Receivable,
}

impl ObligationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ObligationKind::Payable => "payable",
            ObligationKind::Receivable => "receivable",
        }
    }
}

impl std::fmt::Display for ObligationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single payable or receivable record tracked by the ledger.
/// Settlement is one-way: once settled, a record never goes back to pending.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Obligation {
    pub id: ObligationId,
    pub description: String,
    /// Amount in cents (always positive)
    pub amount_cents: Cents,
    /// Day-granularity due date; time of day carries no meaning
    pub due_date: NaiveDate,
    pub kind: ObligationKind,
    pub settled: bool,
}

/// Creation input for an obligation. The ledger assigns the id and the
/// initial settlement state.
#[derive(Debug, Clone)]
pub struct ObligationDraft {
    pub description: String,
    pub amount_cents: Cents,
    pub due_date: NaiveDate,
    pub kind: ObligationKind,
}

impl Obligation {
    pub(crate) fn from_draft(draft: ObligationDraft) -> Self {
        Self {
            id: Uuid::new_v4(),
            description: draft.description,
            amount_cents: draft.amount_cents,
            due_date: draft.due_date,
            kind: draft.kind,
            settled: false,
        }
    }

    pub fn is_pending(&self) -> bool {
        !self.settled
    }

    /// An obligation is overdue when it is still pending and its due date
    /// is strictly before the given calendar day.
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        !self.settled && self.due_date < today
    }
}
