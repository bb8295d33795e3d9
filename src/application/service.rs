use chrono::{Local, NaiveDate};
use uuid::Uuid;

use crate::domain::{Obligation, ObligationDraft, ObligationKind};

use super::AppError;

/// The ledger: exclusive owner of the obligation collection.
/// This is the primary interface for any client (CLI, API, TUI, etc.).
///
/// Records are kept in insertion order and never deleted. `create` and
/// `settle` are the only mutators; every query hands out clones, so no
/// caller can reach into the stored state.
pub struct LedgerService {
    obligations: Vec<Obligation>,
}

impl LedgerService {
    pub fn new() -> Self {
        Self {
            obligations: Vec::new(),
        }
    }

    /// Create a new obligation and return the stored record, including its
    /// freshly assigned id. Fails if the description is blank or the amount
    /// is not strictly positive.
    pub fn create(&mut self, draft: ObligationDraft) -> Result<Obligation, AppError> {
        if draft.description.trim().is_empty() {
            return Err(AppError::EmptyDescription);
        }
        if draft.amount_cents <= 0 {
            return Err(AppError::NonPositiveAmount(draft.amount_cents));
        }

        let obligation = Obligation::from_draft(draft);
        self.obligations.push(obligation.clone());
        Ok(obligation)
    }

    /// Mark the obligation with the given id as settled. Settling is
    /// idempotent, and an unknown or malformed id is a silent no-op.
    /// Returns whether a record matched, so a front end can phrase its
    /// feedback; a miss is not an error in this contract.
    pub fn settle(&mut self, raw_id: &str) -> bool {
        let Some(id) = parse_id(raw_id) else {
            return false;
        };
        match self.obligations.iter_mut().find(|o| o.id == id) {
            Some(obligation) => {
                obligation.settled = true;
                true
            }
            None => false,
        }
    }

    /// All obligations in insertion order, as an independent snapshot.
    pub fn list(&self) -> Vec<Obligation> {
        self.obligations.clone()
    }

    /// Exact-match lookup. A malformed identifier is treated the same as an
    /// unknown one: absent, never an error.
    pub fn find_by_id(&self, raw_id: &str) -> Option<Obligation> {
        let id = parse_id(raw_id)?;
        self.obligations.iter().find(|o| o.id == id).cloned()
    }

    pub fn list_by_kind(&self, kind: ObligationKind) -> Vec<Obligation> {
        self.obligations
            .iter()
            .filter(|o| o.kind == kind)
            .cloned()
            .collect()
    }

    pub fn list_pending(&self) -> Vec<Obligation> {
        self.obligations
            .iter()
            .filter(|o| o.is_pending())
            .cloned()
            .collect()
    }

    /// Pending obligations whose due date has passed, judged against the
    /// current local calendar day at the moment of the call.
    pub fn list_overdue(&self) -> Vec<Obligation> {
        self.list_overdue_at(Local::now().date_naive())
    }

    /// Deterministic variant of [`list_overdue`](Self::list_overdue) for a
    /// caller-supplied reference day.
    pub fn list_overdue_at(&self, today: NaiveDate) -> Vec<Obligation> {
        self.obligations
            .iter()
            .filter(|o| o.is_overdue(today))
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.obligations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.obligations.is_empty()
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = &Obligation> {
        self.obligations.iter()
    }
}

impl Default for LedgerService {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_id(raw_id: &str) -> Option<Uuid> {
    Uuid::parse_str(raw_id.trim()).ok()
}
