use thiserror::Error;

use crate::domain::Cents;

/// Validation failures for obligation creation. The ledger re-validates its
/// input even though the CLI prompts already do, so a programmatic caller
/// gets the same guarantees as an interactive one.
///
/// Lookup and settlement misses are deliberately not errors: an unknown or
/// malformed identifier yields an absent result / no-op instead.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    #[error("Description must not be empty")]
    EmptyDescription,

    #[error("Amount must be positive, got {0} cents")]
    NonPositiveAmount(Cents),
}
