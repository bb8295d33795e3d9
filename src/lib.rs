pub mod application;
pub mod cli;
pub mod domain;

pub use application::{AppError, FinancialSummary, LedgerService, SummaryService};
pub use domain::*;
