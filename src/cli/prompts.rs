//! Interactive prompts. Each prompt keeps re-asking until the input is
//! valid, so the ledger only ever sees well-formed, typed values.

use anyhow::Result;
use chrono::{Local, NaiveDate};
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, Input, Select};

use crate::domain::{
    format_cents, parse_cents, Obligation, ObligationDraft, ObligationKind,
};

pub enum ListFilter {
    All,
    ByKind(ObligationKind),
    Pending,
    Overdue,
}

/// Collect a complete, validated creation request.
pub fn obligation_draft(theme: &ColorfulTheme) -> Result<ObligationDraft> {
    let description: String = Input::with_theme(theme)
        .with_prompt("Description")
        .validate_with(|input: &String| -> Result<(), &str> {
            if input.trim().is_empty() {
                Err("description must not be empty")
            } else {
                Ok(())
            }
        })
        .interact_text()?;

    let amount: String = Input::with_theme(theme)
        .with_prompt("Amount (e.g. 120.90)")
        .validate_with(|input: &String| -> Result<(), String> {
            match parse_cents(input) {
                Ok(cents) if cents > 0 => Ok(()),
                Ok(_) => Err("amount must be greater than zero".into()),
                Err(e) => Err(e.to_string()),
            }
        })
        .interact_text()?;
    let amount_cents = parse_cents(&amount).unwrap_or_default();

    let today = Local::now().date_naive();
    let due: String = Input::with_theme(theme)
        .with_prompt("Due date (YYYY-MM-DD)")
        .validate_with(move |input: &String| -> Result<(), String> {
            match parse_due_date(input) {
                Ok(date) if date < today => {
                    Err("due date must not be earlier than today".into())
                }
                Ok(_) => Ok(()),
                Err(e) => Err(e),
            }
        })
        .interact_text()?;
    let due_date = parse_due_date(&due).unwrap_or(today);

    let kinds = [ObligationKind::Payable, ObligationKind::Receivable];
    let kind_choice = Select::with_theme(theme)
        .with_prompt("Kind")
        .items(&["payable (money you owe)", "receivable (money owed to you)"])
        .default(0)
        .interact()?;

    Ok(ObligationDraft {
        description: description.trim().to_string(),
        amount_cents,
        due_date,
        kind: kinds[kind_choice],
    })
}

pub fn list_filter(theme: &ColorfulTheme) -> Result<ListFilter> {
    let choice = Select::with_theme(theme)
        .with_prompt("Which obligations?")
        .items(&["all", "payable", "receivable", "pending", "overdue"])
        .default(0)
        .interact()?;

    Ok(match choice {
        1 => ListFilter::ByKind(ObligationKind::Payable),
        2 => ListFilter::ByKind(ObligationKind::Receivable),
        3 => ListFilter::Pending,
        4 => ListFilter::Overdue,
        _ => ListFilter::All,
    })
}

/// Pick one obligation from a non-empty list. Returns None when the user
/// backs out.
pub fn pick_obligation(
    theme: &ColorfulTheme,
    obligations: &[Obligation],
) -> Result<Option<Obligation>> {
    let mut labels: Vec<String> = obligations
        .iter()
        .map(|o| {
            format!(
                "{} - {} (due {})",
                o.description,
                format_cents(o.amount_cents),
                o.due_date.format("%Y-%m-%d")
            )
        })
        .collect();
    labels.push("(back)".to_string());

    let choice = Select::with_theme(theme)
        .with_prompt("Which one?")
        .items(&labels)
        .default(0)
        .interact()?;

    Ok(obligations.get(choice).cloned())
}

pub fn confirm_settle(theme: &ColorfulTheme, obligation: &Obligation) -> Result<bool> {
    let confirmed = Confirm::with_theme(theme)
        .with_prompt(format!(
            "Mark '{}' ({}) as settled?",
            obligation.description,
            format_cents(obligation.amount_cents)
        ))
        .default(true)
        .interact()?;
    Ok(confirmed)
}

/// A raw identifier string. The ledger treats malformed input as not-found,
/// so only presence is checked here.
pub fn raw_id(theme: &ColorfulTheme) -> Result<String> {
    let raw: String = Input::with_theme(theme)
        .with_prompt("Obligation id")
        .interact_text()?;
    Ok(raw)
}

fn parse_due_date(input: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d")
        .map_err(|_| "use the YYYY-MM-DD format".to_string())
}
