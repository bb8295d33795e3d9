mod prompts;

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use dialoguer::theme::ColorfulTheme;
use dialoguer::Select;

use crate::application::{LedgerService, SummaryService};
use crate::domain::{format_cents, Obligation};

/// Obligo - payable/receivable obligation tracker
#[derive(Parser)]
#[command(name = "obligo")]
#[command(about = "Track payable and receivable obligations from the command line")]
#[command(version)]
pub struct Cli {}

#[derive(Clone, Copy)]
enum MenuAction {
    Add,
    List,
    Settle,
    Find,
    Summary,
    Quit,
}

const MENU_ITEMS: [(&str, MenuAction); 6] = [
    ("Add obligation", MenuAction::Add),
    ("List obligations", MenuAction::List),
    ("Settle an obligation", MenuAction::Settle),
    ("Find by id", MenuAction::Find),
    ("Summary", MenuAction::Summary),
    ("Quit", MenuAction::Quit),
];

impl Cli {
    /// Run the interactive session. State lives for the process lifetime
    /// only; quitting discards the ledger.
    pub fn run(self) -> Result<()> {
        let theme = ColorfulTheme::default();
        let mut ledger = LedgerService::new();

        println!("{}", "Obligo - payable & receivable tracker".bold());

        loop {
            println!();
            let labels: Vec<&str> = MENU_ITEMS.iter().map(|(label, _)| *label).collect();
            let choice = Select::with_theme(&theme)
                .with_prompt("What next?")
                .items(&labels)
                .default(0)
                .interact()?;

            match MENU_ITEMS[choice].1 {
                MenuAction::Add => run_add(&theme, &mut ledger)?,
                MenuAction::List => run_list(&theme, &ledger)?,
                MenuAction::Settle => run_settle(&theme, &mut ledger)?,
                MenuAction::Find => run_find(&theme, &ledger)?,
                MenuAction::Summary => run_summary(&ledger),
                MenuAction::Quit => break,
            }
        }

        Ok(())
    }
}

fn run_add(theme: &ColorfulTheme, ledger: &mut LedgerService) -> Result<()> {
    let draft = prompts::obligation_draft(theme)?;
    let obligation = ledger.create(draft)?;

    println!("{}", "Obligation recorded.".green());
    println!("  ID: {}", obligation.id);
    Ok(())
}

fn run_list(theme: &ColorfulTheme, ledger: &LedgerService) -> Result<()> {
    let obligations = match prompts::list_filter(theme)? {
        prompts::ListFilter::All => ledger.list(),
        prompts::ListFilter::ByKind(kind) => ledger.list_by_kind(kind),
        prompts::ListFilter::Pending => ledger.list_pending(),
        prompts::ListFilter::Overdue => ledger.list_overdue(),
    };

    if obligations.is_empty() {
        println!("No obligations to show.");
        return Ok(());
    }

    println!(
        "{:<12} {:<24} {:>12} {:<12} {:<8}",
        "KIND", "DESCRIPTION", "AMOUNT", "DUE", "STATUS"
    );
    println!("{}", "-".repeat(72));
    for obligation in &obligations {
        print_row(obligation);
    }
    Ok(())
}

fn run_settle(theme: &ColorfulTheme, ledger: &mut LedgerService) -> Result<()> {
    let pending = ledger.list_pending();
    if pending.is_empty() {
        println!("Nothing pending to settle.");
        return Ok(());
    }

    let Some(chosen) = prompts::pick_obligation(theme, &pending)? else {
        return Ok(());
    };

    if !prompts::confirm_settle(theme, &chosen)? {
        return Ok(());
    }

    // Settling by the id string keeps the menu on the same path as any
    // other caller of the ledger.
    ledger.settle(&chosen.id.to_string());
    println!("{}", "Marked as settled.".green());
    Ok(())
}

fn run_find(theme: &ColorfulTheme, ledger: &LedgerService) -> Result<()> {
    let raw_id = prompts::raw_id(theme)?;
    match ledger.find_by_id(&raw_id) {
        Some(obligation) => {
            println!("Obligation: {}", obligation.description);
            println!("  ID:      {}", obligation.id);
            println!("  Kind:    {}", obligation.kind);
            println!("  Amount:  {}", format_cents(obligation.amount_cents));
            println!("  Due:     {}", obligation.due_date.format("%Y-%m-%d"));
            println!("  Status:  {}", status_label(&obligation));
        }
        None => println!("No obligation found for '{}'.", raw_id.trim()),
    }
    Ok(())
}

fn run_summary(ledger: &LedgerService) {
    let summary = SummaryService::new(ledger).summarize();

    println!("Financial summary");
    println!("  Total payable:    {}", format_cents(summary.total_payable));
    println!(
        "  Total receivable: {}",
        format_cents(summary.total_receivable)
    );
    println!("  Net balance:      {}", format_cents(summary.net_balance));

    let overdue = ledger.list_overdue();
    if !overdue.is_empty() {
        println!();
        println!("{}", "Overdue:".red().bold());
        for obligation in &overdue {
            println!(
                "  {} - since {}",
                obligation.description,
                obligation.due_date.format("%Y-%m-%d")
            );
        }
    }
}

fn print_row(obligation: &Obligation) {
    println!(
        "{:<12} {:<24} {:>12} {:<12} {}",
        obligation.kind.as_str(),
        obligation.description,
        format_cents(obligation.amount_cents),
        obligation.due_date.format("%Y-%m-%d"),
        status_label(obligation)
    );
}

fn status_label(obligation: &Obligation) -> colored::ColoredString {
    if obligation.settled {
        "settled".green()
    } else if obligation.is_overdue(chrono::Local::now().date_naive()) {
        "overdue".red()
    } else {
        "pending".yellow()
    }
}
