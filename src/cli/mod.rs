use anyhow::{anyhow, Context, Result};
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};

use crate::application::LedgerService;
use crate::domain::{
    format_cents, format_date, parse_date, Transaction, TransactionDraft, TxKind,
};

/// Kwenta - Personal Finance Tracker
#[derive(Parser)]
#[command(name = "kwenta")]
#[command(about = "Track dated income and expense entries and a running balance")]
#[command(version)]
pub struct Cli {
    /// Database file path
    #[arg(short, long, default_value = "finance.db")]
    pub database: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize a new database
    Init,

    /// Record a new transaction
    Add {
        /// Entry kind: income or expense
        kind: String,

        /// Category name (at most 20 characters)
        category: String,

        /// Amount (e.g., "150.50" or "150")
        amount: String,

        /// Date of the entry (MM-DD-YYYY, defaults to today)
        #[arg(long)]
        date: Option<String>,

        /// Free-form note
        #[arg(short, long)]
        note: Option<String>,
    },

    /// List transactions, oldest first
    List {
        /// Keep only rows whose fields contain this text (case-insensitive)
        #[arg(short, long)]
        search: Option<String>,
    },

    /// Show the running balance and tracked-since date
    Summary,

    /// Replace a transaction wholesale
    Edit {
        /// Transaction id
        id: i64,

        /// Entry kind: income or expense
        kind: String,

        /// Category name (at most 20 characters)
        category: String,

        /// Amount (e.g., "150.50" or "150")
        amount: String,

        /// Date of the entry (MM-DD-YYYY, defaults to today)
        #[arg(long)]
        date: Option<String>,

        /// Free-form note
        #[arg(short, long)]
        note: Option<String>,
    },

    /// Delete a transaction by id
    Delete {
        /// Transaction id
        id: i64,
    },
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        match self.command {
            Commands::Init => {
                LedgerService::init(&self.database).await?;
                println!("Database initialized: {}", self.database);
            }

            Commands::Add {
                kind,
                category,
                amount,
                date,
                note,
            } => {
                let service = LedgerService::connect(&self.database).await?;
                let draft = build_draft(kind, category, amount, date, note)?;
                let tx = service.add_transaction(draft).await?;
                println!(
                    "Recorded {} #{}: {} {} on {}",
                    tx.kind.as_str().to_lowercase(),
                    tx.id,
                    tx.category,
                    format_cents(tx.amount_cents),
                    format_date(tx.date),
                );
            }

            Commands::List { search } => {
                let service = LedgerService::connect(&self.database).await?;
                let rows = service.list_transactions().await?;
                let rows = match search {
                    Some(ref query) => LedgerService::filter(&rows, query),
                    None => rows,
                };
                print_table(&rows);
            }

            Commands::Summary => {
                let service = LedgerService::connect(&self.database).await?;
                let summary = service.summary().await?;
                println!(
                    "Current balance: ₱{} {}",
                    format_cents(summary.balance_cents),
                    summary.trend().indicator(),
                );
                match summary.tracked_since {
                    Some(date) => println!("Tracked since: {}", format_date(date)),
                    None => println!("Tracked since: (no transactions yet)"),
                }
            }

            Commands::Edit {
                id,
                kind,
                category,
                amount,
                date,
                note,
            } => {
                let service = LedgerService::connect(&self.database).await?;
                let draft = build_draft(kind, category, amount, date, note)?;
                let tx = service.update_transaction(id, draft).await?;
                println!("Updated transaction #{}", tx.id);
            }

            Commands::Delete { id } => {
                let service = LedgerService::connect(&self.database).await?;
                service.delete_transaction(id).await?;
                println!("Deleted transaction #{}", id);
            }
        }

        Ok(())
    }
}

fn build_draft(
    kind: String,
    category: String,
    amount: String,
    date: Option<String>,
    note: Option<String>,
) -> Result<TransactionDraft> {
    let kind = TxKind::from_str(&kind)
        .ok_or_else(|| anyhow!("Unknown kind '{}'. Use 'income' or 'expense'", kind))?;
    let date = match date {
        Some(text) => parse_date(&text)
            .with_context(|| format!("Invalid date '{}'. Use MM-DD-YYYY", text))?,
        None => today(),
    };

    let mut draft = TransactionDraft::new(date, kind, category, amount);
    if let Some(note) = note {
        draft = draft.with_note(note);
    }
    Ok(draft)
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

fn print_table(rows: &[Transaction]) {
    if rows.is_empty() {
        println!("No transactions.");
        return;
    }

    println!(
        "{:>5}  {:<10}  {:<7}  {:<20}  {:>12}  {}",
        "ID", "DATE", "TYPE", "CATEGORY", "AMOUNT", "NOTE"
    );
    for tx in rows {
        let [date, kind, category, amount, note] = tx.rendered_fields();
        println!(
            "{:>5}  {:<10}  {:<7}  {:<20}  {:>12}  {}",
            tx.id, date, kind, category, amount, note
        );
    }
}
