use chrono::NaiveDate;

use super::{Cents, Transaction, TxKind};

/// The derived view shown above the transaction table: running balance and
/// the date the ledger started tracking. Recomputed on demand, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LedgerSummary {
    pub balance_cents: Cents,
    pub tracked_since: Option<NaiveDate>,
}

impl LedgerSummary {
    pub fn trend(&self) -> BalanceTrend {
        BalanceTrend::for_balance(self.balance_cents)
    }
}

/// Presentation hint derived from the balance sign. Owned here so every
/// shell renders the same arrow for the same balance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BalanceTrend {
    Up,
    Down,
    Flat,
}

impl BalanceTrend {
    pub fn for_balance(balance_cents: Cents) -> Self {
        match balance_cents {
            b if b > 0 => BalanceTrend::Up,
            b if b < 0 => BalanceTrend::Down,
            _ => BalanceTrend::Flat,
        }
    }

    /// The arrow glyph next to the balance; empty when flat.
    pub fn indicator(&self) -> &'static str {
        match self {
            BalanceTrend::Up => "▲",
            BalanceTrend::Down => "▼",
            BalanceTrend::Flat => "",
        }
    }
}

/// Compute the summary over the full transaction set.
/// Balance = sum of income amounts - sum of expense amounts;
/// tracked_since = date of the earliest entry (ties broken by id).
pub fn summarize(transactions: &[Transaction]) -> LedgerSummary {
    let balance_cents = transactions.iter().fold(0, |balance, tx| match tx.kind {
        TxKind::Income => balance + tx.amount_cents,
        TxKind::Expense => balance - tx.amount_cents,
    });

    let tracked_since = transactions
        .iter()
        .min_by_key(|tx| (tx.date, tx.id))
        .map(|tx| tx.date);

    LedgerSummary {
        balance_cents,
        tracked_since,
    }
}

/// Keep the rows whose rendering contains `query`, case-insensitively, in
/// any visible field. A pure transform over rows already in hand; an empty
/// query keeps everything.
pub fn filter_rows(rows: &[Transaction], query: &str) -> Vec<Transaction> {
    let needle = query.to_lowercase();
    rows.iter()
        .filter(|tx| {
            tx.rendered_fields()
                .iter()
                .any(|field| field.to_lowercase().contains(&needle))
        })
        .cloned()
        .collect()
}
