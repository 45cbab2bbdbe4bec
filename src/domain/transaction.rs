use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{format_cents, parse_amount, Cents, MAX_AMOUNT_CENTS};

pub type TransactionId = i64;

/// Longest category name accepted at the write boundary.
pub const MAX_CATEGORY_LEN: usize = 20;

/// Dates are persisted and rendered as `MM-DD-YYYY` text.
pub const DATE_FORMAT: &str = "%m-%d-%Y";

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

pub fn parse_date(text: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(text, DATE_FORMAT).ok()
}

/// Whether an entry adds to or subtracts from the balance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TxKind {
    Income,
    Expense,
}

impl TxKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TxKind::Income => "Income",
            TxKind::Expense => "Expense",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "income" => Some(TxKind::Income),
            "expense" => Some(TxKind::Expense),
            _ => None,
        }
    }
}

/// A single income or expense entry as stored in the ledger.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Store-assigned, monotonically increasing, never reused after deletion.
    pub id: TransactionId,
    pub date: NaiveDate,
    pub kind: TxKind,
    pub category: String,
    /// Amount in cents (always positive; the sign lives in `kind`).
    pub amount_cents: Cents,
    pub note: Option<String>,
}

impl Transaction {
    /// The textual renderings a user sees for this row, in display order:
    /// date, kind, category, amount, note. Search matches against these.
    pub fn rendered_fields(&self) -> [String; 5] {
        [
            format_date(self.date),
            self.kind.as_str().to_string(),
            self.category.clone(),
            format_cents(self.amount_cents),
            self.note.clone().unwrap_or_default(),
        ]
    }
}

/// An unvalidated candidate entry as submitted by the user. The amount stays
/// raw text until validation parses and rounds it.
#[derive(Debug, Clone)]
pub struct TransactionDraft {
    pub date: NaiveDate,
    pub kind: TxKind,
    pub category: String,
    pub amount: String,
    pub note: Option<String>,
}

impl TransactionDraft {
    pub fn new(
        date: NaiveDate,
        kind: TxKind,
        category: impl Into<String>,
        amount: impl Into<String>,
    ) -> Self {
        Self {
            date,
            kind,
            category: category.into(),
            amount: amount.into(),
            note: None,
        }
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    /// Check the candidate against the write-boundary invariants, first
    /// violation wins: amount parses as a number, category is non-empty and
    /// at most 20 characters, amount is positive and at most 9,999,999.00.
    ///
    /// Note text and the date range are deliberately unconstrained.
    pub fn validate(self) -> Result<NewTransaction, ValidationError> {
        let amount_cents =
            parse_amount(&self.amount).map_err(|_| ValidationError::AmountNotNumeric)?;

        if self.category.is_empty() {
            return Err(ValidationError::CategoryEmpty);
        }
        if self.category.chars().count() > MAX_CATEGORY_LEN {
            return Err(ValidationError::CategoryTooLong);
        }
        if amount_cents <= 0 {
            return Err(ValidationError::AmountNotPositive);
        }
        if amount_cents > MAX_AMOUNT_CENTS {
            return Err(ValidationError::AmountTooLarge);
        }

        Ok(NewTransaction {
            date: self.date,
            kind: self.kind,
            category: self.category,
            amount_cents,
            note: self.note,
        })
    }
}

/// A validated candidate, ready to persist. Every invariant holds; only the
/// store-assigned id is missing.
#[derive(Debug, Clone, PartialEq)]
pub struct NewTransaction {
    pub date: NaiveDate,
    pub kind: TxKind,
    pub category: String,
    pub amount_cents: Cents,
    pub note: Option<String>,
}

impl NewTransaction {
    pub fn with_id(self, id: TransactionId) -> Transaction {
        Transaction {
            id,
            date: self.date,
            kind: self.kind,
            category: self.category,
            amount_cents: self.amount_cents,
            note: self.note,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    AmountNotNumeric,
    CategoryEmpty,
    CategoryTooLong,
    AmountNotPositive,
    AmountTooLarge,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::AmountNotNumeric => write!(f, "amount must be a number"),
            ValidationError::CategoryEmpty => write!(f, "category cannot be empty"),
            ValidationError::CategoryTooLong => {
                write!(f, "category is limited to {} characters", MAX_CATEGORY_LEN)
            }
            ValidationError::AmountNotPositive => write!(f, "amount must be a positive number"),
            ValidationError::AmountTooLarge => {
                write!(f, "amount cannot exceed 9999999.00")
            }
        }
    }
}

impl std::error::Error for ValidationError {}
