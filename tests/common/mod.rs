// Allow dead_code because these helpers are used across different test files
// which are compiled separately
#![allow(dead_code)]

use anyhow::Result;
use chrono::NaiveDate;
use kwenta::application::LedgerService;
use kwenta::domain::{TransactionDraft, TxKind};
use tempfile::TempDir;

/// Helper to create a test service with a temporary database
pub async fn test_service() -> Result<(LedgerService, TempDir)> {
    let temp_dir = TempDir::new()?;
    let db_path = temp_dir.path().join("test.db");
    let service = LedgerService::init(db_path.to_str().unwrap()).await?;
    Ok((service, temp_dir))
}

/// Helper to parse an MM-DD-YYYY date string
pub fn date(date_str: &str) -> NaiveDate {
    NaiveDate::parse_from_str(date_str, "%m-%d-%Y").unwrap()
}

pub fn income(date_str: &str, category: &str, amount: &str) -> TransactionDraft {
    TransactionDraft::new(date(date_str), TxKind::Income, category, amount)
}

pub fn expense(date_str: &str, category: &str, amount: &str) -> TransactionDraft {
    TransactionDraft::new(date(date_str), TxKind::Expense, category, amount)
}
