use anyhow::{Context, Result};
use sqlx::{Row, SqlitePool};

use crate::domain::{
    format_date, parse_date, Cents, NewTransaction, Transaction, TransactionId, TxKind,
};

use super::MIGRATION_001_INITIAL;

/// Repository for persisting and querying ledger transactions.
///
/// Owns the SQLite pool for its whole lifetime: opened at process start,
/// released on drop. Each mutation is a single autocommitted statement, so a
/// crash never leaves a half-applied record behind.
pub struct Repository {
    pool: SqlitePool,
}

impl Repository {
    /// Create a new repository with the given SQLite connection pool.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Connect to a SQLite database at the given path.
    pub async fn connect(database_url: &str) -> Result<Self> {
        let pool = SqlitePool::connect(database_url)
            .await
            .context("Failed to connect to database")?;
        Ok(Self::new(pool))
    }

    /// Run database migrations. Safe to call on every startup.
    pub async fn migrate(&self) -> Result<()> {
        sqlx::query(MIGRATION_001_INITIAL)
            .execute(&self.pool)
            .await
            .context("Failed to run migration 001")?;
        Ok(())
    }

    /// Initialize a new database (connect + migrate).
    pub async fn init(database_url: &str) -> Result<Self> {
        let repo = Self::connect(database_url).await?;
        repo.migrate().await?;
        Ok(repo)
    }

    /// Insert a validated transaction and return the store-assigned id.
    pub async fn insert_transaction(&self, new: &NewTransaction) -> Result<TransactionId> {
        let row = sqlx::query(
            r#"
            INSERT INTO transactions (date, type, category, amount, note)
            VALUES (?, ?, ?, ?, ?)
            RETURNING id
            "#,
        )
        .bind(format_date(new.date))
        .bind(new.kind.as_str())
        .bind(&new.category)
        .bind(cents_to_db(new.amount_cents))
        .bind(&new.note)
        .fetch_one(&self.pool)
        .await
        .context("Failed to insert transaction")?;

        Ok(row.get("id"))
    }

    /// Get a transaction by id.
    pub async fn get_transaction(&self, id: TransactionId) -> Result<Option<Transaction>> {
        let row = sqlx::query(
            r#"
            SELECT id, date, type, category, amount, note
            FROM transactions
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .context("Failed to fetch transaction")?;

        match row {
            Some(row) => Ok(Some(Self::row_to_transaction(&row)?)),
            None => Ok(None),
        }
    }

    /// List all transactions, ascending by date with ties broken by id.
    ///
    /// Dates are stored as MM-DD-YYYY text, which does not collate
    /// chronologically, so the ordering happens after decoding.
    pub async fn list_transactions(&self) -> Result<Vec<Transaction>> {
        let rows = sqlx::query(
            r#"
            SELECT id, date, type, category, amount, note
            FROM transactions
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .context("Failed to list transactions")?;

        let mut transactions = rows
            .iter()
            .map(Self::row_to_transaction)
            .collect::<Result<Vec<_>>>()?;
        transactions.sort_by_key(|tx| (tx.date, tx.id));
        Ok(transactions)
    }

    /// Replace the whole record at `id`. Returns false when the id is absent,
    /// in which case nothing changes.
    pub async fn update_transaction(
        &self,
        id: TransactionId,
        new: &NewTransaction,
    ) -> Result<bool> {
        let result = sqlx::query(
            r#"
            UPDATE transactions
            SET date = ?, type = ?, category = ?, amount = ?, note = ?
            WHERE id = ?
            "#,
        )
        .bind(format_date(new.date))
        .bind(new.kind.as_str())
        .bind(&new.category)
        .bind(cents_to_db(new.amount_cents))
        .bind(&new.note)
        .bind(id)
        .execute(&self.pool)
        .await
        .context("Failed to update transaction")?;

        Ok(result.rows_affected() > 0)
    }

    /// Delete the record at `id`. Returns false when the id is absent.
    pub async fn delete_transaction(&self, id: TransactionId) -> Result<bool> {
        let result = sqlx::query("DELETE FROM transactions WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .context("Failed to delete transaction")?;

        Ok(result.rows_affected() > 0)
    }

    fn row_to_transaction(row: &sqlx::sqlite::SqliteRow) -> Result<Transaction> {
        let date_str: String = row.get("date");
        let kind_str: String = row.get("type");
        let amount: f64 = row.get("amount");

        Ok(Transaction {
            id: row.get("id"),
            date: parse_date(&date_str)
                .with_context(|| format!("Invalid transaction date: {}", date_str))?,
            kind: TxKind::from_str(&kind_str)
                .with_context(|| format!("Invalid transaction type: {}", kind_str))?,
            category: row.get("category"),
            amount_cents: db_to_cents(amount),
            note: row.get("note"),
        })
    }
}

/// Amounts persist as a REAL number of currency units. Every valid amount is
/// an exact multiple of 0.01 no larger than 9,999,999.00, well inside f64's
/// integer-exact range once scaled by 100, so the round trip is lossless.
fn cents_to_db(cents: Cents) -> f64 {
    cents as f64 / 100.0
}

fn db_to_cents(amount: f64) -> Cents {
    (amount * 100.0).round() as Cents
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_amount_round_trip_is_exact() {
        for cents in [1, 99, 100, 15050, 84950, 999_999_900] {
            assert_eq!(db_to_cents(cents_to_db(cents)), cents);
        }
    }
}
