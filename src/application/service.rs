use crate::domain::{
    filter_rows, summarize, LedgerSummary, Transaction, TransactionDraft, TransactionId,
};
use crate::storage::Repository;

use super::AppError;

/// Application service providing high-level operations for the ledger.
/// This is the primary interface for any client (CLI, GUI, TUI, etc.):
/// validated mutations against the store plus the derived read views.
pub struct LedgerService {
    repo: Repository,
}

impl LedgerService {
    /// Create a new ledger service with the given repository.
    pub fn new(repo: Repository) -> Self {
        Self { repo }
    }

    /// Initialize a new database at the given path (created if missing).
    pub async fn init(database_path: &str) -> Result<Self, AppError> {
        let db_url = format!("sqlite:{}?mode=rwc", database_path);
        let repo = Repository::init(&db_url).await?;
        Ok(Self::new(repo))
    }

    /// Connect to an existing database.
    pub async fn connect(database_path: &str) -> Result<Self, AppError> {
        let db_url = format!("sqlite:{}", database_path);
        let repo = Repository::connect(&db_url).await?;
        Ok(Self::new(repo))
    }

    // ========================
    // Store operations
    // ========================

    /// Validate and persist a candidate entry. Returns the stored record
    /// carrying its newly assigned id. Invalid candidates never touch the
    /// store.
    pub async fn add_transaction(
        &self,
        draft: TransactionDraft,
    ) -> Result<Transaction, AppError> {
        let new = draft.validate()?;
        let id = self.repo.insert_transaction(&new).await?;
        Ok(new.with_id(id))
    }

    /// Look up a single entry by id.
    pub async fn get_transaction(&self, id: TransactionId) -> Result<Transaction, AppError> {
        self.repo
            .get_transaction(id)
            .await?
            .ok_or(AppError::NotFound(id))
    }

    /// List every entry, ascending by date with ties broken by id. The
    /// returned snapshot does not track later mutations.
    pub async fn list_transactions(&self) -> Result<Vec<Transaction>, AppError> {
        Ok(self.repo.list_transactions().await?)
    }

    /// Replace the entry at `id` with a re-validated candidate. The record
    /// is swapped wholesale; there is no partial patch.
    pub async fn update_transaction(
        &self,
        id: TransactionId,
        draft: TransactionDraft,
    ) -> Result<Transaction, AppError> {
        let new = draft.validate()?;
        if !self.repo.update_transaction(id, &new).await? {
            return Err(AppError::NotFound(id));
        }
        Ok(new.with_id(id))
    }

    /// Permanently remove the entry at `id`. Deleting an absent id reports
    /// NotFound and changes nothing, however often it is retried.
    pub async fn delete_transaction(&self, id: TransactionId) -> Result<(), AppError> {
        if !self.repo.delete_transaction(id).await? {
            return Err(AppError::NotFound(id));
        }
        Ok(())
    }

    // ========================
    // Derived views
    // ========================

    /// Balance and tracked-since date over the current transaction set.
    pub async fn summary(&self) -> Result<LedgerSummary, AppError> {
        let transactions = self.repo.list_transactions().await?;
        Ok(summarize(&transactions))
    }

    /// Case-insensitive substring search over rows already fetched. Pure and
    /// stateless: it never goes back to storage.
    pub fn filter(rows: &[Transaction], query: &str) -> Vec<Transaction> {
        filter_rows(rows, query)
    }
}
