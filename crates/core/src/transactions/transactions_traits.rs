//! Ledger repository and service traits.
//!
//! These traits define the contract for ledger operations without any
//! storage-specific types, allowing for different storage implementations.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use super::recurring_model::SynthesisReport;
use super::transactions_model::{NewTransaction, Transaction, TransactionInput};
use crate::errors::Result;
use crate::utils::YearMonth;

/// Trait defining the contract for ledger storage.
///
/// The core has no knowledge of how these calls are transported or persisted.
#[async_trait]
pub trait LedgerRepositoryTrait: Send + Sync {
    /// Inserts an entry and returns its store-assigned id.
    ///
    /// When `created_at` is `None` the store stamps the insertion time.
    async fn add(&self, transaction: NewTransaction) -> Result<String>;

    /// Replaces a stored entry.
    ///
    /// Fails with a not-found error when the id is unknown or the owner does
    /// not match.
    async fn update(&self, transaction: Transaction) -> Result<()>;

    /// Deletes an entry by id.
    async fn delete(&self, transaction_id: &str) -> Result<()>;

    /// Entries whose `created_at` falls in the given month.
    async fn list_by_month(&self, owner_id: &str, month: YearMonth) -> Result<Vec<Transaction>>;

    /// All entries flagged as recurring, regardless of date.
    async fn list_recurring(&self, owner_id: &str) -> Result<Vec<Transaction>>;

    /// Number of entries whose `created_at` falls in the given month.
    async fn count_by_month(&self, owner_id: &str, month: YearMonth) -> Result<usize>;
}

/// Trait defining the contract for ledger service operations.
#[async_trait]
pub trait TransactionServiceTrait: Send + Sync {
    /// Validates raw input without touching the store.
    fn validate_and_build_transaction(
        &self,
        owner_id: &str,
        input: &TransactionInput,
    ) -> Result<NewTransaction>;

    /// Admits an already validated entry, subject to the monthly limit.
    async fn add_transaction(&self, transaction: NewTransaction) -> Result<String>;

    /// Validates and admits raw input.
    async fn create_transaction(&self, owner_id: &str, input: &TransactionInput)
        -> Result<String>;

    /// Re-validates raw input and replaces the stored entry.
    async fn update_transaction(
        &self,
        transaction_id: &str,
        owner_id: &str,
        input: &TransactionInput,
    ) -> Result<Transaction>;

    async fn delete_transaction(&self, transaction_id: &str) -> Result<()>;

    async fn get_transactions_by_month(
        &self,
        owner_id: &str,
        month: YearMonth,
    ) -> Result<Vec<Transaction>>;
}

/// Trait for carrying recurring entries forward into the current month.
#[async_trait]
pub trait RecurringServiceTrait: Send + Sync {
    /// Runs synthesis using the service clock.
    async fn process_recurring(&self, owner_id: &str) -> Result<SynthesisReport>;

    /// Runs synthesis as of `now`.
    async fn process_recurring_at(
        &self,
        owner_id: &str,
        now: DateTime<Utc>,
    ) -> Result<SynthesisReport>;
}
