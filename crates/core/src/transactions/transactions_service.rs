use std::sync::Arc;

use async_trait::async_trait;
use log::{debug, warn};

use super::transactions_model::{NewTransaction, PaymentMethod, Transaction, TransactionInput};
use super::transactions_traits::{LedgerRepositoryTrait, TransactionServiceTrait};
use super::transactions_validation::{check_new_transaction, validate_and_build_transaction};
use crate::cards::CreditCardRepositoryTrait;
use crate::errors::{Error, Result, ValidationError};
use crate::settings::Settings;
use crate::utils::{Clock, YearMonth};

/// Service for admitting, editing and listing ledger entries.
pub struct TransactionService {
    ledger: Arc<dyn LedgerRepositoryTrait>,
    card_repository: Arc<dyn CreditCardRepositoryTrait>,
    clock: Arc<dyn Clock>,
    settings: Settings,
}

impl TransactionService {
    pub fn new(
        ledger: Arc<dyn LedgerRepositoryTrait>,
        card_repository: Arc<dyn CreditCardRepositoryTrait>,
        clock: Arc<dyn Clock>,
        settings: Settings,
    ) -> Self {
        Self {
            ledger,
            card_repository,
            clock,
            settings,
        }
    }

    /// Rejects the add when the target month already holds the maximum
    /// number of entries. Not atomic with the insert that follows.
    async fn check_monthly_limit(&self, owner_id: &str, month: YearMonth) -> Result<()> {
        let count = self.ledger.count_by_month(owner_id, month).await?;
        let limit = self.settings.monthly_transaction_limit;
        if count >= limit {
            warn!(
                "Owner {} reached the monthly limit of {} entries for {}",
                owner_id, limit, month
            );
            return Err(Error::MonthlyLimitExceeded { limit, month });
        }
        Ok(())
    }

    /// Card charges must reference one of the owner's cards.
    async fn check_card_reference(
        &self,
        owner_id: &str,
        payment_method: PaymentMethod,
        card_id: Option<&str>,
    ) -> Result<()> {
        if payment_method != PaymentMethod::CreditCard {
            return Ok(());
        }
        let card_id = card_id.ok_or(ValidationError::CardRequired)?;
        let cards = self.card_repository.get_cards(owner_id).await?;
        if !cards.iter().any(|c| c.id == card_id) {
            return Err(ValidationError::UnknownCard(card_id.to_string()).into());
        }
        Ok(())
    }
}

#[async_trait]
impl TransactionServiceTrait for TransactionService {
    fn validate_and_build_transaction(
        &self,
        owner_id: &str,
        input: &TransactionInput,
    ) -> Result<NewTransaction> {
        Ok(validate_and_build_transaction(
            owner_id,
            input,
            self.settings.max_amount,
        )?)
    }

    async fn add_transaction(&self, mut transaction: NewTransaction) -> Result<String> {
        check_new_transaction(&transaction, self.settings.max_amount)?;
        if transaction.payment_method == PaymentMethod::Cash {
            transaction.card_id = None;
        }
        let month = transaction.target_month(&self.clock.now());
        debug!(
            "Adding {} entry '{}' for owner {} in {}",
            transaction.kind, transaction.description, transaction.owner_id, month
        );

        self.check_monthly_limit(&transaction.owner_id, month).await?;
        self.check_card_reference(
            &transaction.owner_id,
            transaction.payment_method,
            transaction.card_id.as_deref(),
        )
        .await?;

        self.ledger.add(transaction).await
    }

    async fn create_transaction(
        &self,
        owner_id: &str,
        input: &TransactionInput,
    ) -> Result<String> {
        let transaction = self.validate_and_build_transaction(owner_id, input)?;
        self.add_transaction(transaction).await
    }

    async fn update_transaction(
        &self,
        transaction_id: &str,
        owner_id: &str,
        input: &TransactionInput,
    ) -> Result<Transaction> {
        if transaction_id.trim().is_empty() {
            return Err(Error::NotFound("Transaction id is required".to_string()));
        }
        let validated = self.validate_and_build_transaction(owner_id, input)?;
        self.check_card_reference(
            &validated.owner_id,
            validated.payment_method,
            validated.card_id.as_deref(),
        )
        .await?;

        let transaction = Transaction::from_new(transaction_id, validated);
        debug!("Updating entry {} for owner {}", transaction.id, transaction.owner_id);
        self.ledger.update(transaction.clone()).await?;
        Ok(transaction)
    }

    async fn delete_transaction(&self, transaction_id: &str) -> Result<()> {
        if transaction_id.trim().is_empty() {
            return Err(Error::NotFound("Transaction id is required".to_string()));
        }
        self.ledger.delete(transaction_id).await
    }

    async fn get_transactions_by_month(
        &self,
        owner_id: &str,
        month: YearMonth,
    ) -> Result<Vec<Transaction>> {
        self.ledger.list_by_month(owner_id, month).await
    }
}
