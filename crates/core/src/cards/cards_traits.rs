use async_trait::async_trait;

use super::cards_model::{CardInvoice, CreditCard, NewCreditCard};
use crate::errors::Result;
use crate::utils::YearMonth;

/// Trait for credit card repository operations
#[async_trait]
pub trait CreditCardRepositoryTrait: Send + Sync {
    /// Cards owned by `owner_id`, ordered by name.
    async fn get_cards(&self, owner_id: &str) -> Result<Vec<CreditCard>>;
    async fn add_card(&self, new_card: NewCreditCard) -> Result<CreditCard>;
    /// Fails with `ValidationError::CardInUse` while ledger entries are still
    /// charged to the card.
    async fn delete_card(&self, card_id: &str) -> Result<()>;
}

/// Trait for credit card service operations
#[async_trait]
pub trait CardServiceTrait: Send + Sync {
    async fn get_cards(&self, owner_id: &str) -> Result<Vec<CreditCard>>;
    async fn add_card(&self, new_card: NewCreditCard) -> Result<CreditCard>;
    async fn delete_card(&self, card_id: &str) -> Result<()>;
    async fn get_card_invoice(
        &self,
        owner_id: &str,
        card_id: &str,
        month: YearMonth,
    ) -> Result<CardInvoice>;
    async fn get_card_invoices(&self, owner_id: &str, month: YearMonth)
        -> Result<Vec<CardInvoice>>;
}
