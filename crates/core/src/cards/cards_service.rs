use std::sync::Arc;

use async_trait::async_trait;
use log::debug;
use rust_decimal::Decimal;

use super::cards_model::{CardInvoice, CreditCard, NewCreditCard};
use super::cards_traits::{CardServiceTrait, CreditCardRepositoryTrait};
use super::invoice_calculator::calculate_invoice;
use crate::errors::{Error, Result, ValidationError};
use crate::transactions::LedgerRepositoryTrait;
use crate::utils::YearMonth;

pub struct CardService {
    card_repository: Arc<dyn CreditCardRepositoryTrait>,
    ledger: Arc<dyn LedgerRepositoryTrait>,
}

impl CardService {
    pub fn new(
        card_repository: Arc<dyn CreditCardRepositoryTrait>,
        ledger: Arc<dyn LedgerRepositoryTrait>,
    ) -> Self {
        Self {
            card_repository,
            ledger,
        }
    }

    fn validate_new_card(new_card: &NewCreditCard) -> std::result::Result<(), ValidationError> {
        if new_card.owner_id.trim().is_empty() {
            return Err(ValidationError::OwnerRequired);
        }
        if new_card.name.trim().is_empty() {
            return Err(ValidationError::InvalidCard("name is required".to_string()));
        }
        if new_card.limit_amount <= Decimal::ZERO {
            return Err(ValidationError::InvalidCard(
                "limit must be greater than zero".to_string(),
            ));
        }
        for (field, day) in [
            ("closing day", new_card.closing_day),
            ("due day", new_card.due_day),
        ] {
            if !(1..=31).contains(&day) {
                return Err(ValidationError::InvalidCard(format!(
                    "{} must be between 1 and 31, got {}",
                    field, day
                )));
            }
        }
        Ok(())
    }
}

#[async_trait]
impl CardServiceTrait for CardService {
    async fn get_cards(&self, owner_id: &str) -> Result<Vec<CreditCard>> {
        self.card_repository.get_cards(owner_id).await
    }

    async fn add_card(&self, mut new_card: NewCreditCard) -> Result<CreditCard> {
        Self::validate_new_card(&new_card)?;
        new_card.name = new_card.name.trim().to_string();
        debug!("Adding card '{}' for owner {}", new_card.name, new_card.owner_id);
        self.card_repository.add_card(new_card).await
    }

    async fn delete_card(&self, card_id: &str) -> Result<()> {
        self.card_repository.delete_card(card_id).await
    }

    async fn get_card_invoice(
        &self,
        owner_id: &str,
        card_id: &str,
        month: YearMonth,
    ) -> Result<CardInvoice> {
        let card = self
            .card_repository
            .get_cards(owner_id)
            .await?
            .into_iter()
            .find(|c| c.id == card_id)
            .ok_or_else(|| Error::NotFound(format!("Card {}", card_id)))?;

        let transactions = self.ledger.list_by_month(owner_id, month).await?;
        Ok(calculate_invoice(&card, &transactions, month))
    }

    async fn get_card_invoices(
        &self,
        owner_id: &str,
        month: YearMonth,
    ) -> Result<Vec<CardInvoice>> {
        let cards = self.card_repository.get_cards(owner_id).await?;
        if cards.is_empty() {
            return Ok(Vec::new());
        }
        let transactions = self.ledger.list_by_month(owner_id, month).await?;
        Ok(cards
            .iter()
            .map(|card| calculate_invoice(card, &transactions, month))
            .collect())
    }
}
