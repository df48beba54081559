use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;
use diesel::SqliteConnection;
use uuid::Uuid;

use tally_core::cards::{CreditCard, CreditCardRepositoryTrait, NewCreditCard};
use tally_core::errors::{Error, Result, ValidationError};
use tally_core::transactions::PaymentMethod;

use super::model::{CreditCardDB, NewCreditCardDB};
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::IntoCore;
use crate::schema::{credit_cards, transactions};

pub struct CreditCardRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl CreditCardRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        CreditCardRepository { pool, writer }
    }
}

#[async_trait]
impl CreditCardRepositoryTrait for CreditCardRepository {
    async fn get_cards(&self, owner_id: &str) -> Result<Vec<CreditCard>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = credit_cards::table
            .filter(credit_cards::owner_id.eq(owner_id))
            .order(credit_cards::name.asc())
            .select(CreditCardDB::as_select())
            .load::<CreditCardDB>(&mut conn)
            .into_core()?;

        rows.into_iter()
            .map(|row| CreditCard::try_from(row).map_err(Error::from))
            .collect()
    }

    async fn add_card(&self, new_card: NewCreditCard) -> Result<CreditCard> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<CreditCard> {
                let row = NewCreditCardDB::from_domain(
                    Uuid::new_v4().to_string(),
                    new_card,
                    Utc::now().naive_utc(),
                );
                let stored = diesel::insert_into(credit_cards::table)
                    .values(&row)
                    .returning(CreditCardDB::as_returning())
                    .get_result(conn)
                    .into_core()?;
                Ok(CreditCard::try_from(stored)?)
            })
            .await
    }

    async fn delete_card(&self, card_id: &str) -> Result<()> {
        let card_id = card_id.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<()> {
                // Charges keep their card reference, so the card stays while any exist.
                let charges: i64 = transactions::table
                    .filter(transactions::card_id.eq(&card_id))
                    .filter(transactions::payment_method.eq(PaymentMethod::CreditCard.as_str()))
                    .count()
                    .get_result(conn)
                    .into_core()?;
                if charges > 0 {
                    return Err(ValidationError::CardInUse(card_id.clone()).into());
                }

                let deleted = diesel::delete(credit_cards::table.find(&card_id))
                    .execute(conn)
                    .into_core()?;
                if deleted == 0 {
                    return Err(Error::NotFound(format!("Card {}", card_id)));
                }
                Ok(())
            })
            .await
    }
}
