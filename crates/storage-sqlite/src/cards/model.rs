//! Database models for credit cards.

use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use tally_core::cards::{CreditCard, NewCreditCard};

use crate::errors::StorageError;
use crate::utils::{parse_decimal, to_utc};

/// Database model for credit cards
#[derive(Queryable, Identifiable, Selectable, PartialEq, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = crate::schema::credit_cards)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct CreditCardDB {
    pub id: String,
    pub owner_id: String,
    pub name: String,
    pub limit_amount: String,
    pub closing_day: i32,
    pub due_day: i32,
    pub color: String,
    pub created_at: Option<NaiveDateTime>,
}

/// Database model for creating a new credit card
#[derive(Insertable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = crate::schema::credit_cards)]
#[serde(rename_all = "camelCase")]
pub struct NewCreditCardDB {
    pub id: String,
    pub owner_id: String,
    pub name: String,
    pub limit_amount: String,
    pub closing_day: i32,
    pub due_day: i32,
    pub color: String,
    pub created_at: NaiveDateTime,
}

impl NewCreditCardDB {
    pub fn from_domain(id: String, domain: NewCreditCard, created_at: NaiveDateTime) -> Self {
        Self {
            id,
            owner_id: domain.owner_id,
            name: domain.name,
            limit_amount: domain.limit_amount.to_string(),
            // Days are validated to 1..=31 before reaching storage.
            closing_day: domain.closing_day as i32,
            due_day: domain.due_day as i32,
            color: domain.color,
            created_at,
        }
    }
}

fn day(value: i32, field: &str) -> Result<u32, StorageError> {
    u32::try_from(value)
        .map_err(|_| StorageError::SerializationError(format!("{} '{}'", field, value)))
}

impl TryFrom<CreditCardDB> for CreditCard {
    type Error = StorageError;

    fn try_from(db: CreditCardDB) -> Result<Self, Self::Error> {
        Ok(Self {
            limit_amount: parse_decimal(&db.limit_amount, "limit_amount")?,
            closing_day: day(db.closing_day, "closing_day")?,
            due_day: day(db.due_day, "due_day")?,
            id: db.id,
            owner_id: db.owner_id,
            name: db.name,
            color: db.color,
            created_at: db.created_at.map(to_utc),
        })
    }
}
