//! Database models for ledger entries.

use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use tally_core::transactions::{NewTransaction, Transaction};

use crate::errors::StorageError;
use crate::utils::{parse_column, parse_decimal, to_naive, to_utc};

/// Database model for ledger entries
#[derive(Queryable, Selectable, Insertable, PartialEq, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = crate::schema::transactions)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct TransactionDB {
    pub id: String,
    pub owner_id: String,
    pub amount: String,
    pub description: String,
    pub kind: String,
    pub category: Option<String>,
    pub is_recurring: bool,
    pub payment_method: String,
    pub card_id: Option<String>,
    pub created_at: Option<NaiveDateTime>,
}

impl TransactionDB {
    /// Row for a new entry. Undated entries are stamped with `stamped_at`.
    pub fn from_new(id: String, new: NewTransaction, stamped_at: NaiveDateTime) -> Self {
        Self {
            id,
            owner_id: new.owner_id,
            amount: new.amount.to_string(),
            description: new.description,
            kind: new.kind.as_str().to_string(),
            category: new.category,
            is_recurring: new.is_recurring,
            payment_method: new.payment_method.as_str().to_string(),
            card_id: new.card_id,
            created_at: Some(new.created_at.as_ref().map(to_naive).unwrap_or(stamped_at)),
        }
    }
}

impl From<Transaction> for TransactionDB {
    fn from(domain: Transaction) -> Self {
        Self {
            id: domain.id,
            owner_id: domain.owner_id,
            amount: domain.amount.to_string(),
            description: domain.description,
            kind: domain.kind.as_str().to_string(),
            category: domain.category,
            is_recurring: domain.is_recurring,
            payment_method: domain.payment_method.as_str().to_string(),
            card_id: domain.card_id,
            created_at: domain.created_at.as_ref().map(to_naive),
        }
    }
}

impl TryFrom<TransactionDB> for Transaction {
    type Error = StorageError;

    fn try_from(db: TransactionDB) -> Result<Self, Self::Error> {
        Ok(Self {
            amount: parse_decimal(&db.amount, "amount")?,
            kind: parse_column(&db.kind, "kind")?,
            payment_method: parse_column(&db.payment_method, "payment_method")?,
            id: db.id,
            owner_id: db.owner_id,
            description: db.description,
            category: db.category,
            is_recurring: db.is_recurring,
            card_id: db.card_id,
            created_at: db.created_at.map(to_utc),
        })
    }
}
