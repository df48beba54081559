//! Database models for payables.

use chrono::{NaiveDate, NaiveDateTime};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use tally_core::payables::{NewPayable, Payable, PayableStatus};

use crate::errors::StorageError;
use crate::utils::{parse_column, parse_decimal, to_utc};

/// Database model for payables
#[derive(Queryable, Identifiable, Selectable, PartialEq, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = crate::schema::payables)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct PayableDB {
    pub id: String,
    pub owner_id: String,
    pub description: String,
    pub amount: String,
    pub due_date: NaiveDate,
    pub status: String,
    pub created_at: Option<NaiveDateTime>,
}

/// Database model for scheduling a new payable
#[derive(Insertable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = crate::schema::payables)]
#[serde(rename_all = "camelCase")]
pub struct NewPayableDB {
    pub id: String,
    pub owner_id: String,
    pub description: String,
    pub amount: String,
    pub due_date: NaiveDate,
    pub status: String,
    pub created_at: NaiveDateTime,
}

impl NewPayableDB {
    pub fn from_domain(id: String, domain: NewPayable, created_at: NaiveDateTime) -> Self {
        Self {
            id,
            owner_id: domain.owner_id,
            description: domain.description,
            amount: domain.amount.to_string(),
            due_date: domain.due_date,
            status: PayableStatus::Pending.as_str().to_string(),
            created_at,
        }
    }
}

impl TryFrom<PayableDB> for Payable {
    type Error = StorageError;

    fn try_from(db: PayableDB) -> Result<Self, Self::Error> {
        Ok(Self {
            amount: parse_decimal(&db.amount, "amount")?,
            status: parse_column(&db.status, "status")?,
            id: db.id,
            owner_id: db.owner_id,
            description: db.description,
            due_date: db.due_date,
            created_at: db.created_at.map(to_utc),
        })
    }
}
