//! Database models for budgets.

use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use tally_core::budgets::{Budget, NewBudget};

use crate::errors::StorageError;
use crate::utils::{parse_column, parse_decimal};

/// Database model for budgets. `month` is stored as `YYYY-MM`.
#[derive(
    Queryable,
    Identifiable,
    Insertable,
    Selectable,
    PartialEq,
    Serialize,
    Deserialize,
    Debug,
    Clone,
)]
#[diesel(table_name = crate::schema::budgets)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct BudgetDB {
    pub id: String,
    pub owner_id: String,
    pub category: String,
    pub month: String,
    pub amount: String,
}

impl BudgetDB {
    pub fn from_new(id: String, domain: NewBudget) -> Self {
        Self {
            id,
            owner_id: domain.owner_id,
            category: domain.category,
            month: domain.month.to_string(),
            amount: domain.amount.to_string(),
        }
    }
}

impl TryFrom<BudgetDB> for Budget {
    type Error = StorageError;

    fn try_from(db: BudgetDB) -> Result<Self, Self::Error> {
        Ok(Self {
            month: parse_column(&db.month, "month")?,
            amount: parse_decimal(&db.amount, "amount")?,
            id: db.id,
            owner_id: db.owner_id,
            category: db.category,
        })
    }
}
