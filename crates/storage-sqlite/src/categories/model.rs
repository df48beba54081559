//! Database models for custom categories.

use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use tally_core::categories::{Category, NewCategory};

/// Database model for custom categories
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
#[diesel(table_name = crate::schema::categories)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct CategoryDB {
    pub id: String,
    pub owner_id: String,
    pub name: String,
    pub icon: String,
    pub color: String,
}

impl CategoryDB {
    pub fn from_new(id: String, domain: NewCategory) -> Self {
        Self {
            id,
            owner_id: domain.owner_id,
            name: domain.name,
            icon: domain.icon,
            color: domain.color,
        }
    }
}

impl From<CategoryDB> for Category {
    fn from(db: CategoryDB) -> Self {
        Self {
            id: Some(db.id),
            name: db.name,
            icon: db.icon,
            color: db.color,
            is_custom: true,
            owner_id: Some(db.owner_id),
        }
    }
}
