//! Credit card domain models.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::utils::YearMonth;

/// Domain model representing a credit card
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreditCard {
    pub id: String,
    pub owner_id: String,
    pub name: String,
    pub limit_amount: Decimal,
    pub closing_day: u32,
    pub due_day: u32,
    pub color: String,
    pub created_at: Option<DateTime<Utc>>,
}

/// Input model for creating a new credit card
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCreditCard {
    pub owner_id: String,
    pub name: String,
    pub limit_amount: Decimal,
    pub closing_day: u32,
    pub due_day: u32,
    pub color: String,
}

/// Month's charges on one card.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CardInvoice {
    pub card_id: String,
    pub card_name: String,
    pub color: String,
    pub month: YearMonth,
    pub total: Decimal,
    pub limit_amount: Decimal,
    /// Limit minus this month's charges. Negative when over the limit.
    pub available_limit: Decimal,
    pub transaction_count: usize,
}
