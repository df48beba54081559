//! Payable domain models.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PayableStatus {
    #[default]
    Pending,
    Paid,
}

impl PayableStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PayableStatus::Pending => "pending",
            PayableStatus::Paid => "paid",
        }
    }
}

impl fmt::Display for PayableStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PayableStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(PayableStatus::Pending),
            "paid" => Ok(PayableStatus::Paid),
            other => Err(format!("Unknown payable status '{}'", other)),
        }
    }
}

/// A scheduled obligation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payable {
    pub id: String,
    pub owner_id: String,
    pub description: String,
    pub amount: Decimal,
    pub due_date: NaiveDate,
    pub status: PayableStatus,
    pub created_at: Option<DateTime<Utc>>,
}

/// Validated payable ready to insert. Always starts pending.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPayable {
    pub owner_id: String,
    pub description: String,
    pub amount: Decimal,
    pub due_date: NaiveDate,
}

/// Raw user input for scheduling a payable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayableInput {
    pub description: String,
    pub raw_amount: String,
    pub due_date: Option<NaiveDate>,
}

/// A due-date reminder to hand to the notification layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PayableReminder {
    pub payable_id: String,
    pub title: String,
    pub body: String,
    pub trigger_at: NaiveDateTime,
}
