//! Ledger domain models.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::utils::YearMonth;

/// Direction of a ledger entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionKind {
    Income,
    Expense,
}

impl TransactionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionKind::Income => "income",
            TransactionKind::Expense => "expense",
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransactionKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "income" => Ok(TransactionKind::Income),
            "expense" => Ok(TransactionKind::Expense),
            other => Err(format!("Unknown transaction kind '{}'", other)),
        }
    }
}

/// How an entry was paid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    #[default]
    Cash,
    CreditCard,
}

impl PaymentMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::Cash => "cash",
            PaymentMethod::CreditCard => "credit_card",
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PaymentMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cash" => Ok(PaymentMethod::Cash),
            "credit_card" => Ok(PaymentMethod::CreditCard),
            other => Err(format!("Unknown payment method '{}'", other)),
        }
    }
}

/// A stored ledger entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: String,
    pub owner_id: String,
    pub amount: Decimal,
    pub description: String,
    pub kind: TransactionKind,
    pub category: Option<String>,
    pub is_recurring: bool,
    pub payment_method: PaymentMethod,
    pub card_id: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}

impl Transaction {
    pub fn from_new(id: impl Into<String>, new: NewTransaction) -> Self {
        Self {
            id: id.into(),
            owner_id: new.owner_id,
            amount: new.amount,
            description: new.description,
            kind: new.kind,
            category: new.category,
            is_recurring: new.is_recurring,
            payment_method: new.payment_method,
            card_id: new.card_id,
            created_at: new.created_at,
        }
    }

    pub fn is_income(&self) -> bool {
        self.kind == TransactionKind::Income
    }

    pub fn is_expense(&self) -> bool {
        self.kind == TransactionKind::Expense
    }

    /// True when the entry was charged to the given card.
    pub fn is_charged_to(&self, card_id: &str) -> bool {
        self.payment_method == PaymentMethod::CreditCard && self.card_id.as_deref() == Some(card_id)
    }
}

/// A validated entry waiting to be inserted. The store assigns the id and,
/// when `created_at` is `None`, the insertion timestamp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTransaction {
    pub owner_id: String,
    pub amount: Decimal,
    pub description: String,
    pub kind: TransactionKind,
    pub category: Option<String>,
    pub is_recurring: bool,
    pub payment_method: PaymentMethod,
    pub card_id: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}

impl NewTransaction {
    /// Month the entry will be booked in.
    pub fn target_month(&self, now: &DateTime<Utc>) -> YearMonth {
        YearMonth::from_datetime(self.created_at.as_ref().unwrap_or(now))
    }

    /// Next occurrence of a recurring entry, dated `now`.
    ///
    /// Only the signature fields carry over; the copy is booked as cash with
    /// no card.
    pub fn recurrence_of(latest: &Transaction, now: DateTime<Utc>) -> Self {
        Self {
            owner_id: latest.owner_id.clone(),
            amount: latest.amount,
            description: latest.description.clone(),
            kind: latest.kind,
            category: latest.category.clone(),
            is_recurring: true,
            payment_method: PaymentMethod::Cash,
            card_id: None,
            created_at: Some(now),
        }
    }
}

/// Raw user input for adding or editing an entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionInput {
    pub raw_amount: String,
    pub description: String,
    pub category: String,
    pub kind: TransactionKind,
    #[serde(default)]
    pub is_recurring: bool,
    #[serde(default)]
    pub payment_method: PaymentMethod,
    #[serde(default)]
    pub card_id: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl TransactionInput {
    pub fn new(
        raw_amount: impl Into<String>,
        description: impl Into<String>,
        category: impl Into<String>,
        kind: TransactionKind,
    ) -> Self {
        Self {
            raw_amount: raw_amount.into(),
            description: description.into(),
            category: category.into(),
            kind,
            is_recurring: false,
            payment_method: PaymentMethod::Cash,
            card_id: None,
            created_at: None,
        }
    }

    pub fn recurring(mut self, is_recurring: bool) -> Self {
        self.is_recurring = is_recurring;
        self
    }

    pub fn on_card(mut self, card_id: impl Into<String>) -> Self {
        self.payment_method = PaymentMethod::CreditCard;
        self.card_id = Some(card_id.into());
        self
    }

    pub fn dated(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = Some(created_at);
        self
    }
}
