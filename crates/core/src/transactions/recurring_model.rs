//! Recurring-entry grouping and synthesis results.

use rust_decimal::Decimal;
use serde::Serialize;
use thiserror::Error;

use super::transactions_model::{Transaction, TransactionKind};

/// Identity of a recurring obligation.
///
/// Entries sharing description, amount, kind and category are occurrences of
/// the same obligation. A missing category and an empty one are equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RecurringSignature {
    pub description: String,
    pub amount: Decimal,
    pub kind: TransactionKind,
    pub category: String,
}

impl RecurringSignature {
    pub fn of(transaction: &Transaction) -> Self {
        Self {
            description: transaction.description.clone(),
            amount: transaction.amount.normalize(),
            kind: transaction.kind,
            category: transaction.category.clone().unwrap_or_default(),
        }
    }
}

/// Failure to carry one recurring group forward. Logged, never propagated.
#[derive(Error, Debug, Clone, PartialEq, Serialize)]
#[error("Failed to carry forward recurring entry '{description}': {reason}")]
#[serde(rename_all = "camelCase")]
pub struct SynthesisError {
    pub description: String,
    pub reason: String,
}

/// Outcome of one synthesis run.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SynthesisReport {
    /// Ids of the entries inserted by this run.
    pub generated: Vec<String>,
    /// Groups whose latest occurrence is already in (or after) the current month.
    pub up_to_date: usize,
    /// Groups skipped because their latest occurrence has no date.
    pub undated: usize,
    pub failures: Vec<SynthesisError>,
}

impl SynthesisReport {
    pub fn groups_processed(&self) -> usize {
        self.generated.len() + self.up_to_date + self.undated + self.failures.len()
    }
}
