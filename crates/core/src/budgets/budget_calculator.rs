use std::collections::HashMap;

use rust_decimal::Decimal;

use super::budgets_model::{Budget, BudgetStatus};
use crate::transactions::Transaction;

/// Joins budgets with the month's expense totals per category.
///
/// One status per budget, in budget order, banded against `warning_ratio`.
/// Categories without a budget are left out.
pub fn calculate_budget_status(
    budgets: &[Budget],
    transactions: &[Transaction],
    warning_ratio: Decimal,
) -> Vec<BudgetStatus> {
    let mut spent_by_category: HashMap<&str, Decimal> = HashMap::new();
    for t in transactions.iter().filter(|t| t.is_expense()) {
        if let Some(category) = t.category.as_deref() {
            *spent_by_category.entry(category).or_insert(Decimal::ZERO) += t.amount;
        }
    }

    budgets
        .iter()
        .map(|b| {
            let spent = spent_by_category
                .get(b.category.as_str())
                .copied()
                .unwrap_or(Decimal::ZERO);
            BudgetStatus::new(b.category.clone(), b.amount, spent, warning_ratio)
        })
        .collect()
}
