//! Reductions over one month of ledger entries.

use std::collections::HashMap;

use rust_decimal::Decimal;

use super::summary_model::{CategoryExpense, MonthlySummary};
use crate::constants::UNCATEGORIZED_LABEL;
use crate::transactions::{Transaction, TransactionKind};

/// Sums income and expense. Input is expected to be one month already.
pub fn calculate_summary(transactions: &[Transaction]) -> MonthlySummary {
    let (income, expense) = transactions.iter().fold(
        (Decimal::ZERO, Decimal::ZERO),
        |(income, expense), t| match t.kind {
            TransactionKind::Income => (income + t.amount, expense),
            TransactionKind::Expense => (income, expense + t.amount),
        },
    );

    MonthlySummary {
        income,
        expense,
        net: income - expense,
    }
}

/// Expense totals per category, largest first.
///
/// Entries without a category are reported under a shared "Other" label.
pub fn expenses_by_category(transactions: &[Transaction]) -> Vec<CategoryExpense> {
    let mut totals: HashMap<String, Decimal> = HashMap::new();
    for t in transactions.iter().filter(|t| t.is_expense()) {
        let category = t
            .category
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .unwrap_or(UNCATEGORIZED_LABEL);
        *totals.entry(category.to_string()).or_insert(Decimal::ZERO) += t.amount;
    }

    let grand_total: Decimal = totals.values().copied().sum();
    let hundred = Decimal::ONE_HUNDRED;

    let mut breakdown: Vec<CategoryExpense> = totals
        .into_iter()
        .map(|(category, amount)| {
            let percentage = if grand_total.is_zero() {
                Decimal::ZERO
            } else {
                (amount / grand_total * hundred).round_dp(2)
            };
            CategoryExpense {
                category,
                amount,
                percentage,
            }
        })
        .collect();

    breakdown.sort_by(|a, b| {
        b.amount
            .cmp(&a.amount)
            .then_with(|| a.category.cmp(&b.category))
    });
    breakdown
}
