use rust_decimal::Decimal;
use serde::Serialize;

/// Income, expense and net totals for one month.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlySummary {
    pub income: Decimal,
    pub expense: Decimal,
    pub net: Decimal,
}

/// One slice of the month's expenses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryExpense {
    pub category: String,
    pub amount: Decimal,
    /// Share of the month's total expenses, in percent (0-100, 2 dp).
    pub percentage: Decimal,
}
