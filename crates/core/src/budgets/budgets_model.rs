//! Budget domain models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::utils::YearMonth;

/// Spending ceiling for one category in one month.
///
/// At most one budget exists per (owner, category, month).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Budget {
    pub id: String,
    pub owner_id: String,
    pub category: String,
    pub month: YearMonth,
    pub amount: Decimal,
}

/// Input model for creating or overwriting a budget
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBudget {
    pub owner_id: String,
    pub category: String,
    pub month: YearMonth,
    pub amount: Decimal,
}

/// Presentation band for a budget's consumption.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum BudgetHealth {
    OnTrack,
    Warning,
    Exceeded,
}

impl BudgetHealth {
    /// Below `warning_ratio` is on track, from there to 100% is a warning,
    /// 100% and above is exceeded.
    pub fn classify(usage_ratio: Decimal, warning_ratio: Decimal) -> Self {
        if usage_ratio >= Decimal::ONE {
            BudgetHealth::Exceeded
        } else if usage_ratio >= warning_ratio {
            BudgetHealth::Warning
        } else {
            BudgetHealth::OnTrack
        }
    }
}

/// A budget joined with the month's spending in its category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetStatus {
    pub category: String,
    pub budget: Decimal,
    pub spent: Decimal,
    pub health: BudgetHealth,
}

impl BudgetStatus {
    /// Builds a status and bands it against `warning_ratio`.
    pub fn new(category: String, budget: Decimal, spent: Decimal, warning_ratio: Decimal) -> Self {
        let mut status = Self {
            category,
            budget,
            spent,
            health: BudgetHealth::OnTrack,
        };
        status.health = BudgetHealth::classify(status.usage_ratio(), warning_ratio);
        status
    }

    /// `spent / budget`. A zero budget counts as fully used once anything is spent.
    pub fn usage_ratio(&self) -> Decimal {
        if self.budget <= Decimal::ZERO {
            return if self.spent > Decimal::ZERO {
                Decimal::ONE
            } else {
                Decimal::ZERO
            };
        }
        self.spent / self.budget
    }

    /// Amount spent past the budget, zero when within it.
    pub fn exceeded_by(&self) -> Decimal {
        (self.spent - self.budget).max(Decimal::ZERO)
    }

    pub fn remaining(&self) -> Decimal {
        (self.budget - self.spent).max(Decimal::ZERO)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn status(budget: Decimal, spent: Decimal) -> BudgetStatus {
        BudgetStatus::new("Food".to_string(), budget, spent, dec!(0.80))
    }

    #[test]
    fn test_health_bands() {
        assert_eq!(status(dec!(500), dec!(0)).health, BudgetHealth::OnTrack);
        assert_eq!(status(dec!(500), dec!(399.99)).health, BudgetHealth::OnTrack);
        assert_eq!(status(dec!(500), dec!(400)).health, BudgetHealth::Warning);
        assert_eq!(status(dec!(500), dec!(499.99)).health, BudgetHealth::Warning);
        assert_eq!(status(dec!(500), dec!(500)).health, BudgetHealth::Exceeded);
    }

    #[test]
    fn test_warning_ratio_moves_the_band() {
        let at_85 = |warning| BudgetStatus::new("Food".to_string(), dec!(100), dec!(85), warning);
        assert_eq!(at_85(dec!(0.80)).health, BudgetHealth::Warning);
        assert_eq!(at_85(dec!(0.90)).health, BudgetHealth::OnTrack);
    }

    #[test]
    fn test_exceeded_by() {
        let over = status(dec!(500), dec!(550));
        assert!(over.usage_ratio() >= Decimal::ONE);
        assert_eq!(over.exceeded_by(), dec!(50));
        assert_eq!(over.remaining(), Decimal::ZERO);

        let under = status(dec!(500), dec!(120));
        assert_eq!(under.exceeded_by(), Decimal::ZERO);
        assert_eq!(under.remaining(), dec!(380));
    }

    #[test]
    fn test_zero_budget() {
        assert_eq!(status(dec!(0), dec!(0)).usage_ratio(), Decimal::ZERO);
        assert_eq!(status(dec!(0), dec!(1)).health, BudgetHealth::Exceeded);
    }
}
