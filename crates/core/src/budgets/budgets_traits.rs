use async_trait::async_trait;

use super::budgets_model::{Budget, BudgetStatus, NewBudget};
use crate::errors::Result;
use crate::utils::YearMonth;

/// Trait for budget repository operations
#[async_trait]
pub trait BudgetRepositoryTrait: Send + Sync {
    /// Inserts the budget, or overwrites the amount of the existing budget
    /// with the same (owner, category, month).
    async fn upsert_budget(&self, budget: NewBudget) -> Result<Budget>;
    async fn get_budgets(&self, owner_id: &str, month: YearMonth) -> Result<Vec<Budget>>;
    async fn delete_budget(&self, budget_id: &str) -> Result<()>;
}

/// Trait for budget service operations
#[async_trait]
pub trait BudgetServiceTrait: Send + Sync {
    async fn set_budget(
        &self,
        owner_id: &str,
        category: &str,
        raw_amount: &str,
        month: YearMonth,
    ) -> Result<Budget>;
    async fn get_budgets(&self, owner_id: &str, month: YearMonth) -> Result<Vec<Budget>>;
    async fn delete_budget(&self, budget_id: &str) -> Result<()>;
    async fn get_budget_status(&self, owner_id: &str, month: YearMonth)
        -> Result<Vec<BudgetStatus>>;
}
