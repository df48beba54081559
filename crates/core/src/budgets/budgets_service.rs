use std::sync::Arc;

use async_trait::async_trait;
use log::debug;

use super::budget_calculator::calculate_budget_status;
use super::budgets_model::{Budget, BudgetStatus, NewBudget};
use super::budgets_traits::{BudgetRepositoryTrait, BudgetServiceTrait};
use crate::errors::{Result, ValidationError};
use crate::settings::Settings;
use crate::transactions::{non_blank, normalize_amount, LedgerRepositoryTrait};
use crate::utils::YearMonth;

pub struct BudgetService {
    budget_repository: Arc<dyn BudgetRepositoryTrait>,
    ledger: Arc<dyn LedgerRepositoryTrait>,
    settings: Settings,
}

impl BudgetService {
    pub fn new(
        budget_repository: Arc<dyn BudgetRepositoryTrait>,
        ledger: Arc<dyn LedgerRepositoryTrait>,
        settings: Settings,
    ) -> Self {
        BudgetService {
            budget_repository,
            ledger,
            settings,
        }
    }
}

#[async_trait]
impl BudgetServiceTrait for BudgetService {
    async fn set_budget(
        &self,
        owner_id: &str,
        category: &str,
        raw_amount: &str,
        month: YearMonth,
    ) -> Result<Budget> {
        let owner_id = non_blank(owner_id).ok_or(ValidationError::OwnerRequired)?;
        let amount = normalize_amount(raw_amount, self.settings.max_amount)?;
        let category = non_blank(category).ok_or(ValidationError::CategoryRequired)?;

        debug!("Setting {} budget for {} to {}", category, month, amount);
        self.budget_repository
            .upsert_budget(NewBudget {
                owner_id,
                category,
                month,
                amount,
            })
            .await
    }

    async fn get_budgets(&self, owner_id: &str, month: YearMonth) -> Result<Vec<Budget>> {
        self.budget_repository.get_budgets(owner_id, month).await
    }

    async fn delete_budget(&self, budget_id: &str) -> Result<()> {
        self.budget_repository.delete_budget(budget_id).await
    }

    async fn get_budget_status(
        &self,
        owner_id: &str,
        month: YearMonth,
    ) -> Result<Vec<BudgetStatus>> {
        let (budgets, transactions) = futures::try_join!(
            self.budget_repository.get_budgets(owner_id, month),
            self.ledger.list_by_month(owner_id, month),
        )?;
        Ok(calculate_budget_status(
            &budgets,
            &transactions,
            self.settings.budget_warning_ratio,
        ))
    }
}
