use std::sync::Arc;

use async_trait::async_trait;
use log::{debug, warn};

use super::overview_model::MonthOverview;
use crate::budgets::{calculate_budget_status, BudgetRepositoryTrait};
use crate::cards::{calculate_invoice, CreditCardRepositoryTrait};
use crate::errors::{Result, ValidationError};
use crate::settings::Settings;
use crate::summary::calculate_summary;
use crate::transactions::{LedgerRepositoryTrait, RecurringServiceTrait, SynthesisReport};
use crate::utils::YearMonth;

#[async_trait]
pub trait OverviewServiceTrait: Send + Sync {
    /// Carries recurring entries forward, then aggregates `month`.
    async fn refresh_month(&self, owner_id: &str, month: YearMonth) -> Result<MonthOverview>;
}

pub struct OverviewService {
    recurring_service: Arc<dyn RecurringServiceTrait>,
    ledger: Arc<dyn LedgerRepositoryTrait>,
    budget_repository: Arc<dyn BudgetRepositoryTrait>,
    card_repository: Arc<dyn CreditCardRepositoryTrait>,
    settings: Settings,
}

impl OverviewService {
    pub fn new(
        recurring_service: Arc<dyn RecurringServiceTrait>,
        ledger: Arc<dyn LedgerRepositoryTrait>,
        budget_repository: Arc<dyn BudgetRepositoryTrait>,
        card_repository: Arc<dyn CreditCardRepositoryTrait>,
        settings: Settings,
    ) -> Self {
        Self {
            recurring_service,
            ledger,
            budget_repository,
            card_repository,
            settings,
        }
    }
}

#[async_trait]
impl OverviewServiceTrait for OverviewService {
    async fn refresh_month(&self, owner_id: &str, month: YearMonth) -> Result<MonthOverview> {
        if owner_id.trim().is_empty() {
            return Err(ValidationError::OwnerRequired.into());
        }

        // A failed synthesis run must not keep the month from displaying.
        let synthesis = match self.recurring_service.process_recurring(owner_id).await {
            Ok(report) => report,
            Err(e) => {
                warn!("Recurring synthesis skipped for owner {}: {}", owner_id, e);
                SynthesisReport::default()
            }
        };

        let (transactions, budgets, cards) = futures::try_join!(
            self.ledger.list_by_month(owner_id, month),
            self.budget_repository.get_budgets(owner_id, month),
            self.card_repository.get_cards(owner_id),
        )?;
        debug!(
            "Refreshing {} for owner {}: {} entries, {} budgets, {} cards",
            month,
            owner_id,
            transactions.len(),
            budgets.len(),
            cards.len()
        );

        Ok(MonthOverview {
            month,
            summary: calculate_summary(&transactions),
            budgets: calculate_budget_status(
                &budgets,
                &transactions,
                self.settings.budget_warning_ratio,
            ),
            card_invoices: cards
                .iter()
                .map(|card| calculate_invoice(card, &transactions, month))
                .collect(),
            synthesis,
        })
    }
}
