use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use log::{debug, error, info, warn};

use super::payables_errors::PaymentError;
use super::payables_model::{NewPayable, Payable, PayableInput, PayableReminder, PayableStatus};
use super::payables_traits::{PayableRepositoryTrait, PayableServiceTrait};
use super::reminders::reminder_for;
use crate::errors::{Result, ValidationError};
use crate::settings::Settings;
use crate::transactions::{
    non_blank, normalize_amount, LedgerRepositoryTrait, NewTransaction, PaymentMethod,
    TransactionKind,
};
use crate::utils::Clock;

pub struct PayableService {
    payable_repository: Arc<dyn PayableRepositoryTrait>,
    ledger: Arc<dyn LedgerRepositoryTrait>,
    clock: Arc<dyn Clock>,
    settings: Settings,
}

impl PayableService {
    pub fn new(
        payable_repository: Arc<dyn PayableRepositoryTrait>,
        ledger: Arc<dyn LedgerRepositoryTrait>,
        clock: Arc<dyn Clock>,
        settings: Settings,
    ) -> Self {
        Self {
            payable_repository,
            ledger,
            clock,
            settings,
        }
    }

    fn settlement_expense(&self, payable: &Payable, paid_at: DateTime<Utc>) -> NewTransaction {
        NewTransaction {
            owner_id: payable.owner_id.clone(),
            amount: payable.amount,
            description: payable.description.clone(),
            kind: TransactionKind::Expense,
            category: Some(self.settings.bills_category.clone()),
            is_recurring: false,
            payment_method: PaymentMethod::Cash,
            card_id: None,
            created_at: Some(paid_at),
        }
    }
}

#[async_trait]
impl PayableServiceTrait for PayableService {
    async fn schedule_payable(&self, owner_id: &str, input: &PayableInput) -> Result<Payable> {
        let owner_id = non_blank(owner_id).ok_or(ValidationError::OwnerRequired)?;
        let description =
            non_blank(&input.description).ok_or(ValidationError::DescriptionRequired)?;
        let amount = normalize_amount(&input.raw_amount, self.settings.max_amount)?;
        let due_date = input.due_date.ok_or(ValidationError::DueDateRequired)?;

        debug!("Scheduling payable '{}' due {}", description, due_date);
        self.payable_repository
            .add(NewPayable {
                owner_id,
                description,
                amount,
                due_date,
            })
            .await
    }

    async fn get_pending_payables(&self, owner_id: &str) -> Result<Vec<Payable>> {
        self.payable_repository.get_pending(owner_id).await
    }

    async fn pay_payable(
        &self,
        payable: &Payable,
        payment_date: Option<DateTime<Utc>>,
    ) -> Result<()> {
        if payable.status == PayableStatus::Paid {
            return Err(PaymentError::AlreadyPaid(payable.id.clone()).into());
        }

        self.payable_repository
            .update_status(&payable.id, PayableStatus::Paid)
            .await?;

        let paid_at = payment_date.unwrap_or_else(|| self.clock.now());
        let expense = self.settlement_expense(payable, paid_at);

        match self.ledger.add(expense).await {
            Ok(expense_id) => {
                info!(
                    "Paid payable {} ('{}'), recorded expense {}",
                    payable.id, payable.description, expense_id
                );
                Ok(())
            }
            Err(insert_err) => {
                // Compensate the status flip before reporting.
                if let Err(revert_err) = self
                    .payable_repository
                    .update_status(&payable.id, PayableStatus::Pending)
                    .await
                {
                    error!(
                        "Payable {} left paid without an expense: insert failed ({}), revert failed ({})",
                        payable.id, insert_err, revert_err
                    );
                    return Err(PaymentError::RollbackFailed {
                        payable_id: payable.id.clone(),
                        reason: format!("{}; revert: {}", insert_err, revert_err),
                    }
                    .into());
                }

                warn!(
                    "Expense for payable {} failed, status reverted to pending: {}",
                    payable.id, insert_err
                );
                Err(PaymentError::ExpenseInsertFailed {
                    payable_id: payable.id.clone(),
                    reason: insert_err.to_string(),
                }
                .into())
            }
        }
    }

    async fn delete_payable(&self, payable_id: &str) -> Result<()> {
        self.payable_repository.delete(payable_id).await
    }

    async fn get_upcoming_reminders(&self, owner_id: &str) -> Result<Vec<PayableReminder>> {
        let now = self.clock.now().naive_utc();
        let pending = self.payable_repository.get_pending(owner_id).await?;
        Ok(pending
            .iter()
            .filter_map(|p| reminder_for(p, self.settings.reminder_hour, now))
            .collect())
    }
}
