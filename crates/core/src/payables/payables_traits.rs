use async_trait::async_trait;
use chrono::{DateTime, Utc};

use super::payables_model::{NewPayable, Payable, PayableInput, PayableReminder, PayableStatus};
use crate::errors::Result;

/// Trait for payable repository operations
#[async_trait]
pub trait PayableRepositoryTrait: Send + Sync {
    /// Inserts a payable with status pending.
    async fn add(&self, payable: NewPayable) -> Result<Payable>;
    /// Pending payables, earliest due date first.
    async fn get_pending(&self, owner_id: &str) -> Result<Vec<Payable>>;
    async fn update_status(&self, payable_id: &str, status: PayableStatus) -> Result<()>;
    async fn delete(&self, payable_id: &str) -> Result<()>;
}

/// Trait for payable service operations
#[async_trait]
pub trait PayableServiceTrait: Send + Sync {
    async fn schedule_payable(&self, owner_id: &str, input: &PayableInput) -> Result<Payable>;

    async fn get_pending_payables(&self, owner_id: &str) -> Result<Vec<Payable>>;

    /// Marks the payable paid and records the matching expense, dated
    /// `payment_date` or now. Reverts the status if the expense fails.
    async fn pay_payable(
        &self,
        payable: &Payable,
        payment_date: Option<DateTime<Utc>>,
    ) -> Result<()>;

    async fn delete_payable(&self, payable_id: &str) -> Result<()>;

    /// Reminders for pending payables that have not fired yet.
    async fn get_upcoming_reminders(&self, owner_id: &str) -> Result<Vec<PayableReminder>>;
}
