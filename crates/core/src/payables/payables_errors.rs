use thiserror::Error;

/// Errors raised while settling a payable.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PaymentError {
    /// The expense could not be recorded; the payable was reverted to pending.
    #[error("Could not record the expense for payable {payable_id}: {reason}")]
    ExpenseInsertFailed { payable_id: String, reason: String },

    /// The expense could not be recorded and reverting the payable also
    /// failed, so it is left marked paid with no matching expense.
    #[error("Payable {payable_id} is marked paid but has no expense: {reason}")]
    RollbackFailed { payable_id: String, reason: String },

    #[error("Payable {0} is already paid")]
    AlreadyPaid(String),
}
