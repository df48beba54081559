//! Core error types for the Tally engine.
//!
//! This module defines storage-agnostic error types. Storage-specific errors
//! (from SQLite, etc.) are converted to these types by the storage layer.

use thiserror::Error;

use crate::payables::PaymentError;
use crate::utils::YearMonth;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the engine.
///
/// Validation and admission errors are raised before any write. Settlement
/// errors are raised after compensation has been attempted.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Database operation failed: {0}")]
    Database(#[from] DatabaseError),

    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Monthly limit of {limit} transactions reached for {month}")]
    MonthlyLimitExceeded { limit: usize, month: YearMonth },

    #[error("Record not found: {0}")]
    NotFound(String),

    #[error("Payment failed: {0}")]
    Payment(#[from] PaymentError),

    #[error("Invalid configuration value: {0}")]
    InvalidConfigValue(String),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

impl Error {
    /// True when the error means the referenced record does not exist,
    /// whether reported by the core or by the store.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Error::NotFound(_) | Error::Database(DatabaseError::NotFound(_))
        )
    }
}

/// Storage-agnostic error type for repository operations.
///
/// This enum uses `String` for all error details, allowing the storage layer
/// to convert driver-specific errors into this format.
#[derive(Error, Debug)]
pub enum DatabaseError {
    /// Failed to open or configure the database.
    #[error("Failed to connect to database: {0}")]
    ConnectionFailed(String),

    /// Failed to create or draw from the connection pool.
    #[error("Failed to create database pool: {0}")]
    PoolCreationFailed(String),

    /// A query failed to execute.
    #[error("Database query failed: {0}")]
    QueryFailed(String),

    /// The requested record was not found.
    #[error("Record not found: {0}")]
    NotFound(String),

    /// A unique constraint was violated.
    #[error("Unique constraint violation: {0}")]
    UniqueViolation(String),

    /// A row references a parent that does not exist.
    #[error("Foreign key constraint violation: {0}")]
    ForeignKeyViolation(String),

    /// Applying migrations failed.
    #[error("Database migration failed: {0}")]
    MigrationFailed(String),

    /// Internal/unexpected database error.
    #[error("Internal database error: {0}")]
    Internal(String),
}

/// Validation errors for user input.
///
/// All of these are recoverable by the user re-entering the input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid amount: '{0}'")]
    InvalidAmount(String),

    #[error("Amount {0} is out of range")]
    AmountOutOfRange(String),

    #[error("Category is required")]
    CategoryRequired,

    #[error("Description is required")]
    DescriptionRequired,

    #[error("Owner id is required")]
    OwnerRequired,

    #[error("A card must be selected for credit card payments")]
    CardRequired,

    #[error("Card '{0}' does not exist for this owner")]
    UnknownCard(String),

    #[error("Due date is required")]
    DueDateRequired,

    #[error("Invalid card: {0}")]
    InvalidCard(String),

    #[error("Card '{0}' still has charges in the ledger")]
    CardInUse(String),

    #[error("Category '{0}' already exists")]
    DuplicateCategory(String),

    #[error("Invalid month '{0}', expected YYYY-MM")]
    InvalidMonth(String),
}

impl From<Error> for String {
    fn from(err: Error) -> Self {
        err.to_string()
    }
}
