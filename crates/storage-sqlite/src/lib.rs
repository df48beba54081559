//! SQLite storage implementation for Tally.
//!
//! This crate provides all database-related functionality using Diesel ORM with SQLite.
//! It implements the repository traits defined in `tally-core` and contains:
//! - Database connection pooling and the serialized writer
//! - Diesel migrations
//! - Repository implementations for every ledger entity
//! - Database-specific model types (with Diesel derives)
//!
//! ```text
//!        core (domain)
//!              │
//!              ▼
//!   storage-sqlite (this crate)
//!              │
//!              ▼
//!          SQLite DB
//! ```

pub mod db;
pub mod errors;
pub mod schema;
mod utils;

// Repository implementations
pub mod budgets;
pub mod cards;
pub mod categories;
pub mod payables;
pub mod transactions;

// Re-export database utilities
pub use db::{
    create_pool, get_connection, get_db_path, init, run_migrations, spawn_writer, DbConnection,
    DbPool, WriteHandle,
};

// Re-export storage errors and conversion helpers
pub use errors::{IntoCore, StorageError};

pub use budgets::BudgetRepository;
pub use cards::CreditCardRepository;
pub use categories::CategoryRepository;
pub use payables::PayableRepository;
pub use transactions::TransactionRepository;

// Re-export from tally-core for convenience
pub use tally_core::errors::{DatabaseError, Error, Result};
