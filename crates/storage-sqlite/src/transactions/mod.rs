//! SQLite storage implementation for ledger entries.

mod model;
mod repository;

pub use model::TransactionDB;
pub use repository::TransactionRepository;
