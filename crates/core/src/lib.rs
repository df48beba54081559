//! Tally Core - Domain entities, services, and traits.
//!
//! This crate contains the aggregation and recurring-synthesis logic of the
//! Tally finance tracker. It is storage-agnostic and defines repository
//! traits that are implemented by the `storage-sqlite` crate.

pub mod budgets;
pub mod cards;
pub mod categories;
pub mod constants;
pub mod errors;
pub mod overview;
pub mod payables;
pub mod settings;
pub mod summary;
pub mod transactions;
pub mod utils;

#[cfg(test)]
pub(crate) mod test_utils;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
