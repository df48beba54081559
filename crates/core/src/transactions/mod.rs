//! Ledger module - entries, input validation, admission control and
//! recurring-entry synthesis.

mod recurring_model;
mod recurring_service;
mod transactions_model;
mod transactions_service;
mod transactions_traits;
mod transactions_validation;

#[cfg(test)]
mod transactions_service_tests;

pub use recurring_model::{RecurringSignature, SynthesisError, SynthesisReport};
pub use recurring_service::RecurringTransactionService;
pub use transactions_model::{
    NewTransaction, PaymentMethod, Transaction, TransactionInput, TransactionKind,
};
pub use transactions_service::TransactionService;
pub use transactions_traits::{
    LedgerRepositoryTrait, RecurringServiceTrait, TransactionServiceTrait,
};
pub use transactions_validation::{
    check_new_transaction, normalize_amount, validate_and_build_transaction,
};

pub(crate) use transactions_validation::non_blank;
