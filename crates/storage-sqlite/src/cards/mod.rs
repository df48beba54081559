//! SQLite storage implementation for credit cards.

mod model;
mod repository;

pub use model::{CreditCardDB, NewCreditCardDB};
pub use repository::CreditCardRepository;
