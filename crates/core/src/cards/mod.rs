//! Credit cards module - domain models, invoice aggregation, services and traits.

mod cards_model;
mod cards_service;
mod cards_traits;
mod invoice_calculator;


pub use cards_model::{CardInvoice, CreditCard, NewCreditCard};
pub use cards_service::CardService;
pub use cards_traits::{CardServiceTrait, CreditCardRepositoryTrait};
pub use invoice_calculator::calculate_invoice;
