//! SQLite storage implementation for payables.

mod model;
mod repository;

pub use model::{NewPayableDB, PayableDB};
pub use repository::PayableRepository;
