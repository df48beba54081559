//! Payables module - scheduled obligations, settlement and due-date reminders.

mod payables_errors;
mod payables_model;
mod payables_service;
mod payables_traits;
mod reminders;


pub use payables_errors::PaymentError;
pub use payables_model::{NewPayable, Payable, PayableInput, PayableReminder, PayableStatus};
pub use payables_service::PayableService;
pub use payables_traits::{PayableRepositoryTrait, PayableServiceTrait};
pub use reminders::reminder_for;
