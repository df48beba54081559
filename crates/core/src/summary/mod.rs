//! Monthly summary and expense breakdown.

mod summary_calculator;
mod summary_model;

pub use summary_calculator::{calculate_summary, expenses_by_category};
pub use summary_model::{CategoryExpense, MonthlySummary};
