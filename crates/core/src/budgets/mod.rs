//! Budgets module - domain models, aggregation, services and traits.

mod budget_calculator;
mod budgets_model;
mod budgets_service;
mod budgets_traits;


pub use budget_calculator::calculate_budget_status;
pub use budgets_model::{Budget, BudgetHealth, BudgetStatus, NewBudget};
pub use budgets_service::BudgetService;
pub use budgets_traits::{BudgetRepositoryTrait, BudgetServiceTrait};
