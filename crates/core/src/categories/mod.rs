//! Categories module - built-in and custom categories.

mod categories_model;
mod categories_service;
mod categories_traits;


pub use categories_model::{default_categories, Category, NewCategory};
pub use categories_service::CategoryService;
pub use categories_traits::{CategoryRepositoryTrait, CategoryServiceTrait};
