use async_trait::async_trait;

use super::categories_model::{Category, NewCategory};
use crate::errors::Result;

/// Trait for custom category repository operations
#[async_trait]
pub trait CategoryRepositoryTrait: Send + Sync {
    async fn get_custom(&self, owner_id: &str) -> Result<Vec<Category>>;
    async fn add(&self, category: NewCategory) -> Result<Category>;
    async fn delete(&self, category_id: &str) -> Result<()>;
}

/// Trait for category service operations
#[async_trait]
pub trait CategoryServiceTrait: Send + Sync {
    /// Built-in categories followed by the owner's custom ones.
    async fn get_categories(&self, owner_id: &str) -> Result<Vec<Category>>;
    async fn add_category(&self, category: NewCategory) -> Result<Category>;
    async fn delete_category(&self, category_id: &str) -> Result<()>;
}
