use std::sync::Arc;

use async_trait::async_trait;
use log::{debug, warn};

use super::categories_model::{default_categories, Category, NewCategory};
use super::categories_traits::{CategoryRepositoryTrait, CategoryServiceTrait};
use crate::errors::{Result, ValidationError};
use crate::transactions::non_blank;

pub struct CategoryService {
    repository: Arc<dyn CategoryRepositoryTrait>,
}

impl CategoryService {
    pub fn new(repository: Arc<dyn CategoryRepositoryTrait>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl CategoryServiceTrait for CategoryService {
    async fn get_categories(&self, owner_id: &str) -> Result<Vec<Category>> {
        let mut categories = default_categories();
        match self.repository.get_custom(owner_id).await {
            Ok(custom) => categories.extend(custom),
            Err(e) => warn!("Falling back to built-in categories: {}", e),
        }
        Ok(categories)
    }

    async fn add_category(&self, mut category: NewCategory) -> Result<Category> {
        category.owner_id = non_blank(&category.owner_id).ok_or(ValidationError::OwnerRequired)?;
        category.name = non_blank(&category.name).ok_or(ValidationError::CategoryRequired)?;

        let existing = self.get_categories(&category.owner_id).await?;
        if existing
            .iter()
            .any(|c| c.name.to_lowercase() == category.name.to_lowercase())
        {
            return Err(ValidationError::DuplicateCategory(category.name).into());
        }

        debug!("Adding custom category '{}'", category.name);
        self.repository.add(category).await
    }

    async fn delete_category(&self, category_id: &str) -> Result<()> {
        self.repository.delete(category_id).await
    }
}
