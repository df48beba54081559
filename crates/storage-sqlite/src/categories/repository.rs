use std::sync::Arc;

use async_trait::async_trait;
use diesel::prelude::*;
use diesel::SqliteConnection;
use uuid::Uuid;

use tally_core::categories::{Category, CategoryRepositoryTrait, NewCategory};
use tally_core::errors::{Error, Result};

use super::model::CategoryDB;
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::IntoCore;
use crate::schema::categories;

pub struct CategoryRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl CategoryRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        CategoryRepository { pool, writer }
    }
}

#[async_trait]
impl CategoryRepositoryTrait for CategoryRepository {
    async fn get_custom(&self, owner_id: &str) -> Result<Vec<Category>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = categories::table
            .filter(categories::owner_id.eq(owner_id))
            .order(categories::name.asc())
            .select(CategoryDB::as_select())
            .load::<CategoryDB>(&mut conn)
            .into_core()?;
        Ok(rows.into_iter().map(Category::from).collect())
    }

    async fn add(&self, category: NewCategory) -> Result<Category> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Category> {
                let row = CategoryDB::from_new(Uuid::new_v4().to_string(), category);
                diesel::insert_into(categories::table)
                    .values(&row)
                    .execute(conn)
                    .into_core()?;
                Ok(Category::from(row))
            })
            .await
    }

    async fn delete(&self, category_id: &str) -> Result<()> {
        let category_id = category_id.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<()> {
                let deleted = diesel::delete(categories::table.find(&category_id))
                    .execute(conn)
                    .into_core()?;
                if deleted == 0 {
                    return Err(Error::NotFound(format!("Category {}", category_id)));
                }
                Ok(())
            })
            .await
    }
}
