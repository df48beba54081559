use std::sync::Arc;

use async_trait::async_trait;
use diesel::prelude::*;
use diesel::upsert::excluded;
use diesel::SqliteConnection;
use uuid::Uuid;

use tally_core::budgets::{Budget, BudgetRepositoryTrait, NewBudget};
use tally_core::errors::{Error, Result};
use tally_core::utils::YearMonth;

use super::model::BudgetDB;
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::IntoCore;
use crate::schema::budgets;

pub struct BudgetRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl BudgetRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        BudgetRepository { pool, writer }
    }
}

#[async_trait]
impl BudgetRepositoryTrait for BudgetRepository {
    async fn upsert_budget(&self, budget: NewBudget) -> Result<Budget> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Budget> {
                let row = BudgetDB::from_new(Uuid::new_v4().to_string(), budget);

                // The existing row keeps its id; only the amount moves.
                diesel::insert_into(budgets::table)
                    .values(&row)
                    .on_conflict((budgets::owner_id, budgets::category, budgets::month))
                    .do_update()
                    .set(budgets::amount.eq(excluded(budgets::amount)))
                    .execute(conn)
                    .into_core()?;

                let stored = budgets::table
                    .filter(budgets::owner_id.eq(&row.owner_id))
                    .filter(budgets::category.eq(&row.category))
                    .filter(budgets::month.eq(&row.month))
                    .select(BudgetDB::as_select())
                    .first::<BudgetDB>(conn)
                    .into_core()?;
                Ok(Budget::try_from(stored)?)
            })
            .await
    }

    async fn get_budgets(&self, owner_id: &str, month: YearMonth) -> Result<Vec<Budget>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = budgets::table
            .filter(budgets::owner_id.eq(owner_id))
            .filter(budgets::month.eq(month.to_string()))
            .order(budgets::category.asc())
            .select(BudgetDB::as_select())
            .load::<BudgetDB>(&mut conn)
            .into_core()?;

        rows.into_iter()
            .map(|row| Budget::try_from(row).map_err(Error::from))
            .collect()
    }

    async fn delete_budget(&self, budget_id: &str) -> Result<()> {
        let budget_id = budget_id.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<()> {
                let deleted = diesel::delete(budgets::table.find(&budget_id))
                    .execute(conn)
                    .into_core()?;
                if deleted == 0 {
                    return Err(Error::NotFound(format!("Budget {}", budget_id)));
                }
                Ok(())
            })
            .await
    }
}
