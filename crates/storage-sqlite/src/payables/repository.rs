use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;
use diesel::SqliteConnection;
use uuid::Uuid;

use tally_core::errors::{Error, Result};
use tally_core::payables::{NewPayable, Payable, PayableRepositoryTrait, PayableStatus};

use super::model::{NewPayableDB, PayableDB};
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::IntoCore;
use crate::schema::payables;

pub struct PayableRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl PayableRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        PayableRepository { pool, writer }
    }
}

#[async_trait]
impl PayableRepositoryTrait for PayableRepository {
    async fn add(&self, payable: NewPayable) -> Result<Payable> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Payable> {
                let row = NewPayableDB::from_domain(
                    Uuid::new_v4().to_string(),
                    payable,
                    Utc::now().naive_utc(),
                );
                let stored = diesel::insert_into(payables::table)
                    .values(&row)
                    .returning(PayableDB::as_returning())
                    .get_result(conn)
                    .into_core()?;
                Ok(Payable::try_from(stored)?)
            })
            .await
    }

    async fn get_pending(&self, owner_id: &str) -> Result<Vec<Payable>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = payables::table
            .filter(payables::owner_id.eq(owner_id))
            .filter(payables::status.eq(PayableStatus::Pending.as_str()))
            .order((payables::due_date.asc(), payables::description.asc()))
            .select(PayableDB::as_select())
            .load::<PayableDB>(&mut conn)
            .into_core()?;

        rows.into_iter()
            .map(|row| Payable::try_from(row).map_err(Error::from))
            .collect()
    }

    async fn update_status(&self, payable_id: &str, status: PayableStatus) -> Result<()> {
        let payable_id = payable_id.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<()> {
                let updated = diesel::update(payables::table.find(&payable_id))
                    .set(payables::status.eq(status.as_str()))
                    .execute(conn)
                    .into_core()?;
                if updated == 0 {
                    return Err(Error::NotFound(format!("Payable {}", payable_id)));
                }
                Ok(())
            })
            .await
    }

    async fn delete(&self, payable_id: &str) -> Result<()> {
        let payable_id = payable_id.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<()> {
                let deleted = diesel::delete(payables::table.find(&payable_id))
                    .execute(conn)
                    .into_core()?;
                if deleted == 0 {
                    return Err(Error::NotFound(format!("Payable {}", payable_id)));
                }
                Ok(())
            })
            .await
    }
}
