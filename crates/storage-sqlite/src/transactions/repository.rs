use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;
use diesel::SqliteConnection;
use uuid::Uuid;

use tally_core::errors::{Error, Result};
use tally_core::transactions::{LedgerRepositoryTrait, NewTransaction, Transaction};
use tally_core::utils::YearMonth;

use super::model::TransactionDB;
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::{IntoCore, StorageError};
use crate::schema::transactions;
use crate::utils::to_naive;

pub struct TransactionRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl TransactionRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        TransactionRepository { pool, writer }
    }

    fn into_domain(rows: Vec<TransactionDB>) -> Result<Vec<Transaction>> {
        rows.into_iter()
            .map(Transaction::try_from)
            .collect::<std::result::Result<Vec<_>, StorageError>>()
            .map_err(Error::from)
    }
}

#[async_trait]
impl LedgerRepositoryTrait for TransactionRepository {
    async fn add(&self, transaction: NewTransaction) -> Result<String> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<String> {
                let row = TransactionDB::from_new(
                    Uuid::new_v4().to_string(),
                    transaction,
                    Utc::now().naive_utc(),
                );
                diesel::insert_into(transactions::table)
                    .values(&row)
                    .execute(conn)
                    .into_core()?;
                Ok(row.id)
            })
            .await
    }

    async fn update(&self, transaction: Transaction) -> Result<()> {
        let row = TransactionDB::from(transaction);
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<()> {
                let target = || {
                    transactions::table
                        .filter(transactions::id.eq(&row.id))
                        .filter(transactions::owner_id.eq(&row.owner_id))
                };

                let updated = diesel::update(target())
                    .set((
                        transactions::amount.eq(&row.amount),
                        transactions::description.eq(&row.description),
                        transactions::kind.eq(&row.kind),
                        transactions::category.eq(&row.category),
                        transactions::is_recurring.eq(row.is_recurring),
                        transactions::payment_method.eq(&row.payment_method),
                        transactions::card_id.eq(&row.card_id),
                    ))
                    .execute(conn)
                    .into_core()?;
                if updated == 0 {
                    return Err(Error::NotFound(format!("Transaction {}", row.id)));
                }

                // An edit without a date keeps the original one.
                if let Some(created_at) = row.created_at {
                    diesel::update(target())
                        .set(transactions::created_at.eq(created_at))
                        .execute(conn)
                        .into_core()?;
                }
                Ok(())
            })
            .await
    }

    async fn delete(&self, transaction_id: &str) -> Result<()> {
        let transaction_id = transaction_id.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<()> {
                let deleted = diesel::delete(transactions::table.find(&transaction_id))
                    .execute(conn)
                    .into_core()?;
                if deleted == 0 {
                    return Err(Error::NotFound(format!("Transaction {}", transaction_id)));
                }
                Ok(())
            })
            .await
    }

    async fn list_by_month(&self, owner_id: &str, month: YearMonth) -> Result<Vec<Transaction>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = transactions::table
            .filter(transactions::owner_id.eq(owner_id))
            .filter(transactions::created_at.ge(to_naive(&month.start())))
            .filter(transactions::created_at.lt(to_naive(&month.end())))
            .order(transactions::created_at.desc())
            .select(TransactionDB::as_select())
            .load::<TransactionDB>(&mut conn)
            .into_core()?;
        Self::into_domain(rows)
    }

    async fn list_recurring(&self, owner_id: &str) -> Result<Vec<Transaction>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = transactions::table
            .filter(transactions::owner_id.eq(owner_id))
            .filter(transactions::is_recurring.eq(true))
            .order(transactions::created_at.desc())
            .select(TransactionDB::as_select())
            .load::<TransactionDB>(&mut conn)
            .into_core()?;
        Self::into_domain(rows)
    }

    async fn count_by_month(&self, owner_id: &str, month: YearMonth) -> Result<usize> {
        let mut conn = get_connection(&self.pool)?;
        let count: i64 = transactions::table
            .filter(transactions::owner_id.eq(owner_id))
            .filter(transactions::created_at.ge(to_naive(&month.start())))
            .filter(transactions::created_at.lt(to_naive(&month.end())))
            .count()
            .get_result(&mut conn)
            .into_core()?;
        Ok(usize::try_from(count).unwrap_or_default())
    }
}
