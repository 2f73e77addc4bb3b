//! Storage for [`VisitCounter`] records.
//!
//! Nothing here makes the fetch/increment/save sequence atomic. Two requests
//! racing on the same record can both save the same value and lose a visit.

use crate::error::StoreError;
use crate::model::NewVisitCounter;
use crate::model::VisitCounter;
use crate::pool::DbPool;
use crate::schema::visit_counter::dsl;
use anyhow::Context;
use async_bb8_diesel::AsyncRunQueryDsl;
use async_trait::async_trait;
use diesel::prelude::*;

#[cfg(test)]
mod memory;
#[cfg(test)]
pub use memory::MemoryCounterStore;

#[async_trait]
pub trait CounterStore: Send + Sync {
    /// Insert a new record with the given count. The store picks the id.
    async fn create(&self, count: i32) -> Result<VisitCounter, StoreError>;

    async fn get_by_id(&self, id: i32) -> Result<VisitCounter, StoreError>;

    /// Overwrite the stored count with `record.count`.
    async fn save(&self, record: &VisitCounter) -> Result<(), StoreError>;
}

pub struct PgCounterStore {
    pool: DbPool,
}

impl PgCounterStore {
    pub fn new(pool: DbPool) -> PgCounterStore {
        PgCounterStore { pool }
    }
}

#[async_trait]
impl CounterStore for PgCounterStore {
    async fn create(&self, count: i32) -> Result<VisitCounter, StoreError> {
        let record = diesel::insert_into(dsl::visit_counter)
            .values(NewVisitCounter { count })
            .returning(VisitCounter::as_returning())
            .get_result_async(&self.pool)
            .await
            .context("inserting visit counter")?;
        Ok(record)
    }

    async fn get_by_id(&self, id: i32) -> Result<VisitCounter, StoreError> {
        let rows: Vec<VisitCounter> = dsl::visit_counter
            .filter(dsl::id.eq(id))
            .select(VisitCounter::as_select())
            .limit(1)
            .load_async(&self.pool)
            .await
            .context("loading visit counter")?;
        rows.into_iter().next().ok_or(StoreError::NotFound(id))
    }

    async fn save(&self, record: &VisitCounter) -> Result<(), StoreError> {
        let nrows =
            diesel::update(dsl::visit_counter.filter(dsl::id.eq(record.id)))
                .set(dsl::count.eq(record.count))
                .execute_async(&self.pool)
                .await
                .context("saving visit counter")?;
        if nrows == 0 {
            return Err(StoreError::NotFound(record.id));
        }
        Ok(())
    }
}
