use super::CounterStore;
use crate::error::StoreError;
use crate::model::VisitCounter;
use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::BTreeMap;

/// Keeps records in process memory. Ids start at 1, like a fresh SERIAL
/// column.
#[derive(Default)]
pub struct MemoryCounterStore {
    inner: Mutex<MemoryInner>,
}

#[derive(Default)]
struct MemoryInner {
    last_id: i32,
    records: BTreeMap<i32, i32>,
}

impl MemoryCounterStore {
    pub fn new() -> MemoryCounterStore {
        MemoryCounterStore::default()
    }

    /// A store whose next record gets id `last_id + 1`, as if earlier rows
    /// had been inserted and removed.
    pub fn with_last_id(last_id: i32) -> MemoryCounterStore {
        MemoryCounterStore {
            inner: Mutex::new(MemoryInner {
                last_id,
                records: BTreeMap::new(),
            }),
        }
    }

    pub fn len(&self) -> usize {
        self.inner.lock().records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl CounterStore for MemoryCounterStore {
    async fn create(&self, count: i32) -> Result<VisitCounter, StoreError> {
        let mut inner = self.inner.lock();
        inner.last_id += 1;
        let id = inner.last_id;
        inner.records.insert(id, count);
        Ok(VisitCounter { id, count })
    }

    async fn get_by_id(&self, id: i32) -> Result<VisitCounter, StoreError> {
        let inner = self.inner.lock();
        inner
            .records
            .get(&id)
            .map(|&count| VisitCounter { id, count })
            .ok_or(StoreError::NotFound(id))
    }

    async fn save(&self, record: &VisitCounter) -> Result<(), StoreError> {
        let mut inner = self.inner.lock();
        match inner.records.get_mut(&record.id) {
            Some(count) => {
                *count = record.count;
                Ok(())
            }
            None => Err(StoreError::NotFound(record.id)),
        }
    }
}
