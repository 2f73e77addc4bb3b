//! Establishing the initial counter record.

use crate::error::StoreError;
use crate::model::VisitCounter;
use crate::model::VISIT_COUNTER_ID;
use crate::store::CounterStore;
use anyhow::anyhow;
use slog::error;
use slog::info;

/// Insert a counter starting at zero. Must run exactly once, before the first
/// page view; calling it again inserts a second record.
pub async fn seed(store: &dyn CounterStore) -> Result<VisitCounter, StoreError> {
    store.create(0).await
}

/// Make sure the record at [`VISIT_COUNTER_ID`] exists, creating it if needed.
/// Safe to call on every startup. Fails if the store puts the new record
/// anywhere other than [`VISIT_COUNTER_ID`], since page views could never
/// find it.
pub async fn ensure_seeded(
    log: &slog::Logger,
    store: &dyn CounterStore,
) -> Result<VisitCounter, StoreError> {
    match store.get_by_id(VISIT_COUNTER_ID).await {
        Ok(record) => {
            info!(log, "visit counter already seeded"; "count" => record.count);
            Ok(record)
        }
        Err(error) if error.is_not_found() => {
            let record = seed(store).await?;
            if record.id != VISIT_COUNTER_ID {
                error!(log, "seeded visit counter under unexpected id";
                    "id" => record.id,
                    "expected_id" => VISIT_COUNTER_ID);
                return Err(StoreError::Storage(anyhow!(
                    "seeded visit counter got id {}, expected {}",
                    record.id,
                    VISIT_COUNTER_ID
                )));
            }
            info!(log, "seeded visit counter"; "id" => record.id);
            Ok(record)
        }
        Err(error) => Err(error),
    }
}
