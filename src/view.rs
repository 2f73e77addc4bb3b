//! Handling a single page view.

use crate::error::StoreError;
use crate::model::VisitCounter;
use crate::model::VISIT_COUNTER_ID;
use crate::store::CounterStore;
use slog::debug;

/// What the index page is rendered from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageContext {
    pub visit_counter: VisitCounter,
}

/// Fetch the counter, bump it by one and save it. Every call counts, reloads
/// included. Fails with [`StoreError::NotFound`] if the counter was never
/// seeded, in which case nothing is written.
pub async fn handle_page_view(
    log: &slog::Logger,
    store: &dyn CounterStore,
) -> Result<PageContext, StoreError> {
    let mut visit_counter = store.get_by_id(VISIT_COUNTER_ID).await?;
    visit_counter.increment()?;
    store.save(&visit_counter).await?;
    debug!(log, "counted page view"; "count" => visit_counter.count);
    Ok(PageContext { visit_counter })
}
