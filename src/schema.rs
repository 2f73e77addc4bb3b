use crate::pool::DbPool;
use anyhow::Context;
use async_bb8_diesel::AsyncSimpleConnection;

diesel::table! {
    visit_counter (id) {
        id -> Int4,
        count -> Int4,
    }
}

/// Create the `visit_counter` table if it does not exist yet.
pub async fn migrate(pool: &DbPool) -> anyhow::Result<()> {
    pool.batch_execute_async(
        r#"
        CREATE TABLE IF NOT EXISTS visit_counter (
            id SERIAL PRIMARY KEY,
            count INT4 NOT NULL CHECK (count >= 0)
        );
        "#,
    )
    .await
    .context("creating visit_counter table")
}
