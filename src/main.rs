use anyhow::anyhow;
use anyhow::Context;
use config::Config;
use slog::info;
use std::path::PathBuf;
use std::sync::Arc;
use store::PgCounterStore;

mod config;
mod error;
mod http;
mod model;
mod pool;
mod render;
mod schema;
mod seed;
mod store;
mod view;

type DbConnection = diesel::PgConnection;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = match std::env::args_os().nth(1) {
        Some(path) => Config::from_file(&PathBuf::from(path))?,
        None => Config::default(),
    };
    let log =
        config.log.to_logger("visit-counter").context("creating logger")?;
    let pool = pool::create_pool(
        log.clone(),
        &config.database.url,
        config.database.max_connections,
    )
    .await
    .context("setting up database pool")?;
    schema::migrate(&pool).await?;

    let store = Arc::new(PgCounterStore::new(pool));
    seed::ensure_seeded(&log, store.as_ref())
        .await
        .context("seeding visit counter")?;

    info!(&log, "setting up dropshot server");
    let server =
        http::create_dropshot_server(config.dropshot, log.clone(), store)
            .await?;
    info!(&log, "set up dropshot server";
        "local_address" => ?server.local_addr());
    server.await.map_err(|error| anyhow!("waiting for server: {:#}", error))
}
