use std::sync::Arc;

use anyhow::Context;
use common::{storage::db::SurrealDbClient, utils::config::get_config};
use ingestion_pipeline::{DumpLoader, LoaderConfig};
use tracing::{info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Set up tracing
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .try_init()
        .ok();

    let config = get_config().context("loading configuration")?;

    let db = Arc::new(
        SurrealDbClient::new(
            &config.surrealdb_address,
            &config.surrealdb_username,
            &config.surrealdb_password,
            &config.surrealdb_namespace,
            &config.surrealdb_database,
        )
        .await
        .with_context(|| format!("connecting to SurrealDB at {}", config.surrealdb_address))?,
    );

    db.ensure_initialized()
        .await
        .context("defining catalog tables")?;

    let loader = DumpLoader::new(db, LoaderConfig::from(&config));
    let report = loader.run().await;

    info!(authors = %report.authors, works = %report.works, "catalog load complete");
    if report.total_skipped() > 0 {
        warn!(
            skipped = report.total_skipped(),
            "some dump lines were skipped; see earlier warnings"
        );
    }

    // Skipped lines never affect the exit status.
    Ok(())
}
