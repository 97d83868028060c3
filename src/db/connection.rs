use sea_orm::DatabaseConnection;
use tracing::info;

use super::providers::default_registry;
use crate::config::DatabaseConfig;

pub async fn connect(cfg: &DatabaseConfig) -> anyhow::Result<DatabaseConnection> {
    let provider = default_registry()?.provider_for_url(&cfg.url)?;
    info!(backend = provider.id().as_str(), "connecting to database");

    let db = provider.connect(cfg).await?;

    sync_schema(&db).await?;
    Ok(db)
}

pub async fn sync_schema(db: &DatabaseConnection) -> anyhow::Result<()> {
    info!("syncing database schema from entities");
    db.get_schema_registry("timesheet::db::entities::*")
        .sync(db)
        .await?;
    Ok(())
}
