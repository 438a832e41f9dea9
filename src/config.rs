use crate::schemas::AppState;
use anyhow::Result;
use migration::{Migrator, MigratorTrait};
use sea_orm::Database;

/// Initialize application state against a specific database URL
///
/// The schema is created on startup if it does not exist yet, so pointing
/// at a fresh SQLite file just works.
pub async fn initialize_app_state_with_url(database_url: &str) -> Result<AppState> {
    tracing::info!("Connecting to database: {}", database_url);
    let db = Database::connect(database_url).await?;

    tracing::info!("Running database migrations");
    Migrator::up(&db, None).await?;

    Ok(AppState { db })
}
