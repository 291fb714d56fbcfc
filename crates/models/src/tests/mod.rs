use anyhow::Result;
use migration::MigratorTrait;
use sea_orm::DatabaseConnection;
use tempfile::TempDir;

use crate::db::{connect_with_config, DatabaseConfig};


/// Fresh SQLite file per test, migrated to the latest schema. Dropping the
/// returned directory removes it.
pub(crate) async fn setup_test_db() -> Result<(TempDir, DatabaseConnection)> {
    let dir = tempfile::tempdir()?;
    let mut cfg = DatabaseConfig::default();
    cfg.url = format!("sqlite://{}?mode=rwc", dir.path().join("models_test.db").display());
    cfg.max_connections = 2;
    cfg.min_connections = 1;
    let db = connect_with_config(&cfg).await?;
    migration::Migrator::up(&db, None).await?;
    Ok((dir, db))
}
