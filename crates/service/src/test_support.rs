#![cfg(test)]
use sea_orm::DatabaseConnection;
use migration::MigratorTrait;
use models::db::{connect_with_config, DatabaseConfig};
use tempfile::TempDir;

/// A migrated SQLite database for the calling test. The file is removed when the
/// returned directory guard drops.
pub async fn get_db() -> Result<(TempDir, DatabaseConnection), anyhow::Error> {
    let dir = tempfile::tempdir()?;
    let mut cfg = DatabaseConfig::from_env();
    cfg.url = format!("sqlite://{}?mode=rwc", dir.path().join("service_test.db").display());
    cfg.max_connections = 4;
    cfg.min_connections = 1;
    cfg.acquire_timeout = std::time::Duration::from_secs(10);
    let db = connect_with_config(&cfg).await?;
    migration::Migrator::up(&db, None).await?;
    Ok((dir, db))
}

#[tokio::test]
async fn database_file_goes_away_with_its_guard() -> Result<(), anyhow::Error> {
    let (dir, db) = get_db().await?;
    let root = dir.path().to_path_buf();
    assert!(root.join("service_test.db").is_file());

    db.close().await?;
    drop(dir);
    assert!(!root.exists());
    Ok(())
}
