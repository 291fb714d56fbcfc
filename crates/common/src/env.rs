//! Environment/runtime helpers
//!
//! Sanity checks run before the database pool is opened.

use std::path::{Path, PathBuf};

use tracing::{info, warn};

/// Extract the on-disk path from a SQLite URL, if it names a file.
///
/// Accepts `sqlite:path`, `sqlite://path` and `sqlite:///abs/path`; query strings
/// such as `?mode=rwc` are ignored. Returns `None` for in-memory databases and
/// non-SQLite URLs.
pub fn sqlite_file_path(url: &str) -> Option<PathBuf> {
    let rest = url.strip_prefix("sqlite:")?;
    let rest = rest.strip_prefix("//").unwrap_or(rest);
    let path = rest.split('?').next().unwrap_or_default();
    if path.is_empty() || path == ":memory:" {
        return None;
    }
    Some(PathBuf::from(path))
}

/// Ensure the directory holding a SQLite database file exists.
/// Server databases (Postgres) need nothing here.
pub async fn ensure_database_dir(url: &str) -> anyhow::Result<()> {
    let Some(file) = sqlite_file_path(url) else {
        return Ok(());
    };
    let dir = match file.parent() {
        Some(p) if p != Path::new("") => p.to_path_buf(),
        _ => return Ok(()),
    };
    if tokio::fs::metadata(&dir).await.is_err() {
        warn!(dir = %dir.display(), "database directory missing; creating it");
    }
    tokio::fs::create_dir_all(&dir)
        .await
        .map_err(|e| anyhow::anyhow!("cannot create {}: {e}", dir.display()))?;
    info!(file = %file.display(), "using sqlite database file");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sqlite_paths() {
        assert_eq!(sqlite_file_path("sqlite:./database.db?mode=rwc"), Some(PathBuf::from("./database.db")));
        assert_eq!(sqlite_file_path("sqlite://data/app.db"), Some(PathBuf::from("data/app.db")));
        assert_eq!(sqlite_file_path("sqlite:///tmp/app.db"), Some(PathBuf::from("/tmp/app.db")));
        assert_eq!(sqlite_file_path("sqlite::memory:"), None);
        assert_eq!(sqlite_file_path("postgres://localhost/catalog"), None);
    }

    #[tokio::test]
    async fn creates_missing_parent_dir() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let url = format!("sqlite://{}/nested/catalog.db?mode=rwc", dir.path().display());
        ensure_database_dir(&url).await?;
        assert!(dir.path().join("nested").is_dir());
        Ok(())
    }
}
