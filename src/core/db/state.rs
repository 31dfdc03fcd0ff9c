use std::path::{Path, PathBuf};

use anyhow::Context;
use sqlx::sqlite::{
    SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions, SqliteSynchronous,
};

use super::storage::LocalStorage;

/// Local storage backed by a single SQLite file.
pub struct SqliteStorage {
    store_file: PathBuf,
    pool: SqlitePool,
}

impl std::fmt::Debug for SqliteStorage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SqliteStorage")
            .field("store_file", &self.store_file)
            .finish()
    }
}

impl SqliteStorage {
    /// Open the store file, creating it (but not its parent directory) if missing.
    pub async fn open<P: AsRef<Path>>(store_file: P) -> anyhow::Result<Self> {
        let store_file = store_file.as_ref().to_path_buf();

        if let Some(parent) = store_file.parent().filter(|p| !p.as_os_str().is_empty()) {
            if !parent.is_dir() {
                anyhow::bail!("Store file parent does not exist: {:?}", store_file);
            }
        }

        let connect_opts = SqliteConnectOptions::new()
            .filename(&store_file)
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal);

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(connect_opts)
            .await
            .with_context(|| format!("Failed to open store {:?}", store_file))?;
        sqlx::migrate!("./migrations").run(&pool).await?;
        tracing::debug!(path = ?store_file, "opened local storage");

        Ok(Self { store_file, pool })
    }

    pub fn path(&self) -> &Path {
        &self.store_file
    }

    /// Flush the WAL into the main file and release the file handles.
    pub async fn close(self) -> anyhow::Result<()> {
        sqlx::query("PRAGMA wal_checkpoint(TRUNCATE);")
            .execute(&self.pool)
            .await?;
        self.pool.close().await;
        Ok(())
    }
}

impl LocalStorage for SqliteStorage {
    async fn get_item(&self, key: &str) -> anyhow::Result<Option<String>> {
        let value = sqlx::query_scalar::<_, String>("SELECT value FROM local_storage WHERE key = $1")
            .bind(key)
            .fetch_optional(&self.pool)
            .await
            .with_context(|| format!("Failed to read key {:?}", key))?;
        Ok(value)
    }

    async fn set_item(&self, key: &str, value: &str) -> anyhow::Result<()> {
        sqlx::query(
            r#"INSERT INTO local_storage (key, value) VALUES ($1, $2)
            ON CONFLICT (key) DO UPDATE SET value = EXCLUDED.value"#,
        )
        .bind(key)
        .bind(value)
        .execute(&self.pool)
        .await
        .with_context(|| format!("Failed to write key {:?}", key))?;
        Ok(())
    }
}
