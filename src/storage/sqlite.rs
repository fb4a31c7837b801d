use sqlx::sqlite::{SqliteConnectOptions, SqliteConnection};
use sqlx::{ConnectOptions, Connection};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Failed to open database {path:?}: {source}")]
    Connect {
        path: PathBuf,
        #[source]
        source: sqlx::Error,
    },

    #[error("Query failed: {0}")]
    Query(#[from] sqlx::Error),

    #[error("Invalid post: {0}")]
    Validation(String),
}

/// Handle to the SQLite database file.
///
/// Holds no open connection. Every operation calls [`Database::connect`],
/// runs one statement and closes the connection again; a connection that is
/// dropped on an error path is closed by its destructor.
#[derive(Debug, Clone)]
pub struct Database {
    path: PathBuf,
    options: SqliteConnectOptions,
}

impl Database {
    pub fn new(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        let options = SqliteConnectOptions::new()
            .filename(&path)
            .create_if_missing(true);

        Self { path, options }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Open a fresh connection. The caller owns it and must not keep it past
    /// the current request.
    pub async fn connect(&self) -> Result<SqliteConnection, StorageError> {
        debug!(path = %self.path.display(), "Opening database connection");
        self.options
            .connect()
            .await
            .map_err(|source| StorageError::Connect {
                path: self.path.clone(),
                source,
            })
    }

    /// Create the posts table if it does not exist. Existing tables are left
    /// untouched.
    pub async fn init_schema(&self) -> Result<(), StorageError> {
        let mut conn = self.connect().await?;
        sqlx::raw_sql(include_str!("schema.sql"))
            .execute(&mut conn)
            .await?;
        conn.close().await?;

        info!(path = %self.path.display(), "Posts schema ready");
        Ok(())
    }
}
