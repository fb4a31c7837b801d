//! Health and metrics probes against the posts table.

use crate::storage::sqlite::{Database, StorageError};
use serde::Serialize;
use sqlx::Connection;
use tracing::warn;

/// Liveness of the posts table
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Health {
    Healthy,
    Unhealthy(String),
}

/// Snapshot returned by `/metrics`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Metrics {
    /// Connections opened to compute this snapshot, always 1
    pub db_connection_count: u32,
    pub post_count: i64,
}

/// Healthy when the posts table can be read, whether or not it has rows.
pub async fn check_health(db: &Database) -> Health {
    match probe_posts_table(db).await {
        Ok(()) => Health::Healthy,
        Err(e) => {
            warn!(error = %e, "Health check failed");
            Health::Unhealthy(format!("Table 'posts' is not readable: {e}"))
        }
    }
}

async fn probe_posts_table(db: &Database) -> Result<(), StorageError> {
    let mut conn = db.connect().await?;
    sqlx::query("SELECT * FROM posts LIMIT 1")
        .fetch_optional(&mut conn)
        .await?;
    conn.close().await?;
    Ok(())
}

pub async fn collect_metrics(db: &Database) -> Result<Metrics, StorageError> {
    let mut conn = db.connect().await?;
    let post_count: i64 = sqlx::query_scalar("SELECT count(*) FROM posts")
        .fetch_one(&mut conn)
        .await?;
    conn.close().await?;

    Ok(Metrics {
        db_connection_count: 1,
        post_count,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::PostRepository;

    #[tokio::test]
    async fn empty_table_is_healthy() {
        let dir = tempfile::tempdir().unwrap();
        let db = Database::new(dir.path().join("blog.db"));
        db.init_schema().await.unwrap();

        assert_eq!(check_health(&db).await, Health::Healthy);
    }

    #[tokio::test]
    async fn missing_table_is_unhealthy_with_reason() {
        let dir = tempfile::tempdir().unwrap();
        let db = Database::new(dir.path().join("blog.db"));

        match check_health(&db).await {
            Health::Unhealthy(reason) => {
                assert!(reason.starts_with("Table 'posts' is not readable"));
                assert!(reason.contains("no such table"), "reason: {reason}");
            }
            Health::Healthy => panic!("expected unhealthy"),
        }
    }

    #[tokio::test]
    async fn unreachable_file_is_unhealthy() {
        let dir = tempfile::tempdir().unwrap();
        let db = Database::new(dir.path().join("nope").join("blog.db"));

        assert!(matches!(check_health(&db).await, Health::Unhealthy(_)));
    }

    #[tokio::test]
    async fn post_count_tracks_creates() {
        let dir = tempfile::tempdir().unwrap();
        let db = Database::new(dir.path().join("blog.db"));
        db.init_schema().await.unwrap();
        let repo = PostRepository::new(db.clone());

        let metrics = collect_metrics(&db).await.unwrap();
        assert_eq!(
            metrics,
            Metrics {
                db_connection_count: 1,
                post_count: 0
            }
        );

        for title in ["a", "b", "c"] {
            repo.create_post(title, "").await.unwrap();
        }
        let _ = repo.create_post("", "rejected").await;

        let metrics = collect_metrics(&db).await.unwrap();
        assert_eq!(metrics.post_count, 3);
        assert_eq!(metrics.db_connection_count, 1);
    }

    #[tokio::test]
    async fn metrics_fail_without_table() {
        let dir = tempfile::tempdir().unwrap();
        let db = Database::new(dir.path().join("blog.db"));

        assert!(collect_metrics(&db).await.is_err());
    }
}
