use crate::storage::sqlite::{Database, StorageError};
use sqlx::Connection;
use tracing::debug;

/// Post columns as decoded into [`Post`], with an optional trailing clause
macro_rules! select_posts {
    ($($clause:literal)?) => {
        concat!(
            "SELECT id, title, COALESCE(content, '') AS content, CAST(created AS TEXT) AS created FROM posts"
            $(, " ", $clause)?
        )
    };
}

const SELECT_POSTS: &str = select_posts!();
const SELECT_POST_BY_ID: &str = select_posts!("WHERE id = ?");

/// A single blog post
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct Post {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub created: Option<String>,
}

/// Post queries, one connection per call
#[derive(Debug, Clone)]
pub struct PostRepository {
    db: Database,
}

impl PostRepository {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// All posts in storage order
    pub async fn list_posts(&self) -> Result<Vec<Post>, StorageError> {
        let mut conn = self.db.connect().await?;
        let posts = sqlx::query_as::<_, Post>(SELECT_POSTS)
            .fetch_all(&mut conn)
            .await?;
        conn.close().await?;

        debug!(count = posts.len(), "Listed posts");
        Ok(posts)
    }

    /// `None` when no row has this id.
    pub async fn get_post(&self, id: i64) -> Result<Option<Post>, StorageError> {
        let mut conn = self.db.connect().await?;
        let post = sqlx::query_as::<_, Post>(SELECT_POST_BY_ID)
            .bind(id)
            .fetch_optional(&mut conn)
            .await?;
        conn.close().await?;

        Ok(post)
    }

    /// Insert a post and return its id. The row is committed before this
    /// returns.
    pub async fn create_post(&self, title: &str, content: &str) -> Result<i64, StorageError> {
        if title.is_empty() {
            return Err(StorageError::Validation("title is required".to_string()));
        }

        let mut conn = self.db.connect().await?;
        let id = sqlx::query("INSERT INTO posts (title, content) VALUES (?, ?)")
            .bind(title)
            .bind(content)
            .execute(&mut conn)
            .await?
            .last_insert_rowid();
        conn.close().await?;

        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    async fn repo() -> (TempDir, PostRepository) {
        let dir = tempfile::tempdir().unwrap();
        let db = Database::new(dir.path().join("blog.db"));
        db.init_schema().await.unwrap();
        (dir, PostRepository::new(db))
    }

    #[test]
    fn by_id_query_extends_listing_query() {
        assert_eq!(SELECT_POST_BY_ID, format!("{SELECT_POSTS} WHERE id = ?"));
    }

    #[tokio::test]
    async fn empty_table_lists_nothing() {
        let (_dir, repo) = repo().await;
        assert!(repo.list_posts().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn get_post_returns_exact_row() {
        let (_dir, repo) = repo().await;
        let id = repo.create_post("First", "Body text").await.unwrap();

        let post = repo.get_post(id).await.unwrap().unwrap();
        assert_eq!(post.id, id);
        assert_eq!(post.title, "First");
        assert_eq!(post.content, "Body text");
        assert!(post.created.is_some());
    }

    #[tokio::test]
    async fn get_post_unknown_id_is_none() {
        let (_dir, repo) = repo().await;
        repo.create_post("Only", "").await.unwrap();

        assert_eq!(repo.get_post(999_999).await.unwrap(), None);
        assert_eq!(repo.get_post(-1).await.unwrap(), None);
    }

    #[tokio::test]
    async fn created_post_appears_once_with_fresh_id() {
        let (_dir, repo) = repo().await;
        let first = repo.create_post("One", "a").await.unwrap();
        let second = repo.create_post("Two", "b").await.unwrap();
        assert_ne!(first, second);

        let posts = repo.list_posts().await.unwrap();
        let titles: Vec<&str> = posts.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["One", "Two"]);
        assert_eq!(posts.iter().filter(|p| p.id == second).count(), 1);
    }

    #[tokio::test]
    async fn empty_content_is_allowed() {
        let (_dir, repo) = repo().await;
        let id = repo.create_post("No body", "").await.unwrap();
        assert_eq!(repo.get_post(id).await.unwrap().unwrap().content, "");
    }

    #[tokio::test]
    async fn empty_title_adds_no_row() {
        let (_dir, repo) = repo().await;
        repo.create_post("Keep", "x").await.unwrap();

        let err = repo.create_post("", "ignored").await.unwrap_err();
        assert!(matches!(err, StorageError::Validation(_)));
        assert_eq!(repo.list_posts().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn null_content_decodes_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let db = Database::new(dir.path().join("legacy.db"));
        let mut conn = db.connect().await.unwrap();
        sqlx::raw_sql(
            "CREATE TABLE posts (id INTEGER PRIMARY KEY, title TEXT NOT NULL, content TEXT, created TEXT);
             INSERT INTO posts (title) VALUES ('Bare');",
        )
        .execute(&mut conn)
        .await
        .unwrap();
        conn.close().await.unwrap();

        let posts = PostRepository::new(db).list_posts().await.unwrap();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].content, "");
        assert_eq!(posts[0].created, None);
    }

    #[tokio::test]
    async fn missing_table_is_a_query_error() {
        let dir = tempfile::tempdir().unwrap();
        let repo = PostRepository::new(Database::new(dir.path().join("empty.db")));

        let err = repo.list_posts().await.unwrap_err();
        assert!(matches!(err, StorageError::Query(_)));
    }
}
