use crate::domain::error::ApiError;
use crate::domain::post::Post;
use async_trait::async_trait;
use sqlx::SqlitePool;
use tracing::{error, info};

/// Substring predicate applied by the list query. Title takes precedence
/// whenever both querystring filters are supplied, so no combined variant
/// exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PostFilter {
    TitleContains(String),
    BodyContains(String),
}

#[async_trait]
pub trait PostRepository: Send + Sync {
    async fn insert(&self, title: &str, body: &str) -> Result<Post, ApiError>;
    async fn find_by_id(&self, id: i64) -> Result<Option<Post>, ApiError>;
    async fn list(&self, filter: Option<PostFilter>) -> Result<Vec<Post>, ApiError>;
    async fn update(&self, id: i64, title: &str, body: &str) -> Result<Option<Post>, ApiError>;
}

#[derive(Clone)]
pub struct SqlitePostRepository {
    pool: SqlitePool,
}

impl SqlitePostRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PostRepository for SqlitePostRepository {
    async fn insert(&self, title: &str, body: &str) -> Result<Post, ApiError> {
        let post = sqlx::query_as::<_, Post>(
            r#"
            INSERT INTO posts (title, body)
            VALUES (?1, ?2)
            RETURNING id, title, body
            "#,
        )
        .bind(title)
        .bind(body)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            error!("failed to insert post: {}", e);
            ApiError::Internal(e.to_string())
        })?;

        info!(post_id = post.id, "post stored");
        Ok(post)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Post>, ApiError> {
        sqlx::query_as::<_, Post>("SELECT id, title, body FROM posts WHERE id = ?1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                error!("db error find_by_id {}: {}", id, e);
                ApiError::Internal(e.to_string())
            })
    }

    async fn list(&self, filter: Option<PostFilter>) -> Result<Vec<Post>, ApiError> {
        // Matching semantics and iteration order are the storage layer's:
        // SQLite LIKE and natural rowid order, no ORDER BY imposed.
        let query = match &filter {
            Some(PostFilter::TitleContains(needle)) => sqlx::query_as::<_, Post>(
                "SELECT id, title, body FROM posts WHERE title LIKE '%' || ?1 || '%'",
            )
            .bind(needle.as_str()),
            Some(PostFilter::BodyContains(needle)) => sqlx::query_as::<_, Post>(
                "SELECT id, title, body FROM posts WHERE body LIKE '%' || ?1 || '%'",
            )
            .bind(needle.as_str()),
            None => sqlx::query_as::<_, Post>("SELECT id, title, body FROM posts"),
        };

        query.fetch_all(&self.pool).await.map_err(|e| {
            error!("db error while fetching posts: {}", e);
            ApiError::Internal(e.to_string())
        })
    }

    async fn update(&self, id: i64, title: &str, body: &str) -> Result<Option<Post>, ApiError> {
        let post = sqlx::query_as::<_, Post>(
            r#"
            UPDATE posts
            SET title = ?1, body = ?2
            WHERE id = ?3
            RETURNING id, title, body
            "#,
        )
        .bind(title)
        .bind(body)
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            error!("failed to update post {}: {}", id, e);
            ApiError::Internal(e.to_string())
        })?;

        if post.is_some() {
            info!(post_id = id, "post updated");
        }

        Ok(post)
    }
}
