use std::sync::Arc;

use crate::data::post_repository::{PostFilter, PostRepository};
use crate::domain::{error::ApiError, post::Post};
use tracing::instrument;

/// Post operations behind an explicitly passed repository handle. Handlers
/// receive this through app data; tests construct it over their own pool.
#[derive(Clone)]
pub struct PostService<R: PostRepository + 'static> {
    repo: Arc<R>,
}

impl<R> PostService<R>
where
    R: PostRepository + 'static,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn get_post(&self, id: i64) -> Result<Post, ApiError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or(ApiError::PostNotFound(id))
    }

    pub async fn list_posts(&self, filter: Option<PostFilter>) -> Result<Vec<Post>, ApiError> {
        self.repo.list(filter).await
    }

    #[instrument(skip(self))]
    pub async fn create_post(&self, title: String, body: String) -> Result<Post, ApiError> {
        self.repo.insert(&title, &body).await
    }

    #[instrument(skip(self))]
    pub async fn update_post(&self, id: i64, title: String, body: String) -> Result<Post, ApiError> {
        match self.repo.update(id, &title, &body).await? {
            Some(post) => Ok(post),
            None => Err(ApiError::PostNotFound(id)),
        }
    }
}
