/// Post store - validation and lifecycle of posts
use crate::db::{PostRepository, StorageError};
use crate::metrics::record_operation;
use crate::models::Post;
use crate::services::validation::{self, ValidationFailed};
use serde_json::Value;
use std::sync::Arc;
use thiserror::Error;
use uuid::Uuid;

/// Outcomes of a post operation other than success
#[derive(Debug, Error)]
pub enum PostError {
    #[error(transparent)]
    Validation(#[from] ValidationFailed),

    #[error("Post {0} not found")]
    NotFound(Uuid),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl PostError {
    pub(crate) fn outcome(&self) -> &'static str {
        match self {
            PostError::Validation(_) => "validation_failed",
            PostError::NotFound(_) => "not_found",
            PostError::Storage(_) => "storage_unavailable",
        }
    }
}

fn record<T>(operation: &str, result: &Result<T, PostError>) {
    record_operation(operation, result.as_ref().map_or_else(PostError::outcome, |_| "ok"));
}

/// Owns post records; cheap to clone
#[derive(Clone)]
pub struct PostStore {
    repo: Arc<dyn PostRepository>,
}

impl PostStore {
    pub fn new(repo: Arc<dyn PostRepository>) -> Self {
        Self { repo }
    }

    /// Every stored post
    pub async fn list_all(&self) -> Result<Vec<Post>, StorageError> {
        let result = self.repo.find_all().await;
        record_operation("post.list_all", if result.is_ok() { "ok" } else { "storage_unavailable" });
        result
    }

    /// Get a post by ID. A missing post is `Ok(None)`, not an error.
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Post>, StorageError> {
        let result = self.repo.find_by_id(id).await;
        let outcome = match &result {
            Ok(Some(_)) => "ok",
            Ok(None) => "not_found",
            Err(_) => "storage_unavailable",
        };
        record_operation("post.find_by_id", outcome);
        result
    }

    /// Validate and persist a new post, returning its id
    pub async fn insert(&self, payload: &Value) -> Result<Uuid, PostError> {
        let result = self.try_insert(payload).await;
        record("post.insert", &result);
        result
    }

    async fn try_insert(&self, payload: &Value) -> Result<Uuid, PostError> {
        let draft = validation::post_draft(payload)?;
        let id = self.repo.insert(&draft).await?;

        tracing::info!(post_id = %id, "Post created");
        Ok(id)
    }

    /// Replace title and contents, returning the post as stored afterwards.
    ///
    /// Invalid input is rejected before storage is touched.
    pub async fn update(&self, id: Uuid, payload: &Value) -> Result<Post, PostError> {
        let result = self.try_update(id, payload).await;
        record("post.update", &result);
        result
    }

    async fn try_update(&self, id: Uuid, payload: &Value) -> Result<Post, PostError> {
        let draft = validation::post_draft(payload)?;

        if self.repo.find_by_id(id).await?.is_none() {
            return Err(PostError::NotFound(id));
        }

        // Removed between the check and the write
        let post = self
            .repo
            .update(id, &draft)
            .await?
            .ok_or(PostError::NotFound(id))?;

        tracing::info!(post_id = %id, "Post updated");
        Ok(post)
    }

    /// Delete a post and its comments, returning the post as it was
    pub async fn delete(&self, id: Uuid) -> Result<Post, PostError> {
        let result = self.try_delete(id).await;
        record("post.delete", &result);
        result
    }

    async fn try_delete(&self, id: Uuid) -> Result<Post, PostError> {
        if self.repo.find_by_id(id).await?.is_none() {
            return Err(PostError::NotFound(id));
        }

        let deleted = self.repo.remove(id).await?.ok_or(PostError::NotFound(id))?;

        tracing::info!(
            post_id = %id,
            comments_removed = deleted.comments_removed,
            "Post deleted"
        );
        Ok(deleted.post)
    }

    /// Round-trip to the storage backend
    pub async fn ping(&self) -> Result<(), StorageError> {
        self.repo.ping().await
    }
}
