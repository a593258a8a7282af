/// Comment store - comments scoped to an existing post
use crate::db::{CommentRepository, StorageError};
use crate::metrics::record_operation;
use crate::models::Comment;
use crate::services::posts::PostStore;
use crate::services::validation::{self, ValidationFailed};
use serde_json::Value;
use std::sync::Arc;
use thiserror::Error;
use uuid::Uuid;

/// Outcomes of a comment operation other than success
#[derive(Debug, Error)]
pub enum CommentError {
    #[error("Post {0} not found")]
    ParentNotFound(Uuid),

    #[error("Comment {0} not found")]
    NotFound(Uuid),

    #[error(transparent)]
    Validation(#[from] ValidationFailed),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl CommentError {
    pub(crate) fn outcome(&self) -> &'static str {
        match self {
            CommentError::ParentNotFound(_) => "parent_not_found",
            CommentError::NotFound(_) => "not_found",
            CommentError::Validation(_) => "validation_failed",
            CommentError::Storage(_) => "storage_unavailable",
        }
    }
}

fn record<T>(operation: &str, result: &Result<T, CommentError>) {
    record_operation(operation, result.as_ref().map_or_else(CommentError::outcome, |_| "ok"));
}

/// Owns comment records. Uses the post store only to check that a parent exists.
#[derive(Clone)]
pub struct CommentStore {
    posts: PostStore,
    repo: Arc<dyn CommentRepository>,
}

impl CommentStore {
    pub fn new(posts: PostStore, repo: Arc<dyn CommentRepository>) -> Self {
        Self { posts, repo }
    }

    async fn require_parent(&self, post_id: Uuid) -> Result<(), CommentError> {
        match self.posts.find_by_id(post_id).await? {
            Some(_) => Ok(()),
            None => Err(CommentError::ParentNotFound(post_id)),
        }
    }

    /// Create a comment under `post_id`.
    ///
    /// The parent is resolved first; the payload is only looked at once the
    /// post is known to exist.
    pub async fn insert_for_post(&self, post_id: Uuid, payload: &Value) -> Result<Comment, CommentError> {
        let result = self.try_insert(post_id, payload).await;
        record("comment.insert", &result);
        result
    }

    async fn try_insert(&self, post_id: Uuid, payload: &Value) -> Result<Comment, CommentError> {
        self.require_parent(post_id).await?;
        let draft = validation::comment_draft(payload)?;

        let comment = self.repo.insert(post_id, &draft).await?;
        tracing::info!(post_id = %post_id, comment_id = %comment.id, "Comment created");
        Ok(comment)
    }

    /// All comments of `post_id`. An existing post without comments yields
    /// an empty list, never `ParentNotFound`.
    pub async fn list_for_post(&self, post_id: Uuid) -> Result<Vec<Comment>, CommentError> {
        let result = self.try_list(post_id).await;
        record("comment.list_for_post", &result);
        result
    }

    async fn try_list(&self, post_id: Uuid) -> Result<Vec<Comment>, CommentError> {
        self.require_parent(post_id).await?;
        Ok(self.repo.find_by_post(post_id).await?)
    }

    /// A single comment, only if it belongs to `post_id`
    pub async fn find_for_post(&self, post_id: Uuid, comment_id: Uuid) -> Result<Comment, CommentError> {
        let result = self.try_find(post_id, comment_id).await;
        record("comment.find_for_post", &result);
        result
    }

    async fn try_find(&self, post_id: Uuid, comment_id: Uuid) -> Result<Comment, CommentError> {
        self.require_parent(post_id).await?;

        self.repo
            .find_by_id(comment_id)
            .await?
            .filter(|c| c.post_id == post_id)
            .ok_or(CommentError::NotFound(comment_id))
    }
}
