/// Data models for posts-service
///
/// This module defines structures for:
/// - Post: a titled piece of content
/// - Comment: text attached to an existing post
/// - Drafts: validated input accepted by the stores
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

/// A stored post
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Post {
    pub id: Uuid,
    pub title: String,
    pub contents: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A stored comment, bound to the post it was created under
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Comment {
    pub id: Uuid,
    pub post_id: Uuid,
    pub text: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Body returned when a post is created
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewPostResponse {
    pub id: Uuid,
}

/// Post fields accepted by insert and update.
///
/// Length is counted in characters with no trimming, so whitespace-only
/// values pass.
#[derive(Debug, Clone, PartialEq, Eq, Validate)]
pub struct PostDraft {
    #[validate(length(min = 1))]
    pub title: String,
    #[validate(length(min = 1))]
    pub contents: String,
}

/// Comment fields accepted by insert
#[derive(Debug, Clone, PartialEq, Eq, Validate)]
pub struct CommentDraft {
    #[validate(length(min = 1))]
    pub text: String,
}
