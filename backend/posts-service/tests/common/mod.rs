//! Shared fixtures for posts-service integration tests

#![allow(dead_code)]

use async_trait::async_trait;
use posts_service::config::ResponseConfig;
use posts_service::db::{CommentRepository, DeletedPost, MemoryStore, PostRepository, StorageError};
use posts_service::models::{Comment, CommentDraft, Post, PostDraft};
use posts_service::services::{CommentStore, PostStore};
use std::sync::Arc;
use uuid::Uuid;

/// Stores over a shared in-memory backend
pub fn memory_stores() -> (PostStore, CommentStore, MemoryStore) {
    let memory = MemoryStore::new();
    let posts = PostStore::new(Arc::new(memory.clone()));
    let comments = CommentStore::new(posts.clone(), Arc::new(memory.clone()));
    (posts, comments, memory)
}

/// Stores whose every storage call fails
pub fn failing_stores() -> (PostStore, CommentStore) {
    let posts = PostStore::new(Arc::new(FailingStore));
    let comments = CommentStore::new(posts.clone(), Arc::new(FailingStore));
    (posts, comments)
}

pub fn responses(empty_comments_not_found: bool) -> ResponseConfig {
    ResponseConfig {
        empty_comments_not_found,
    }
}

/// Storage backend that is always down
pub struct FailingStore;

fn outage() -> StorageError {
    StorageError::Unavailable("connection refused by db-primary.internal:5432".to_string())
}

#[async_trait]
impl PostRepository for FailingStore {
    async fn find_all(&self) -> Result<Vec<Post>, StorageError> {
        Err(outage())
    }

    async fn find_by_id(&self, _id: Uuid) -> Result<Option<Post>, StorageError> {
        Err(outage())
    }

    async fn insert(&self, _draft: &PostDraft) -> Result<Uuid, StorageError> {
        Err(outage())
    }

    async fn update(&self, _id: Uuid, _draft: &PostDraft) -> Result<Option<Post>, StorageError> {
        Err(outage())
    }

    async fn remove(&self, _id: Uuid) -> Result<Option<DeletedPost>, StorageError> {
        Err(outage())
    }

    async fn ping(&self) -> Result<(), StorageError> {
        Err(outage())
    }
}

#[async_trait]
impl CommentRepository for FailingStore {
    async fn insert(&self, _post_id: Uuid, _draft: &CommentDraft) -> Result<Comment, StorageError> {
        Err(outage())
    }

    async fn find_by_post(&self, _post_id: Uuid) -> Result<Vec<Comment>, StorageError> {
        Err(outage())
    }

    async fn find_by_id(&self, _id: Uuid) -> Result<Option<Comment>, StorageError> {
        Err(outage())
    }
}
