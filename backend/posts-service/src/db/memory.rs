//! In-process storage backend.
//!
//! Both tables sit behind one lock so that removing a post and its comments is
//! a single write, matching the transaction the PostgreSQL backend uses.

use super::{CommentRepository, DeletedPost, PostRepository, StorageError};
use crate::models::{Comment, CommentDraft, Post, PostDraft};
use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

#[derive(Debug, Default)]
struct Tables {
    // Insertion order doubles as creation order
    posts: Vec<Post>,
    comments: Vec<Comment>,
}

/// Posts and comments held in memory; clones share the same tables
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    tables: Arc<RwLock<Tables>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn post_count(&self) -> usize {
        self.tables.read().await.posts.len()
    }

    pub async fn comment_count(&self) -> usize {
        self.tables.read().await.comments.len()
    }
}

#[async_trait]
impl PostRepository for MemoryStore {
    async fn find_all(&self) -> Result<Vec<Post>, StorageError> {
        Ok(self.tables.read().await.posts.clone())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Post>, StorageError> {
        let tables = self.tables.read().await;
        Ok(tables.posts.iter().find(|p| p.id == id).cloned())
    }

    async fn insert(&self, draft: &PostDraft) -> Result<Uuid, StorageError> {
        let now = Utc::now();
        let post = Post {
            id: Uuid::new_v4(),
            title: draft.title.clone(),
            contents: draft.contents.clone(),
            created_at: now,
            updated_at: now,
        };
        let id = post.id;

        self.tables.write().await.posts.push(post);
        Ok(id)
    }

    async fn update(&self, id: Uuid, draft: &PostDraft) -> Result<Option<Post>, StorageError> {
        let mut tables = self.tables.write().await;
        let Some(post) = tables.posts.iter_mut().find(|p| p.id == id) else {
            return Ok(None);
        };

        post.title = draft.title.clone();
        post.contents = draft.contents.clone();
        post.updated_at = Utc::now();
        Ok(Some(post.clone()))
    }

    async fn remove(&self, id: Uuid) -> Result<Option<DeletedPost>, StorageError> {
        let mut tables = self.tables.write().await;
        let Some(index) = tables.posts.iter().position(|p| p.id == id) else {
            return Ok(None);
        };

        let post = tables.posts.remove(index);
        let before = tables.comments.len();
        tables.comments.retain(|c| c.post_id != id);
        let comments_removed = (before - tables.comments.len()) as u64;

        Ok(Some(DeletedPost {
            post,
            comments_removed,
        }))
    }

    async fn ping(&self) -> Result<(), StorageError> {
        Ok(())
    }
}

#[async_trait]
impl CommentRepository for MemoryStore {
    async fn insert(&self, post_id: Uuid, draft: &CommentDraft) -> Result<Comment, StorageError> {
        let now = Utc::now();
        let comment = Comment {
            id: Uuid::new_v4(),
            post_id,
            text: draft.text.clone(),
            created_at: now,
            updated_at: now,
        };

        self.tables.write().await.comments.push(comment.clone());
        Ok(comment)
    }

    async fn find_by_post(&self, post_id: Uuid) -> Result<Vec<Comment>, StorageError> {
        let tables = self.tables.read().await;
        Ok(tables
            .comments
            .iter()
            .filter(|c| c.post_id == post_id)
            .cloned()
            .collect())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Comment>, StorageError> {
        let tables = self.tables.read().await;
        Ok(tables.comments.iter().find(|c| c.id == id).cloned())
    }
}
