/// Storage layer for posts-service
///
/// The stores in [`crate::services`] talk to storage only through the
/// [`PostRepository`] and [`CommentRepository`] traits. Two backends exist:
/// PostgreSQL (`post_repo`, `comment_repo`) and an in-process
/// [`memory::MemoryStore`] used for local runs and tests.
pub mod comment_repo;
pub mod memory;
pub mod post_repo;

pub use comment_repo::PgCommentRepository;
pub use memory::MemoryStore;
pub use post_repo::PgPostRepository;

use crate::config::DatabaseConfig;
use crate::models::{Comment, CommentDraft, Post, PostDraft};
use async_trait::async_trait;
use sqlx::postgres::{PgPool, PgPoolOptions};
use std::time::Duration;
use thiserror::Error;
use uuid::Uuid;

/// The storage backend failed or timed out
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

/// A post removed together with its comments
#[derive(Debug, Clone)]
pub struct DeletedPost {
    pub post: Post,
    pub comments_removed: u64,
}

#[async_trait]
pub trait PostRepository: Send + Sync {
    /// All posts, ordered by creation time then id
    async fn find_all(&self) -> Result<Vec<Post>, StorageError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Post>, StorageError>;

    /// Persist a new post and return its assigned id
    async fn insert(&self, draft: &PostDraft) -> Result<Uuid, StorageError>;

    /// Overwrite title and contents; `None` when no post has `id`
    async fn update(&self, id: Uuid, draft: &PostDraft) -> Result<Option<Post>, StorageError>;

    /// Remove a post and every comment bound to it in one storage call.
    /// Returns the removed post as it was before removal.
    async fn remove(&self, id: Uuid) -> Result<Option<DeletedPost>, StorageError>;

    async fn ping(&self) -> Result<(), StorageError>;
}

#[async_trait]
pub trait CommentRepository: Send + Sync {
    /// Persist a new comment bound to `post_id`
    async fn insert(&self, post_id: Uuid, draft: &CommentDraft) -> Result<Comment, StorageError>;

    /// Comments bound to `post_id`, ordered by creation time then id
    async fn find_by_post(&self, post_id: Uuid) -> Result<Vec<Comment>, StorageError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Comment>, StorageError>;
}

/// Create the PostgreSQL connection pool
pub async fn create_pool(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    tracing::info!(
        max_connections = config.max_connections,
        acquire_timeout_secs = config.acquire_timeout_secs,
        "Creating database pool"
    );

    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(Duration::from_secs(config.acquire_timeout_secs))
        .connect(&config.url)
        .await
}

/// Apply the embedded schema migrations
pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}
