use super::{CommentRepository, StorageError};
use crate::models::{Comment, CommentDraft};
use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

/// PostgreSQL-backed comment storage
#[derive(Clone)]
pub struct PgCommentRepository {
    pool: PgPool,
}

impl PgCommentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CommentRepository for PgCommentRepository {
    async fn insert(&self, post_id: Uuid, draft: &CommentDraft) -> Result<Comment, StorageError> {
        let comment = sqlx::query_as::<_, Comment>(
            r#"
            INSERT INTO comments (post_id, text)
            VALUES ($1, $2)
            RETURNING id, post_id, text, created_at, updated_at
            "#,
        )
        .bind(post_id)
        .bind(&draft.text)
        .fetch_one(&self.pool)
        .await?;

        Ok(comment)
    }

    async fn find_by_post(&self, post_id: Uuid) -> Result<Vec<Comment>, StorageError> {
        let comments = sqlx::query_as::<_, Comment>(
            r#"
            SELECT id, post_id, text, created_at, updated_at
            FROM comments
            WHERE post_id = $1
            ORDER BY created_at ASC, id ASC
            "#,
        )
        .bind(post_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(comments)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Comment>, StorageError> {
        let comment = sqlx::query_as::<_, Comment>(
            r#"
            SELECT id, post_id, text, created_at, updated_at
            FROM comments
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(comment)
    }
}
