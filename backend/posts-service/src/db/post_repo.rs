use super::{DeletedPost, PostRepository, StorageError};
use crate::models::{Post, PostDraft};
use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

/// PostgreSQL-backed post storage
#[derive(Clone)]
pub struct PgPostRepository {
    pool: PgPool,
}

impl PgPostRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PostRepository for PgPostRepository {
    async fn find_all(&self) -> Result<Vec<Post>, StorageError> {
        let posts = sqlx::query_as::<_, Post>(
            r#"
            SELECT id, title, contents, created_at, updated_at
            FROM posts
            ORDER BY created_at ASC, id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(posts)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Post>, StorageError> {
        let post = sqlx::query_as::<_, Post>(
            r#"
            SELECT id, title, contents, created_at, updated_at
            FROM posts
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(post)
    }

    async fn insert(&self, draft: &PostDraft) -> Result<Uuid, StorageError> {
        let id = sqlx::query_scalar::<_, Uuid>(
            r#"
            INSERT INTO posts (title, contents)
            VALUES ($1, $2)
            RETURNING id
            "#,
        )
        .bind(&draft.title)
        .bind(&draft.contents)
        .fetch_one(&self.pool)
        .await?;

        Ok(id)
    }

    async fn update(&self, id: Uuid, draft: &PostDraft) -> Result<Option<Post>, StorageError> {
        let post = sqlx::query_as::<_, Post>(
            r#"
            UPDATE posts
            SET title = $1, contents = $2, updated_at = NOW()
            WHERE id = $3
            RETURNING id, title, contents, created_at, updated_at
            "#,
        )
        .bind(&draft.title)
        .bind(&draft.contents)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(post)
    }

    async fn remove(&self, id: Uuid) -> Result<Option<DeletedPost>, StorageError> {
        // Post and comments go together or not at all
        let mut tx = self.pool.begin().await?;

        let post = sqlx::query_as::<_, Post>(
            r#"
            DELETE FROM posts
            WHERE id = $1
            RETURNING id, title, contents, created_at, updated_at
            "#,
        )
        .bind(id)
        .fetch_optional(&mut *tx)
        .await?;

        let Some(post) = post else {
            tx.rollback().await?;
            return Ok(None);
        };

        let result = sqlx::query("DELETE FROM comments WHERE post_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(Some(DeletedPost {
            post,
            comments_removed: result.rows_affected(),
        }))
    }

    async fn ping(&self) -> Result<(), StorageError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
