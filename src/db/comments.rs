use sqlx::PgPool;
use uuid::Uuid;

use crate::error::Result;
use crate::models::{Comment, ParentKind};

const COMMENT_COLUMNS: &str = "id, parent_id, user_id, content, likes, created_at";

/// Repository for comments under posts and looks.
///
/// Comments are never deleted on their own; the only deletion path is the
/// parent's cascade delete (see `db::cascade`).
#[derive(Clone)]
pub struct CommentRepository {
    pool: PgPool,
}

impl CommentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a comment under a parent. The caller has already verified
    /// the parent exists.
    pub async fn create(
        &self,
        parent: ParentKind,
        parent_id: Uuid,
        user_id: Uuid,
        content: &str,
    ) -> Result<Comment> {
        let comment = sqlx::query_as::<_, Comment>(&format!(
            r#"
            INSERT INTO comments (parent_kind, parent_id, user_id, content)
            VALUES ($1, $2, $3, $4)
            RETURNING {COMMENT_COLUMNS}
            "#,
        ))
        .bind(parent.as_str())
        .bind(parent_id)
        .bind(user_id)
        .bind(content)
        .fetch_one(&self.pool)
        .await?;

        Ok(comment)
    }

    /// Get a single comment under a parent
    pub async fn get(
        &self,
        parent: ParentKind,
        parent_id: Uuid,
        comment_id: Uuid,
    ) -> Result<Option<Comment>> {
        let comment = sqlx::query_as::<_, Comment>(&format!(
            r#"
            SELECT {COMMENT_COLUMNS} FROM comments
            WHERE id = $1 AND parent_kind = $2 AND parent_id = $3
            "#,
        ))
        .bind(comment_id)
        .bind(parent.as_str())
        .bind(parent_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(comment)
    }

    /// All comments of a parent, oldest first (conversation order)
    pub async fn list_for_parent(
        &self,
        parent: ParentKind,
        parent_id: Uuid,
    ) -> Result<Vec<Comment>> {
        let comments = sqlx::query_as::<_, Comment>(&format!(
            r#"
            SELECT {COMMENT_COLUMNS} FROM comments
            WHERE parent_kind = $1 AND parent_id = $2
            ORDER BY created_at ASC
            "#,
        ))
        .bind(parent.as_str())
        .bind(parent_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(comments)
    }

    /// Number of comments under a parent
    pub async fn count_for_parent(&self, parent: ParentKind, parent_id: Uuid) -> Result<i64> {
        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM comments WHERE parent_kind = $1 AND parent_id = $2",
        )
        .bind(parent.as_str())
        .bind(parent_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(count)
    }
}
