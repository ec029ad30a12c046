/// Comment service
use sqlx::PgPool;
use uuid::Uuid;

use crate::db::{self, CommentRepository};
use crate::error::{AppError, Result};
use crate::models::{Comment, ParentKind};

pub struct CommentService {
    pool: PgPool,
    repo: CommentRepository,
}

impl CommentService {
    pub fn new(pool: PgPool) -> Self {
        let repo = CommentRepository::new(pool.clone());
        Self { pool, repo }
    }

    /// Add a comment under a post or look.
    ///
    /// The parent must exist: a comment may never be born orphaned, since
    /// the only way comments die is their parent's cascade delete.
    pub async fn add_comment(
        &self,
        parent: ParentKind,
        parent_id: Uuid,
        user_id: Uuid,
        content: &str,
    ) -> Result<Comment> {
        if !db::cascade::parent_exists(&self.pool, parent, parent_id).await? {
            return Err(AppError::NotFound(format!(
                "{parent} {parent_id} does not exist"
            )));
        }

        let comment = self.repo.create(parent, parent_id, user_id, content).await?;

        tracing::info!(comment_id = %comment.id, %parent_id, kind = %parent, "comment added");

        Ok(comment)
    }

    /// All comments of a parent in conversation order
    pub async fn get_comments(&self, parent: ParentKind, parent_id: Uuid) -> Result<Vec<Comment>> {
        self.repo.list_for_parent(parent, parent_id).await
    }
}
