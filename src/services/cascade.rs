//! Cascade delete of posts and looks
//!
//! One parameterized procedure for both parent kinds. A parent and its
//! comments are removed together in a single transaction; a comment can
//! never survive its parent.

use sqlx::PgPool;
use uuid::Uuid;

use crate::db;
use crate::error::{AppError, Result};
use crate::models::ParentKind;

/// Delete a parent and every comment under it.
///
/// Returns `true` when the parent was removed, `false` when it was
/// already gone. Deleting an already-deleted parent is not an error; it
/// is logged and reported as a no-op. A nil parent id is rejected before
/// any query is issued.
pub async fn cascade_delete(pool: &PgPool, parent: ParentKind, parent_id: Uuid) -> Result<bool> {
    if parent_id.is_nil() {
        return Err(AppError::Validation(format!(
            "{parent} id is required for deletion"
        )));
    }

    if !db::cascade::parent_exists(pool, parent, parent_id).await? {
        tracing::warn!(%parent_id, kind = %parent, "parent already deleted, nothing to do");
        return Ok(false);
    }

    let outcome = db::delete_parent_with_comments(pool, parent, parent_id).await?;

    tracing::info!(
        %parent_id,
        kind = %parent,
        comments_deleted = outcome.comments_deleted,
        "cascade delete committed"
    );

    Ok(outcome.parent_deleted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::postgres::PgPoolOptions;

    fn lazy_pool() -> PgPool {
        // Never connects; only validates that the failure below happens
        // before any I/O.
        PgPoolOptions::new()
            .connect_lazy("postgres://localhost/hivelooks_unreachable")
            .unwrap()
    }

    #[tokio::test]
    async fn nil_id_fails_before_any_query() {
        let pool = lazy_pool();
        let err = cascade_delete(&pool, ParentKind::Post, Uuid::nil())
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn nil_look_id_fails_too() {
        let pool = lazy_pool();
        let err = cascade_delete(&pool, ParentKind::Look, Uuid::nil())
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }
}
