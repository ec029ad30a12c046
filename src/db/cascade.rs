use sqlx::PgPool;
use uuid::Uuid;

use crate::error::Result;
use crate::models::ParentKind;

/// Rows removed by a cascade delete
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CascadeOutcome {
    /// Whether the parent row existed and was removed
    pub parent_deleted: bool,
    /// Comments removed alongside it
    pub comments_deleted: u64,
}

/// Whether a parent row currently exists
pub async fn parent_exists(pool: &PgPool, parent: ParentKind, parent_id: Uuid) -> Result<bool> {
    let exists: bool = sqlx::query_scalar(&format!(
        "SELECT EXISTS(SELECT 1 FROM {} WHERE id = $1)",
        parent.table()
    ))
    .bind(parent_id)
    .fetch_one(pool)
    .await?;

    Ok(exists)
}

/// Delete a parent row together with all of its comments in one
/// transaction. Either all rows go or none do.
///
/// Existence of the parent is checked by the service layer beforehand; if
/// the parent vanished between that check and this transaction, the
/// outcome simply reports `parent_deleted: false` (the comment delete is
/// then a no-op as well, since comments are only written under existing
/// parents).
pub async fn delete_parent_with_comments(
    pool: &PgPool,
    parent: ParentKind,
    parent_id: Uuid,
) -> Result<CascadeOutcome> {
    let mut tx = pool.begin().await?;

    let comments_deleted =
        sqlx::query("DELETE FROM comments WHERE parent_kind = $1 AND parent_id = $2")
            .bind(parent.as_str())
            .bind(parent_id)
            .execute(&mut *tx)
            .await?
            .rows_affected();

    let parent_deleted = sqlx::query(&format!("DELETE FROM {} WHERE id = $1", parent.table()))
        .bind(parent_id)
        .execute(&mut *tx)
        .await?
        .rows_affected()
        > 0;

    tx.commit().await?;

    Ok(CascadeOutcome {
        parent_deleted,
        comments_deleted,
    })
}
