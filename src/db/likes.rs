use sqlx::PgPool;
use uuid::Uuid;

use crate::error::Result;
use crate::models::ParentKind;

/// Addressing for a like toggle: a top-level post or look, or a comment
/// under either.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LikeTarget {
    Post(Uuid),
    Look(Uuid),
    Comment {
        parent: ParentKind,
        parent_id: Uuid,
        comment_id: Uuid,
    },
}

impl LikeTarget {
    /// The id whose row carries the liker-set
    pub fn id(&self) -> Uuid {
        match self {
            LikeTarget::Post(id) | LikeTarget::Look(id) => *id,
            LikeTarget::Comment { comment_id, .. } => *comment_id,
        }
    }
}

impl std::fmt::Display for LikeTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LikeTarget::Post(id) => write!(f, "post {id}"),
            LikeTarget::Look(id) => write!(f, "look {id}"),
            LikeTarget::Comment {
                parent,
                parent_id,
                comment_id,
            } => write!(f, "comment {comment_id} under {parent} {parent_id}"),
        }
    }
}

/// Repository for liker-sets.
///
/// The flip is a single UPDATE: membership test, removal, and addition all
/// happen inside one statement, so two rapid toggles by the same user
/// serialize at the row and each call flips exactly once. The liker-set
/// can never hold the same user twice.
#[derive(Clone)]
pub struct LikeRepository {
    pool: PgPool,
}

impl LikeRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Flip `user_id`'s membership in the target's liker-set.
    ///
    /// Returns `Some(is_liked_now)` when the target row exists, `None`
    /// when it does not (the caller decides whether that is benign).
    pub async fn toggle(&self, target: LikeTarget, user_id: Uuid) -> Result<Option<bool>> {
        let toggled = match target {
            LikeTarget::Post(id) => self.toggle_top_level("posts", id, user_id).await?,
            LikeTarget::Look(id) => self.toggle_top_level("looks", id, user_id).await?,
            LikeTarget::Comment {
                parent,
                parent_id,
                comment_id,
            } => {
                sqlx::query_scalar::<_, bool>(
                    r#"
                    UPDATE comments
                    SET likes = CASE
                        WHEN $2 = ANY(likes) THEN array_remove(likes, $2)
                        ELSE array_append(likes, $2)
                    END
                    WHERE id = $1 AND parent_kind = $3 AND parent_id = $4
                    RETURNING $2 = ANY(likes)
                    "#,
                )
                .bind(comment_id)
                .bind(user_id)
                .bind(parent.as_str())
                .bind(parent_id)
                .fetch_optional(&self.pool)
                .await?
            }
        };

        Ok(toggled)
    }

    async fn toggle_top_level(
        &self,
        table: &'static str,
        id: Uuid,
        user_id: Uuid,
    ) -> Result<Option<bool>> {
        let toggled = sqlx::query_scalar::<_, bool>(&format!(
            r#"
            UPDATE {table}
            SET likes = CASE
                WHEN $2 = ANY(likes) THEN array_remove(likes, $2)
                ELSE array_append(likes, $2)
            END
            WHERE id = $1
            RETURNING $2 = ANY(likes)
            "#,
        ))
        .bind(id)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(toggled)
    }
}
