//! Like/unlike toggling
//!
//! One procedure for every liker-set in the system: posts, looks, and
//! comments under either. The caller's identity is always an explicit
//! parameter; there is no ambient current-user context on the server.

use sqlx::PgPool;
use uuid::Uuid;

use crate::db::{LikeRepository, LikeTarget};
use crate::error::Result;

pub struct LikeService {
    repo: LikeRepository,
}

impl LikeService {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repo: LikeRepository::new(pool),
        }
    }

    /// Flip `user_id`'s membership in the target's liker-set.
    ///
    /// The flip is a single atomic statement, so rapid double-clicks by
    /// the same user each flip exactly once instead of racing. A missing
    /// target is benign: it is logged and the call returns `None` without
    /// mutation or error. `Some(is_liked_now)` reports the new state so
    /// handlers can confirm or roll back an optimistic client-side flip.
    pub async fn toggle(&self, target: LikeTarget, user_id: Uuid) -> Result<Option<bool>> {
        match self.repo.toggle(target, user_id).await? {
            Some(is_liked) => {
                tracing::debug!(%user_id, target = %target, is_liked, "like toggled");
                Ok(Some(is_liked))
            }
            None => {
                tracing::warn!(%user_id, target = %target, "like target not found, skipping");
                Ok(None)
            }
        }
    }
}
