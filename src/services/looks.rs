/// Look service - mirrors the post service over the `looks` collection
use sqlx::PgPool;
use uuid::Uuid;

use crate::db::LookRepository;
use crate::error::Result;
use crate::models::{Look, ParentKind};
use crate::services::{cascade, tags};

pub struct LookService {
    pool: PgPool,
    repo: LookRepository,
}

impl LookService {
    pub fn new(pool: PgPool) -> Self {
        let repo = LookRepository::new(pool.clone());
        Self { pool, repo }
    }

    /// Create a new look. The tag seed is the style when one is given,
    /// otherwise the title.
    pub async fn create_look(
        &self,
        user_id: Uuid,
        title: &str,
        description: &str,
        style: Option<&str>,
        image_url: &str,
    ) -> Result<Look> {
        let seed = style.unwrap_or(title);
        let tag_set = tags::extract_tags(seed, description);

        let look = self
            .repo
            .create(user_id, title, description, style, image_url, &tag_set)
            .await?;

        tracing::info!(look_id = %look.id, %user_id, "look created");

        Ok(look)
    }

    pub async fn get_look(&self, look_id: Uuid) -> Result<Option<Look>> {
        self.repo.get(look_id).await
    }

    pub async fn get_all_looks(&self, limit: i64, offset: i64) -> Result<Vec<Look>> {
        self.repo.list_all(limit, offset).await
    }

    pub async fn get_user_looks(&self, user_id: Uuid, limit: i64, offset: i64) -> Result<Vec<Look>> {
        self.repo.list_by_user(user_id, limit, offset).await
    }

    pub async fn update_look(
        &self,
        look_id: Uuid,
        title: Option<&str>,
        description: Option<&str>,
        style: Option<&str>,
        image_url: Option<&str>,
        new_tags: Option<&[String]>,
    ) -> Result<Option<Look>> {
        let normalized = new_tags.map(tags::normalize_tags);

        self.repo
            .update(
                look_id,
                title,
                description,
                style,
                image_url,
                normalized.as_deref(),
            )
            .await
    }

    /// Delete a look and all of its comments atomically
    pub async fn delete_look(&self, look_id: Uuid) -> Result<bool> {
        cascade::cascade_delete(&self.pool, ParentKind::Look, look_id).await
    }
}
