/// Post service - creation with tag derivation, retrieval, cascade delete
use sqlx::PgPool;
use uuid::Uuid;

use crate::db::PostRepository;
use crate::error::Result;
use crate::models::{ParentKind, Post};
use crate::services::{cascade, tags};

pub struct PostService {
    pool: PgPool,
    repo: PostRepository,
}

impl PostService {
    pub fn new(pool: PgPool) -> Self {
        let repo = PostRepository::new(pool.clone());
        Self { pool, repo }
    }

    /// Create a new post. The tag set is derived once, here, from the
    /// style and details fields.
    pub async fn create_post(
        &self,
        user_id: Uuid,
        question: &str,
        details: &str,
        style: &str,
        image_url: &str,
    ) -> Result<Post> {
        let tag_set = tags::extract_tags(style, details);

        let post = self
            .repo
            .create(user_id, question, details, style, image_url, &tag_set)
            .await?;

        tracing::info!(post_id = %post.id, %user_id, tags = post.tags.len(), "post created");

        Ok(post)
    }

    pub async fn get_post(&self, post_id: Uuid) -> Result<Option<Post>> {
        self.repo.get(post_id).await
    }

    /// Discover feed: all posts, newest first
    pub async fn get_all_posts(&self, limit: i64, offset: i64) -> Result<Vec<Post>> {
        self.repo.list_all(limit, offset).await
    }

    pub async fn get_user_posts(&self, user_id: Uuid, limit: i64, offset: i64) -> Result<Vec<Post>> {
        self.repo.list_by_user(user_id, limit, offset).await
    }

    /// Partial update. Tags are NOT recomputed from the edited text; they
    /// change only when the request explicitly carries a new tag list,
    /// which is re-normalized before storage.
    pub async fn update_post(
        &self,
        post_id: Uuid,
        question: Option<&str>,
        details: Option<&str>,
        style: Option<&str>,
        image_url: Option<&str>,
        new_tags: Option<&[String]>,
    ) -> Result<Option<Post>> {
        let normalized = new_tags.map(tags::normalize_tags);

        self.repo
            .update(
                post_id,
                question,
                details,
                style,
                image_url,
                normalized.as_deref(),
            )
            .await
    }

    /// Delete a post and all of its comments atomically.
    ///
    /// Returns `false` when the post was already gone (benign).
    pub async fn delete_post(&self, post_id: Uuid) -> Result<bool> {
        cascade::cascade_delete(&self.pool, ParentKind::Post, post_id).await
    }
}
