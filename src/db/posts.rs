use sqlx::PgPool;
use uuid::Uuid;

use crate::error::Result;
use crate::models::Post;

const POST_COLUMNS: &str = "id, user_id, question, details, style, image_url, tags, likes, created_at";

/// Repository for the `posts` collection
#[derive(Clone)]
pub struct PostRepository {
    pool: PgPool,
}

impl PostRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a new post with its derived tag set
    pub async fn create(
        &self,
        user_id: Uuid,
        question: &str,
        details: &str,
        style: &str,
        image_url: &str,
        tags: &[String],
    ) -> Result<Post> {
        let post = sqlx::query_as::<_, Post>(&format!(
            r#"
            INSERT INTO posts (user_id, question, details, style, image_url, tags)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING {POST_COLUMNS}
            "#,
        ))
        .bind(user_id)
        .bind(question)
        .bind(details)
        .bind(style)
        .bind(image_url)
        .bind(tags)
        .fetch_one(&self.pool)
        .await?;

        Ok(post)
    }

    /// Get a post by ID
    pub async fn get(&self, post_id: Uuid) -> Result<Option<Post>> {
        let post = sqlx::query_as::<_, Post>(&format!(
            "SELECT {POST_COLUMNS} FROM posts WHERE id = $1",
        ))
        .bind(post_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(post)
    }

    /// All posts, newest first (discover page)
    pub async fn list_all(&self, limit: i64, offset: i64) -> Result<Vec<Post>> {
        let posts = sqlx::query_as::<_, Post>(&format!(
            r#"
            SELECT {POST_COLUMNS} FROM posts
            ORDER BY created_at DESC
            LIMIT $1 OFFSET $2
            "#,
        ))
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        Ok(posts)
    }

    /// Posts of a single user, newest first
    pub async fn list_by_user(&self, user_id: Uuid, limit: i64, offset: i64) -> Result<Vec<Post>> {
        let posts = sqlx::query_as::<_, Post>(&format!(
            r#"
            SELECT {POST_COLUMNS} FROM posts
            WHERE user_id = $1
            ORDER BY created_at DESC
            LIMIT $2 OFFSET $3
            "#,
        ))
        .bind(user_id)
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        Ok(posts)
    }

    /// Partial update. Tags change only when a new list is passed in;
    /// the other fields fall back to their current values.
    pub async fn update(
        &self,
        post_id: Uuid,
        question: Option<&str>,
        details: Option<&str>,
        style: Option<&str>,
        image_url: Option<&str>,
        tags: Option<&[String]>,
    ) -> Result<Option<Post>> {
        let post = sqlx::query_as::<_, Post>(&format!(
            r#"
            UPDATE posts
            SET question = COALESCE($2, question),
                details = COALESCE($3, details),
                style = COALESCE($4, style),
                image_url = COALESCE($5, image_url),
                tags = COALESCE($6, tags)
            WHERE id = $1
            RETURNING {POST_COLUMNS}
            "#,
        ))
        .bind(post_id)
        .bind(question)
        .bind(details)
        .bind(style)
        .bind(image_url)
        .bind(tags)
        .fetch_optional(&self.pool)
        .await?;

        Ok(post)
    }
}
