use sqlx::PgPool;
use uuid::Uuid;

use crate::error::Result;
use crate::models::Look;

const LOOK_COLUMNS: &str =
    "id, user_id, title, description, style, image_url, tags, likes, created_at";

/// Repository for the `looks` collection
#[derive(Clone)]
pub struct LookRepository {
    pool: PgPool,
}

impl LookRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        user_id: Uuid,
        title: &str,
        description: &str,
        style: Option<&str>,
        image_url: &str,
        tags: &[String],
    ) -> Result<Look> {
        let look = sqlx::query_as::<_, Look>(&format!(
            r#"
            INSERT INTO looks (user_id, title, description, style, image_url, tags)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING {LOOK_COLUMNS}
            "#,
        ))
        .bind(user_id)
        .bind(title)
        .bind(description)
        .bind(style)
        .bind(image_url)
        .bind(tags)
        .fetch_one(&self.pool)
        .await?;

        Ok(look)
    }

    pub async fn get(&self, look_id: Uuid) -> Result<Option<Look>> {
        let look = sqlx::query_as::<_, Look>(&format!(
            "SELECT {LOOK_COLUMNS} FROM looks WHERE id = $1",
        ))
        .bind(look_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(look)
    }

    pub async fn list_all(&self, limit: i64, offset: i64) -> Result<Vec<Look>> {
        let looks = sqlx::query_as::<_, Look>(&format!(
            r#"
            SELECT {LOOK_COLUMNS} FROM looks
            ORDER BY created_at DESC
            LIMIT $1 OFFSET $2
            "#,
        ))
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        Ok(looks)
    }

    pub async fn list_by_user(&self, user_id: Uuid, limit: i64, offset: i64) -> Result<Vec<Look>> {
        let looks = sqlx::query_as::<_, Look>(&format!(
            r#"
            SELECT {LOOK_COLUMNS} FROM looks
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

        Ok(looks)
    }

    pub async fn update(
        &self,
        look_id: Uuid,
        title: Option<&str>,
        description: Option<&str>,
        style: Option<&str>,
        image_url: Option<&str>,
        tags: Option<&[String]>,
    ) -> Result<Option<Look>> {
        let look = sqlx::query_as::<_, Look>(&format!(
            r#"
            UPDATE looks
            SET title = COALESCE($2, title),
                description = COALESCE($3, description),
                style = COALESCE($4, style),
                image_url = COALESCE($5, image_url),
                tags = COALESCE($6, tags)
            WHERE id = $1
            RETURNING {LOOK_COLUMNS}
            "#,
        ))
        .bind(look_id)
        .bind(title)
        .bind(description)
        .bind(style)
        .bind(image_url)
        .bind(tags)
        .fetch_optional(&self.pool)
        .await?;

        Ok(look)
    }
}
