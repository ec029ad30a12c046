use sqlx::PgPool;
use uuid::Uuid;

use crate::error::Result;
use crate::models::WardrobeItem;

const ITEM_COLUMNS: &str =
    "id, user_id, name, category, image_url, color, brand, size, created_at";

/// Repository for wardrobe items
#[derive(Clone)]
pub struct WardrobeRepository {
    pool: PgPool,
}

impl WardrobeRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        user_id: Uuid,
        name: &str,
        category: &str,
        image_url: &str,
        color: Option<&str>,
        brand: Option<&str>,
        size: Option<&str>,
    ) -> Result<WardrobeItem> {
        let item = sqlx::query_as::<_, WardrobeItem>(&format!(
            r#"
            INSERT INTO wardrobe_items (user_id, name, category, image_url, color, brand, size)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING {ITEM_COLUMNS}
            "#,
        ))
        .bind(user_id)
        .bind(name)
        .bind(category)
        .bind(image_url)
        .bind(color)
        .bind(brand)
        .bind(size)
        .fetch_one(&self.pool)
        .await?;

        Ok(item)
    }

    pub async fn get(&self, item_id: Uuid) -> Result<Option<WardrobeItem>> {
        let item = sqlx::query_as::<_, WardrobeItem>(&format!(
            "SELECT {ITEM_COLUMNS} FROM wardrobe_items WHERE id = $1",
        ))
        .bind(item_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(item)
    }

    /// A user's whole wardrobe, oldest first (stable closet order)
    pub async fn list_by_user(&self, user_id: Uuid) -> Result<Vec<WardrobeItem>> {
        let items = sqlx::query_as::<_, WardrobeItem>(&format!(
            r#"
            SELECT {ITEM_COLUMNS} FROM wardrobe_items
            WHERE user_id = $1
            ORDER BY created_at ASC
            "#,
        ))
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(items)
    }

    pub async fn update(
        &self,
        item_id: Uuid,
        name: Option<&str>,
        category: Option<&str>,
        image_url: Option<&str>,
        color: Option<&str>,
        brand: Option<&str>,
        size: Option<&str>,
    ) -> Result<Option<WardrobeItem>> {
        let item = sqlx::query_as::<_, WardrobeItem>(&format!(
            r#"
            UPDATE wardrobe_items
            SET name = COALESCE($2, name),
                category = COALESCE($3, category),
                image_url = COALESCE($4, image_url),
                color = COALESCE($5, color),
                brand = COALESCE($6, brand),
                size = COALESCE($7, size)
            WHERE id = $1
            RETURNING {ITEM_COLUMNS}
            "#,
        ))
        .bind(item_id)
        .bind(name)
        .bind(category)
        .bind(image_url)
        .bind(color)
        .bind(brand)
        .bind(size)
        .fetch_optional(&self.pool)
        .await?;

        Ok(item)
    }

    pub async fn delete(&self, item_id: Uuid) -> Result<bool> {
        let result = sqlx::query("DELETE FROM wardrobe_items WHERE id = $1")
            .bind(item_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
