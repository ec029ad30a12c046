/// Wardrobe service - a user's virtual closet
use sqlx::PgPool;
use uuid::Uuid;

use crate::db::WardrobeRepository;
use crate::error::{AppError, Result};
use crate::models::{WardrobeItem, CLOTHING_CATEGORIES};

pub struct WardrobeService {
    repo: WardrobeRepository,
}

impl WardrobeService {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repo: WardrobeRepository::new(pool),
        }
    }

    fn check_category(category: &str) -> Result<()> {
        if CLOTHING_CATEGORIES.contains(&category) {
            Ok(())
        } else {
            Err(AppError::Validation(format!(
                "unknown category '{category}', expected one of: {}",
                CLOTHING_CATEGORIES.join(", ")
            )))
        }
    }

    pub async fn add_item(
        &self,
        user_id: Uuid,
        name: &str,
        category: &str,
        image_url: &str,
        color: Option<&str>,
        brand: Option<&str>,
        size: Option<&str>,
    ) -> Result<WardrobeItem> {
        Self::check_category(category)?;

        self.repo
            .create(user_id, name, category, image_url, color, brand, size)
            .await
    }

    pub async fn get_item(&self, item_id: Uuid) -> Result<Option<WardrobeItem>> {
        self.repo.get(item_id).await
    }

    pub async fn get_wardrobe(&self, user_id: Uuid) -> Result<Vec<WardrobeItem>> {
        self.repo.list_by_user(user_id).await
    }

    pub async fn update_item(
        &self,
        item_id: Uuid,
        name: Option<&str>,
        category: Option<&str>,
        image_url: Option<&str>,
        color: Option<&str>,
        brand: Option<&str>,
        size: Option<&str>,
    ) -> Result<Option<WardrobeItem>> {
        if let Some(category) = category {
            Self::check_category(category)?;
        }

        self.repo
            .update(item_id, name, category, image_url, color, brand, size)
            .await
    }

    pub async fn delete_item(&self, item_id: Uuid) -> Result<bool> {
        self.repo.delete(item_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_categories_accepted() {
        for category in CLOTHING_CATEGORIES {
            assert!(WardrobeService::check_category(category).is_ok());
        }
    }

    #[test]
    fn test_unknown_category_rejected() {
        let err = WardrobeService::check_category("hats").unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }
}
