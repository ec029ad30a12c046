/// Wardrobe handlers - the caller's virtual closet
use actix_web::{web, HttpResponse};
use serde::Deserialize;
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::error::{AppError, Result};
use crate::middleware::{permissions, UserId};
use crate::services::WardrobeService;

#[derive(Debug, Deserialize, Validate)]
pub struct AddItemRequest {
    #[validate(length(min = 1, max = 120))]
    pub name: String,
    pub category: String,
    #[validate(url)]
    pub image_url: String,
    pub color: Option<String>,
    pub brand: Option<String>,
    pub size: Option<String>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateItemRequest {
    #[validate(length(min = 1, max = 120))]
    pub name: Option<String>,
    pub category: Option<String>,
    #[validate(url)]
    pub image_url: Option<String>,
    pub color: Option<String>,
    pub brand: Option<String>,
    pub size: Option<String>,
}

/// Add a clothing item to the caller's wardrobe
pub async fn add_item(
    pool: web::Data<PgPool>,
    user_id: UserId,
    req: web::Json<AddItemRequest>,
) -> Result<HttpResponse> {
    req.validate()?;

    let service = WardrobeService::new((**pool).clone());
    let item = service
        .add_item(
            user_id.0,
            &req.name,
            &req.category,
            &req.image_url,
            req.color.as_deref(),
            req.brand.as_deref(),
            req.size.as_deref(),
        )
        .await?;

    Ok(HttpResponse::Created().json(item))
}

/// List the caller's wardrobe
pub async fn get_wardrobe(pool: web::Data<PgPool>, user_id: UserId) -> Result<HttpResponse> {
    let service = WardrobeService::new((**pool).clone());
    let items = service.get_wardrobe(user_id.0).await?;

    Ok(HttpResponse::Ok().json(items))
}

/// Update a wardrobe item (owner only)
pub async fn update_item(
    pool: web::Data<PgPool>,
    item_id: web::Path<Uuid>,
    user_id: UserId,
    req: web::Json<UpdateItemRequest>,
) -> Result<HttpResponse> {
    req.validate()?;

    let service = WardrobeService::new((**pool).clone());
    let item = service
        .get_item(*item_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("wardrobe item {} not found", *item_id)))?;
    permissions::check_wardrobe_ownership(user_id.0, &item)?;

    let updated = service
        .update_item(
            *item_id,
            req.name.as_deref(),
            req.category.as_deref(),
            req.image_url.as_deref(),
            req.color.as_deref(),
            req.brand.as_deref(),
            req.size.as_deref(),
        )
        .await?;

    match updated {
        Some(item) => Ok(HttpResponse::Ok().json(item)),
        None => Ok(HttpResponse::NotFound().finish()),
    }
}

/// Remove a wardrobe item (owner only)
pub async fn delete_item(
    pool: web::Data<PgPool>,
    item_id: web::Path<Uuid>,
    user_id: UserId,
) -> Result<HttpResponse> {
    let service = WardrobeService::new((**pool).clone());
    let item = service
        .get_item(*item_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("wardrobe item {} not found", *item_id)))?;
    permissions::check_wardrobe_ownership(user_id.0, &item)?;

    service.delete_item(*item_id).await?;

    Ok(HttpResponse::NoContent().finish())
}
