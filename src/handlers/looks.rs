/// Look handlers - HTTP endpoints for look operations
use actix_web::{web, HttpResponse};
use serde::Deserialize;
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::error::{AppError, Result};
use crate::handlers::posts::PaginationParams;
use crate::middleware::{permissions, UserId};
use crate::services::LookService;

#[derive(Debug, Deserialize, Validate)]
pub struct CreateLookRequest {
    #[validate(length(min = 1, max = 120))]
    pub title: String,
    #[validate(length(max = 2000))]
    pub description: String,
    #[validate(length(min = 1, max = 60))]
    pub style: Option<String>,
    #[validate(url)]
    pub image_url: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateLookRequest {
    #[validate(length(min = 1, max = 120))]
    pub title: Option<String>,
    #[validate(length(max = 2000))]
    pub description: Option<String>,
    #[validate(length(min = 1, max = 60))]
    pub style: Option<String>,
    #[validate(url)]
    pub image_url: Option<String>,
    pub tags: Option<Vec<String>>,
}

/// Create a new look
pub async fn create_look(
    pool: web::Data<PgPool>,
    user_id: UserId,
    req: web::Json<CreateLookRequest>,
) -> Result<HttpResponse> {
    req.validate()?;

    let service = LookService::new((**pool).clone());
    let look = service
        .create_look(
            user_id.0,
            &req.title,
            &req.description,
            req.style.as_deref(),
            &req.image_url,
        )
        .await?;

    Ok(HttpResponse::Created().json(look))
}

/// Get a look by ID
pub async fn get_look(pool: web::Data<PgPool>, look_id: web::Path<Uuid>) -> Result<HttpResponse> {
    let service = LookService::new((**pool).clone());
    match service.get_look(*look_id).await? {
        Some(look) => Ok(HttpResponse::Ok().json(look)),
        None => Ok(HttpResponse::NotFound().finish()),
    }
}

/// All looks, newest first (discover page)
pub async fn get_all_looks(
    pool: web::Data<PgPool>,
    query: web::Query<PaginationParams>,
) -> Result<HttpResponse> {
    let service = LookService::new((**pool).clone());
    let looks = service.get_all_looks(query.limit(), query.offset()).await?;

    Ok(HttpResponse::Ok().json(looks))
}

/// Get looks for a user
pub async fn get_user_looks(
    pool: web::Data<PgPool>,
    user_id: web::Path<Uuid>,
    query: web::Query<PaginationParams>,
) -> Result<HttpResponse> {
    let service = LookService::new((**pool).clone());
    let looks = service
        .get_user_looks(*user_id, query.limit(), query.offset())
        .await?;

    Ok(HttpResponse::Ok().json(looks))
}

/// Update a look (owner only)
pub async fn update_look(
    pool: web::Data<PgPool>,
    look_id: web::Path<Uuid>,
    user_id: UserId,
    req: web::Json<UpdateLookRequest>,
) -> Result<HttpResponse> {
    req.validate()?;

    let service = LookService::new((**pool).clone());
    let look = service
        .get_look(*look_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("look {} not found", *look_id)))?;
    permissions::check_look_ownership(user_id.0, &look)?;

    let updated = service
        .update_look(
            *look_id,
            req.title.as_deref(),
            req.description.as_deref(),
            req.style.as_deref(),
            req.image_url.as_deref(),
            req.tags.as_deref(),
        )
        .await?;

    match updated {
        Some(look) => Ok(HttpResponse::Ok().json(look)),
        None => Ok(HttpResponse::NotFound().finish()),
    }
}

/// Delete a look and its comments (owner only)
pub async fn delete_look(
    pool: web::Data<PgPool>,
    look_id: web::Path<Uuid>,
    user_id: UserId,
) -> Result<HttpResponse> {
    let service = LookService::new((**pool).clone());

    if let Some(look) = service.get_look(*look_id).await? {
        permissions::check_look_ownership(user_id.0, &look)?;
    }

    service.delete_look(*look_id).await?;

    Ok(HttpResponse::NoContent().finish())
}
