/// Post handlers - HTTP endpoints for post operations
use actix_web::{web, HttpResponse};
use serde::Deserialize;
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::error::{AppError, Result};
use crate::middleware::{permissions, UserId};
use crate::services::PostService;

const MAX_PAGE_SIZE: i64 = 100;

#[derive(Debug, Deserialize)]
pub struct PaginationParams {
    #[serde(default = "default_limit")]
    limit: i64,
    #[serde(default)]
    offset: i64,
}

impl PaginationParams {
    /// Page size clamped to `1..=100`; out-of-range client values never
    /// reach the database.
    pub fn limit(&self) -> i64 {
        self.limit.clamp(1, MAX_PAGE_SIZE)
    }

    pub fn offset(&self) -> i64 {
        self.offset.max(0)
    }
}

fn default_limit() -> i64 {
    50
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreatePostRequest {
    #[validate(length(min = 1, max = 200))]
    pub question: String,
    #[validate(length(max = 2000))]
    pub details: String,
    #[validate(length(min = 1, max = 60))]
    pub style: String,
    #[validate(url)]
    pub image_url: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdatePostRequest {
    #[validate(length(min = 1, max = 200))]
    pub question: Option<String>,
    #[validate(length(max = 2000))]
    pub details: Option<String>,
    #[validate(length(min = 1, max = 60))]
    pub style: Option<String>,
    #[validate(url)]
    pub image_url: Option<String>,
    /// When present, replaces the derived tag set (re-normalized first).
    /// Absent means tags stay untouched even if the text changed.
    pub tags: Option<Vec<String>>,
}

/// Create a new post
pub async fn create_post(
    pool: web::Data<PgPool>,
    user_id: UserId,
    req: web::Json<CreatePostRequest>,
) -> Result<HttpResponse> {
    req.validate()?;

    let service = PostService::new((**pool).clone());
    let post = service
        .create_post(
            user_id.0,
            &req.question,
            &req.details,
            &req.style,
            &req.image_url,
        )
        .await?;

    Ok(HttpResponse::Created().json(post))
}

/// Get a post by ID
pub async fn get_post(pool: web::Data<PgPool>, post_id: web::Path<Uuid>) -> Result<HttpResponse> {
    let service = PostService::new((**pool).clone());
    match service.get_post(*post_id).await? {
        Some(post) => Ok(HttpResponse::Ok().json(post)),
        None => Ok(HttpResponse::NotFound().finish()),
    }
}

/// All posts, newest first (discover page)
pub async fn get_all_posts(
    pool: web::Data<PgPool>,
    query: web::Query<PaginationParams>,
) -> Result<HttpResponse> {
    let service = PostService::new((**pool).clone());
    let posts = service.get_all_posts(query.limit(), query.offset()).await?;

    Ok(HttpResponse::Ok().json(posts))
}

/// Get posts for a user
pub async fn get_user_posts(
    pool: web::Data<PgPool>,
    user_id: web::Path<Uuid>,
    query: web::Query<PaginationParams>,
) -> Result<HttpResponse> {
    let service = PostService::new((**pool).clone());
    let posts = service
        .get_user_posts(*user_id, query.limit(), query.offset())
        .await?;

    Ok(HttpResponse::Ok().json(posts))
}

/// Update a post (owner only)
pub async fn update_post(
    pool: web::Data<PgPool>,
    post_id: web::Path<Uuid>,
    user_id: UserId,
    req: web::Json<UpdatePostRequest>,
) -> Result<HttpResponse> {
    req.validate()?;

    let service = PostService::new((**pool).clone());
    let post = service
        .get_post(*post_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("post {} not found", *post_id)))?;
    permissions::check_post_ownership(user_id.0, &post)?;

    let updated = service
        .update_post(
            *post_id,
            req.question.as_deref(),
            req.details.as_deref(),
            req.style.as_deref(),
            req.image_url.as_deref(),
            req.tags.as_deref(),
        )
        .await?;

    match updated {
        Some(post) => Ok(HttpResponse::Ok().json(post)),
        None => Ok(HttpResponse::NotFound().finish()),
    }
}

/// Delete a post and its comments (owner only).
///
/// Responds 204 whether the post was deleted now or already gone; the
/// cascade itself logs the already-gone case.
pub async fn delete_post(
    pool: web::Data<PgPool>,
    post_id: web::Path<Uuid>,
    user_id: UserId,
) -> Result<HttpResponse> {
    let service = PostService::new((**pool).clone());

    if let Some(post) = service.get_post(*post_id).await? {
        permissions::check_post_ownership(user_id.0, &post)?;
    }

    service.delete_post(*post_id).await?;

    Ok(HttpResponse::NoContent().finish())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(query: &str) -> PaginationParams {
        web::Query::<PaginationParams>::from_query(query)
            .unwrap()
            .into_inner()
    }

    #[test]
    fn test_pagination_defaults() {
        let p = params("");
        assert_eq!(p.limit(), 50);
        assert_eq!(p.offset(), 0);
    }

    #[test]
    fn test_negative_values_are_clamped() {
        let p = params("limit=-5&offset=-10");
        assert_eq!(p.limit(), 1);
        assert_eq!(p.offset(), 0);
    }

    #[test]
    fn test_oversized_limit_is_capped() {
        let p = params("limit=5000&offset=20");
        assert_eq!(p.limit(), 100);
        assert_eq!(p.offset(), 20);
    }
}
