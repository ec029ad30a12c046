/// Comment handlers - shared over both parent kinds
use actix_web::{web, HttpResponse};
use serde::Deserialize;
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::error::Result;
use crate::middleware::UserId;
use crate::models::ParentKind;
use crate::services::CommentService;

#[derive(Debug, Deserialize, Validate)]
pub struct CreateCommentRequest {
    #[validate(length(min = 1, max = 1000))]
    pub content: String,
}

async fn create(
    pool: web::Data<PgPool>,
    parent: ParentKind,
    parent_id: Uuid,
    user_id: UserId,
    req: web::Json<CreateCommentRequest>,
) -> Result<HttpResponse> {
    req.validate()?;

    let service = CommentService::new((**pool).clone());
    let comment = service
        .add_comment(parent, parent_id, user_id.0, &req.content)
        .await?;

    Ok(HttpResponse::Created().json(comment))
}

async fn list(
    pool: web::Data<PgPool>,
    parent: ParentKind,
    parent_id: Uuid,
) -> Result<HttpResponse> {
    let service = CommentService::new((**pool).clone());
    let comments = service.get_comments(parent, parent_id).await?;

    Ok(HttpResponse::Ok().json(comments))
}

/// Comment on a post
pub async fn create_post_comment(
    pool: web::Data<PgPool>,
    post_id: web::Path<Uuid>,
    user_id: UserId,
    req: web::Json<CreateCommentRequest>,
) -> Result<HttpResponse> {
    create(pool, ParentKind::Post, *post_id, user_id, req).await
}

/// Comments of a post, oldest first
pub async fn get_post_comments(
    pool: web::Data<PgPool>,
    post_id: web::Path<Uuid>,
) -> Result<HttpResponse> {
    list(pool, ParentKind::Post, *post_id).await
}

/// Comment on a look
pub async fn create_look_comment(
    pool: web::Data<PgPool>,
    look_id: web::Path<Uuid>,
    user_id: UserId,
    req: web::Json<CreateCommentRequest>,
) -> Result<HttpResponse> {
    create(pool, ParentKind::Look, *look_id, user_id, req).await
}

/// Comments of a look, oldest first
pub async fn get_look_comments(
    pool: web::Data<PgPool>,
    look_id: web::Path<Uuid>,
) -> Result<HttpResponse> {
    list(pool, ParentKind::Look, *look_id).await
}
