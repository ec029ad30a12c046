/// Like handlers - one toggle endpoint per likeable resource
///
/// Every endpoint answers `{"liked": true|false|null}`: the new state when
/// the target exists, `null` when it was already gone (benign no-op). The
/// client uses the reply to confirm or roll back its optimistic flip.
use actix_web::{web, HttpResponse};
use sqlx::PgPool;
use uuid::Uuid;

use crate::db::LikeTarget;
use crate::error::Result;
use crate::middleware::UserId;
use crate::models::ParentKind;
use crate::services::LikeService;

async fn toggle(pool: web::Data<PgPool>, target: LikeTarget, user_id: UserId) -> Result<HttpResponse> {
    let service = LikeService::new((**pool).clone());
    let liked = service.toggle(target, user_id.0).await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({ "liked": liked })))
}

/// Like or unlike a post
pub async fn toggle_post_like(
    pool: web::Data<PgPool>,
    post_id: web::Path<Uuid>,
    user_id: UserId,
) -> Result<HttpResponse> {
    toggle(pool, LikeTarget::Post(*post_id), user_id).await
}

/// Like or unlike a look
pub async fn toggle_look_like(
    pool: web::Data<PgPool>,
    look_id: web::Path<Uuid>,
    user_id: UserId,
) -> Result<HttpResponse> {
    toggle(pool, LikeTarget::Look(*look_id), user_id).await
}

/// Like or unlike a comment under a post
pub async fn toggle_post_comment_like(
    pool: web::Data<PgPool>,
    path: web::Path<(Uuid, Uuid)>,
    user_id: UserId,
) -> Result<HttpResponse> {
    let (post_id, comment_id) = *path;
    let target = LikeTarget::Comment {
        parent: ParentKind::Post,
        parent_id: post_id,
        comment_id,
    };
    toggle(pool, target, user_id).await
}

/// Like or unlike a comment under a look
pub async fn toggle_look_comment_like(
    pool: web::Data<PgPool>,
    path: web::Path<(Uuid, Uuid)>,
    user_id: UserId,
) -> Result<HttpResponse> {
    let (look_id, comment_id) = *path;
    let target = LikeTarget::Comment {
        parent: ParentKind::Look,
        parent_id: look_id,
        comment_id,
    };
    toggle(pool, target, user_id).await
}
