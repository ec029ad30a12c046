/// User profile handlers
use actix_web::{web, HttpResponse};
use serde::Deserialize;
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::error::Result;
use crate::middleware::{TokenIdentity, UserId};
use crate::services::UserService;

#[derive(Debug, Deserialize, Validate)]
pub struct UpsertProfileRequest {
    /// Defaults to the username carried by the token
    pub username: Option<String>,
    #[validate(url)]
    pub photo_url: Option<String>,
    #[validate(length(max = 500))]
    pub bio: Option<String>,
}

/// Create or update the caller's own profile. Id and email always come
/// from the validated token, never from the body.
pub async fn upsert_my_profile(
    pool: web::Data<PgPool>,
    user_id: UserId,
    identity: TokenIdentity,
    req: web::Json<UpsertProfileRequest>,
) -> Result<HttpResponse> {
    req.validate()?;

    let username = req.username.as_deref().unwrap_or(&identity.username);

    let service = UserService::new((**pool).clone());
    let user = service
        .upsert_profile(
            user_id.0,
            username,
            &identity.email,
            req.photo_url.as_deref(),
            req.bio.as_deref(),
        )
        .await?;

    Ok(HttpResponse::Ok().json(user))
}

/// Get the caller's own profile
pub async fn get_my_profile(pool: web::Data<PgPool>, user_id: UserId) -> Result<HttpResponse> {
    let service = UserService::new((**pool).clone());
    match service.get_profile(user_id.0).await? {
        Some(user) => Ok(HttpResponse::Ok().json(user)),
        None => Ok(HttpResponse::NotFound().finish()),
    }
}

/// Get any user's public profile
pub async fn get_user_profile(
    pool: web::Data<PgPool>,
    user_id: web::Path<Uuid>,
) -> Result<HttpResponse> {
    let service = UserService::new((**pool).clone());
    match service.get_profile(*user_id).await? {
        Some(user) => Ok(HttpResponse::Ok().json(user)),
        None => Ok(HttpResponse::NotFound().finish()),
    }
}
