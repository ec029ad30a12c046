use sqlx::PgPool;
use uuid::Uuid;

use crate::error::Result;
use crate::models::User;

const USER_COLUMNS: &str = "id, username, email, photo_url, bio, created_at";

/// Repository for user profiles
#[derive(Clone)]
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create the profile row on first login, or refresh it on subsequent
    /// ones. The id comes from the identity provider's token.
    pub async fn upsert(
        &self,
        id: Uuid,
        username: &str,
        email: &str,
        photo_url: Option<&str>,
        bio: Option<&str>,
    ) -> Result<User> {
        let user = sqlx::query_as::<_, User>(&format!(
            r#"
            INSERT INTO users (id, username, email, photo_url, bio)
            VALUES ($1, $2, $3, $4, $5)
            ON CONFLICT (id) DO UPDATE
            SET username = EXCLUDED.username,
                email = EXCLUDED.email,
                photo_url = COALESCE(EXCLUDED.photo_url, users.photo_url),
                bio = COALESCE(EXCLUDED.bio, users.bio)
            RETURNING {USER_COLUMNS}
            "#,
        ))
        .bind(id)
        .bind(username)
        .bind(email)
        .bind(photo_url)
        .bind(bio)
        .fetch_one(&self.pool)
        .await?;

        Ok(user)
    }

    pub async fn get(&self, id: Uuid) -> Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE id = $1",
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }
}
