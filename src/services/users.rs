/// User profile service
use regex::Regex;
use sqlx::PgPool;
use std::sync::LazyLock;
use uuid::Uuid;

use crate::db::UserRepository;
use crate::error::{AppError, Result};
use crate::models::User;

/// Usernames: 3-30 chars, alphanumeric plus underscore
static USERNAME_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9_]{3,30}$").expect("Invalid username regex"));

pub struct UserService {
    repo: UserRepository,
}

impl UserService {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repo: UserRepository::new(pool),
        }
    }

    /// Create or refresh the caller's profile row. Identity (id, email)
    /// comes from the validated token, never from the request body.
    pub async fn upsert_profile(
        &self,
        user_id: Uuid,
        username: &str,
        email: &str,
        photo_url: Option<&str>,
        bio: Option<&str>,
    ) -> Result<User> {
        if !USERNAME_REGEX.is_match(username) {
            return Err(AppError::Validation(
                "username must be 3-30 characters: letters, digits, underscore".to_string(),
            ));
        }

        self.repo
            .upsert(user_id, username, email, photo_url, bio)
            .await
    }

    pub async fn get_profile(&self, user_id: Uuid) -> Result<Option<User>> {
        self.repo.get(user_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_username_regex_accepts_valid() {
        for name in ["bee_keeper", "Queen99", "abc"] {
            assert!(USERNAME_REGEX.is_match(name), "{name} should be valid");
        }
    }

    #[test]
    fn test_username_regex_rejects_invalid() {
        for name in ["ab", "has space", "way#hash", &"x".repeat(31)] {
            assert!(!USERNAME_REGEX.is_match(name), "{name} should be invalid");
        }
    }
}
