/// Authorization module for hivelooks-service
///
/// Ownership-based permission checks: users can only modify content they
/// own. Liking and commenting carry no ownership check; any authenticated
/// user may do both.
use uuid::Uuid;

use crate::error::{AppError, Result};
use crate::models::{Look, Post, WardrobeItem};

/// Check if a user owns a post
pub fn check_post_ownership(user_id: Uuid, post: &Post) -> Result<()> {
    if post.user_id == user_id {
        Ok(())
    } else {
        Err(AppError::Forbidden(
            "You don't have permission to modify this post".to_string(),
        ))
    }
}

/// Check if a user owns a look
pub fn check_look_ownership(user_id: Uuid, look: &Look) -> Result<()> {
    if look.user_id == user_id {
        Ok(())
    } else {
        Err(AppError::Forbidden(
            "You don't have permission to modify this look".to_string(),
        ))
    }
}

/// Check if a user owns a wardrobe item
pub fn check_wardrobe_ownership(user_id: Uuid, item: &WardrobeItem) -> Result<()> {
    if item.user_id == user_id {
        Ok(())
    } else {
        Err(AppError::Forbidden(
            "You don't have permission to modify this wardrobe item".to_string(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn post_owned_by(user_id: Uuid) -> Post {
        Post {
            id: Uuid::new_v4(),
            user_id,
            question: "Does this work?".to_string(),
            details: "#casual".to_string(),
            style: "casual".to_string(),
            image_url: "https://media.invalid/1.jpg".to_string(),
            tags: vec!["#casual".to_string()],
            likes: vec![],
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_owner_may_modify() {
        let owner = Uuid::new_v4();
        assert!(check_post_ownership(owner, &post_owned_by(owner)).is_ok());
    }

    #[test]
    fn test_stranger_is_forbidden() {
        let err = check_post_ownership(Uuid::new_v4(), &post_owned_by(Uuid::new_v4())).unwrap_err();
        assert!(matches!(err, AppError::Forbidden(_)));
    }
}
