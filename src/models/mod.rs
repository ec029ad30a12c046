/// Data models for hivelooks-service
///
/// One table per content kind: `posts`, `looks`, `users`, `wardrobe_items`,
/// and a single `comments` table shared by posts and looks, keyed by
/// `(parent_kind, parent_id)`.
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A post asking for styling feedback on an outfit photo.
///
/// `tags` is the derived hashtag set: always lowercase, always
/// `#`-prefixed, no duplicates. Computed once at creation; edits overwrite
/// it only when the edit request explicitly carries a new tag list.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Post {
    pub id: Uuid,
    pub user_id: Uuid,
    pub question: String,
    pub details: String,
    pub style: String,
    pub image_url: String,
    pub tags: Vec<String>,
    /// Liker-set: user ids, each present at most once
    pub likes: Vec<Uuid>,
    pub created_at: DateTime<Utc>,
}

/// A look showing off a finished outfit.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Look {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub description: String,
    pub style: Option<String>,
    pub image_url: String,
    pub tags: Vec<String>,
    pub likes: Vec<Uuid>,
    pub created_at: DateTime<Utc>,
}

/// A comment under a post or look. One level only, no nesting.
///
/// Comments never outlive their parent: the only deletion path is the
/// parent's cascade delete.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Comment {
    pub id: Uuid,
    pub parent_id: Uuid,
    pub user_id: Uuid,
    pub content: String,
    pub likes: Vec<Uuid>,
    pub created_at: DateTime<Utc>,
}

/// Which collection a comment (or like target) hangs off
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParentKind {
    Post,
    Look,
}

impl ParentKind {
    /// Discriminator stored in the `comments.parent_kind` column
    pub fn as_str(&self) -> &'static str {
        match self {
            ParentKind::Post => "post",
            ParentKind::Look => "look",
        }
    }

    /// Table holding parent rows of this kind
    pub fn table(&self) -> &'static str {
        match self {
            ParentKind::Post => "posts",
            ParentKind::Look => "looks",
        }
    }
}

impl std::fmt::Display for ParentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// User profile. Identity (id, email) comes from the auth provider's
/// token; the profile row is what this service owns.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub photo_url: Option<String>,
    pub bio: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// A clothing item in a user's virtual wardrobe
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct WardrobeItem {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub category: String,
    pub image_url: String,
    pub color: Option<String>,
    pub brand: Option<String>,
    pub size: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Accepted wardrobe categories
pub const CLOTHING_CATEGORIES: &[&str] = &[
    "tops",
    "bottoms",
    "dresses",
    "outerwear",
    "shoes",
    "accessories",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parent_kind_maps_to_tables() {
        assert_eq!(ParentKind::Post.table(), "posts");
        assert_eq!(ParentKind::Look.table(), "looks");
        assert_eq!(ParentKind::Post.as_str(), "post");
        assert_eq!(ParentKind::Look.as_str(), "look");
    }

    #[test]
    fn parent_kind_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&ParentKind::Look).unwrap(),
            "\"look\""
        );
    }
}
