use sqlx::PgPool;
use tracing::info;

use crate::error::Result;

/// Ensure the HiveLooks tables exist.
///
/// Tables are lazily created at service startup to unblock environments
/// where migrations have not been applied yet (fresh developer machines,
/// CI spins). Requires Postgres 13+ for gen_random_uuid().
pub async fn ensure_tables(pool: &PgPool) -> Result<()> {
    info!("Ensuring HiveLooks tables exist");

    sqlx::query(USERS_TABLE).execute(pool).await?;
    sqlx::query(POSTS_TABLE).execute(pool).await?;
    sqlx::query(LOOKS_TABLE).execute(pool).await?;
    sqlx::query(COMMENTS_TABLE).execute(pool).await?;
    sqlx::query(COMMENTS_PARENT_INDEX).execute(pool).await?;
    sqlx::query(WARDROBE_TABLE).execute(pool).await?;
    sqlx::query(WARDROBE_USER_INDEX).execute(pool).await?;

    Ok(())
}

const USERS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS users (
    id UUID PRIMARY KEY,
    username TEXT NOT NULL UNIQUE,
    email TEXT NOT NULL,
    photo_url TEXT,
    bio TEXT,
    created_at TIMESTAMPTZ NOT NULL DEFAULT now()
)
"#;

const POSTS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS posts (
    id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
    user_id UUID NOT NULL,
    question TEXT NOT NULL,
    details TEXT NOT NULL,
    style TEXT NOT NULL,
    image_url TEXT NOT NULL,
    tags TEXT[] NOT NULL DEFAULT '{}',
    likes UUID[] NOT NULL DEFAULT '{}',
    created_at TIMESTAMPTZ NOT NULL DEFAULT now()
)
"#;

const LOOKS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS looks (
    id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
    user_id UUID NOT NULL,
    title TEXT NOT NULL,
    description TEXT NOT NULL,
    style TEXT,
    image_url TEXT NOT NULL,
    tags TEXT[] NOT NULL DEFAULT '{}',
    likes UUID[] NOT NULL DEFAULT '{}',
    created_at TIMESTAMPTZ NOT NULL DEFAULT now()
)
"#;

const COMMENTS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS comments (
    id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
    parent_kind TEXT NOT NULL CHECK (parent_kind IN ('post', 'look')),
    parent_id UUID NOT NULL,
    user_id UUID NOT NULL,
    content TEXT NOT NULL,
    likes UUID[] NOT NULL DEFAULT '{}',
    created_at TIMESTAMPTZ NOT NULL DEFAULT now()
)
"#;

const COMMENTS_PARENT_INDEX: &str = r#"
CREATE INDEX IF NOT EXISTS comments_parent_idx
ON comments (parent_kind, parent_id, created_at)
"#;

const WARDROBE_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS wardrobe_items (
    id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
    user_id UUID NOT NULL,
    name TEXT NOT NULL,
    category TEXT NOT NULL,
    image_url TEXT NOT NULL,
    color TEXT,
    brand TEXT,
    size TEXT,
    created_at TIMESTAMPTZ NOT NULL DEFAULT now()
)
"#;

const WARDROBE_USER_INDEX: &str = r#"
CREATE INDEX IF NOT EXISTS wardrobe_items_user_idx
ON wardrobe_items (user_id, created_at)
"#;
