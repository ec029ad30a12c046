/// Database access layer
///
/// Repositories over `PgPool`, one per collection, plus the cascade-delete
/// transaction and schema bootstrap. All queries are runtime-checked
/// (`sqlx::query_as`), so compilation needs no live database.
pub mod cascade;
pub mod comments;
pub mod likes;
pub mod looks;
pub mod posts;
pub mod schema;
pub mod users;
pub mod wardrobe;

pub use cascade::{delete_parent_with_comments, CascadeOutcome};
pub use comments::CommentRepository;
pub use likes::{LikeRepository, LikeTarget};
pub use looks::LookRepository;
pub use posts::PostRepository;
pub use schema::ensure_tables;
pub use users::UserRepository;
pub use wardrobe::WardrobeRepository;
