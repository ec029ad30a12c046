/// Business logic layer
pub mod cascade;
pub mod comments;
pub mod likes;
pub mod looks;
pub mod media;
pub mod posts;
pub mod tags;
pub mod users;
pub mod wardrobe;

pub use cascade::cascade_delete;
pub use comments::CommentService;
pub use likes::LikeService;
pub use looks::LookService;
pub use media::MediaService;
pub use posts::PostService;
pub use tags::{extract_tags, normalize_tags};
pub use users::UserService;
pub use wardrobe::WardrobeService;
