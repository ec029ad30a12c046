/// HTTP request handlers
pub mod comments;
pub mod likes;
pub mod looks;
pub mod media;
pub mod posts;
pub mod users;
pub mod wardrobe;

pub use comments::{
    create_look_comment, create_post_comment, get_look_comments, get_post_comments,
};
pub use likes::{
    toggle_look_comment_like, toggle_look_like, toggle_post_comment_like, toggle_post_like,
};
pub use looks::{create_look, delete_look, get_all_looks, get_look, get_user_looks, update_look};
pub use media::upload_media;
pub use posts::{create_post, delete_post, get_all_posts, get_post, get_user_posts, update_post};
pub use users::{get_my_profile, get_user_profile, upsert_my_profile};
pub use wardrobe::{add_item, delete_item, get_wardrobe, update_item};
