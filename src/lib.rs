/// HiveLooks Service Library
///
/// Backend for the HiveLooks outfit-sharing application: posts asking for
/// styling feedback, looks showing off outfits, comments and likes on both,
/// per-user virtual wardrobes, and image uploads forwarded to the external
/// media host.
///
/// # Modules
///
/// - `handlers`: HTTP request handlers
/// - `models`: Data structures for posts, looks, comments, users, wardrobe
/// - `services`: Business logic layer (tag extraction, like toggling, cascade delete)
/// - `db`: Database access layer and repositories
/// - `middleware`: HTTP middleware for authentication and ownership checks
/// - `auth`: JWT validation
/// - `error`: Error types and handling
/// - `config`: Configuration management
pub mod auth;
pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;

pub use config::Config;
pub use error::{AppError, Result};
