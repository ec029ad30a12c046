/// Configuration management for hivelooks-service
///
/// Loads configuration from environment variables.
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Application settings
    pub app: AppConfig,
    /// CORS configuration
    pub cors: CorsConfig,
    /// Database configuration
    pub database: DatabaseConfig,
    /// Media host configuration
    pub media: MediaConfig,
}

/// Application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Application environment (dev, staging, prod)
    pub env: String,
    /// Server host to bind to
    pub host: String,
    /// Server port to bind to
    pub port: u16,
}

/// CORS configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorsConfig {
    /// Comma-separated list of allowed origins
    pub allowed_origins: String,
}

/// Database configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Database URL
    pub url: String,
    /// Max connections in pool
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
}

/// External media host (image uploads)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MediaConfig {
    /// Upload endpoint of the media host
    pub upload_url: String,
    /// Unsigned upload preset forwarded with every upload
    pub upload_preset: String,
    /// Maximum accepted file size in bytes
    #[serde(default = "default_max_file_size")]
    pub max_file_size: usize,
}

fn default_max_connections() -> u32 {
    20
}

/// 2 MiB upload ceiling, checked before any network call
fn default_max_file_size() -> usize {
    2 * 1024 * 1024
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let app = AppConfig {
            env: std::env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
            host: std::env::var("APP_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: std::env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
        };

        let cors = CorsConfig {
            allowed_origins: std::env::var("CORS_ALLOWED_ORIGINS")
                .unwrap_or_else(|_| "http://localhost:5173".to_string()),
        };

        let database = DatabaseConfig {
            url: std::env::var("DATABASE_URL").context("DATABASE_URL is required")?,
            max_connections: std::env::var("DATABASE_MAX_CONNECTIONS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or_else(default_max_connections),
        };

        let media = MediaConfig {
            upload_url: std::env::var("MEDIA_UPLOAD_URL")
                .context("MEDIA_UPLOAD_URL is required")?,
            upload_preset: std::env::var("MEDIA_UPLOAD_PRESET")
                .unwrap_or_else(|_| "ml_default".to_string()),
            max_file_size: std::env::var("MEDIA_MAX_FILE_SIZE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or_else(default_max_file_size),
        };

        Ok(Config {
            app,
            cors,
            database,
            media,
        })
    }
}
