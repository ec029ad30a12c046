//! Media uploads
//!
//! Files are validated locally (MIME type and byte length) before a single
//! byte goes over the wire, then forwarded to the external media host,
//! which answers with the hosted URL. Transform/storage decisions belong
//! to the host; this service never touches pixel data.

use serde::Deserialize;

use crate::config::MediaConfig;
use crate::error::{AppError, Result};

/// MIME types the media host accepts from us
pub const ALLOWED_MEDIA_TYPES: &[&str] = &[
    "image/jpeg",
    "image/jpg",
    "image/png",
    "image/webp",
];

/// Body of the media host's upload response; only the hosted URL matters
#[derive(Debug, Deserialize)]
struct UploadResult {
    secure_url: String,
}

pub struct MediaService {
    client: reqwest::Client,
    config: MediaConfig,
}

impl MediaService {
    pub fn new(config: MediaConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    /// Upload ceiling in bytes, for callers buffering request bodies
    pub fn max_file_size(&self) -> usize {
        self.config.max_file_size
    }

    /// Reject unsupported types and oversized files before any network
    /// call is made.
    pub fn validate(&self, content_type: &str, size: usize) -> Result<()> {
        let essence = content_type
            .parse::<mime::Mime>()
            .map(|m| m.essence_str().to_string())
            .map_err(|_| AppError::Validation(format!("invalid content type '{content_type}'")))?;

        if !ALLOWED_MEDIA_TYPES.contains(&essence.as_str()) {
            return Err(AppError::Validation(format!(
                "unsupported media type '{essence}', accepted: {}",
                ALLOWED_MEDIA_TYPES.join(", ")
            )));
        }

        if size > self.config.max_file_size {
            return Err(AppError::Validation(format!(
                "file of {size} bytes exceeds the {} byte limit",
                self.config.max_file_size
            )));
        }

        Ok(())
    }

    /// Upload a validated file to the media host and return its hosted URL.
    ///
    /// Host failures propagate unmodified; there is no retry here.
    pub async fn upload(
        &self,
        file_name: &str,
        content_type: &str,
        data: Vec<u8>,
    ) -> Result<String> {
        self.validate(content_type, data.len())?;

        let part = reqwest::multipart::Part::bytes(data)
            .file_name(file_name.to_string())
            .mime_str(content_type)?;

        let form = reqwest::multipart::Form::new()
            .text("upload_preset", self.config.upload_preset.clone())
            .part("file", part);

        let response = self
            .client
            .post(&self.config.upload_url)
            .multipart(form)
            .send()
            .await?
            .error_for_status()?;

        let result: UploadResult = response.json().await?;

        tracing::info!(url = %result.secure_url, "media upload completed");

        Ok(result.secure_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> MediaService {
        MediaService::new(MediaConfig {
            upload_url: "https://media.invalid/upload".to_string(),
            upload_preset: "test".to_string(),
            max_file_size: 2 * 1024 * 1024,
        })
    }

    #[test]
    fn test_accepts_jpeg_under_limit() {
        assert!(service().validate("image/jpeg", 512 * 1024).is_ok());
    }

    #[test]
    fn test_accepts_webp_with_parameters() {
        // essence comparison ignores MIME parameters
        assert!(service().validate("image/webp; q=0.8", 1024).is_ok());
    }

    #[test]
    fn test_rejects_gif() {
        let err = service().validate("image/gif", 1024).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn test_rejects_non_image() {
        assert!(service().validate("application/pdf", 10).is_err());
    }

    #[test]
    fn test_rejects_oversized_file() {
        let err = service().validate("image/png", 2 * 1024 * 1024 + 1).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn test_exact_limit_is_allowed() {
        assert!(service().validate("image/png", 2 * 1024 * 1024).is_ok());
    }

    #[test]
    fn test_garbage_content_type_rejected() {
        assert!(service().validate("not a mime", 10).is_err());
    }
}
