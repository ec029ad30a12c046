/// Media upload handler
///
/// Accepts a single multipart file field, buffers it with a hard size
/// guardrail, and forwards it to the external media host. Type and size
/// validation happen before the host is contacted.
use actix_multipart::Multipart;
use actix_web::{web, HttpResponse};
use futures_util::stream::StreamExt;

use crate::error::{AppError, Result};
use crate::middleware::UserId;
use crate::services::MediaService;

pub async fn upload_media(
    media: web::Data<MediaService>,
    user_id: UserId,
    mut payload: Multipart,
) -> Result<HttpResponse> {
    let limit = media.max_file_size();

    let mut file_name = String::from("upload");
    let mut content_type = String::new();
    let mut data: Vec<u8> = Vec::new();
    let mut got_file = false;

    while let Some(item) = payload.next().await {
        let mut field =
            item.map_err(|e| AppError::Validation(format!("invalid multipart payload: {e}")))?;

        // the upload is the first field carrying a filename; text fields
        // (whatever their position) and extra files are drained and ignored
        let filename = match field
            .content_disposition()
            .and_then(|cd| cd.get_filename())
        {
            Some(name) if !got_file => name.to_string(),
            _ => {
                while field.next().await.is_some() {}
                continue;
            }
        };

        file_name = filename;
        if let Some(mime) = field.content_type() {
            content_type = mime.essence_str().to_string();
        }

        while let Some(chunk) = field.next().await {
            let bytes =
                chunk.map_err(|e| AppError::Validation(format!("upload stream error: {e}")))?;
            if data.len() + bytes.len() > limit {
                return Err(AppError::Validation(format!(
                    "file exceeds the {limit} byte limit"
                )));
            }
            data.extend_from_slice(&bytes);
        }
        got_file = true;
    }

    if !got_file || data.is_empty() {
        return Err(AppError::Validation("a file field is required".to_string()));
    }

    tracing::debug!(user_id = %user_id.0, %file_name, size = data.len(), "forwarding upload");

    let url = media.upload(&file_name, &content_type, data).await?;

    Ok(HttpResponse::Created().json(serde_json::json!({ "url": url })))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MediaConfig;
    use actix_web::dev::{Service, ServiceResponse};
    use actix_web::http::StatusCode;
    use actix_web::{test, App, HttpMessage};
    use uuid::Uuid;

    const BOUNDARY: &str = "------------------------hivelooks";

    fn text_part(name: &str, value: &str) -> Vec<u8> {
        format!(
            "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
        )
        .into_bytes()
    }

    fn file_part(filename: &str, content_type: &str, bytes: &[u8]) -> Vec<u8> {
        let mut part = format!(
            "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"file\"; filename=\"{filename}\"\r\nContent-Type: {content_type}\r\n\r\n"
        )
        .into_bytes();
        part.extend_from_slice(bytes);
        part.extend_from_slice(b"\r\n");
        part
    }

    async fn post_upload(parts: Vec<Vec<u8>>) -> ServiceResponse {
        let media = MediaService::new(MediaConfig {
            upload_url: "https://media.invalid/upload".to_string(),
            upload_preset: "test".to_string(),
            max_file_size: 1024,
        });

        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(media))
                .wrap_fn(|req, srv| {
                    req.extensions_mut().insert(UserId(Uuid::new_v4()));
                    srv.call(req)
                })
                .route("/media/uploads", web::post().to(upload_media)),
        )
        .await;

        let mut body = Vec::new();
        for part in parts {
            body.extend_from_slice(&part);
        }
        body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());

        let req = test::TestRequest::post()
            .uri("/media/uploads")
            .insert_header((
                "content-type",
                format!("multipart/form-data; boundary={BOUNDARY}"),
            ))
            .set_payload(body)
            .to_request();

        test::call_service(&app, req).await
    }

    async fn body_text(resp: ServiceResponse) -> String {
        let bytes = test::read_body(resp).await;
        String::from_utf8_lossy(&bytes).to_string()
    }

    #[actix_web::test]
    async fn test_text_field_before_file_is_not_the_upload() {
        // the file is found by its filename, not its position in the form
        let resp = post_upload(vec![
            text_part("upload_preset", "ml_default"),
            file_part("cat.gif", "image/gif", b"GIF89a"),
        ])
        .await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body = body_text(resp).await;
        assert!(body.contains("unsupported media type 'image/gif'"), "{body}");
    }

    #[actix_web::test]
    async fn test_text_fields_alone_are_rejected() {
        let resp = post_upload(vec![
            text_part("upload_preset", "ml_default"),
            text_part("folder", "outfits"),
        ])
        .await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body = body_text(resp).await;
        assert!(body.contains("a file field is required"), "{body}");
    }

    #[actix_web::test]
    async fn test_oversize_file_after_text_field_hits_the_guardrail() {
        let resp = post_upload(vec![
            text_part("upload_preset", "ml_default"),
            file_part("big.png", "image/png", &[0u8; 2048]),
        ])
        .await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body = body_text(resp).await;
        assert!(body.contains("exceeds"), "{body}");
    }
}
