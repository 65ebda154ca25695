//! Image filter API.

use axum::body::Bytes;
use axum::extract::multipart::MultipartRejection;
use axum::extract::{Multipart, State};
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use image_processor::{FilterKind, OUTPUT_MIME};

use super::error::ApiError;
use crate::app::SharedState;

/// Fields of an `/apply_filter` upload.
#[derive(Debug, Default)]
struct FilterUpload {
    image: Option<Bytes>,
    filter_type: Option<String>,
}

impl FilterUpload {
    async fn read(multipart: &mut Multipart) -> Result<Self, ApiError> {
        let mut upload = Self::default();

        while let Some(field) = multipart.next_field().await? {
            let name = field.name().unwrap_or("").to_string();
            match name.as_str() {
                "image" if upload.image.is_none() => {
                    upload.image = Some(field.bytes().await?);
                }
                "filter_type" if upload.filter_type.is_none() => {
                    upload.filter_type = Some(field.text().await?);
                }
                _ => {}
            }
        }

        Ok(upload)
    }

    /// The requested filter; `blur` when the field is absent.
    fn kind(&self) -> FilterKind {
        self.filter_type
            .as_deref()
            .map(FilterKind::from_name)
            .unwrap_or_default()
    }
}

/// OPTIONS /apply_filter
pub async fn preflight() -> StatusCode {
    StatusCode::NO_CONTENT
}

/// POST /apply_filter – Filter an uploaded image and return it as JPEG
pub async fn apply_filter(
    State(state): State<SharedState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Response, ApiError> {
    // A body that is not multipart at all cannot carry an image field.
    let mut multipart = multipart.map_err(|_| ApiError::MissingImage)?;

    let upload = FilterUpload::read(&mut multipart).await?;
    let kind = upload.kind();
    let image = upload.image.ok_or(ApiError::MissingImage)?;
    let quality = state.jpeg_quality();

    tracing::debug!(filter = %kind, bytes = image.len(), "Filter request");

    let jpeg = tokio::task::spawn_blocking(move || {
        image_processor::process(&image, kind, quality)
    })
    .await
    .map_err(ApiError::from_join)??;

    Ok(([(header::CONTENT_TYPE, OUTPUT_MIME)], jpeg).into_response())
}
