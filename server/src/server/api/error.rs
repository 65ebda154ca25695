//! Error-to-response mapping at the HTTP boundary.

use std::any::Any;

use axum::extract::multipart::MultipartError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use image_processor::FilterError;

use super::err_json;

/// Every way a request can fail, mapped to a status code in one place.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("No image provided")]
    MissingImage,

    #[error("{}", .0.body_text())]
    Multipart(#[from] MultipartError),

    #[error(transparent)]
    Filter(#[from] FilterError),

    /// Anything unanticipated, e.g. a panic inside the pipeline.
    #[error("{0}")]
    Fault(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::MissingImage => StatusCode::BAD_REQUEST,
            Self::Multipart(e) => e.status(),
            Self::Filter(e) if e.is_client_error() => StatusCode::BAD_REQUEST,
            Self::Filter(_) | Self::Fault(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Convert a failed blocking task into a fault carrying the panic text.
    pub fn from_join(err: tokio::task::JoinError) -> Self {
        match err.try_into_panic() {
            Ok(payload) => Self::Fault(panic_message(payload.as_ref())),
            Err(err) => Self::Fault(err.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = ?self, "Request failed: {self}");
        } else {
            tracing::warn!(status = status.as_u16(), "Rejected request: {self}");
        }
        err_json(status, &self.to_string()).into_response()
    }
}

/// Best-effort text of a panic payload.
pub fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else {
        "Unknown panic".to_string()
    }
}

/// Response for a panic that escaped a handler.
pub fn panic_response(payload: Box<dyn Any + Send + 'static>) -> Response {
    ApiError::Fault(panic_message(payload.as_ref())).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_image_is_bad_request() {
        let err = ApiError::MissingImage;
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.to_string(), "No image provided");
    }

    #[test]
    fn decode_failure_is_bad_request() {
        let err: ApiError = image_processor::decode_rgb(b"nope").unwrap_err().into();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.to_string(), "Invalid image data");
    }

    #[test]
    fn encode_failure_is_server_error() {
        let err: ApiError = image_processor::encode_jpeg(&image::RgbImage::new(0, 0), 95)
            .unwrap_err()
            .into();
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.to_string(), "Failed to encode image");
    }

    #[test]
    fn panic_payloads_are_described() {
        assert_eq!(panic_message(&"boom"), "boom");
        assert_eq!(panic_message(&String::from("bang")), "bang");
        assert_eq!(panic_message(&42u8), "Unknown panic");
    }

    #[tokio::test]
    async fn join_error_from_panic_becomes_fault() {
        let err = tokio::task::spawn_blocking(|| -> u8 { panic!("pipeline exploded") })
            .await
            .unwrap_err();
        let api = ApiError::from_join(err);
        assert_eq!(api.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(api.to_string(), "pipeline exploded");
    }
}
