//! API error type and [`axum::response::IntoResponse`] implementation.
//!
//! Every error body has the shape `{"detail": "<message>"}`.

use axum::{
  Json,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use serde_json::json;
use shopkeep_core::{EntityKind, ValidationError};
use thiserror::Error;

/// An error returned by an API handler.
#[derive(Debug, Error)]
pub enum ApiError {
  /// No row with the requested id; rendered with the entity's fixed message.
  #[error("{}", .0.not_found_message())]
  NotFound(EntityKind),

  #[error(transparent)]
  Validation(#[from] ValidationError),

  #[error("store error: {0}")]
  Store(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    let status = match &self {
      ApiError::NotFound(_) => StatusCode::NOT_FOUND,
      ApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
      ApiError::Store(e) => {
        tracing::error!(error = %e, "store operation failed");
        StatusCode::INTERNAL_SERVER_ERROR
      }
    };
    (status, Json(json!({ "detail": self.to_string() }))).into_response()
  }
}
