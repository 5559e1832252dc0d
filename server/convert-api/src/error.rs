//! User-facing request errors; every variant maps to 400.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use date_engine::NormalizeError;

#[derive(Debug, Error)]
pub enum ApiError {
  #[error("missing required `date` query parameter")]
  MissingDate,

  #[error(transparent)]
  Normalize(#[from] NormalizeError),
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    (StatusCode::BAD_REQUEST, self.to_string()).into_response()
  }
}
