//! HTTP handlers and router for the convert API.

use axum::extract::Query;
use axum::routing::get;
use axum::Router;
use tower_http::cors::CorsLayer;

use crate::error::ApiError;
use crate::types::ConvertParams;

/// Build the application router with permissive CORS.
pub fn app() -> Router {
  Router::new()
    .route("/convert", get(convert))
    .route("/api", get(usage))
    .layer(CorsLayer::permissive())
}

/// GET /convert?date=DATE&hour=BOOLEAN
pub async fn convert(Query(params): Query<ConvertParams>) -> Result<String, ApiError> {
  let input = params.date.as_deref().unwrap_or_default();
  if input.is_empty() {
    return Err(ApiError::MissingDate);
  }

  match date_engine::normalize(input, params.hour) {
    Ok(normalized) => Ok(normalized),
    Err(e) => {
      tracing::warn!(input, "convert failed: {}", e);
      Err(e.into())
    }
  }
}

/// GET /api — static usage text.
pub async fn usage() -> &'static str {
  USAGE
}

const USAGE: &str = r#"Convert a date from one written form to the canonical one.

Usage:
    GET /convert?date=DATE&hour=BOOLEAN

Parameters:
    date - the date text to convert (absolute or relative).
    hour - include the time of day (optional, defaults to false).

Examples:
    GET /convert?date=01月02日&hour=true
    -> 2023-01-02 00:00:00

    GET /convert?date=01月02日
    -> 2023-01-02

    GET /convert?date=2 January, 2006
    -> 2006-01-02
"#;
