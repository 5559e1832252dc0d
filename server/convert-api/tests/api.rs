//! Router-level tests for the convert API (no live socket).

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use chrono::{Datelike, Duration, NaiveDateTime, Utc};
use http_body_util::BodyExt;
use tower::ServiceExt;

async fn get(uri: &str) -> (StatusCode, String) {
  let response = convert_api::app()
    .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
    .await
    .unwrap();
  let status = response.status();
  let bytes = response.into_body().collect().await.unwrap().to_bytes();
  (status, String::from_utf8(bytes.to_vec()).unwrap())
}

#[tokio::test]
async fn compact_month_day_with_hour() {
  // date=01月02日&hour=true
  let (status, body) = get("/convert?date=01%E6%9C%8802%E6%97%A5&hour=true").await;
  assert_eq!(status, StatusCode::OK);
  assert_eq!(body, format!("{}-01-02 00:00:00", Utc::now().year()));
}

#[tokio::test]
async fn compact_month_day_without_hour() {
  // date=01月02日
  let (status, body) = get("/convert?date=01%E6%9C%8802%E6%97%A5").await;
  assert_eq!(status, StatusCode::OK);
  assert_eq!(body, format!("{}-01-02", Utc::now().year()));
}

#[tokio::test]
async fn english_layout_normalizes() {
  let (status, body) = get("/convert?date=2%20January,%202006").await;
  assert_eq!(status, StatusCode::OK);
  assert_eq!(body, "2006-01-02");
}

#[tokio::test]
async fn date_time_input_is_truncated_without_hour() {
  let (status, body) = get("/convert?date=2023-06-05%2008:09:10").await;
  assert_eq!(status, StatusCode::OK);
  assert_eq!(body, "2023-06-05");
}

#[tokio::test]
async fn relative_minutes_resolve_near_now() {
  let before = Utc::now();
  // date=5分钟前&hour=true
  let (status, body) = get("/convert?date=5%E5%88%86%E9%92%9F%E5%89%8D&hour=true").await;
  let after = Utc::now();
  assert_eq!(status, StatusCode::OK);

  let resolved = NaiveDateTime::parse_from_str(&body, "%Y-%m-%d %H:%M:%S").unwrap();
  let low = (before - Duration::minutes(5) - Duration::seconds(1)).naive_utc();
  let high = (after - Duration::minutes(5)).naive_utc();
  assert!(
    resolved >= low && resolved <= high,
    "resolved {} outside [{}, {}]",
    resolved,
    low,
    high
  );
}

#[tokio::test]
async fn missing_date_is_bad_request() {
  let (status, body) = get("/convert").await;
  assert_eq!(status, StatusCode::BAD_REQUEST);
  assert!(body.contains("date"));

  let (status, _) = get("/convert?date=").await;
  assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn unparseable_date_reports_the_input() {
  let (status, body) = get("/convert?date=not-a-date").await;
  assert_eq!(status, StatusCode::BAD_REQUEST);
  assert!(body.contains("not-a-date"));
}

#[tokio::test]
async fn usage_text_is_served() {
  let (status, body) = get("/api").await;
  assert_eq!(status, StatusCode::OK);
  assert!(body.contains("/convert?date=DATE&hour=BOOLEAN"));
}

#[tokio::test]
async fn cors_headers_are_present() {
  let response = convert_api::app()
    .oneshot(
      Request::builder()
        .uri("/convert?date=2006-01-02")
        .header(header::ORIGIN, "http://example.com")
        .body(Body::empty())
        .unwrap(),
    )
    .await
    .unwrap();
  assert_eq!(response.status(), StatusCode::OK);
  assert!(response
    .headers()
    .contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN));
}
