//! Dateconv Convert API
//!
//! HTTP service exposing the date normalization engine. One conversion
//! route plus static usage text; permissive CORS; no state beyond the
//! request.

mod error;
mod handlers;
mod types;

pub use error::ApiError;
pub use handlers::{app, convert, usage};
