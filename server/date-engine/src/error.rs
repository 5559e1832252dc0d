//! Structured error type for the normalization engine.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum NormalizeError {
  /// The input matched no resolver and no layout. Carries the original
  /// input so callers can surface it verbatim.
  #[error("unable to parse date: {0}")]
  Unrecognized(String),
}
