//! Entry point: the three-stage try/fallback sequence.

use chrono::{DateTime, Datelike, NaiveDateTime, NaiveTime, Utc};

use crate::error::NormalizeError;
use crate::{layouts, relative, special};

/// Canonical date-only output layout.
pub const DATE_OUTPUT: &str = "%Y-%m-%d";
/// Canonical date-time output layout.
pub const DATE_TIME_OUTPUT: &str = "%Y-%m-%d %H:%M:%S";

/// Normalize a free-form date string, sampling the wall clock once.
pub fn normalize(input: &str, include_hour: bool) -> Result<String, NormalizeError> {
  normalize_at(input, include_hour, Utc::now())
}

/// Normalize against an explicit clock. Stages run in fixed order:
/// relative phrase, compact month/day (year from the clock), absolute
/// layouts. First success wins; a miss at every stage is the only
/// error.
pub fn normalize_at(
  input: &str,
  include_hour: bool,
  now: DateTime<Utc>,
) -> Result<String, NormalizeError> {
  if let Some(instant) = relative::resolve(input, now) {
    return Ok(render(instant, include_hour));
  }
  if let Some(date) = special::resolve(input, now.year()) {
    return Ok(render(date.and_time(NaiveTime::MIN), include_hour));
  }
  layouts::parse(input, include_hour)
    .map(|instant| render(instant, include_hour))
    .ok_or_else(|| NormalizeError::Unrecognized(input.to_string()))
}

fn render(instant: NaiveDateTime, include_hour: bool) -> String {
  if include_hour {
    instant.format(DATE_TIME_OUTPUT).to_string()
  } else {
    instant.format(DATE_OUTPUT).to_string()
  }
}
