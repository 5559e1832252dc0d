//! Query types for the convert API.

use serde::Deserialize;

/// Query string for GET /convert. `hour` selects date-time output and
/// defaults to false.
#[derive(Deserialize)]
pub struct ConvertParams {
  #[serde(default)]
  pub date: Option<String>,
  #[serde(default)]
  pub hour: bool,
}
