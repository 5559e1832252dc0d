//! Compact month/day dates ("01.02", "1月2日") with the year supplied
//! by the caller.

use chrono::NaiveDate;

/// Resolve a compact month/day form against the given year, or None
/// when the input does not match the pattern or does not name a real
/// calendar date. The pattern is one or two digits, a '.' or '月'
/// separator, one or two digits, and an optional trailing '日'.
pub fn resolve(input: &str, year: i32) -> Option<NaiveDate> {
  let (month_text, rest) = input.split_once(['.', '月'])?;
  let day_text = rest.trim_end_matches('日');

  let month = parse_component(month_text)?;
  let day = parse_component(day_text)?;
  if !(1..=12).contains(&month) || !(1..=31).contains(&day) {
    return None;
  }

  // from_ymd_opt rejects days the month doesn't have (e.g. Feb 31).
  NaiveDate::from_ymd_opt(year, month, day)
}

/// A date component is one or two ASCII digits.
fn parse_component(s: &str) -> Option<u32> {
  if s.is_empty() || s.len() > 2 || !s.bytes().all(|b| b.is_ascii_digit()) {
    return None;
  }
  s.parse().ok()
}
