//! Relative-time phrases: "<count><unit>前" resolved against a supplied clock.

use chrono::{DateTime, Duration, NaiveDateTime, Utc};

/// Unit suffix -> seconds per unit. Months and years use fixed
/// approximations (30 and 365 days); no calendar arithmetic.
const UNITS: &[(&str, i64)] = &[
  ("秒前", 1),
  ("分钟前", 60),
  ("小时前", 3_600),
  ("天前", 86_400),
  ("周前", 7 * 86_400),
  ("月前", 30 * 86_400),
  ("年前", 365 * 86_400),
];

/// Resolve a relative-time phrase to the instant it names, or None when
/// the input is not a relative phrase (the caller then tries absolute
/// parsing). The suffix match is exact and case-sensitive; optional
/// whitespace is allowed between the count and the unit. A non-numeric
/// count or an out-of-range duration is treated as "not applicable",
/// never as an error.
pub fn resolve(input: &str, now: DateTime<Utc>) -> Option<NaiveDateTime> {
  for (suffix, seconds_per_unit) in UNITS {
    if let Some(head) = input.strip_suffix(suffix) {
      let head = head.trim_end();
      if head.is_empty() || !head.bytes().all(|b| b.is_ascii_digit()) {
        return None;
      }
      let count: i64 = head.parse().ok()?;
      let elapsed = Duration::try_seconds(count.checked_mul(*seconds_per_unit)?)?;
      return Some(now.checked_sub_signed(elapsed)?.naive_utc());
    }
  }
  None
}
