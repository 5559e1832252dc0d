//! Ordered absolute-date layout fallback.
//!
//! Each layout is one attempt in a fixed priority list; the first match
//! wins, so list order is part of the contract for ambiguous inputs
//! (e.g. digit-only strings).

use chrono::format::{parse as parse_items, Parsed, StrftimeItems};
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};

/// One attempt in the fallback chain.
#[derive(Debug, Clone, Copy)]
pub enum Layout {
  /// Full calendar date; time of day is midnight.
  Date(&'static str),
  /// Year and month only; the day defaults to the first.
  YearMonth(&'static str),
  /// Calendar date with time of day, no zone.
  DateTime(&'static str),
  /// Date and time with a fixed UTC offset. The wall-clock fields are
  /// kept as written; the offset is discarded, not converted.
  OffsetDateTime(&'static str),
}

impl Layout {
  pub fn parse(&self, input: &str) -> Option<NaiveDateTime> {
    match self {
      Layout::Date(fmt) => NaiveDate::parse_from_str(input, fmt)
        .ok()
        .map(|d| d.and_time(NaiveTime::MIN)),
      Layout::YearMonth(fmt) => {
        let mut parsed = Parsed::new();
        parse_items(&mut parsed, input, StrftimeItems::new(fmt)).ok()?;
        parsed.set_day(1).ok()?;
        let date = parsed.to_naive_date().ok()?;
        Some(date.and_time(NaiveTime::MIN))
      }
      Layout::DateTime(fmt) => NaiveDateTime::parse_from_str(input, fmt).ok(),
      Layout::OffsetDateTime(fmt) => DateTime::parse_from_str(input, fmt)
        .ok()
        .map(|dt| dt.naive_local()),
    }
  }
}

/// Date-only layouts, highest priority first. The compact year-less
/// forms ("MM.DD", "MM月DD日") are handled by the special resolver
/// before this chain is reached.
pub const DATE_LAYOUTS: &[Layout] = &[
  Layout::Date("%Y-%m-%d"),
  Layout::Date("%Y/%m/%d"),
  Layout::Date("%Y%m%d"),
  Layout::Date("%Y.%m.%d"),
  Layout::Date("%m-%d-%Y"),
  Layout::Date("%m/%d/%Y"),
  Layout::Date("%Y年%m月%d日"),
  Layout::YearMonth("%Y年%m月"),
  Layout::Date("%d %B, %Y"),
  Layout::Date("%B %d, %Y"),
];

/// Date-time layouts, highest priority first.
pub const DATE_TIME_LAYOUTS: &[Layout] = &[
  Layout::DateTime("%Y-%m-%d %H:%M:%S"),
  Layout::DateTime("%Y/%m/%d %H:%M:%S"),
  Layout::DateTime("%Y.%m.%d %H:%M:%S"),
  Layout::DateTime("%m-%d-%Y %H:%M:%S"),
  Layout::OffsetDateTime("%Y-%m-%d %H:%M:%S %:z"),
  Layout::OffsetDateTime("%Y-%m-%d %H:%M:%S %z"),
  Layout::DateTime("%m/%d/%Y %H:%M:%S"),
  Layout::DateTime("%Y年%m月%d日 %H:%M:%S"),
  Layout::DateTime("%d %B, %Y %H:%M:%S"),
  Layout::DateTime("%B %d, %Y %H:%M:%S"),
  Layout::DateTime("%Y-%m-%dT%H:%M:%S%.3fZ"),
  Layout::DateTime("%Y-%m-%dT%H:%M:%SZ"),
];

/// Run the fallback chain.
///
/// Without the hour flag, date-time layouts are still tried first so a
/// date-time input yields its date portion (truncated, not zeroed);
/// date-only layouts are the fallback. With the flag, date-only layouts
/// come first, matching the enumerated priority order.
pub fn parse(input: &str, include_hour: bool) -> Option<NaiveDateTime> {
  let (first, second) = if include_hour {
    (DATE_LAYOUTS, DATE_TIME_LAYOUTS)
  } else {
    (DATE_TIME_LAYOUTS, DATE_LAYOUTS)
  };
  first
    .iter()
    .chain(second)
    .find_map(|layout| layout.parse(input))
}
