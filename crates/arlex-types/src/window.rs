//! Time window used to constrain which readings are charted.

use time::format_description::BorrowedFormatItem;
use time::macros::{datetime, format_description};
use time::{OffsetDateTime, PrimitiveDateTime};

use crate::error::WindowParseError;

/// Fallback start bound when the operator leaves the start field empty.
///
/// Far enough in the past that an open start admits any plausible reading.
pub const DEFAULT_WINDOW_START: OffsetDateTime = datetime!(2000-01-01 0:00 UTC);

const DATE_TIME_FORMAT: &[BorrowedFormatItem<'_>] =
    format_description!("[year]-[month]-[day] [hour]:[minute]");
const DATE_FORMAT: &[BorrowedFormatItem<'_>] = format_description!("[year]-[month]-[day]");

/// An optional inclusive time range.
///
/// Either bound may be absent. An absent start behaves as
/// [`DEFAULT_WINDOW_START`]; an absent end behaves as "now" at the moment
/// the window is applied. A window whose start is after its end is legal
/// and simply matches nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TimeWindow {
    /// Inclusive lower bound, if set.
    pub start: Option<OffsetDateTime>,
    /// Inclusive upper bound, if set.
    pub end: Option<OffsetDateTime>,
}

impl TimeWindow {
    /// A window with neither bound set.
    #[must_use]
    pub fn unbounded() -> Self {
        Self::default()
    }

    /// Whether both bounds are absent, meaning no filtering at all.
    #[must_use]
    pub fn is_unbounded(&self) -> bool {
        self.start.is_none() && self.end.is_none()
    }

    /// The lower bound in effect, substituting the default for an absent start.
    #[must_use]
    pub fn effective_start(&self) -> OffsetDateTime {
        self.start.unwrap_or(DEFAULT_WINDOW_START)
    }

    /// The upper bound in effect at `now`, substituting `now` for an absent end.
    #[must_use]
    pub fn effective_end(&self, now: OffsetDateTime) -> OffsetDateTime {
        self.end.unwrap_or(now)
    }

    /// Whether `timestamp` falls inside the window, inclusive on both ends.
    #[must_use]
    pub fn contains(&self, timestamp: OffsetDateTime, now: OffsetDateTime) -> bool {
        timestamp >= self.effective_start() && timestamp <= self.effective_end(now)
    }
}

/// Parse an operator-entered window bound.
///
/// Accepts `YYYY-MM-DD HH:MM` or a bare `YYYY-MM-DD` (midnight). Values are
/// interpreted as UTC.
///
/// # Errors
///
/// Returns [`WindowParseError`] when the input matches neither format.
pub fn parse_instant(input: &str) -> Result<OffsetDateTime, WindowParseError> {
    let trimmed = input.trim();
    if let Ok(dt) = PrimitiveDateTime::parse(trimmed, DATE_TIME_FORMAT) {
        return Ok(dt.assume_utc());
    }
    if let Ok(date) = time::Date::parse(trimmed, DATE_FORMAT) {
        return Ok(date.midnight().assume_utc());
    }
    Err(WindowParseError::InvalidInstant(trimmed.to_string()))
}

/// Format an instant the way [`parse_instant`] reads it back.
#[must_use]
pub fn format_instant(instant: OffsetDateTime) -> String {
    instant
        .format(DATE_TIME_FORMAT)
        .unwrap_or_else(|_| instant.to_string())
}
