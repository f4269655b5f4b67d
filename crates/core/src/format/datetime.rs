//! Timestamp formatting.

use chrono::{DateTime, TimeZone};
use serde::Serialize;

/// `Wed, Oct 25, 8:30 PM`
const DATE_TIME_FORMAT: &str = "%a, %b %-d, %-I:%M %p";
/// `Wed, 10/25/2023`
const DATE_DAY_FORMAT: &str = "%a, %m/%d/%Y";
/// `Oct 25, 2023`
const DATE_ONLY_FORMAT: &str = "%b %-d, %Y";
/// `8:30 PM`
const TIME_ONLY_FORMAT: &str = "%-I:%M %p";

/// Four display renderings of one instant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormattedDateTime {
    /// Weekday, month, day and 12-hour time.
    pub date_time: String,
    /// Weekday and numeric date with year.
    pub date_day: String,
    /// Month, day and year.
    pub date_only: String,
    /// 12-hour time.
    pub time_only: String,
}

/// Renders `instant` in the fixed `en-US` display style.
///
/// The instant is shown in its own offset; pass a `DateTime<Local>` or a
/// `DateTime<FixedOffset>` to display wall-clock time for a given zone.
#[must_use]
pub fn format_date_time<Tz>(instant: &DateTime<Tz>) -> FormattedDateTime
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    FormattedDateTime {
        date_time: instant.format(DATE_TIME_FORMAT).to_string(),
        date_day: instant.format(DATE_DAY_FORMAT).to_string(),
        date_only: instant.format(DATE_ONLY_FORMAT).to_string(),
        time_only: instant.format(TIME_ONLY_FORMAT).to_string(),
    }
}
