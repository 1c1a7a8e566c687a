// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Calendar helpers.
//!
//! Due dates are whole calendar days in the office's local timezone, so
//! "today" is resolved against a named IANA zone rather than UTC.

use crate::error::DomainError;
use chrono::{DateTime, Datelike, Utc};
use chrono_tz::Tz;
use time::macros::format_description;
use time::{Date, Month};

/// Timezone used when none is configured.
pub const DEFAULT_TIMEZONE: &str = "Asia/Manila";

/// Parses an IANA timezone name.
///
/// # Errors
///
/// Returns `DomainError::InvalidTimezone` if the name is unknown.
pub fn parse_timezone(name: &str) -> Result<Tz, DomainError> {
    name.parse()
        .map_err(|_| DomainError::InvalidTimezone(name.to_string()))
}

/// Returns the calendar date of `now` as observed in `tz`.
///
/// # Errors
///
/// Returns an error if the local date cannot be represented.
pub fn local_date(now: DateTime<Utc>, tz: Tz) -> Result<Date, DomainError> {
    let local = now.with_timezone(&tz).date_naive();

    let month: Month = u8::try_from(local.month())
        .ok()
        .and_then(|month| Month::try_from(month).ok())
        .ok_or_else(|| DomainError::DateParseError {
            date_string: local.to_string(),
            error: String::from("month out of range"),
        })?;
    let day: u8 = u8::try_from(local.day()).map_err(|e| DomainError::DateParseError {
        date_string: local.to_string(),
        error: e.to_string(),
    })?;

    Date::from_calendar_date(local.year(), month, day).map_err(|e| DomainError::DateParseError {
        date_string: local.to_string(),
        error: e.to_string(),
    })
}

/// Returns today's date in the named timezone.
///
/// # Errors
///
/// Returns an error if the timezone is unknown.
pub fn today_in_timezone(name: &str) -> Result<Date, DomainError> {
    let tz: Tz = parse_timezone(name)?;
    local_date(Utc::now(), tz)
}

/// Parses a `YYYY-MM-DD` date.
///
/// # Errors
///
/// Returns `DomainError::DateParseError` if the string is not a valid date.
pub fn parse_date(value: &str) -> Result<Date, DomainError> {
    Date::parse(value.trim(), format_description!("[year]-[month]-[day]")).map_err(|e| {
        DomainError::DateParseError {
            date_string: value.to_string(),
            error: e.to_string(),
        }
    })
}

/// Formats a date as `YYYY-MM-DD`.
///
/// # Errors
///
/// Returns `DomainError::DateParseError` if the date cannot be formatted.
pub fn format_date(date: Date) -> Result<String, DomainError> {
    date.format(format_description!("[year]-[month]-[day]"))
        .map_err(|e| DomainError::DateParseError {
            date_string: date.to_string(),
            error: e.to_string(),
        })
}
