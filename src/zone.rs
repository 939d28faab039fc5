//! Timezone resolution for schedule evaluation.
//!
//! A schedule's timezone is given as a string and accepted in two forms:
//!
//! - IANA names such as `"Europe/Paris"` or `"America/Los_Angeles"`
//! - fixed-offset strings such as `"GMT+0100"`, `"UTC-05:00"` or `"+0100"`
//!
//! The resolved [`Zone`] combines a calendar date with a wall-clock time into
//! an absolute instant using structured timezone-aware construction.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};
use chrono_tz::Tz;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::HoursError;

/// Fixed-offset timezone strings: an optional GMT/UTC prefix, a sign, then
/// HHMM or HH:MM.
static FIXED_OFFSET_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?:GMT|UTC)?([+-])(\d{2}):?(\d{2})$").expect("valid regex"));

/// A resolved schedule timezone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Zone {
    /// A named IANA timezone, DST rules included.
    Iana(Tz),
    /// A fixed UTC offset with no DST rules.
    Fixed(FixedOffset),
}

impl Zone {
    /// The wall-clock date and time of `instant` in this zone.
    pub(crate) fn local_datetime(&self, instant: DateTime<Utc>) -> NaiveDateTime {
        match self {
            Self::Iana(tz) => instant.with_timezone(tz).naive_local(),
            Self::Fixed(offset) => instant.with_timezone(offset).naive_local(),
        }
    }

    /// The calendar date of `instant` in this zone.
    pub(crate) fn local_date(&self, instant: DateTime<Utc>) -> NaiveDate {
        self.local_datetime(instant).date()
    }

    /// Resolve a wall-clock time on a calendar date to an absolute instant.
    ///
    /// Ambiguous local times (DST fall-back) resolve to the earliest instant.
    /// Nonexistent local times (DST spring-forward gap) resolve to `None`.
    pub(crate) fn instant_at(&self, date: NaiveDate, time: NaiveTime) -> Option<DateTime<Utc>> {
        let local = NaiveDateTime::new(date, time);
        match self {
            Self::Iana(tz) => tz
                .from_local_datetime(&local)
                .earliest()
                .map(|dt| dt.with_timezone(&Utc)),
            Self::Fixed(offset) => offset
                .from_local_datetime(&local)
                .earliest()
                .map(|dt| dt.with_timezone(&Utc)),
        }
    }
}

impl FromStr for Zone {
    type Err = HoursError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(tz) = trimmed.parse::<Tz>() {
            return Ok(Self::Iana(tz));
        }
        parse_fixed_offset(trimmed)
            .map(Self::Fixed)
            .ok_or_else(|| HoursError::UnknownTimezone(s.to_string()))
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Iana(tz) => f.write_str(tz.name()),
            Self::Fixed(offset) => write!(f, "{offset}"),
        }
    }
}

/// Returns `true` if `value` is a usable timezone string, in either the IANA
/// or the fixed-offset form.
#[must_use]
pub fn is_valid_timezone(value: &str) -> bool {
    value.parse::<Zone>().is_ok()
}

fn parse_fixed_offset(s: &str) -> Option<FixedOffset> {
    let caps = FIXED_OFFSET_RE.captures(s)?;
    let hours: i32 = caps[2].parse().ok()?;
    let minutes: i32 = caps[3].parse().ok()?;
    if minutes >= 60 {
        return None;
    }
    let mut seconds = hours * 3600 + minutes * 60;
    if &caps[1] == "-" {
        seconds = -seconds;
    }
    // east_opt bounds the offset to less than a day in either direction.
    FixedOffset::east_opt(seconds)
}
