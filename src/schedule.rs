//! Schedule validation and evaluation.
//!
//! A [`Schedule`] is built from a [`ScheduleConfig`] and answers whether the
//! venue is open right now, which availability label to report, and how long
//! until it closes. Opening spans are wall-clock times resolved against
//! *today's* date in the configured timezone on every query; exception
//! closings are absolute ranges that mask openings at evaluation time.
//!
//! All validation happens at construction. A schedule that validated once
//! never fails a query.

use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, Datelike, NaiveDate, NaiveTime, Utc, Weekday};
use tracing::{debug, warn};

use crate::clock::{Clock, SystemClock};
use crate::config::{ClosingConfig, LanguageConfig, OpeningConfig, ScheduleConfig};
use crate::error::{HoursError, Result};
use crate::zone::Zone;

const DEFAULT_OPENED_LABEL: &str = "opened";
const DEFAULT_CLOSED_LABEL: &str = "closed";

/// Resolved availability labels.
///
/// Both labels are guaranteed non-empty after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Language {
    /// Label reported while the venue is open.
    pub opened: String,

    /// Label reported while the venue is closed.
    pub closed: String,
}

/// A validated wall-clock opening span. Inclusive on both ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct TimeSpan {
    start: NaiveTime,
    end: NaiveTime,
}

/// A validated exception range. Inclusive on both ends.
#[derive(Debug, Clone)]
struct ClosingRange {
    from: DateTime<Utc>,
    to: DateTime<Utc>,
    reason: Option<String>,
}

impl ClosingRange {
    fn contains(&self, instant: DateTime<Utc>) -> bool {
        self.from <= instant && instant <= self.to
    }
}

/// Evaluates a venue's weekly schedule and exception closings.
///
/// Construct one with [`Schedule::new`] (system clock, strict validation) or
/// through [`Schedule::builder`] to inject a [`Clock`] or relax the
/// same-instant closing check. The schedule is immutable once built;
/// concurrent read-only queries are safe.
pub struct Schedule {
    zone: Zone,
    /// Spans per weekday, indexed by days from Sunday (0 = Sunday).
    openings: [Vec<TimeSpan>; 7],
    closings: Vec<ClosingRange>,
    language: Language,
    clock: Box<dyn Clock>,
}

impl fmt::Debug for Schedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Schedule")
            .field("zone", &self.zone)
            .field("openings", &self.openings)
            .field("closings", &self.closings)
            .field("language", &self.language)
            .finish_non_exhaustive()
    }
}

impl Schedule {
    /// Validate `config` into a schedule using the system clock.
    ///
    /// # Errors
    ///
    /// Returns the first [`HoursError`] found while validating, in order:
    /// config shape, timezone, closings, language, openings.
    pub fn new(config: ScheduleConfig) -> Result<Self> {
        Self::builder(config).build()
    }

    /// Start building a schedule with a custom clock or validation options.
    #[must_use]
    pub fn builder(config: ScheduleConfig) -> ScheduleBuilder {
        ScheduleBuilder {
            config,
            clock: Box::new(SystemClock),
            allow_instant_closings: false,
        }
    }

    /// Returns `true` if the venue is open right now.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.is_open_at(self.clock.now())
    }

    /// Returns `true` if the venue is open at `now`.
    ///
    /// Open means: at least one of today's spans contains `now` (both ends
    /// inclusive) and no closing range contains `now`. A schedule with no
    /// openings at all is always closed, closings or not.
    #[must_use]
    pub fn is_open_at(&self, now: DateTime<Utc>) -> bool {
        if !self.has_openings() {
            return false;
        }
        self.spans_containing(now).next().is_some() && !self.within_closing(now)
    }

    /// The availability label for right now.
    #[must_use]
    pub fn availability(&self) -> &str {
        self.availability_at(self.clock.now())
    }

    /// The availability label for `now`: `language.opened` if the venue is
    /// open, `language.closed` otherwise.
    #[must_use]
    pub fn availability_at(&self, now: DateTime<Utc>) -> &str {
        if self.is_open_at(now) {
            &self.language.opened
        } else {
            &self.language.closed
        }
    }

    /// Whole seconds until the venue closes, or `0` right now.
    #[must_use]
    pub fn seconds_until_close(&self) -> i64 {
        self.seconds_until_close_at(self.clock.now())
    }

    /// Whole seconds from `now` until the venue closes.
    ///
    /// Among today's spans containing `now`, takes the one ending last.
    /// Returns `0` when no span contains `now`. Closings are not consulted.
    #[must_use]
    pub fn seconds_until_close_at(&self, now: DateTime<Utc>) -> i64 {
        self.spans_containing(now)
            .map(|(_, end)| (end - now).num_seconds())
            .max()
            .unwrap_or(0)
    }

    /// The instant the venue closes, judged from right now.
    #[must_use]
    pub fn close_time(&self) -> DateTime<Utc> {
        self.close_time_at(self.clock.now())
    }

    /// The instant the venue closes, judged from `now`.
    ///
    /// This is the resolved end of the first of today's spans containing
    /// `now`. When no span matches (the venue is closed), returns `now`
    /// itself.
    #[must_use]
    pub fn close_time_at(&self, now: DateTime<Utc>) -> DateTime<Utc> {
        self.spans_containing(now).next().map_or(now, |(_, end)| end)
    }

    /// The reason of the closing range covering right now, if any.
    #[must_use]
    pub fn closing_reason(&self) -> Option<&str> {
        self.closing_reason_at(self.clock.now())
    }

    /// The reason of the closing range covering `now`, if any was given.
    #[must_use]
    pub fn closing_reason_at(&self, now: DateTime<Utc>) -> Option<&str> {
        self.closings
            .iter()
            .find(|closing| closing.contains(now))
            .and_then(|closing| closing.reason.as_deref())
    }

    /// The resolved availability labels.
    #[must_use]
    pub fn language(&self) -> &Language {
        &self.language
    }

    fn has_openings(&self) -> bool {
        self.openings.iter().any(|spans| !spans.is_empty())
    }

    fn within_closing(&self, instant: DateTime<Utc>) -> bool {
        self.closings.iter().any(|closing| closing.contains(instant))
    }

    /// Resolved `(start, end)` bounds of today's spans that contain `now`,
    /// in declaration order.
    fn spans_containing(
        &self,
        now: DateTime<Utc>,
    ) -> impl Iterator<Item = (DateTime<Utc>, DateTime<Utc>)> + '_ {
        let today = self.zone.local_date(now);
        let index = today.weekday().num_days_from_sunday() as usize;
        self.openings[index].iter().filter_map(move |span| {
            let (start, end) = self.resolve_span(today, span)?;
            (start <= now && now <= end).then_some((start, end))
        })
    }

    fn resolve_span(
        &self,
        date: NaiveDate,
        span: &TimeSpan,
    ) -> Option<(DateTime<Utc>, DateTime<Utc>)> {
        let Some(start) = self.zone.instant_at(date, span.start) else {
            warn!(%date, time = %span.start, "wall-clock time does not exist in this timezone, skipping span");
            return None;
        };
        let Some(end) = self.zone.instant_at(date, span.end) else {
            warn!(%date, time = %span.end, "wall-clock time does not exist in this timezone, skipping span");
            return None;
        };
        Some((start, end))
    }
}

/// Builder for [`Schedule`] with an injected clock and validation options.
pub struct ScheduleBuilder {
    config: ScheduleConfig,
    clock: Box<dyn Clock>,
    allow_instant_closings: bool,
}

impl ScheduleBuilder {
    /// Use `clock` as the source of "now" for every query.
    #[must_use]
    pub fn clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    /// Accept closing ranges whose `from` and `to` are the same instant.
    ///
    /// Rejected by default: a zero-length closing is usually a typo for a
    /// whole-day range.
    #[must_use]
    pub const fn allow_instant_closings(mut self, allow: bool) -> Self {
        self.allow_instant_closings = allow;
        self
    }

    /// Validate the configuration and build the schedule.
    ///
    /// # Errors
    ///
    /// Returns the first [`HoursError`] found while validating, in order:
    /// config shape, timezone, closings, language, openings.
    pub fn build(self) -> Result<Schedule> {
        let Self {
            config,
            clock,
            allow_instant_closings,
        } = self;

        if config.is_empty() {
            return Err(HoursError::EmptyConfig);
        }

        let zone: Zone = config
            .timezone
            .as_deref()
            .ok_or(HoursError::MissingTimezone)?
            .parse()?;

        let closings = validate_closings(&config.closings, allow_instant_closings)?;
        let language = resolve_language(config.language.as_ref())?;
        let openings = validate_openings(&config.openings)?;

        let open_days = openings.iter().filter(|spans| !spans.is_empty()).count();
        debug!(zone = %zone, open_days, closings = closings.len(), "schedule validated");

        Ok(Schedule {
            zone,
            openings,
            closings,
            language,
            clock,
        })
    }
}

fn validate_closings(
    configs: &[ClosingConfig],
    allow_instant: bool,
) -> Result<Vec<ClosingRange>> {
    let mut closings = Vec::with_capacity(configs.len());
    for closing in configs {
        if closing.from > closing.to {
            return Err(HoursError::ReversedClosing {
                from: closing.from,
                to: closing.to,
            });
        }
        if closing.from == closing.to && !allow_instant {
            return Err(HoursError::InstantClosing(closing.from));
        }
        closings.push(ClosingRange {
            from: closing.from.with_timezone(&Utc),
            to: closing.to.with_timezone(&Utc),
            reason: closing.reason.clone(),
        });
    }
    Ok(closings)
}

fn resolve_language(config: Option<&LanguageConfig>) -> Result<Language> {
    let opened = match config.and_then(|language| language.opened.as_deref()) {
        Some(label) if label.trim().is_empty() => return Err(HoursError::EmptyOpenedLabel),
        Some(label) => label.to_string(),
        None => DEFAULT_OPENED_LABEL.to_string(),
    };
    let closed = match config.and_then(|language| language.closed.as_deref()) {
        Some(label) if label.trim().is_empty() => return Err(HoursError::EmptyClosedLabel),
        Some(label) => label.to_string(),
        None => DEFAULT_CLOSED_LABEL.to_string(),
    };
    Ok(Language { opened, closed })
}

fn validate_openings(
    config: &BTreeMap<String, Vec<OpeningConfig>>,
) -> Result<[Vec<TimeSpan>; 7]> {
    let mut table: [Vec<TimeSpan>; 7] = std::array::from_fn(|_| Vec::new());
    for (key, spans) in config {
        let day = key
            .parse::<Weekday>()
            .map_err(|_| HoursError::UnsupportedWeekday(key.clone()))?;
        let slot = &mut table[day.num_days_from_sunday() as usize];
        for span in spans {
            let start = parse_time_of_day(day, &span.start)?;
            let end = parse_time_of_day(day, &span.end)?;
            if end < start {
                return Err(HoursError::ReversedOpening { day, start, end });
            }
            slot.push(TimeSpan { start, end });
        }
    }
    Ok(table)
}

fn parse_time_of_day(day: Weekday, value: &str) -> Result<NaiveTime> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(HoursError::InvalidTimeOfDay {
            day,
            value: value.to_string(),
        });
    }
    NaiveTime::parse_from_str(trimmed, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(trimmed, "%H:%M"))
        .map_err(|_| HoursError::InvalidTimeOfDay {
            day,
            value: value.to_string(),
        })
}

// =============================================================================
// TESTS
// =============================================================================
