//! Unified error types for the openhours library.
//!
//! This module provides a single error type [`HoursError`] covering every
//! failure mode of schedule construction. All errors are raised synchronously
//! while validating a [`ScheduleConfig`](crate::ScheduleConfig); a schedule
//! that fails validation is never partially constructed, and no error is
//! retried internally. Queries on a validated schedule are infallible.
//!
//! # Design Principles
//!
//! - **Specific variants**: Each error variant captures exactly one failure mode
//! - **Actionable messages**: Error messages guide users toward resolution
//! - **Machine-readable codes**: Error types include stable error codes
//!
//! # Example
//!
//! ```rust
//! use openhours::{HoursError, Schedule, ScheduleConfig};
//!
//! let err = Schedule::new(ScheduleConfig::default()).unwrap_err();
//! assert!(matches!(err, HoursError::EmptyConfig));
//! ```

use chrono::{DateTime, FixedOffset, NaiveTime, Weekday};
use thiserror::Error;

/// The unified error type for schedule construction.
///
/// Each variant is designed to be:
///
/// 1. **Self-descriptive**: The variant name indicates the failure mode
/// 2. **Contextual**: Variants include relevant data for debugging
/// 3. **Actionable**: Error messages suggest how to resolve the issue
#[derive(Debug, Error)]
pub enum HoursError {
    // =========================================================================
    // CONFIG ERRORS
    // =========================================================================
    /// The configuration carries no fields at all.
    #[error("schedule configuration is empty")]
    EmptyConfig,

    /// The configuration has no timezone.
    #[error("schedule configuration is missing a timezone")]
    MissingTimezone,

    /// The timezone string is neither an IANA name nor a fixed-offset string.
    #[error(
        "unknown timezone: '{0}'. Use an IANA name (e.g. 'Europe/Paris') or a fixed offset (e.g. 'GMT+0100')."
    )]
    UnknownTimezone(String),

    /// A JSON or TOML configuration string could not be deserialized.
    #[error("failed to parse schedule configuration: {0}")]
    ConfigParseError(String),

    // =========================================================================
    // LANGUAGE ERRORS
    // =========================================================================
    /// The provided "opened" label is empty or whitespace-only.
    #[error("the 'opened' language label must be a non-empty string")]
    EmptyOpenedLabel,

    /// The provided "closed" label is empty or whitespace-only.
    #[error("the 'closed' language label must be a non-empty string")]
    EmptyClosedLabel,

    // =========================================================================
    // OPENING ERRORS
    // =========================================================================
    /// An openings key is not a recognizable weekday name.
    #[error("unsupported weekday: '{0}'. Use day names such as 'monday'.")]
    UnsupportedWeekday(String),

    /// An opening span carries an empty or unparsable time-of-day string.
    #[error("invalid time of day '{value}' on {day}: expected 'HH:MM' or 'HH:MM:SS'")]
    InvalidTimeOfDay {
        /// Weekday the span was declared under.
        day: Weekday,
        /// The offending time string.
        value: String,
    },

    /// An opening span ends before it starts.
    #[error("opening on {day} ends before it starts ({start} to {end})")]
    ReversedOpening {
        /// Weekday the span was declared under.
        day: Weekday,
        /// Parsed start of the span.
        start: NaiveTime,
        /// Parsed end of the span.
        end: NaiveTime,
    },

    // =========================================================================
    // CLOSING ERRORS
    // =========================================================================
    /// A closing range ends before it starts.
    #[error("closing range ends before it starts (from {from}, to {to})")]
    ReversedClosing {
        /// Start of the range as given.
        from: DateTime<FixedOffset>,
        /// End of the range as given.
        to: DateTime<FixedOffset>,
    },

    /// A closing range starts and ends at the same instant.
    #[error(
        "closing range starts and ends at the same instant ({0}); give 'from' and 'to' different times"
    )]
    InstantClosing(DateTime<FixedOffset>),
}

/// A specialized [`Result`] type for openhours operations.
///
/// This type alias eliminates the need to specify the error type explicitly
/// when returning results from openhours functions.
pub type Result<T> = std::result::Result<T, HoursError>;

impl HoursError {
    /// Returns `true` if this error concerns the top-level configuration shape.
    #[inline]
    #[must_use]
    pub const fn is_config_error(&self) -> bool {
        matches!(
            self,
            Self::EmptyConfig
                | Self::MissingTimezone
                | Self::UnknownTimezone(_)
                | Self::ConfigParseError(_)
        )
    }

    /// Returns `true` if this error concerns the language labels.
    #[inline]
    #[must_use]
    pub const fn is_language_error(&self) -> bool {
        matches!(self, Self::EmptyOpenedLabel | Self::EmptyClosedLabel)
    }

    /// Returns `true` if this error concerns the weekly openings.
    #[inline]
    #[must_use]
    pub const fn is_openings_error(&self) -> bool {
        matches!(
            self,
            Self::UnsupportedWeekday(_)
                | Self::InvalidTimeOfDay { .. }
                | Self::ReversedOpening { .. }
        )
    }

    /// Returns `true` if this error concerns the exception closings.
    #[inline]
    #[must_use]
    pub const fn is_closings_error(&self) -> bool {
        matches!(self, Self::ReversedClosing { .. } | Self::InstantClosing(_))
    }

    /// Returns a machine-readable error code for reporting.
    #[inline]
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::EmptyConfig => "EMPTY_CONFIG",
            Self::MissingTimezone => "MISSING_TIMEZONE",
            Self::UnknownTimezone(_) => "UNKNOWN_TIMEZONE",
            Self::ConfigParseError(_) => "CONFIG_PARSE_ERROR",
            Self::EmptyOpenedLabel => "EMPTY_OPENED_LABEL",
            Self::EmptyClosedLabel => "EMPTY_CLOSED_LABEL",
            Self::UnsupportedWeekday(_) => "UNSUPPORTED_WEEKDAY",
            Self::InvalidTimeOfDay { .. } => "INVALID_TIME_OF_DAY",
            Self::ReversedOpening { .. } => "REVERSED_OPENING",
            Self::ReversedClosing { .. } => "REVERSED_CLOSING",
            Self::InstantClosing(_) => "INSTANT_CLOSING",
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc, Weekday};

    fn sample_instant() -> DateTime<FixedOffset> {
        Utc.with_ymd_and_hms(2018, 12, 25, 0, 0, 0).unwrap().into()
    }

    #[test]
    fn test_config_error_classification() {
        assert!(HoursError::EmptyConfig.is_config_error());
        assert!(HoursError::MissingTimezone.is_config_error());
        assert!(HoursError::UnknownTimezone("Mars/Olympus".into()).is_config_error());
        assert!(HoursError::ConfigParseError("syntax error".into()).is_config_error());

        assert!(!HoursError::EmptyOpenedLabel.is_config_error());
    }

    #[test]
    fn test_language_error_classification() {
        assert!(HoursError::EmptyOpenedLabel.is_language_error());
        assert!(HoursError::EmptyClosedLabel.is_language_error());

        assert!(!HoursError::MissingTimezone.is_language_error());
    }

    #[test]
    fn test_openings_error_classification() {
        assert!(HoursError::UnsupportedWeekday("blursday".into()).is_openings_error());
        assert!(HoursError::InvalidTimeOfDay {
            day: Weekday::Mon,
            value: "25:00".into()
        }
        .is_openings_error());
        assert!(HoursError::ReversedOpening {
            day: Weekday::Mon,
            start: NaiveTime::from_hms_opt(18, 0, 0).unwrap(),
            end: NaiveTime::from_hms_opt(10, 0, 0).unwrap(),
        }
        .is_openings_error());

        assert!(!HoursError::EmptyConfig.is_openings_error());
    }

    #[test]
    fn test_closings_error_classification() {
        assert!(HoursError::ReversedClosing {
            from: sample_instant(),
            to: sample_instant(),
        }
        .is_closings_error());
        assert!(HoursError::InstantClosing(sample_instant()).is_closings_error());

        assert!(!HoursError::MissingTimezone.is_closings_error());
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(HoursError::EmptyConfig.error_code(), "EMPTY_CONFIG");
        assert_eq!(HoursError::MissingTimezone.error_code(), "MISSING_TIMEZONE");
        assert_eq!(
            HoursError::UnsupportedWeekday("blursday".into()).error_code(),
            "UNSUPPORTED_WEEKDAY"
        );
        assert_eq!(
            HoursError::InstantClosing(sample_instant()).error_code(),
            "INSTANT_CLOSING"
        );
    }

    #[test]
    fn test_error_display_messages() {
        let err = HoursError::MissingTimezone;
        assert!(format!("{err}").contains("missing a timezone"));

        let err = HoursError::UnknownTimezone("Mars/Olympus".into());
        assert!(format!("{err}").contains("Mars/Olympus"));

        let err = HoursError::InvalidTimeOfDay {
            day: Weekday::Mon,
            value: "1e:00".into(),
        };
        assert!(format!("{err}").contains("1e:00"));
    }

    #[test]
    fn test_error_is_send_and_sync() {
        fn assert_send<T: Send>() {}
        fn assert_sync<T: Sync>() {}

        assert_send::<HoursError>();
        assert_sync::<HoursError>();
    }

    #[test]
    fn test_result_type_alias() {
        fn example_function() -> Result<i32> {
            Ok(42)
        }
        assert_eq!(example_function().unwrap(), 42);

        fn failing_function() -> Result<i32> {
            Err(HoursError::EmptyConfig)
        }
        assert!(failing_function().is_err());
    }
}
