//! Schedule configuration.
//!
//! [`ScheduleConfig`] is the declarative input to a
//! [`Schedule`](crate::Schedule): a timezone, weekly openings keyed by
//! weekday name, exception closings, and the availability labels. It can be
//! built in code, or loaded from JSON or TOML strings.
//!
//! Validation happens when the schedule is constructed, not here; a config
//! value is just data.

use std::collections::BTreeMap;

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use crate::error::{HoursError, Result};

/// Declarative venue schedule, as supplied by the caller.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScheduleConfig {
    /// Timezone the wall-clock opening times are expressed in.
    ///
    /// Accepts IANA names (`"Europe/Paris"`) and fixed-offset strings
    /// (`"GMT+0100"`). Required; kept optional here so a missing value is
    /// reported by schedule validation rather than by the deserializer.
    pub timezone: Option<String>,

    /// Weekly openings: weekday name (e.g. `"monday"`) to the wall-clock
    /// spans the venue is open on that day.
    #[serde(default)]
    pub openings: BTreeMap<String, Vec<OpeningConfig>>,

    /// Exception closings that override the weekly schedule.
    #[serde(default)]
    pub closings: Vec<ClosingConfig>,

    /// Availability labels. Missing fields default to `"opened"`/`"closed"`.
    pub language: Option<LanguageConfig>,
}

/// A wall-clock opening span on some weekday.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpeningConfig {
    /// Start of the span, `"HH:MM"` or `"HH:MM:SS"`.
    pub start: String,

    /// End of the span, `"HH:MM"` or `"HH:MM:SS"`. Inclusive.
    pub end: String,
}

/// An exception range during which the venue is closed regardless of the
/// weekly schedule.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClosingConfig {
    /// Start of the range (RFC 3339 in JSON/TOML). Inclusive.
    pub from: DateTime<FixedOffset>,

    /// End of the range (RFC 3339 in JSON/TOML). Inclusive.
    pub to: DateTime<FixedOffset>,

    /// Optional human-readable reason, e.g. `"Christmas"`.
    pub reason: Option<String>,
}

/// Availability labels reported by the schedule.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LanguageConfig {
    /// Label reported while the venue is open.
    pub opened: Option<String>,

    /// Label reported while the venue is closed.
    pub closed: Option<String>,
}

impl ScheduleConfig {
    /// Load a configuration from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`HoursError::ConfigParseError`] if the string is not valid
    /// JSON for this shape.
    pub fn from_json_str(content: &str) -> Result<Self> {
        serde_json::from_str(content).map_err(|e| HoursError::ConfigParseError(e.to_string()))
    }

    /// Load a configuration from a TOML string.
    ///
    /// Closing dates must be quoted RFC 3339 strings.
    ///
    /// # Errors
    ///
    /// Returns [`HoursError::ConfigParseError`] if the string is not valid
    /// TOML for this shape.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| HoursError::ConfigParseError(e.to_string()))
    }

    /// Returns `true` if no field of the configuration is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.timezone.is_none()
            && self.openings.is_empty()
            && self.closings.is_empty()
            && self.language.is_none()
    }
}
