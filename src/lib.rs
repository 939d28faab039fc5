//! # openhours
//!
//! Venue opening-hours evaluation: is the store open right now, what label
//! should the UI show, and how long until it closes.
//!
//! This crate provides:
//! - A declarative schedule configuration (timezone, weekly openings,
//!   exception closings, availability labels), loadable from JSON or TOML
//! - Strict validation with specific, actionable errors
//! - Evaluation queries: open/closed, availability label, seconds until
//!   close, and the closing instant
//! - Injectable clocks so evaluation is deterministic under test
//!
//! ## Architecture
//!
//! The crate is organized into the following modules:
//!
//! - [`config`] - Declarative schedule configuration and JSON/TOML loading
//! - [`schedule`] - Validation and the evaluation queries
//! - [`clock`] - Clock providers ("now" sources), including test clocks
//! - [`zone`] - Timezone resolution (IANA names and fixed offsets)
//! - [`error`] - Unified error types for the crate
//!
//! ## Example
//!
//! ```rust
//! use openhours::{Schedule, ScheduleConfig};
//!
//! let config = ScheduleConfig::from_json_str(
//!     r#"{
//!         "timezone": "Europe/Paris",
//!         "openings": {
//!             "monday": [{ "start": "10:00", "end": "13:00" }]
//!         }
//!     }"#,
//! )?;
//!
//! let schedule = Schedule::new(config)?;
//! println!("the venue is {}", schedule.availability());
//! # Ok::<(), openhours::HoursError>(())
//! ```

#![forbid(unsafe_code)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![warn(missing_docs)]

pub mod clock;
pub mod config;
pub mod error;
pub mod schedule;
pub mod zone;

// Re-export primary types for convenience
pub use clock::{Clock, FixedClock, SystemClock};
pub use config::{ClosingConfig, LanguageConfig, OpeningConfig, ScheduleConfig};
pub use error::{HoursError, Result};
pub use schedule::{Language, Schedule, ScheduleBuilder};
pub use zone::{is_valid_timezone, Zone};
