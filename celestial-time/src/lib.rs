//! Text rendering for computed time values.
//!
//! Calendar calculators produce two kinds of results: absolute instants
//! (sunrise, sunset) and elapsed times in milliseconds (the length of a
//! temporal hour). This crate turns both into text.
//!
//! # Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`duration`] | [`Duration`]: signed milliseconds split into h/m/s/ms |
//! | [`config`] | [`FormatterConfig`] and [`FormatMode`], immutable rendering settings |
//! | [`format`] | [`DurationFormatter`]: sexagesimal and xsd:duration output |
//! | [`instant`] | [`InstantFormatter`]: strftime patterns and xsd:dateTime with offset |
//! | [`constants`] | Millisecond unit constants and the unavailable-value sentinel |
//! | [`errors`] | [`FormatError`] and [`FormatResult`] |
//!
//! # Quick Start
//!
//! ```
//! use celestial_time::{Duration, DurationFormatter, FormatMode, FormatterConfig};
//!
//! let temporal_hour = Duration::from_millis(3_257_529);
//!
//! let xsd = DurationFormatter::new(FormatterConfig::new(FormatMode::XsdDuration));
//! assert_eq!(xsd.fmt(temporal_hour), "PT54M17.529S");
//!
//! let clock = DurationFormatter::new(FormatterConfig::new(FormatMode::SexagesimalMillis));
//! assert_eq!(clock.fmt(temporal_hour), "0:54:17.529");
//! ```
//!
//! # Features
//!
//! - **`serde`**: `Serialize`/`Deserialize` for [`FormatMode`] and
//!   [`FormatterConfig`].

pub mod config;
pub mod constants;
pub mod duration;
pub mod errors;
pub mod format;
pub mod instant;

pub use config::{FormatMode, FormatterConfig, DEFAULT_TIMESTAMP_PATTERN};
pub use duration::Duration;
pub use errors::{FormatError, FormatResult};
pub use format::{xsd_duration, DurationFormatter};
pub use instant::{offset_suffix, xsd_date_time, InstantFormatter, XSD_DATE_TIME_PATTERN};
