//! Instant rendering: caller patterns and xsd:dateTime with UTC offset.
//!
//! Patterns use chrono's strftime syntax. When the configured pattern is
//! exactly [`XSD_DATE_TIME_PATTERN`], the local fields are followed by the
//! offset in effect at that instant, as required by the lexical form of
//! `xs:dateTime`:
//!
//! ```text
//! 2007-02-18T06:45:27-05:00     offset -300 minutes
//! 2007-02-18T11:45:27Z          offset 0
//! 2007-02-18T17:15:27+05:30     offset +330 minutes
//! ```
//!
//! Any other pattern is rendered as-is, without an offset suffix.
//!
//! ```
//! use celestial_time::{FormatterConfig, InstantFormatter};
//! use chrono::{FixedOffset, TimeZone};
//!
//! let zone = FixedOffset::west_opt(5 * 3600).unwrap();
//! let sunrise = zone.with_ymd_and_hms(2007, 2, 18, 6, 45, 27).unwrap();
//!
//! let xsd = InstantFormatter::new(FormatterConfig::xsd());
//! assert_eq!(xsd.fmt(&sunrise).unwrap(), "2007-02-18T06:45:27-05:00");
//!
//! let clock = InstantFormatter::new(FormatterConfig::default());
//! assert_eq!(clock.fmt(&sunrise).unwrap(), "6:45:27");
//! ```

use crate::config::FormatterConfig;
use crate::constants::{MINUTES_PER_HOUR, SECONDS_PER_MINUTE};
use crate::errors::{FormatError, FormatResult};
use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Offset, TimeZone};
use std::fmt::{Display, Write};

/// Canonical xsd:dateTime layout without the zone designator.
pub const XSD_DATE_TIME_PATTERN: &str = "%Y-%m-%dT%H:%M:%S";

/// Renders instants with the timestamp pattern of a [`FormatterConfig`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InstantFormatter {
    config: FormatterConfig,
}

impl InstantFormatter {
    pub fn new(config: FormatterConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &FormatterConfig {
        &self.config
    }

    /// Formats `instant` in its own zone.
    ///
    /// Convert with [`DateTime::with_timezone`] first to render in the zone of
    /// a particular calendar.
    ///
    /// # Errors
    ///
    /// Returns [`FormatError::InvalidPattern`] if the configured pattern has
    /// items chrono cannot format.
    pub fn fmt<Tz>(&self, instant: &DateTime<Tz>) -> FormatResult<String>
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        if self.config.is_xsd_date_time() {
            return Ok(xsd_date_time(instant));
        }
        render_pattern(instant, self.config.timestamp_pattern())
    }
}

/// Renders `instant` as xsd:dateTime with its UTC offset, e.g.
/// `2007-02-18T06:45:27-05:00`, or with `Z` when the offset is zero.
///
/// Offsets with a seconds part (historic local mean time) are truncated to
/// whole minutes.
pub fn xsd_date_time<Tz>(instant: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let mut out = instant.format(XSD_DATE_TIME_PATTERN).to_string();
    let offset_minutes = instant.offset().fix().local_minus_utc() / SECONDS_PER_MINUTE;
    out.push_str(&offset_suffix(offset_minutes));
    out
}

/// Zone designator for a total offset in minutes: `Z`, or `±HH:MM`.
pub fn offset_suffix(offset_minutes: i32) -> String {
    if offset_minutes == 0 {
        return "Z".to_string();
    }
    let sign = if offset_minutes < 0 { '-' } else { '+' };
    let magnitude = offset_minutes.unsigned_abs();
    format!(
        "{sign}{:02}:{:02}",
        magnitude / MINUTES_PER_HOUR as u32,
        magnitude % MINUTES_PER_HOUR as u32
    )
}

fn render_pattern<Tz>(instant: &DateTime<Tz>, pattern: &str) -> FormatResult<String>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let items = StrftimeItems::new(pattern);
    if items.clone().any(|item| matches!(item, Item::Error)) {
        return Err(FormatError::invalid_pattern(
            pattern,
            "unrecognized strftime specifier",
        ));
    }
    let mut out = String::with_capacity(pattern.len() + 16);
    write!(out, "{}", instant.format_with_items(items)).map_err(|_| {
        FormatError::invalid_pattern(pattern, "pattern needs fields this instant lacks")
    })?;
    Ok(out)
}
