//! Duration rendering: sexagesimal clock text and xsd:duration.
//!
//! # Sexagesimal
//!
//! Base-60 notation for elapsed time, `H:MM`, `H:MM:SS` or `H:MM:SS.mmm`.
//! - Hours are unbounded and zero-padded to two digits only when the
//!   configuration asks for it
//! - Minutes and seconds are always two digits, milliseconds always three
//! - The sign is never shown; these strings are for non-negative display
//!
//! # xsd:duration
//!
//! The lexical form from XML Schema restricted to the time part, e.g.
//! `PT1H30M28.869S`. Only nonzero components are written, negative values get
//! a leading `-`, and a zero duration renders as the empty string.
//!
//! # Examples
//!
//! ```
//! use celestial_time::{Duration, DurationFormatter, FormatMode, FormatterConfig};
//!
//! let d = Duration::from_millis(5_400_001);
//!
//! let clock = DurationFormatter::new(FormatterConfig::new(FormatMode::SexagesimalSeconds));
//! assert_eq!(clock.fmt(d), "1:30:00");
//!
//! let xsd = DurationFormatter::new(FormatterConfig::new(FormatMode::XsdDuration));
//! assert_eq!(xsd.fmt(Duration::from_millis(5_428_869)), "PT1H30M28.869S");
//! assert_eq!(xsd.fmt(Duration::ZERO), "");
//! ```

use crate::config::{FormatMode, FormatterConfig};
use crate::duration::Duration;
use crate::errors::FormatResult;

/// Renders [`Duration`] values under a fixed [`FormatterConfig`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DurationFormatter {
    config: FormatterConfig,
}

impl DurationFormatter {
    pub fn new(config: FormatterConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &FormatterConfig {
        &self.config
    }

    /// Formats a duration according to the configured mode.
    #[inline]
    pub fn fmt(&self, d: Duration) -> String {
        match self.config.mode() {
            FormatMode::XsdDuration => xsd_duration(d),
            FormatMode::SexagesimalXsd
            | FormatMode::Sexagesimal
            | FormatMode::SexagesimalSeconds
            | FormatMode::SexagesimalMillis
            | FormatMode::Decimal => self.sexagesimal(d),
        }
    }

    /// Formats a signed millisecond count.
    pub fn fmt_millis(&self, millis: i64) -> String {
        self.fmt(Duration::from_millis(millis))
    }

    /// Formats a floating-point millisecond count, truncated toward zero.
    pub fn fmt_millis_f64(&self, millis: f64) -> FormatResult<String> {
        Ok(self.fmt(Duration::try_from_millis_f64(millis)?))
    }

    /// Formats as xsd:duration regardless of the configured mode.
    pub fn fmt_xsd(&self, d: Duration) -> String {
        xsd_duration(d)
    }

    fn sexagesimal(&self, d: Duration) -> String {
        let hours = if self.config.pad_hours() {
            format!("{:02}", d.hours())
        } else {
            d.hours().to_string()
        };
        let seconds = if self.config.include_seconds() {
            format!(":{:02}", d.seconds())
        } else {
            String::new()
        };
        let millis = if self.config.include_millis() {
            format!(".{:03}", d.millis())
        } else {
            String::new()
        };
        format!("{hours}:{:02}{seconds}{millis}", d.minutes())
    }
}

/// Renders the xsd:duration form of `d`, or `""` when `d` is zero.
///
/// Each of `H`, `M` and `S` is appended only when its component is nonzero,
/// so one hour is `PT1H` and five minutes is `PT5M`. Seconds always carry
/// three fractional digits.
pub fn xsd_duration(d: Duration) -> String {
    if d.is_zero() {
        return String::new();
    }
    let sign = if d.is_negative() { "-" } else { "" };
    let hours = if d.hours() != 0 {
        format!("{}H", d.hours())
    } else {
        String::new()
    };
    let minutes = if d.minutes() != 0 {
        format!("{}M", d.minutes())
    } else {
        String::new()
    };
    let seconds = if d.seconds() != 0 || d.millis() != 0 {
        format!("{}.{:03}S", d.seconds(), d.millis())
    } else {
        String::new()
    };
    format!("{sign}PT{hours}{minutes}{seconds}")
}
