//! Immutable rendering configuration.
//!
//! A [`FormatterConfig`] is a plain value: picking a [`FormatMode`] sets the
//! padding and precision flags, and "changing" the mode produces a new value.
//! Share one freely between threads; nothing mutates it during a render.
//!
//! | Mode | Example | Hours padded | Seconds | Millis |
//! |------|---------|--------------|---------|--------|
//! | [`SexagesimalXsd`](FormatMode::SexagesimalXsd) | `01:30:28.869` | yes | yes | yes |
//! | [`Sexagesimal`](FormatMode::Sexagesimal) | `1:30` | no | no | no |
//! | [`SexagesimalSeconds`](FormatMode::SexagesimalSeconds) | `1:30:28` | no | yes | no |
//! | [`SexagesimalMillis`](FormatMode::SexagesimalMillis) | `1:30:28.869` | no | yes | yes |
//! | [`XsdDuration`](FormatMode::XsdDuration) | `PT1H30M28.869S` | - | - | - |
//! | [`Decimal`](FormatMode::Decimal) | reserved | unchanged | unchanged | unchanged |
//!
//! ```
//! use celestial_time::{FormatMode, FormatterConfig};
//!
//! let config = FormatterConfig::new(FormatMode::SexagesimalSeconds);
//! assert!(!config.pad_hours());
//! assert!(config.include_seconds());
//! assert!(!config.include_millis());
//! ```

use crate::instant::XSD_DATE_TIME_PATTERN;

/// 12-hour clock with an unpadded hour, e.g. `6:45:27`.
pub const DEFAULT_TIMESTAMP_PATTERN: &str = "%-I:%M:%S";

/// Rendering mode for durations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "kebab-case")
)]
pub enum FormatMode {
    /// `HH:MM:SS.mmm`, the xsd:time layout.
    #[default]
    SexagesimalXsd,
    /// Reserved. Renders through the sexagesimal path with whatever flags the
    /// configuration already carries.
    Decimal,
    /// `H:MM`
    Sexagesimal,
    /// `H:MM:SS`
    SexagesimalSeconds,
    /// `H:MM:SS.mmm`
    SexagesimalMillis,
    /// xsd:duration, e.g. `PT1H6M7.869S`.
    XsdDuration,
}

impl FormatMode {
    /// Flags `(pad_hours, include_seconds, include_millis)` this mode selects,
    /// or `None` when the mode leaves them untouched.
    pub const fn flags(self) -> Option<(bool, bool, bool)> {
        match self {
            FormatMode::SexagesimalXsd => Some((true, true, true)),
            FormatMode::Sexagesimal => Some((false, false, false)),
            FormatMode::SexagesimalSeconds => Some((false, true, false)),
            FormatMode::SexagesimalMillis => Some((false, true, true)),
            FormatMode::Decimal | FormatMode::XsdDuration => None,
        }
    }
}

/// Mode, flags and timestamp pattern for one rendering style.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "serde_::ConfigRepr", into = "serde_::ConfigRepr")
)]
pub struct FormatterConfig {
    mode: FormatMode,
    pad_hours: bool,
    include_seconds: bool,
    include_millis: bool,
    timestamp_pattern: String,
}

impl FormatterConfig {
    /// Builds a configuration for `mode` with the default timestamp pattern.
    ///
    /// Flags start cleared, so [`FormatMode::Decimal`] and
    /// [`FormatMode::XsdDuration`] yield `H:MM` if rendered sexagesimally.
    pub fn new(mode: FormatMode) -> Self {
        Self {
            mode: FormatMode::Sexagesimal,
            pad_hours: false,
            include_seconds: false,
            include_millis: false,
            timestamp_pattern: DEFAULT_TIMESTAMP_PATTERN.to_string(),
        }
        .with_mode(mode)
    }

    /// The configuration used for document children: xsd:duration for
    /// durations, xsd:dateTime with offset for instants.
    pub fn xsd() -> Self {
        Self::new(FormatMode::XsdDuration).with_timestamp_pattern(XSD_DATE_TIME_PATTERN)
    }

    /// Returns a copy switched to `mode`. Flags are replaced for the
    /// sexagesimal modes and carried over for `Decimal` and `XsdDuration`.
    pub fn with_mode(mut self, mode: FormatMode) -> Self {
        self.mode = mode;
        if let Some((pad_hours, include_seconds, include_millis)) = mode.flags() {
            self.pad_hours = pad_hours;
            self.include_seconds = include_seconds;
            self.include_millis = include_millis;
        }
        self
    }

    /// Returns a copy using a chrono strftime pattern for instants.
    pub fn with_timestamp_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.timestamp_pattern = pattern.into();
        self
    }

    pub fn mode(&self) -> FormatMode {
        self.mode
    }

    pub fn pad_hours(&self) -> bool {
        self.pad_hours
    }

    pub fn include_seconds(&self) -> bool {
        self.include_seconds
    }

    pub fn include_millis(&self) -> bool {
        self.include_millis
    }

    pub fn timestamp_pattern(&self) -> &str {
        &self.timestamp_pattern
    }

    /// `true` when instants render as xsd:dateTime with an offset suffix.
    pub fn is_xsd_date_time(&self) -> bool {
        self.timestamp_pattern == XSD_DATE_TIME_PATTERN
    }
}

impl Default for FormatterConfig {
    fn default() -> Self {
        Self::new(FormatMode::SexagesimalXsd)
    }
}

#[cfg(feature = "serde")]
mod serde_ {
    use super::{FormatMode, FormatterConfig, DEFAULT_TIMESTAMP_PATTERN};

    /// On-disk form. Flags are not stored; they follow from `mode`.
    #[derive(serde::Serialize, serde::Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub(super) struct ConfigRepr {
        #[serde(default)]
        mode: FormatMode,
        #[serde(default = "default_pattern")]
        timestamp_pattern: String,
    }

    fn default_pattern() -> String {
        DEFAULT_TIMESTAMP_PATTERN.to_string()
    }

    impl From<ConfigRepr> for FormatterConfig {
        fn from(repr: ConfigRepr) -> Self {
            FormatterConfig::new(repr.mode).with_timestamp_pattern(repr.timestamp_pattern)
        }
    }

    impl From<FormatterConfig> for ConfigRepr {
        fn from(config: FormatterConfig) -> Self {
            ConfigRepr {
                mode: config.mode,
                timestamp_pattern: config.timestamp_pattern,
            }
        }
    }
}
