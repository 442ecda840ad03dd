//! The time-source contract: a static capability registry plus metadata.
//!
//! A calendar that wants to be serialized implements [`TimeSource`]. Instead
//! of discovering getters at run time, it declares them once in
//! [`TimeSource::CAPABILITIES`], a `const` slice of [`Capability`] values.
//! Each capability pairs a `get<Label>` name with a declared
//! [`CapabilityKind`] and a zero-argument accessor.
//!
//! ```
//! use celestial_catalog::{
//!     AccessError, Capability, GeoLocation, SourceKind, SourceMetadata, TimeSource, TimeValue,
//! };
//! use chrono::{DateTime, TimeZone, Utc};
//!
//! struct Almanac {
//!     metadata: SourceMetadata<Utc>,
//!     sunrise: Option<DateTime<Utc>>,
//! }
//!
//! impl Almanac {
//!     fn sunrise(&self) -> Result<Option<TimeValue>, AccessError> {
//!         Ok(self.sunrise.map(TimeValue::Instant))
//!     }
//! }
//!
//! impl TimeSource for Almanac {
//!     type Zone = Utc;
//!     const CAPABILITIES: &'static [Capability<Self>] =
//!         &[Capability::instant("getSunrise", Self::sunrise)];
//!
//!     fn kind(&self) -> SourceKind {
//!         SourceKind::Astronomical
//!     }
//!
//!     fn metadata(&self) -> &SourceMetadata<Utc> {
//!         &self.metadata
//!     }
//! }
//!
//! let almanac = Almanac {
//!     metadata: SourceMetadata {
//!         date: Utc.with_ymd_and_hms(2024, 3, 20, 0, 0, 0).unwrap(),
//!         calculator: "NOAA".into(),
//!         location: GeoLocation::new("Greenwich", 51.4779, 0.0, 0.0),
//!         time_zone_name: "Coordinated Universal Time".into(),
//!         time_zone_id: "UTC".into(),
//!     },
//!     sunrise: None,
//! };
//! assert_eq!(Almanac::CAPABILITIES[0].label(), Some("Sunrise"));
//! assert_eq!(almanac.metadata().time_zone_offset_hours(), 0.0);
//! ```

use crate::errors::{AccessError, CatalogError};
use chrono::{DateTime, Offset, TimeZone, Utc};
use std::fmt;
use std::str::FromStr;

/// Which calendar produced a document. Selects the root element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceKind {
    /// Plain astronomical times: sunrise, sunset, twilight.
    Astronomical,
    /// The extended calendar with every opinion's variants.
    Complex,
    /// The basic calendar with the common times only.
    Basic,
}

impl SourceKind {
    pub const ALL: [SourceKind; 3] = [Self::Astronomical, Self::Complex, Self::Basic];

    /// Identifier written to the `type` attribute.
    pub const fn id(self) -> &'static str {
        match self {
            SourceKind::Astronomical => "astronomical",
            SourceKind::Complex => "complex",
            SourceKind::Basic => "basic",
        }
    }

    /// Root element name; the closing tag uses the same name.
    pub const fn root_tag(self) -> &'static str {
        match self {
            SourceKind::Astronomical => "AstronomicalTimes",
            SourceKind::Complex => "Zmanim",
            SourceKind::Basic => "BasicZmanim",
        }
    }
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for SourceKind {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.id().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CatalogError::UnknownKind(s.to_string()))
    }
}

/// Observer position as reported in document attributes.
#[derive(Debug, Clone, PartialEq)]
pub struct GeoLocation {
    pub name: String,
    /// Degrees, north positive.
    pub latitude: f64,
    /// Degrees, east positive.
    pub longitude: f64,
    /// Meters above sea level.
    pub elevation: f64,
}

impl GeoLocation {
    pub fn new(name: impl Into<String>, latitude: f64, longitude: f64, elevation: f64) -> Self {
        Self {
            name: name.into(),
            latitude,
            longitude,
            elevation,
        }
    }
}

/// Descriptive fields of a time source.
///
/// `date` is the reference date of the calendar in its own zone. The zone
/// used to render every instant in the document is taken from it.
#[derive(Debug, Clone)]
pub struct SourceMetadata<Tz: TimeZone> {
    pub date: DateTime<Tz>,
    /// Name of the astronomical calculator that produced the times.
    pub calculator: String,
    pub location: GeoLocation,
    /// Human readable zone name, e.g. "Eastern Standard Time".
    pub time_zone_name: String,
    /// Zone identifier, e.g. "America/New_York".
    pub time_zone_id: String,
}

impl<Tz: TimeZone> SourceMetadata<Tz> {
    pub fn zone(&self) -> Tz {
        self.date.timezone()
    }

    /// UTC offset at the reference date, including any daylight adjustment.
    pub fn time_zone_offset_hours(&self) -> f64 {
        f64::from(self.date.offset().fix().local_minus_utc()) / 3600.0
    }
}

/// A value produced by an accessor.
#[derive(Debug, Clone, PartialEq)]
pub enum TimeValue {
    Instant(DateTime<Utc>),
    /// Elapsed time in milliseconds.
    Millis(i64),
    Text(String),
}

impl fmt::Display for TimeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimeValue::Instant(t) => write!(f, "{}", t.to_rfc3339()),
            TimeValue::Millis(ms) => write!(f, "{ms}"),
            TimeValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<DateTime<Utc>> for TimeValue {
    fn from(t: DateTime<Utc>) -> Self {
        TimeValue::Instant(t)
    }
}

impl From<i64> for TimeValue {
    fn from(ms: i64) -> Self {
        TimeValue::Millis(ms)
    }
}

impl From<String> for TimeValue {
    fn from(s: String) -> Self {
        TimeValue::Text(s)
    }
}

/// Declared return kind of a capability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CapabilityKind {
    Instant,
    /// Integer milliseconds.
    Duration,
    /// Neither; never included in a catalog.
    Text,
}

/// Zero-argument accessor. `Ok(None)` means the value does not exist for
/// this date (e.g. no sunset during polar day).
pub type Accessor<S> = fn(&S) -> Result<Option<TimeValue>, AccessError>;

/// One registered getter of a time source.
pub struct Capability<S> {
    name: &'static str,
    kind: CapabilityKind,
    accessor: Accessor<S>,
}

impl<S> Capability<S> {
    pub const fn new(name: &'static str, kind: CapabilityKind, accessor: Accessor<S>) -> Self {
        Self {
            name,
            kind,
            accessor,
        }
    }

    pub const fn instant(name: &'static str, accessor: Accessor<S>) -> Self {
        Self::new(name, CapabilityKind::Instant, accessor)
    }

    pub const fn duration(name: &'static str, accessor: Accessor<S>) -> Self {
        Self::new(name, CapabilityKind::Duration, accessor)
    }

    pub const fn text(name: &'static str, accessor: Accessor<S>) -> Self {
        Self::new(name, CapabilityKind::Text, accessor)
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn kind(&self) -> CapabilityKind {
        self.kind
    }

    /// The part of a `get<Label>` name after `get`, if the name follows the
    /// convention and the label is a valid element name (an ASCII letter,
    /// then ASCII letters, digits or `_`).
    pub fn label(&self) -> Option<&'static str> {
        let label = self.name.strip_prefix("get")?;
        let mut chars = label.chars();
        let first = chars.next()?;
        if !first.is_ascii_alphabetic() {
            return None;
        }
        chars
            .all(|c| c.is_ascii_alphanumeric() || c == '_')
            .then_some(label)
    }

    pub fn invoke(&self, source: &S) -> Result<Option<TimeValue>, AccessError> {
        (self.accessor)(source)
    }
}

impl<S> fmt::Debug for Capability<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Capability")
            .field("name", &self.name)
            .field("kind", &self.kind)
            .finish_non_exhaustive()
    }
}

/// A calendar whose computed times can be catalogued.
///
/// Implementations are snapshots: accessors read already computed values and
/// must not depend on mutable state, so that serializing the same source
/// twice yields the same document.
pub trait TimeSource: Sized + 'static {
    /// Zone the calendar's local times are expressed in.
    type Zone: TimeZone;

    /// Every getter the source exposes, in discovery order.
    const CAPABILITIES: &'static [Capability<Self>];

    fn kind(&self) -> SourceKind;

    fn metadata(&self) -> &SourceMetadata<Self::Zone>;
}
