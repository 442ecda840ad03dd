//! Capability discovery and classification.
//!
//! [`CatalogExtractor::extract`] walks a source's registry in declaration
//! order. A capability is included when its name follows the `get<Label>`
//! convention and its declared kind is Instant or Duration. Each included
//! accessor is invoked once and its value classified:
//!
//! | Accessor result | Entry |
//! |-----------------|-------|
//! | `Err(_)` | none; recorded in [`Extraction::skipped`] |
//! | `Ok(None)` | [`EntryValue::Other`]`("N/A")` |
//! | `Ok(Some(Instant(t)))` | [`EntryValue::Instant`]`(t)` |
//! | `Ok(Some(Millis(i64::MIN)))` | [`EntryValue::Other`]`("N/A")` |
//! | `Ok(Some(Millis(ms)))` | [`EntryValue::Duration`]`(ms)` |
//! | `Ok(Some(Text(s)))` | [`EntryValue::Other`]`(s)` |
//!
//! Extraction never fails as a whole. A broken accessor costs one entry.

use crate::errors::AccessError;
use crate::source::{CapabilityKind, TimeSource, TimeValue};
use celestial_time::constants::UNAVAILABLE_MILLIS;
use chrono::{DateTime, Utc};

/// Text written for a value that does not exist.
pub const NOT_AVAILABLE: &str = "N/A";

#[derive(Debug, Clone, PartialEq)]
pub enum EntryValue {
    Instant(DateTime<Utc>),
    /// Milliseconds.
    Duration(i64),
    /// Rendered verbatim.
    Other(String),
}

/// One labeled time value.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogEntry {
    pub label: String,
    pub value: EntryValue,
}

/// An accessor that failed and produced no entry.
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedEntry {
    pub label: String,
    pub error: AccessError,
}

/// Entries in discovery order, plus the accessors that were dropped.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Extraction {
    pub entries: Vec<CatalogEntry>,
    pub skipped: Vec<SkippedEntry>,
}

impl Extraction {
    pub fn is_complete(&self) -> bool {
        self.skipped.is_empty()
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct CatalogExtractor;

impl CatalogExtractor {
    pub fn extract<S: TimeSource>(source: &S) -> Extraction {
        let mut extraction = Extraction::default();

        for capability in S::CAPABILITIES {
            let Some(label) = capability.label() else {
                tracing::debug!(
                    accessor = capability.name(),
                    "name does not follow get<Label>, skipped"
                );
                continue;
            };
            if capability.kind() == CapabilityKind::Text {
                tracing::debug!(accessor = capability.name(), "not a time value, skipped");
                continue;
            }

            match capability.invoke(source) {
                Ok(value) => extraction.entries.push(CatalogEntry {
                    label: label.to_string(),
                    value: classify(value),
                }),
                Err(error) => {
                    tracing::warn!(
                        accessor = capability.name(),
                        error = %error,
                        "accessor failed, entry omitted"
                    );
                    extraction.skipped.push(SkippedEntry {
                        label: label.to_string(),
                        error,
                    });
                }
            }
        }

        extraction
    }
}

/// Maps an accessor result onto an entry value.
pub fn classify(value: Option<TimeValue>) -> EntryValue {
    match value {
        None => EntryValue::Other(NOT_AVAILABLE.to_string()),
        Some(TimeValue::Instant(t)) => EntryValue::Instant(t),
        Some(TimeValue::Millis(UNAVAILABLE_MILLIS)) => EntryValue::Other(NOT_AVAILABLE.to_string()),
        Some(TimeValue::Millis(ms)) => EntryValue::Duration(ms),
        Some(other @ TimeValue::Text(_)) => EntryValue::Other(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::{Capability, GeoLocation, SourceKind, SourceMetadata};
    use chrono::TimeZone;

    struct Fixture {
        metadata: SourceMetadata<Utc>,
    }

    impl Fixture {
        fn new() -> Self {
            Self {
                metadata: SourceMetadata {
                    date: Utc.with_ymd_and_hms(2024, 3, 20, 0, 0, 0).unwrap(),
                    calculator: "test".into(),
                    location: GeoLocation::new("nowhere", 0.0, 0.0, 0.0),
                    time_zone_name: "UTC".into(),
                    time_zone_id: "UTC".into(),
                },
            }
        }

        fn sunrise(&self) -> Result<Option<TimeValue>, AccessError> {
            Ok(Some(Utc.with_ymd_and_hms(2024, 3, 20, 6, 0, 0).unwrap().into()))
        }

        fn hour(&self) -> Result<Option<TimeValue>, AccessError> {
            Ok(Some(TimeValue::Millis(3_600_000)))
        }

        fn missing(&self) -> Result<Option<TimeValue>, AccessError> {
            Ok(None)
        }

        fn sentinel(&self) -> Result<Option<TimeValue>, AccessError> {
            Ok(Some(TimeValue::Millis(UNAVAILABLE_MILLIS)))
        }

        fn broken(&self) -> Result<Option<TimeValue>, AccessError> {
            Err(AccessError::new("no data"))
        }

        fn name(&self) -> Result<Option<TimeValue>, AccessError> {
            Ok(Some(TimeValue::Text("fixture".into())))
        }
    }

    impl TimeSource for Fixture {
        type Zone = Utc;

        const CAPABILITIES: &'static [Capability<Self>] = &[
            Capability::instant("getSunrise", Self::sunrise),
            Capability::duration("getTemporalHour", Self::hour),
            Capability::instant("getSunset", Self::missing),
            Capability::duration("getShaahZmanis", Self::sentinel),
            Capability::instant("getChatzos", Self::broken),
            Capability::text("getCalculatorName", Self::name),
            Capability::duration("getText", Self::name),
            Capability::instant("sunrise", Self::sunrise),
        ];

        fn kind(&self) -> SourceKind {
            SourceKind::Basic
        }

        fn metadata(&self) -> &SourceMetadata<Utc> {
            &self.metadata
        }
    }

    #[test]
    fn test_classifies_in_discovery_order() {
        let extraction = CatalogExtractor::extract(&Fixture::new());
        let labels: Vec<&str> = extraction.entries.iter().map(|e| e.label.as_str()).collect();
        assert_eq!(
            labels,
            ["Sunrise", "TemporalHour", "Sunset", "ShaahZmanis", "Text"]
        );
        assert!(matches!(extraction.entries[0].value, EntryValue::Instant(_)));
        assert_eq!(extraction.entries[1].value, EntryValue::Duration(3_600_000));
    }

    #[test]
    fn test_missing_and_sentinel_are_not_available() {
        let extraction = CatalogExtractor::extract(&Fixture::new());
        assert_eq!(extraction.entries[2].value, EntryValue::Other("N/A".into()));
        assert_eq!(extraction.entries[3].value, EntryValue::Other("N/A".into()));
    }

    #[test]
    fn test_unexpected_value_kind_falls_back_to_text() {
        let extraction = CatalogExtractor::extract(&Fixture::new());
        assert_eq!(extraction.entries[4].value, EntryValue::Other("fixture".into()));
    }

    #[test]
    fn test_failing_accessor_is_recorded_not_propagated() {
        let extraction = CatalogExtractor::extract(&Fixture::new());
        assert!(!extraction.is_complete());
        assert_eq!(extraction.skipped.len(), 1);
        assert_eq!(extraction.skipped[0].label, "Chatzos");
        assert_eq!(extraction.skipped[0].error.message(), "no data");
        assert!(extraction.entries.iter().all(|e| e.label != "Chatzos"));
    }

    #[test]
    fn test_classify_table() {
        assert_eq!(classify(None), EntryValue::Other(NOT_AVAILABLE.into()));
        assert_eq!(classify(Some(TimeValue::Millis(0))), EntryValue::Duration(0));
        assert_eq!(classify(Some(TimeValue::Millis(-5))), EntryValue::Duration(-5));
        assert_eq!(
            classify(Some(TimeValue::Millis(i64::MIN + 1))),
            EntryValue::Duration(i64::MIN + 1)
        );
        assert_eq!(
            classify(Some(TimeValue::Millis(i64::MIN))),
            EntryValue::Other(NOT_AVAILABLE.into())
        );
    }
}
