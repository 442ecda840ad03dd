use celestial_catalog::{
    AccessError, CatalogSerializer, Capability, GeoLocation, SourceKind, SourceMetadata,
    TimeSource, TimeValue,
};
use chrono::{DateTime, TimeZone, Utc};
use chrono_tz::America::New_York;
use chrono_tz::Tz;

struct Lakewood {
    kind: SourceKind,
    metadata: SourceMetadata<Tz>,
    sunrise: Option<DateTime<Utc>>,
    sunset: Option<DateTime<Utc>>,
    temporal_hour: i64,
}

impl Lakewood {
    fn on(kind: SourceKind, year: i32, month: u32, day: u32) -> Self {
        Self {
            kind,
            metadata: SourceMetadata {
                date: New_York.with_ymd_and_hms(year, month, day, 0, 0, 0).unwrap(),
                calculator: "US Naval Almanac Algorithm".to_string(),
                location: GeoLocation::new("Lakewood, NJ", 40.095965, -74.22213, 31.0),
                time_zone_name: "Eastern Standard Time".to_string(),
                time_zone_id: "America/New_York".to_string(),
            },
            sunrise: Some(Utc.with_ymd_and_hms(2024, 3, 20, 10, 57, 3).unwrap()),
            sunset: Some(Utc.with_ymd_and_hms(2024, 3, 20, 23, 10, 12).unwrap()),
            temporal_hour: 3_600_571,
        }
    }

    fn sunset(&self) -> Result<Option<TimeValue>, AccessError> {
        Ok(self.sunset.map(TimeValue::Instant))
    }

    fn sunrise(&self) -> Result<Option<TimeValue>, AccessError> {
        Ok(self.sunrise.map(TimeValue::Instant))
    }

    fn temporal_hour(&self) -> Result<Option<TimeValue>, AccessError> {
        Ok(Some(TimeValue::Millis(self.temporal_hour)))
    }

    fn chatzos(&self) -> Result<Option<TimeValue>, AccessError> {
        Err(AccessError::new("transit not computed"))
    }

    fn calculator_name(&self) -> Result<Option<TimeValue>, AccessError> {
        Ok(Some(TimeValue::Text(self.metadata.calculator.clone())))
    }
}

impl TimeSource for Lakewood {
    type Zone = Tz;

    const CAPABILITIES: &'static [Capability<Self>] = &[
        Capability::instant("getSunset", Self::sunset),
        Capability::duration("getTemporalHour", Self::temporal_hour),
        Capability::instant("getChatzos", Self::chatzos),
        Capability::instant("getSunrise", Self::sunrise),
        Capability::text("getCalculatorName", Self::calculator_name),
    ];

    fn kind(&self) -> SourceKind {
        self.kind
    }

    fn metadata(&self) -> &SourceMetadata<Tz> {
        &self.metadata
    }
}

#[test]
fn test_basic_document_scenario() {
    let source = Lakewood::on(SourceKind::Basic, 2024, 3, 20);
    let xml = CatalogSerializer::new().to_xml(&source).unwrap();

    let expected = "<BasicZmanim date=\"2024-03-20\" type=\"basic\" \
        algorithm=\"US Naval Almanac Algorithm\" location=\"Lakewood, NJ\" \
        latitude=\"40.095965\" longitude=\"-74.22213\" elevation=\"31.0\" \
        timeZoneName=\"Eastern Standard Time\" timeZoneID=\"America/New_York\" \
        timeZoneOffset=\"-4.0\">\n\
        \t<Sunrise>2024-03-20T06:57:03-04:00</Sunrise>\n\
        \t<Sunset>2024-03-20T19:10:12-04:00</Sunset>\n\
        \t<TemporalHour>PT1H0.571S</TemporalHour>\n\
        </BasicZmanim>";
    assert_eq!(xml, expected);
}

#[test]
fn test_failing_accessor_reported_as_skipped() {
    let source = Lakewood::on(SourceKind::Basic, 2024, 3, 20);
    let rendered = CatalogSerializer::new().document(&source).unwrap();

    assert_eq!(rendered.skipped.len(), 1);
    assert_eq!(rendered.skipped[0].label, "Chatzos");
    assert!(rendered
        .document
        .children()
        .iter()
        .all(|(label, _)| label != "Chatzos" && label != "CalculatorName"));
}

#[test]
fn test_serialization_is_idempotent() {
    let source = Lakewood::on(SourceKind::Complex, 2024, 3, 20);
    let serializer = CatalogSerializer::new();
    let first = serializer.to_xml(&source).unwrap();
    let second = serializer.to_xml(&source).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_root_tag_matches_closing_tag_for_every_kind() {
    for kind in SourceKind::ALL {
        let xml = CatalogSerializer::new()
            .to_xml(&Lakewood::on(kind, 2024, 3, 20))
            .unwrap();
        let root = kind.root_tag();
        assert!(xml.starts_with(&format!("<{root} ")), "{xml}");
        assert!(xml.ends_with(&format!("</{root}>")), "{xml}");
        assert!(xml.contains(&format!("type=\"{}\"", kind.id())));
    }
}

#[test]
fn test_standard_time_offset_attribute() {
    let source = Lakewood::on(SourceKind::Astronomical, 2024, 1, 15);
    let rendered = CatalogSerializer::new().document(&source).unwrap();
    let doc = &rendered.document;
    assert_eq!(doc.attribute("date"), Some("2024-01-15"));
    assert_eq!(doc.attribute("timeZoneOffset"), Some("-5.0"));
    // Instants keep the offset in effect at their own moment.
    assert_eq!(doc.children()[0].1, "2024-03-20T06:57:03-04:00");
}

#[test]
fn test_missing_values_follow_sorted_entries() {
    let mut source = Lakewood::on(SourceKind::Basic, 2024, 3, 20);
    source.sunset = None;
    source.temporal_hour = i64::MIN;
    let rendered = CatalogSerializer::new().document(&source).unwrap();

    let children: Vec<(&str, &str)> = rendered
        .document
        .children()
        .iter()
        .map(|(l, t)| (l.as_str(), t.as_str()))
        .collect();
    assert_eq!(
        children,
        [
            ("Sunrise", "2024-03-20T06:57:03-04:00"),
            ("Sunset", "N/A"),
            ("TemporalHour", "N/A"),
        ]
    );
}

#[test]
fn test_zero_and_large_durations() {
    let mut source = Lakewood::on(SourceKind::Basic, 2024, 3, 20);
    source.temporal_hour = 0;
    let xml = CatalogSerializer::new().to_xml(&source).unwrap();
    assert!(xml.contains("<TemporalHour></TemporalHour>"), "{xml}");

    source.temporal_hour = 3_000_000_000;
    let xml = CatalogSerializer::new().to_xml(&source).unwrap();
    assert!(xml.contains("<TemporalHour>PT833H20M</TemporalHour>"), "{xml}");
}

/// Registers values out of order, with one tied instant and one tied duration.
struct Shuffled {
    metadata: SourceMetadata<Utc>,
}

impl Shuffled {
    fn new() -> Self {
        Self {
            metadata: SourceMetadata {
                date: Utc.with_ymd_and_hms(2024, 3, 20, 0, 0, 0).unwrap(),
                calculator: "fixed".to_string(),
                location: GeoLocation::new("Greenwich", 51.4779, 0.0, 0.0),
                time_zone_name: "Coordinated Universal Time".to_string(),
                time_zone_id: "UTC".to_string(),
            },
        }
    }

    fn at(hour: u32) -> Result<Option<TimeValue>, AccessError> {
        Ok(Some(Utc.with_ymd_and_hms(2024, 3, 20, hour, 0, 0).unwrap().into()))
    }

    fn noon(&self) -> Result<Option<TimeValue>, AccessError> {
        Self::at(12)
    }

    fn dawn(&self) -> Result<Option<TimeValue>, AccessError> {
        Self::at(6)
    }

    fn five_seconds(&self) -> Result<Option<TimeValue>, AccessError> {
        Ok(Some(TimeValue::Millis(5_000)))
    }

    fn minus_seven_seconds(&self) -> Result<Option<TimeValue>, AccessError> {
        Ok(Some(TimeValue::Millis(-7_000)))
    }

    fn one_second(&self) -> Result<Option<TimeValue>, AccessError> {
        Ok(Some(TimeValue::Millis(1_000)))
    }
}

impl TimeSource for Shuffled {
    type Zone = Utc;

    const CAPABILITIES: &'static [Capability<Self>] = &[
        Capability::duration("getA", Self::five_seconds),
        Capability::instant("getT2", Self::noon),
        Capability::duration("getB", Self::minus_seven_seconds),
        Capability::instant("getT1", Self::dawn),
        Capability::duration("getC", Self::one_second),
        Capability::instant("getT3", Self::noon),
        Capability::duration("getD", Self::one_second),
    ];

    fn kind(&self) -> SourceKind {
        SourceKind::Astronomical
    }

    fn metadata(&self) -> &SourceMetadata<Utc> {
        &self.metadata
    }
}

#[test]
fn test_instants_then_durations_ascending_with_ties_in_registry_order() {
    let rendered = CatalogSerializer::new().document(&Shuffled::new()).unwrap();

    let children: Vec<(&str, &str)> = rendered
        .document
        .children()
        .iter()
        .map(|(l, t)| (l.as_str(), t.as_str()))
        .collect();
    assert_eq!(
        children,
        [
            ("T1", "2024-03-20T06:00:00Z"),
            ("T2", "2024-03-20T12:00:00Z"),
            ("T3", "2024-03-20T12:00:00Z"),
            ("B", "-PT7.000S"),
            ("C", "PT1.000S"),
            ("D", "PT1.000S"),
            ("A", "PT5.000S"),
        ]
    );
}
