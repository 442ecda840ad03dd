use anyhow::Context;
use celestial_catalog::{
    AccessError, CatalogSerializer, Capability, GeoLocation, SourceKind, SourceMetadata,
    TimeSource, TimeValue,
};
use celestial_time::{DurationFormatter, FormatMode, FormatterConfig, InstantFormatter};
use chrono::{DateTime, TimeZone, Utc};
use chrono_tz::America::New_York;
use chrono_tz::Tz;

/// Precomputed times for one day, standing in for a real calculator.
struct DaySnapshot {
    metadata: SourceMetadata<Tz>,
    sunrise: DateTime<Utc>,
    sunset: DateTime<Utc>,
    temporal_hour: i64,
}

impl DaySnapshot {
    fn sunrise(&self) -> Result<Option<TimeValue>, AccessError> {
        Ok(Some(self.sunrise.into()))
    }

    fn sunset(&self) -> Result<Option<TimeValue>, AccessError> {
        Ok(Some(self.sunset.into()))
    }

    fn temporal_hour(&self) -> Result<Option<TimeValue>, AccessError> {
        Ok(Some(self.temporal_hour.into()))
    }

    fn solar_midnight(&self) -> Result<Option<TimeValue>, AccessError> {
        Err(AccessError::new("next-day ephemeris not loaded"))
    }
}

impl TimeSource for DaySnapshot {
    type Zone = Tz;

    const CAPABILITIES: &'static [Capability<Self>] = &[
        Capability::instant("getSunset", Self::sunset),
        Capability::instant("getSunrise", Self::sunrise),
        Capability::duration("getTemporalHour", Self::temporal_hour),
        Capability::instant("getSolarMidnight", Self::solar_midnight),
    ];

    fn kind(&self) -> SourceKind {
        SourceKind::Astronomical
    }

    fn metadata(&self) -> &SourceMetadata<Tz> {
        &self.metadata
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let snapshot = DaySnapshot {
        metadata: SourceMetadata {
            date: New_York
                .with_ymd_and_hms(2024, 3, 20, 0, 0, 0)
                .single()
                .context("local midnight is ambiguous")?,
            calculator: "US Naval Almanac Algorithm".to_string(),
            location: GeoLocation::new("Lakewood, NJ", 40.095965, -74.22213, 31.0),
            time_zone_name: "Eastern Standard Time".to_string(),
            time_zone_id: "America/New_York".to_string(),
        },
        sunrise: Utc
            .with_ymd_and_hms(2024, 3, 20, 10, 57, 3)
            .single()
            .context("invalid sunrise")?,
        sunset: Utc
            .with_ymd_and_hms(2024, 3, 20, 23, 10, 12)
            .single()
            .context("invalid sunset")?,
        temporal_hour: 3_660_571,
    };

    let rendered = CatalogSerializer::new().document(&snapshot)?;
    println!("{}\n", rendered.document.to_xml()?);
    for skipped in &rendered.skipped {
        println!("skipped {}: {}", skipped.label, skipped.error);
    }

    println!("\nTemporal hour in every duration mode:");
    for mode in [
        FormatMode::SexagesimalXsd,
        FormatMode::Sexagesimal,
        FormatMode::SexagesimalSeconds,
        FormatMode::SexagesimalMillis,
        FormatMode::XsdDuration,
    ] {
        let formatter = DurationFormatter::new(FormatterConfig::new(mode));
        println!(
            "  {:<20} {}",
            format!("{mode:?}"),
            formatter.fmt_millis(snapshot.temporal_hour)
        );
    }

    let local_sunrise = snapshot.sunrise.with_timezone(&New_York);
    let clock = InstantFormatter::new(FormatterConfig::default());
    println!("\nSunrise on a 12-hour clock: {}", clock.fmt(&local_sunrise)?);

    Ok(())
}
