//! Sorting and document assembly.
//!
//! [`CatalogSerializer`] turns an [`Extraction`] into a [`Document`]:
//!
//! 1. Instants, ascending, rendered as xsd:dateTime in the source's zone
//! 2. Durations, ascending, rendered as xsd:duration
//! 3. Everything else, in discovery order, verbatim
//!
//! Both sorts are stable, so equal values keep registry order. The root
//! element and the `type` attribute come from [`SourceKind`](crate::SourceKind).
//! Attributes follow in a fixed order: `date`, `type`, `algorithm`,
//! `location`, `latitude`, `longitude`, `elevation`, `timeZoneName`,
//! `timeZoneID`, `timeZoneOffset`.

use crate::document::Document;
use crate::errors::CatalogResult;
use crate::extract::{CatalogExtractor, EntryValue, Extraction, SkippedEntry};
use crate::source::TimeSource;
use celestial_time::{Duration, DurationFormatter, FormatterConfig, InstantFormatter};
use chrono::{DateTime, TimeZone, Utc};
use std::fmt::Display;

/// A document together with the accessors that could not contribute to it.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogDocument {
    pub document: Document,
    pub skipped: Vec<SkippedEntry>,
}

/// Builds catalog documents with xsd:dateTime and xsd:duration children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogSerializer {
    durations: DurationFormatter,
    instants: InstantFormatter,
}

impl Default for CatalogSerializer {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogSerializer {
    pub fn new() -> Self {
        let config = FormatterConfig::xsd();
        Self {
            durations: DurationFormatter::new(config.clone()),
            instants: InstantFormatter::new(config),
        }
    }

    /// Extracts, sorts and assembles the document for `source`.
    pub fn document<S>(&self, source: &S) -> CatalogResult<CatalogDocument>
    where
        S: TimeSource,
        <S::Zone as TimeZone>::Offset: Display,
    {
        let extraction = CatalogExtractor::extract(source);
        self.assemble(source, extraction)
    }

    /// Renders the document for `source` as XML text.
    pub fn to_xml<S>(&self, source: &S) -> CatalogResult<String>
    where
        S: TimeSource,
        <S::Zone as TimeZone>::Offset: Display,
    {
        self.document(source)?.document.to_xml()
    }

    /// Assembles a document from an extraction already taken from `source`.
    pub fn assemble<S>(&self, source: &S, extraction: Extraction) -> CatalogResult<CatalogDocument>
    where
        S: TimeSource,
        <S::Zone as TimeZone>::Offset: Display,
    {
        let metadata = source.metadata();
        let kind = source.kind();
        let zone = metadata.zone();

        let mut document = Document::new(kind.root_tag());
        document.push_attribute("date", metadata.date.date_naive().format("%Y-%m-%d").to_string());
        document.push_attribute("type", kind.id());
        document.push_attribute("algorithm", metadata.calculator.as_str());
        document.push_attribute("location", metadata.location.name.as_str());
        document.push_attribute("latitude", real(metadata.location.latitude));
        document.push_attribute("longitude", real(metadata.location.longitude));
        document.push_attribute("elevation", real(metadata.location.elevation));
        document.push_attribute("timeZoneName", metadata.time_zone_name.as_str());
        document.push_attribute("timeZoneID", metadata.time_zone_id.as_str());
        document.push_attribute("timeZoneOffset", real(metadata.time_zone_offset_hours()));

        let mut instants: Vec<(String, DateTime<Utc>)> = Vec::new();
        let mut durations: Vec<(String, i64)> = Vec::new();
        let mut others: Vec<(String, String)> = Vec::new();
        for entry in extraction.entries {
            match entry.value {
                EntryValue::Instant(t) => instants.push((entry.label, t)),
                EntryValue::Duration(ms) => durations.push((entry.label, ms)),
                EntryValue::Other(text) => others.push((entry.label, text)),
            }
        }
        instants.sort_by_key(|(_, t)| *t);
        durations.sort_by_key(|(_, ms)| *ms);

        tracing::debug!(
            kind = %kind,
            instants = instants.len(),
            durations = durations.len(),
            others = others.len(),
            skipped = extraction.skipped.len(),
            "assembling catalog document"
        );

        for (label, t) in instants {
            let text = self.instants.fmt(&t.with_timezone(&zone))?;
            document.push_child(label, text);
        }
        for (label, ms) in durations {
            document.push_child(label, self.durations.fmt(Duration::from_millis(ms)));
        }
        for (label, text) in others {
            document.push_child(label, text);
        }

        Ok(CatalogDocument {
            document,
            skipped: extraction.skipped,
        })
    }
}

/// Real-number attribute text; always keeps a fractional part (`-5.0`, `31.0`).
fn real(value: f64) -> String {
    format!("{value:?}")
}
