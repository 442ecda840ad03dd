//! Catalogs of calendar times, serialized as tagged XML.
//!
//! A calendar exposes its computed times through a static registry of
//! `get<Label>` accessors ([`TimeSource`]). This crate collects those values,
//! classifies them as instants, durations or other text, sorts them, and
//! writes one XML document with the calendar's metadata as attributes.
//!
//! # Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`source`] | [`TimeSource`] trait, [`Capability`] registry, [`SourceKind`], [`SourceMetadata`] |
//! | [`extract`] | [`CatalogExtractor`]: discovery, classification, skipped-entry diagnostics |
//! | [`serialize`] | [`CatalogSerializer`]: sorting and document assembly |
//! | [`document`] | [`Document`] and its `quick-xml` text form |
//! | [`errors`] | [`CatalogError`], [`CatalogResult`], [`AccessError`] |
//!
//! # Quick Start
//!
//! ```ignore
//! use celestial_catalog::CatalogSerializer;
//!
//! let serializer = CatalogSerializer::new();
//! let rendered = serializer.document(&calendar)?;
//! for skipped in &rendered.skipped {
//!     eprintln!("{} unavailable: {}", skipped.label, skipped.error);
//! }
//! println!("{}", rendered.document.to_xml()?);
//! ```
//!
//! # Logging
//!
//! Failed accessors are reported through `tracing` at `warn` level; skipped
//! registry entries and document summaries at `debug`. No subscriber is
//! installed by the library.

pub mod document;
pub mod errors;
pub mod extract;
pub mod serialize;
pub mod source;

pub use document::Document;
pub use errors::{AccessError, CatalogError, CatalogResult};
pub use extract::{
    classify, CatalogEntry, CatalogExtractor, EntryValue, Extraction, SkippedEntry, NOT_AVAILABLE,
};
pub use serialize::{CatalogDocument, CatalogSerializer};
pub use source::{
    Accessor, Capability, CapabilityKind, GeoLocation, SourceKind, SourceMetadata, TimeSource,
    TimeValue,
};
