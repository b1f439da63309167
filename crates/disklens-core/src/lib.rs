/// DiskLens Core — snapshot ingestion, classification, and analysis.
///
/// This crate contains all analysis logic with zero CLI dependencies.
/// It consumes one disk-usage snapshot (a WizTree-style CSV export or an
/// equivalent directory-walk export) per invocation and answers aggregate
/// and drill-down queries over it. It never walks a filesystem itself and
/// never deletes, moves, or modifies anything.
///
/// # Modules
///
/// - [`model`] — Entry records, path helpers, byte-size conversion.
/// - [`ingest`] — Streaming CSV reader with tolerant header matching.
/// - [`index`] — Sorted-path index: lookup, prefix grouping, rollups.
/// - [`classify`] — Rule-driven cleanup classification engine.
/// - [`analysis`] — Summary, largest, by-type, folder views, cleanable, stale.
/// - [`query`] — Glob search and the condition-filter language.
/// - [`report`] — Fixed JSON schemas, one per command.
pub mod analysis;
pub mod classify;
pub mod error;
pub mod index;
pub mod ingest;
pub mod model;
pub mod query;
pub mod report;

pub use error::Error;
pub use index::PathIndex;
pub use ingest::Dataset;
pub use model::{Entry, Platform};
