//! synt-core
//!
//! Core algorithms and traits shared across the synt workspace.
//!
//! - `types`: the session, threshold and movement data model.
//! - `timeseries`: provider history conversion and calendar resampling
//!   (the series preparer).
//! - `analysis`: the progressive movement analyzer.
//! - `summary`: closing-price statistics.
//! - `source`: the `HistorySource` retrieval trait.
//!
//! Everything except `source` is synchronous, allocation-light and free of
//! I/O; the same inputs always produce the same outputs.
//!
#![warn(missing_docs)]

/// Progressive movement detection and threshold statistics.
pub mod analysis;
/// Retrieval trait implemented by history sources.
pub mod source;
/// Closing-price statistics over a prepared table.
pub mod summary;
/// Time-series utilities for converting and resampling history.
pub mod timeseries;
pub mod types;

pub use analysis::{analyze, classify, interval_starts, threshold_stats};
pub use source::HistorySource;
pub use summary::summarize;
pub use timeseries::history::{session_date, sessions_from_history};
pub use timeseries::prepare::{period_end, prepare, prepare_with_label};
pub use types::*;
