//! Synt retrieves daily commodity price history and measures progressive
//! movements over fixed session intervals.
//!
//! Overview
//! - Retrieves history through registered [`HistorySource`] implementations,
//!   trying them in order until one returns data.
//! - Prepares the daily series to the configured cadence (daily, weekly or
//!   monthly).
//! - Runs the movement analysis: the series is cut into non-overlapping
//!   intervals of `step` sessions, and each interval's move is compared with
//!   every enabled threshold.
//! - Normalizes error handling through [`SyntError`] from `synt_core`.
//!
//! Key behaviors
//! - Each source call is bounded by a per-source timeout; an optional request
//!   timeout bounds the whole retrieval.
//! - Empty responses fall through to the next source. When no source has data
//!   the run fails with `NotFound`.
//! - A series too short for one interval is not an error; the report's
//!   [`SyntReport::outcome`] is `InsufficientData`.
//!
//! Example
//! ```rust,ignore
//! use std::sync::Arc;
//! use synt::{DateRange, Frequency, Synt};
//!
//! let synt = Synt::builder()
//!     .with_source(Arc::new(my_source))
//!     .frequency(Frequency::Weekly)
//!     .step(3)
//!     .build()?;
//! let report = synt.run(DateRange::new(start, end)?).await?;
//! for stat in &report.analysis.stats {
//!     println!("{}: {}", stat.name, stat.hit_rate_label());
//! }
//! ```
//!
//! See `demos/examples/` for runnable end-to-end demonstrations.
#![warn(missing_docs)]

pub(crate) mod core;
mod history;
mod run;
mod util;

pub use core::{Synt, SyntBuilder};
pub use util::collapse_errors;

// Re-export core types for convenience
pub use synt_core::{
    AnalysisOutcome, DEFAULT_STEP, DateRange, Decimal, Direction, Frequency, HistoryResponse,
    HistorySource, MovementAnalysis, MovementEvent, PriceSummary, RECOGNIZED_STEPS, Session,
    SessionTable, SyntConfig, SyntError, SyntReport, Threshold, ThresholdSet, ThresholdStat,
};
