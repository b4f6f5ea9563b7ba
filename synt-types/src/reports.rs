//! Report envelopes produced by the orchestrator.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::{DateRange, Frequency};
use crate::movement::MovementAnalysis;
use crate::session::SessionTable;

/// Closing-price statistics over a prepared table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceSummary {
    /// Number of sessions summarized.
    pub sessions: usize,
    /// Date of the first session.
    pub first_date: NaiveDate,
    /// Date of the last session.
    pub last_date: NaiveDate,
    /// Lowest close.
    pub min_close: Decimal,
    /// Arithmetic mean of closes.
    pub avg_close: Decimal,
    /// Highest close.
    pub max_close: Decimal,
}

/// How a completed run should be presented.
///
/// "No data at all" never reaches a report: it surfaces as
/// `SyntError::NotFound` from the run instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnalysisOutcome {
    /// Data was retrieved but too few sessions for one interval.
    InsufficientData,
    /// Intervals formed but no threshold fired.
    NoMovements,
    /// At least one threshold fired.
    Movements,
}

/// Everything a single analysis run produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SyntReport {
    /// Requested date range.
    pub range: DateRange,
    /// Frequency the series was prepared to.
    pub frequency: Frequency,
    /// Prepared table the analysis ran on.
    pub prepared: SessionTable,
    /// Closing-price statistics of the prepared table.
    pub summary: PriceSummary,
    /// Movement analysis result.
    pub analysis: MovementAnalysis,
}

impl SyntReport {
    /// Classify the run for presentation.
    #[must_use]
    pub fn outcome(&self) -> AnalysisOutcome {
        if self.analysis.insufficient_data || self.analysis.total_intervals == 0 {
            AnalysisOutcome::InsufficientData
        } else if self.analysis.events.is_empty() {
            AnalysisOutcome::NoMovements
        } else {
            AnalysisOutcome::Movements
        }
    }
}
