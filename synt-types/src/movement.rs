//! Movement events and per-threshold statistics.

use std::fmt;

use chrono::{Datelike, Month, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Direction of an interval's price move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// The closing price rose or stayed flat; measured against the high.
    Up,
    /// The closing price fell; measured against the low.
    Down,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Up => "up",
            Self::Down => "down",
        })
    }
}

/// One triggered threshold on one interval.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovementEvent {
    /// Calendar month (1-12) of the interval's end session.
    pub month: u32,
    /// Date of the interval's end session.
    pub date: NaiveDate,
    /// Direction of the move.
    pub direction: Direction,
    /// Close of the interval's start session.
    pub reference_price: Decimal,
    /// Name of the threshold that fired.
    pub threshold_name: String,
    /// Value of the threshold that fired.
    pub threshold_value: Decimal,
    /// High (up) or low (down) of the interval's end session.
    pub effective_price: Decimal,
}

impl MovementEvent {
    /// Day of month of the interval's end session.
    #[must_use]
    pub fn day(&self) -> u32 {
        self.date.day()
    }

    /// English month name, e.g. `"March"`.
    #[must_use]
    pub fn month_name(&self) -> &'static str {
        u8::try_from(self.month)
            .ok()
            .and_then(|m| Month::try_from(m).ok())
            .map_or("", |m| m.name())
    }

    /// Absolute distance between the effective and reference prices.
    #[must_use]
    pub fn movement(&self) -> Decimal {
        (self.effective_price - self.reference_price).abs()
    }
}

/// Hit statistics for one enabled threshold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThresholdStat {
    /// Threshold name.
    pub name: String,
    /// Threshold value.
    pub threshold_value: Decimal,
    /// Number of intervals on which the threshold fired.
    pub hit_count: usize,
    /// `hit_count / total_intervals`, or 0 when there were no intervals.
    pub hit_rate: f64,
}

impl ThresholdStat {
    /// Hit rate expressed as a percentage.
    #[must_use]
    pub fn hit_rate_percent(&self) -> f64 {
        self.hit_rate * 100.0
    }

    /// Hit rate formatted for display with two decimals, e.g. `"42.86%"`.
    #[must_use]
    pub fn hit_rate_label(&self) -> String {
        format!("{:.2}%", self.hit_rate_percent())
    }
}

/// Result of a movement analysis pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct MovementAnalysis {
    /// Step (sessions per interval) used for the pass.
    pub step: usize,
    /// Number of intervals compared.
    pub total_intervals: usize,
    /// Triggered events in generation order.
    pub events: Vec<MovementEvent>,
    /// One row per enabled threshold, in declaration order.
    pub stats: Vec<ThresholdStat>,
    /// Set when the table was too short to form a single interval.
    pub insufficient_data: bool,
}

impl MovementAnalysis {
    /// Events sorted by date, most recent first. Events on the same date keep
    /// their generation order.
    #[must_use]
    pub fn events_by_date_desc(&self) -> Vec<MovementEvent> {
        let mut out = self.events.clone();
        out.sort_by(|a, b| b.date.cmp(&a.date));
        out
    }

    /// Statistics row for a threshold name, if it was enabled.
    #[must_use]
    pub fn stat(&self, name: &str) -> Option<&ThresholdStat> {
        self.stats.iter().find(|s| s.name == name)
    }

    /// Events produced by one threshold, in generation order.
    pub fn events_for<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a MovementEvent> {
        self.events.iter().filter(move |e| e.threshold_name == name)
    }
}
