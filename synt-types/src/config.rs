//! Configuration types shared by the orchestrator and the analysis core.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::SyntError;
use crate::threshold::ThresholdSet;

/// Step values offered to users; any positive step is accepted.
pub const RECOGNIZED_STEPS: [usize; 4] = [3, 5, 7, 10];

/// Default number of sessions per interval.
pub const DEFAULT_STEP: usize = 5;

/// Cadence the retrieved daily series is prepared to before analysis.
///
/// Deserializes through `FromStr`, so the short labels are accepted and an
/// unknown label fails with `SyntError::InvalidFrequency`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum Frequency {
    /// Keep daily sessions as retrieved.
    #[default]
    Daily,
    /// Aggregate into Monday-Sunday calendar weeks.
    Weekly,
    /// Aggregate into calendar months.
    Monthly,
}

impl Frequency {
    /// All supported frequencies in increasing coarseness.
    pub const ALL: [Self; 3] = [Self::Daily, Self::Weekly, Self::Monthly];

    /// Lowercase label, as accepted by `FromStr`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
        }
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Frequency {
    type Err = SyntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "daily" | "d" | "1d" => Ok(Self::Daily),
            "weekly" | "w" | "1w" => Ok(Self::Weekly),
            "monthly" | "m" | "1mo" => Ok(Self::Monthly),
            _ => Err(SyntError::InvalidFrequency(s.to_string())),
        }
    }
}

impl TryFrom<String> for Frequency {
    type Error = SyntError;

    fn try_from(label: String) -> Result<Self, Self::Error> {
        label.parse()
    }
}

/// Half-open calendar range `[start, end)` of requested sessions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawDateRange")]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

#[derive(Deserialize)]
struct RawDateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl TryFrom<RawDateRange> for DateRange {
    type Error = SyntError;

    fn try_from(raw: RawDateRange) -> Result<Self, Self::Error> {
        Self::new(raw.start, raw.end)
    }
}

impl DateRange {
    /// Create a range.
    ///
    /// # Errors
    /// Returns `Err(SyntError::InvalidArg)` unless `start` precedes `end`.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, SyntError> {
        if start >= end {
            return Err(SyntError::InvalidArg(format!(
                "start date {start} must precede end date {end}"
            )));
        }
        Ok(Self { start, end })
    }

    /// First date included in the range.
    #[must_use]
    pub const fn start(&self) -> NaiveDate {
        self.start
    }

    /// First date after the range.
    #[must_use]
    pub const fn end(&self) -> NaiveDate {
        self.end
    }

    /// True when `date` lies within `[start, end)`.
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date < self.end
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

/// Global configuration for the `Synt` orchestrator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SyntConfig {
    /// Cadence the retrieved series is prepared to before analysis.
    pub frequency: Frequency,
    /// Sessions per interval.
    pub step: usize,
    /// Movement thresholds in declaration order.
    pub thresholds: ThresholdSet,
    /// Timeout for each individual source request.
    pub source_timeout: Duration,
    /// Optional deadline for the whole retrieval across all sources.
    pub request_timeout: Option<Duration>,
}

impl Default for SyntConfig {
    fn default() -> Self {
        Self {
            frequency: Frequency::Daily,
            step: DEFAULT_STEP,
            thresholds: ThresholdSet::movm_defaults(),
            source_timeout: Duration::from_secs(5),
            request_timeout: None,
        }
    }
}

impl SyntConfig {
    /// Check the configuration for values the analysis cannot run with.
    ///
    /// # Errors
    /// - `SyntError::InvalidStep` if `step` is zero.
    /// - `SyntError::InvalidArg` if the source timeout is zero.
    pub fn validate(&self) -> Result<(), SyntError> {
        if self.step == 0 {
            return Err(SyntError::InvalidStep { step: self.step });
        }
        if self.source_timeout.is_zero() {
            return Err(SyntError::InvalidArg(
                "source timeout must be greater than zero".into(),
            ));
        }
        Ok(())
    }

    /// True when `step` is one of the values offered to users.
    #[must_use]
    pub fn is_recognized_step(&self) -> bool {
        RECOGNIZED_STEPS.contains(&self.step)
    }
}
