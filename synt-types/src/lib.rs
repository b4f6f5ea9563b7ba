//! Synt-specific data transfer objects, errors, and configuration primitives.
#![warn(missing_docs)]

mod config;
mod error;
mod movement;
mod reports;
mod session;
mod threshold;

pub use config::{DEFAULT_STEP, DateRange, Frequency, RECOGNIZED_STEPS, SyntConfig};
pub use error::SyntError;
pub use movement::{Direction, MovementAnalysis, MovementEvent, ThresholdStat};
pub use reports::{AnalysisOutcome, PriceSummary, SyntReport};
pub use session::{Session, SessionTable};
pub use threshold::{Threshold, ThresholdSet};
