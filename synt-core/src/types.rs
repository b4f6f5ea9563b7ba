//! Re-export of foundational types from `synt-types` and `paft`.
// Consolidated re-exports so downstream crates can depend on `synt-core` only

pub use synt_types::{
    AnalysisOutcome, DEFAULT_STEP, DateRange, Direction, Frequency, MovementAnalysis,
    MovementEvent, PriceSummary, RECOGNIZED_STEPS, Session, SessionTable, SyntConfig, SyntError,
    SyntReport, Threshold, ThresholdSet, ThresholdStat,
};

pub use paft::money::{Currency, IsoCurrency, Money};

pub use paft::market::responses::history::{Candle, HistoryMeta, HistoryResponse};

pub use rust_decimal::Decimal;
