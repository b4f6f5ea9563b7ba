//! Time-series utilities shared by sources and the orchestrator.
//!
//! Modules include:
//! - `history`: convert provider history into a daily session table
//! - `prepare`: resample a daily table to the analysis cadence
/// Provider history conversion and currency checks.
pub mod history;
/// Calendar resampling of daily sessions.
pub mod prepare;
