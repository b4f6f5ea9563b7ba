//! Retrieval seam for daily price history.
//!
//! Sources wrap a market-data provider. They return the provider's history
//! response as-is; conversion into a session table happens in
//! [`crate::timeseries::history::sessions_from_history`].

use async_trait::async_trait;
use paft::market::responses::history::HistoryResponse;

use crate::{DateRange, SyntError};

/// A provider of daily OHLCV history for the analyzed contract.
#[async_trait]
pub trait HistorySource: Send + Sync {
    /// Human-readable source name used in errors and logs.
    fn name(&self) -> &'static str;

    /// Fetch daily history for the sessions in `range` (`start` inclusive,
    /// `end` exclusive).
    ///
    /// Non-trading days are expected to be absent. An empty response means
    /// the provider has no data for the range.
    async fn daily_history(&self, range: DateRange) -> Result<HistoryResponse, SyntError>;
}
