use std::sync::Arc;
use std::time::Duration;

use synt_core::{
    DateRange, HistoryResponse, HistorySource, SessionTable, SyntError, session_date,
    sessions_from_history,
};

use crate::Synt;
use crate::core::tag_err;
use crate::util::collapse_errors;

const CAPABILITY: &str = "history";

type Attempt = (&'static str, Result<SessionTable, SyntError>);

impl Synt {
    /// Retrieve the daily session table for `range`.
    ///
    /// Sources are tried one at a time in registration order, each bounded by
    /// the configured source timeout. An error, an empty response or a
    /// response that fails conversion moves on to the next source; the first
    /// non-empty table wins. Candles whose trading date falls outside `range`
    /// are dropped.
    ///
    /// # Errors
    /// - `NotFound` when every source answered without data for the range.
    /// - `AllSourcesTimedOut` when every source timed out.
    /// - `AllSourcesFailed` with the individual errors otherwise.
    /// - `RequestTimeout` when the optional overall deadline is exceeded.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "synt::history::fetch_sessions",
            skip(self),
            fields(sources = self.sources.len()),
        )
    )]
    pub async fn fetch_sessions(&self, range: DateRange) -> Result<SessionTable, SyntError> {
        let attempts = self.fetch_with_deadline(range).await?;
        Self::finalize_attempts(attempts, range)
    }

    async fn fetch_with_deadline(&self, range: DateRange) -> Result<Vec<Attempt>, SyntError> {
        let fut = Self::sequential_history(&self.sources, range, self.cfg.source_timeout);
        if let Some(deadline) = self.cfg.request_timeout {
            (tokio::time::timeout(deadline, fut).await)
                .map_or_else(|_| Err(SyntError::request_timeout(CAPABILITY)), Ok)
        } else {
            Ok(fut.await)
        }
    }

    async fn sequential_history(
        sources: &[Arc<dyn HistorySource>],
        range: DateRange,
        source_timeout: Duration,
    ) -> Vec<Attempt> {
        let mut results = Vec::new();
        for s in sources {
            let name = s.name();
            let fut = s.daily_history(range);
            let res = Self::source_call_with_timeout(name, CAPABILITY, source_timeout, fut)
                .await
                .and_then(|hr| sessions_from_history(&in_range(hr, range)))
                .map_err(|e| tag_err(name, e));
            let done = matches!(&res, Ok(t) if !t.is_empty());
            #[cfg(feature = "tracing")]
            match &res {
                Ok(t) if done => tracing::debug!(source = name, sessions = t.len(), "history retrieved"),
                Ok(_) => tracing::debug!(source = name, "empty history; trying next source"),
                Err(e) => tracing::warn!(source = name, error = %e, "source failed"),
            }
            results.push((name, res));
            if done {
                break;
            }
        }
        results
    }

    fn finalize_attempts(
        attempts: Vec<Attempt>,
        range: DateRange,
    ) -> Result<SessionTable, SyntError> {
        let attempted = attempts.len();
        let mut errors: Vec<SyntError> = Vec::new();

        for (_, res) in attempts {
            match res {
                Ok(table) if !table.is_empty() => return Ok(table),
                Ok(_) | Err(SyntError::NotFound { .. }) => {}
                Err(e) => errors.push(e),
            }
        }

        Err(collapse_errors(
            CAPABILITY,
            attempted,
            errors,
            format!("history for {range}"),
        ))
    }
}

fn in_range(mut hr: HistoryResponse, range: DateRange) -> HistoryResponse {
    let meta = hr.meta.as_ref();
    hr.candles.retain(|c| range.contains(session_date(c.ts, meta)));
    hr
}
