use std::time::Duration;

use async_trait::async_trait;
use synt_core::{DateRange, HistoryResponse, HistorySource, SyntError};

pub mod fixture;

/// Mock history source for CI-safe examples and tests.
///
/// Serves a deterministic WTI-like daily series (weekdays only). Builder
/// methods switch it to empty responses, forced failures or added latency.
#[derive(Debug, Clone)]
pub struct MockSource {
    name: &'static str,
    behavior: Behavior,
    delay: Option<Duration>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Behavior {
    Fixture,
    Empty,
    Fail,
}

impl Default for MockSource {
    fn default() -> Self {
        Self::new()
    }
}

impl MockSource {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            name: "synt-mock",
            behavior: Behavior::Fixture,
            delay: None,
        }
    }

    /// Report under a different source name.
    #[must_use]
    pub const fn named(mut self, name: &'static str) -> Self {
        self.name = name;
        self
    }

    /// Always answer with an empty history.
    #[must_use]
    pub const fn empty(mut self) -> Self {
        self.behavior = Behavior::Empty;
        self
    }

    /// Always fail with a source error.
    #[must_use]
    pub const fn failing(mut self) -> Self {
        self.behavior = Behavior::Fail;
        self
    }

    /// Sleep for `delay` before answering.
    #[must_use]
    pub const fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }
}

#[async_trait]
impl HistorySource for MockSource {
    fn name(&self) -> &'static str {
        self.name
    }

    async fn daily_history(&self, range: DateRange) -> Result<HistoryResponse, SyntError> {
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        match self.behavior {
            Behavior::Fixture => fixture::wti_history(range.start(), range.end()),
            Behavior::Empty => Ok(HistoryResponse {
                candles: vec![],
                actions: vec![],
                adjusted: false,
                meta: None,
                provider: (),
            }),
            Behavior::Fail => Err(SyntError::source_failure(
                self.name,
                format!("forced failure for {range}"),
            )),
        }
    }
}
