// Scripted history source and fixtures shared by the orchestrator tests.
#![allow(dead_code)]

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use chrono::{NaiveDate, TimeZone, Utc};
use synt_core::{
    Candle, Currency, DateRange, HistoryResponse, HistorySource, IsoCurrency, Money, SyntError,
};
use tokio::time::sleep;

type HistoryFn = dyn Fn(DateRange) -> Result<HistoryResponse, SyntError> + Send + Sync;

pub struct MockSource {
    name: &'static str,
    delay: Duration,
    history_fn: Arc<HistoryFn>,
    calls: AtomicUsize,
}

impl MockSource {
    pub fn builder() -> MockSourceBuilder {
        MockSourceBuilder::new()
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl HistorySource for MockSource {
    fn name(&self) -> &'static str {
        self.name
    }

    async fn daily_history(&self, range: DateRange) -> Result<HistoryResponse, SyntError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if !self.delay.is_zero() {
            sleep(self.delay).await;
        }
        (self.history_fn)(range)
    }
}

pub struct MockSourceBuilder {
    name: &'static str,
    delay: Duration,
    history_fn: Arc<HistoryFn>,
}

impl MockSourceBuilder {
    pub fn new() -> Self {
        Self {
            name: "mock",
            delay: Duration::ZERO,
            history_fn: Arc::new(|_| Ok(empty())),
        }
    }

    pub fn name(mut self, name: &'static str) -> Self {
        self.name = name;
        self
    }

    pub fn delay(mut self, d: Duration) -> Self {
        self.delay = d;
        self
    }

    pub fn returns_history_ok(mut self, resp: HistoryResponse) -> Self {
        self.history_fn = Arc::new(move |_| Ok(resp.clone()));
        self
    }

    pub fn returns_err(mut self, err: SyntError) -> Self {
        self.history_fn = Arc::new(move |_| Err(err.clone()));
        self
    }

    pub fn build(self) -> Arc<MockSource> {
        Arc::new(MockSource {
            name: self.name,
            delay: self.delay,
            history_fn: self.history_fn,
            calls: AtomicUsize::new(0),
        })
    }
}

/// Build a USD Money amount without unwrap noise in tests.
pub fn usd(amount: &str) -> Money {
    Money::from_canonical_str(amount, Currency::Iso(IsoCurrency::USD)).unwrap()
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn range(start: NaiveDate, end: NaiveDate) -> DateRange {
    DateRange::new(start, end).unwrap()
}

/// Candle at midnight UTC of `day`; open equals close.
pub fn candle(day: NaiveDate, close: &str, high: &str, low: &str) -> Candle {
    Candle {
        ts: Utc.from_utc_datetime(&day.and_hms_opt(0, 0, 0).unwrap()),
        open: usd(close).into(),
        high: usd(high).into(),
        low: usd(low).into(),
        close: usd(close).into(),
        close_unadj: None,
        volume: Some(1_000),
        provider: (),
    }
}

pub fn history(candles: Vec<Candle>) -> HistoryResponse {
    HistoryResponse {
        candles,
        actions: vec![],
        adjusted: false,
        meta: None,
        provider: (),
    }
}

pub fn empty() -> HistoryResponse {
    history(vec![])
}

/// Five weekday sessions 2026-03-02..06: one up move of 3.00 at step 3.
pub fn five_sessions() -> HistoryResponse {
    history(vec![
        candle(date(2026, 3, 2), "70.00", "70.50", "69.50"),
        candle(date(2026, 3, 3), "71.00", "71.40", "70.10"),
        candle(date(2026, 3, 4), "69.00", "69.80", "68.70"),
        candle(date(2026, 3, 5), "72.00", "73.00", "71.60"),
        candle(date(2026, 3, 6), "68.00", "68.90", "65.00"),
    ])
}

pub fn march_2026() -> DateRange {
    range(date(2026, 3, 1), date(2026, 4, 1))
}
