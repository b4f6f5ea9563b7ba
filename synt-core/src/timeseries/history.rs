use chrono::{DateTime, NaiveDate, TimeDelta, Utc};
use paft::market::responses::history::{Candle, HistoryMeta, HistoryResponse};
use paft::money::Currency;

use crate::timeseries::prepare::resample_by;
use crate::{Session, SessionTable, SyntError};

/// Trading date of `ts` in market local time.
///
/// Prefers the exchange timezone from `meta`, then a fixed UTC offset, and
/// falls back to the UTC calendar date.
#[must_use]
pub fn session_date(ts: DateTime<Utc>, meta: Option<&HistoryMeta>) -> NaiveDate {
    if let Some(m) = meta {
        if let Some(tz) = m.timezone {
            return ts.with_timezone(&tz).date_naive();
        }
        if let Some(shifted) = m
            .utc_offset_seconds
            .and_then(TimeDelta::try_seconds)
            .and_then(|off| ts.checked_add_signed(off))
        {
            return shifted.date_naive();
        }
    }
    ts.date_naive()
}

/// Ensure all candles in the series share one currency across their OHLC fields.
///
/// # Errors
/// Returns `Err(SyntError::Data)` if a candle mixes currencies or two candles
/// in the series use different currencies.
pub fn ensure_series_currency_uniform(candles: &[Candle]) -> Result<Option<Currency>, SyntError> {
    let mut series_cur: Option<Currency> = None;
    for c in candles {
        let cur = c.open.currency();
        if cur != c.high.currency() || cur != c.low.currency() || cur != c.close.currency() {
            return Err(SyntError::Data(format!(
                "currency mismatch within candle at {}",
                c.ts
            )));
        }
        match &series_cur {
            Some(s) if s != cur => {
                return Err(SyntError::Data(format!(
                    "currency mismatch across series at {}: expected {s:?}, got {cur:?}",
                    c.ts
                )));
            }
            Some(_) => {}
            None => series_cur = Some(cur.clone()),
        }
    }
    Ok(series_cur)
}

fn to_session(c: &Candle, meta: Option<&HistoryMeta>) -> Session {
    Session {
        date: session_date(c.ts, meta),
        open: c.open.amount(),
        high: c.high.amount(),
        low: c.low.amount(),
        close: c.close.amount(),
        volume: c.volume.unwrap_or(0),
    }
}

/// Convert a provider history response into a daily session table.
///
/// - Candles are ordered by timestamp and mapped to their market-local
///   trading date (see [`session_date`]).
/// - Candles sharing a trading date (e.g. intraday bars) collapse into one
///   session: first open, max high, min low, last close, summed volume.
/// - A missing volume counts as zero.
/// - Corporate actions and adjustment flags are ignored.
///
/// An empty response yields an empty table; rejecting it is left to the
/// analysis entry points.
///
/// # Errors
/// Returns `Err(SyntError::Data)` if currencies are mixed within a candle or
/// across the series.
pub fn sessions_from_history(resp: &HistoryResponse) -> Result<SessionTable, SyntError> {
    ensure_series_currency_uniform(&resp.candles)?;
    let meta = resp.meta.as_ref();

    let mut candles: Vec<&Candle> = resp.candles.iter().collect();
    candles.sort_by_key(|c| c.ts);
    let raw: Vec<Session> = candles.into_iter().map(|c| to_session(c, meta)).collect();

    // One timezone maps ascending timestamps to non-decreasing local dates, so
    // grouping adjacent sessions collapses every duplicate date.
    SessionTable::new(resample_by(&raw, Some)?)
}
