use chrono::{Datelike, NaiveDate, Weekday};
use rust_decimal::Decimal;
use synt_core::{Candle, Currency, HistoryMeta, HistoryResponse, IsoCurrency, Money, SyntError};

/// Prices in cents for one fixture session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixtureBar {
    pub open: i64,
    pub high: i64,
    pub low: i64,
    pub close: i64,
    pub volume: u64,
}

const fn mix(mut x: u64) -> u64 {
    x = x.wrapping_add(0x9E37_79B9_7F4A_7C15);
    x = (x ^ (x >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    x = (x ^ (x >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    x ^ (x >> 31)
}

#[allow(clippy::cast_possible_wrap)]
const fn cents(bits: u64, modulo: u64) -> i64 {
    (bits % modulo) as i64
}

/// WTI-like bar for `date`, or `None` on weekends.
///
/// The bar depends only on the date, so overlapping ranges agree.
#[must_use]
pub fn wti_bar(date: NaiveDate) -> Option<FixtureBar> {
    if matches!(date.weekday(), Weekday::Sat | Weekday::Sun) {
        return None;
    }
    let day = u64::from(date.num_days_from_ce().unsigned_abs());
    let bits = mix(day);

    // 46-day triangle wave between 62.00 and 74.65 plus up to 1.50 of noise
    let phase = cents(day, 46);
    let trend = if phase < 23 { phase } else { 46 - phase };
    let close = 6_200 + trend * 55 + cents(bits, 301) - 150;
    let open = close + cents(bits >> 16, 161) - 80;
    let high = open.max(close) + cents(bits >> 24, 121);
    let low = open.min(close) - cents(bits >> 32, 121);
    let volume = 150_000 + (bits >> 40) % 250_000;

    Some(FixtureBar {
        open,
        high,
        low,
        close,
        volume,
    })
}

fn usd(cents: i64) -> Result<Money, SyntError> {
    Money::new(Decimal::new(cents, 2), Currency::Iso(IsoCurrency::USD))
        .map_err(|e| SyntError::Data(format!("fixture price {cents}: {e}")))
}

fn candle(date: NaiveDate, bar: FixtureBar) -> Result<Candle, SyntError> {
    Ok(Candle {
        ts: date.and_time(chrono::NaiveTime::MIN).and_utc(),
        open: usd(bar.open)?.into(),
        high: usd(bar.high)?.into(),
        low: usd(bar.low)?.into(),
        close: usd(bar.close)?.into(),
        close_unadj: None,
        volume: Some(bar.volume),
        provider: (),
    })
}

/// Daily fixture history for every weekday in `[start, end)`.
///
/// # Errors
/// Returns `Err(SyntError::Data)` if a fixture price cannot be represented.
pub fn wti_history(start: NaiveDate, end: NaiveDate) -> Result<HistoryResponse, SyntError> {
    let candles = start
        .iter_days()
        .take_while(|d| *d < end)
        .filter_map(|d| wti_bar(d).map(|bar| (d, bar)))
        .map(|(d, bar)| candle(d, bar))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(HistoryResponse {
        candles,
        actions: vec![],
        adjusted: false,
        meta: Some(HistoryMeta {
            timezone: None,
            utc_offset_seconds: Some(0),
        }),
        provider: (),
    })
}
