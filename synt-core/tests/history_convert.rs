use chrono::{NaiveDate, TimeZone, Utc};
use synt_core::{
    Candle, Currency, Decimal, HistoryMeta, HistoryResponse, IsoCurrency, Money, SyntError,
    session_date, sessions_from_history,
};

fn money(s: &str, iso: IsoCurrency) -> Money {
    Money::from_canonical_str(s, Currency::Iso(iso)).unwrap()
}

fn usd(s: &str) -> Money {
    money(s, IsoCurrency::USD)
}

fn candle(ts: i64, o: &str, h: &str, l: &str, c: &str, volume: Option<u64>) -> Candle {
    Candle {
        ts: Utc.timestamp_opt(ts, 0).unwrap(),
        open: usd(o).into(),
        high: usd(h).into(),
        low: usd(l).into(),
        close: usd(c).into(),
        close_unadj: None,
        volume,
        provider: (),
    }
}

fn response(candles: Vec<Candle>, meta: Option<HistoryMeta>) -> HistoryResponse {
    HistoryResponse {
        candles,
        actions: vec![],
        adjusted: false,
        meta,
        provider: (),
    }
}

fn px(s: &str) -> Decimal {
    s.parse().unwrap()
}

// 2025-09-01T00:00:00Z
const MON: i64 = 1_756_684_800;
const DAY: i64 = 86_400;
const HOUR: i64 = 3_600;

#[test]
fn daily_candles_map_to_sessions() {
    let resp = response(
        vec![
            candle(MON + DAY, "65.10", "66.00", "64.90", "65.80", Some(200)),
            candle(MON, "64.00", "65.50", "63.80", "65.10", Some(100)),
        ],
        None,
    );

    let table = sessions_from_history(&resp).unwrap();
    assert_eq!(table.len(), 2);
    assert_eq!(table[0].date, NaiveDate::from_ymd_opt(2025, 9, 1).unwrap());
    assert_eq!(table[0].close, px("65.10"));
    assert_eq!(table[1].high, px("66.00"));
    assert_eq!(table[1].volume, 200);
}

#[test]
fn missing_volume_counts_as_zero() {
    let resp = response(vec![candle(MON, "1.00", "1.00", "1.00", "1.00", None)], None);
    assert_eq!(sessions_from_history(&resp).unwrap()[0].volume, 0);
}

#[test]
fn intraday_bars_collapse_to_one_session() {
    let resp = response(
        vec![
            candle(MON + 14 * HOUR, "64.00", "64.60", "63.90", "64.50", Some(10)),
            candle(MON + 15 * HOUR, "64.50", "65.20", "64.40", "65.00", Some(20)),
            candle(MON + 16 * HOUR, "65.00", "65.10", "63.50", "64.20", None),
        ],
        None,
    );

    let table = sessions_from_history(&resp).unwrap();
    assert_eq!(table.len(), 1);
    let s = table[0];
    assert_eq!(s.open, px("64.00"));
    assert_eq!(s.high, px("65.20"));
    assert_eq!(s.low, px("63.50"));
    assert_eq!(s.close, px("64.20"));
    assert_eq!(s.volume, 30);
}

#[test]
fn exchange_timezone_decides_the_trading_date() {
    // 23:30 UTC on Aug 31 is already Sep 1 in Rome (UTC+2 in summer)
    let ts = Utc.timestamp_opt(MON - HOUR / 2, 0).unwrap();
    let rome = HistoryMeta {
        timezone: Some(chrono_tz::Europe::Rome),
        utc_offset_seconds: None,
    };
    let offset_only = HistoryMeta {
        timezone: None,
        utc_offset_seconds: Some(-5 * HOUR),
    };

    assert_eq!(session_date(ts, Some(&rome)), NaiveDate::from_ymd_opt(2025, 9, 1).unwrap());
    assert_eq!(
        session_date(ts, Some(&offset_only)),
        NaiveDate::from_ymd_opt(2025, 8, 31).unwrap()
    );
    assert_eq!(session_date(ts, None), NaiveDate::from_ymd_opt(2025, 8, 31).unwrap());
}

#[test]
fn timezone_can_merge_bars_across_utc_midnight() {
    let resp = response(
        vec![
            candle(MON - HOUR / 2, "70.00", "70.20", "69.90", "70.10", Some(1)),
            candle(MON + HOUR, "70.10", "70.50", "70.00", "70.40", Some(2)),
        ],
        Some(HistoryMeta {
            timezone: Some(chrono_tz::Europe::Rome),
            utc_offset_seconds: None,
        }),
    );
    let table = sessions_from_history(&resp).unwrap();
    assert_eq!(table.len(), 1);
    assert_eq!(table[0].date, NaiveDate::from_ymd_opt(2025, 9, 1).unwrap());
    assert_eq!(table[0].volume, 3);
}

#[test]
fn mixed_currencies_are_rejected() {
    let mut eur = candle(MON + DAY, "1.00", "1.00", "1.00", "1.00", None);
    eur.open = money("1.00", IsoCurrency::EUR).into();
    eur.high = money("1.00", IsoCurrency::EUR).into();
    eur.low = money("1.00", IsoCurrency::EUR).into();
    eur.close = money("1.00", IsoCurrency::EUR).into();

    let across = response(vec![candle(MON, "1.00", "1.00", "1.00", "1.00", None), eur], None);
    assert!(matches!(sessions_from_history(&across), Err(SyntError::Data(_))));

    let mut within = candle(MON, "1.00", "1.00", "1.00", "1.00", None);
    within.close = money("1.00", IsoCurrency::EUR).into();
    assert!(matches!(
        sessions_from_history(&response(vec![within], None)),
        Err(SyntError::Data(_))
    ));
}

#[test]
fn empty_response_yields_empty_table() {
    let table = sessions_from_history(&response(vec![], None)).unwrap();
    assert!(table.is_empty());
}
