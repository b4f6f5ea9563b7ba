use chrono::{Datelike, Days, NaiveDate};

use crate::{Frequency, Session, SessionTable, SyntError};

/// Last day of the Monday-Sunday week containing `date`.
fn week_end(date: NaiveDate) -> Option<NaiveDate> {
    let to_sunday = 6 - u64::from(date.weekday().num_days_from_monday());
    date.checked_add_days(Days::new(to_sunday))
}

/// Last calendar day of the month containing `date`.
fn month_end(date: NaiveDate) -> Option<NaiveDate> {
    let (year, month) = if date.month() == 12 {
        (date.year().checked_add(1)?, 1)
    } else {
        (date.year(), date.month() + 1)
    };
    NaiveDate::from_ymd_opt(year, month, 1)?.pred_opt()
}

/// Period-end anchor of `date` for the given cadence.
///
/// Daily sessions anchor to themselves.
#[must_use]
pub fn period_end(date: NaiveDate, frequency: Frequency) -> Option<NaiveDate> {
    match frequency {
        Frequency::Daily => Some(date),
        Frequency::Weekly => week_end(date),
        Frequency::Monthly => month_end(date),
    }
}

struct BucketAgg {
    anchor: NaiveDate,
    open: rust_decimal::Decimal,
    high: rust_decimal::Decimal,
    low: rust_decimal::Decimal,
    close: rust_decimal::Decimal,
    vol_sum: u128,
}

impl BucketAgg {
    fn start(anchor: NaiveDate, s: &Session) -> Self {
        Self {
            anchor,
            open: s.open,
            high: s.high,
            low: s.low,
            close: s.close,
            vol_sum: u128::from(s.volume),
        }
    }

    fn absorb(&mut self, s: &Session) {
        if s.high > self.high {
            self.high = s.high;
        }
        if s.low < self.low {
            self.low = s.low;
        }
        self.close = s.close;
        self.vol_sum += u128::from(s.volume);
    }

    fn finish(self) -> Session {
        Session {
            date: self.anchor,
            open: self.open,
            high: self.high,
            low: self.low,
            close: self.close,
            volume: u64::try_from(self.vol_sum.min(u128::from(u64::MAX))).unwrap_or(u64::MAX),
        }
    }
}

/// Group date-ordered sessions by a period-end function and aggregate OHLCV
/// within each group.
///
/// # Errors
/// Returns `Err(SyntError::Data)` if the period of a session falls outside
/// the representable calendar.
pub(crate) fn resample_by<'a, I, F>(sessions: I, period_of: F) -> Result<Vec<Session>, SyntError>
where
    I: IntoIterator<Item = &'a Session>,
    F: Fn(NaiveDate) -> Option<NaiveDate>,
{
    let mut out: Vec<Session> = Vec::new();
    let mut cur: Option<BucketAgg> = None;

    for s in sessions {
        let anchor = period_of(s.date).ok_or_else(|| {
            SyntError::Data(format!("no calendar period end for session {}", s.date))
        })?;
        if let Some(agg) = cur.as_mut().filter(|a| a.anchor == anchor) {
            agg.absorb(s);
            continue;
        }
        if let Some(done) = cur.replace(BucketAgg::start(anchor, s)) {
            out.push(done.finish());
        }
    }
    if let Some(done) = cur {
        out.push(done.finish());
    }
    Ok(out)
}

/// Prepare a raw daily table for analysis at the requested frequency.
///
/// - `Daily` returns the input table itself (shared storage, no copy).
/// - `Weekly` groups Monday-Sunday calendar weeks; `Monthly` groups calendar
///   months. Each non-empty period yields one session:
///   - Open  = first open of the period
///   - High  = max high
///   - Low   = min low
///   - Close = last close of the period
///   - Volume = sum of volumes (saturating at `u64::MAX`)
///   - Date  = the period end (Sunday of the week, last day of the month)
///
/// # Errors
/// - `SyntError::EmptyInput` if `raw` holds no sessions.
/// - `SyntError::Data` if a session's period end is past the last
///   representable date.
///
/// ```
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
/// use synt_core::{Frequency, Session, SessionTable, prepare};
///
/// let day = |d: u32, close: i64| Session {
///     date: NaiveDate::from_ymd_opt(2025, 9, d).unwrap(),
///     open: Decimal::from(close),
///     high: Decimal::from(close + 1),
///     low: Decimal::from(close - 1),
///     close: Decimal::from(close),
///     volume: 10,
/// };
/// // Mon 1 .. Fri 5 September 2025
/// let raw = SessionTable::new((1..=5).map(|d| day(d, 60 + i64::from(d))).collect()).unwrap();
/// let weekly = prepare(&raw, Frequency::Weekly).unwrap();
/// assert_eq!(weekly.len(), 1);
/// assert_eq!(weekly[0].date, NaiveDate::from_ymd_opt(2025, 9, 7).unwrap());
/// assert_eq!(weekly[0].volume, 50);
/// ```
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(
        name = "synt_core::prepare",
        skip_all,
        fields(sessions = raw.len(), frequency = %frequency),
    )
)]
pub fn prepare(raw: &SessionTable, frequency: Frequency) -> Result<SessionTable, SyntError> {
    if raw.is_empty() {
        return Err(SyntError::EmptyInput);
    }
    if frequency == Frequency::Daily {
        return Ok(raw.clone());
    }
    let sessions = resample_by(raw, |d| period_end(d, frequency))?;
    #[cfg(feature = "tracing")]
    tracing::debug!(periods = sessions.len(), "resampled series");
    SessionTable::new(sessions)
}

/// Parse a frequency label and prepare `raw` with it.
///
/// # Errors
/// - `SyntError::InvalidFrequency` if `label` is not a recognized frequency.
/// - `SyntError::EmptyInput` if `raw` holds no sessions.
pub fn prepare_with_label(raw: &SessionTable, label: &str) -> Result<SessionTable, SyntError> {
    let frequency: Frequency = label.parse()?;
    prepare(raw, frequency)
}
