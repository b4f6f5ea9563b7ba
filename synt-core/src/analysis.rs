//! Progressive movement analysis over non-overlapping session intervals.

use chrono::Datelike;
use rust_decimal::Decimal;

use crate::{
    Direction, MovementAnalysis, MovementEvent, Session, SessionTable, SyntError, ThresholdSet,
    ThresholdStat,
};

/// Direction and effective price of the move from `curr` to `next`.
///
/// A flat close counts as an upward move and is measured against the high.
#[must_use]
pub fn classify(curr: &Session, next: &Session) -> (Direction, Decimal) {
    if next.close >= curr.close {
        (Direction::Up, next.high)
    } else {
        (Direction::Down, next.low)
    }
}

/// Interval start indices visited by a pass: `0, step, 2*step, ...` while the
/// interval end stays inside a table of `len` sessions.
pub fn interval_starts(len: usize, step: usize) -> impl Iterator<Item = usize> {
    let step = step.max(1);
    (0..len)
        .step_by(step)
        .take_while(move |&i| i.checked_add(step).is_some_and(|next| next < len))
}

#[allow(clippy::cast_precision_loss)]
fn ratio(hits: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        hits as f64 / total as f64
    }
}

/// Per-threshold hit counts and rates, one row per enabled threshold in
/// declaration order.
#[must_use]
pub fn threshold_stats(
    events: &[MovementEvent],
    total_intervals: usize,
    thresholds: &ThresholdSet,
) -> Vec<ThresholdStat> {
    thresholds
        .enabled()
        .map(|t| {
            let hit_count = events
                .iter()
                .filter(|e| e.threshold_name == t.name())
                .count();
            ThresholdStat {
                name: t.name().to_string(),
                threshold_value: t.value(),
                hit_count,
                hit_rate: ratio(hit_count, total_intervals),
            }
        })
        .collect()
}

/// Run the movement analysis over `table`.
///
/// The table is cut into consecutive, non-overlapping intervals of `step`
/// sessions. For each interval the end close is compared with the start
/// close: a rise or a flat close is an up move measured at the end high,
/// a fall is a down move measured at the end low. The movement is the
/// absolute distance from the start close, and every enabled threshold it
/// meets or exceeds records one event. Thresholds are independent, so one
/// interval may fire several of them.
///
/// A table shorter than `step + 1` sessions forms no interval; the result is
/// then empty with `insufficient_data` set. That is not an error.
///
/// # Errors
/// - `SyntError::InvalidStep` if `step` is zero.
/// - `SyntError::EmptyTable` if `table` holds no sessions.
///
/// ```
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
/// use synt_core::{Direction, Session, SessionTable, ThresholdSet, analyze};
///
/// let s = |d: u32, close: i64, high: i64, low: i64| Session {
///     date: NaiveDate::from_ymd_opt(2025, 9, d).unwrap(),
///     open: Decimal::from(close),
///     high: Decimal::from(high),
///     low: Decimal::from(low),
///     close: Decimal::from(close),
///     volume: 0,
/// };
/// let table = SessionTable::new(vec![
///     s(1, 70, 70, 70),
///     s(2, 71, 71, 71),
///     s(3, 69, 69, 69),
///     s(4, 72, 73, 72),
///     s(5, 68, 68, 65),
/// ])
/// .unwrap();
/// let thresholds = ThresholdSet::new().with("A", Decimal::TWO).unwrap();
///
/// let out = analyze(&table, 3, &thresholds).unwrap();
/// assert_eq!(out.total_intervals, 1);
/// assert_eq!(out.events.len(), 1);
/// assert_eq!(out.events[0].direction, Direction::Up);
/// assert_eq!(out.events[0].effective_price, Decimal::from(73));
/// assert_eq!(out.stats[0].hit_rate_label(), "100.00%");
/// ```
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(
        name = "synt_core::analyze",
        skip_all,
        fields(sessions = table.len(), step = step, thresholds = thresholds.len()),
    )
)]
pub fn analyze(
    table: &SessionTable,
    step: usize,
    thresholds: &ThresholdSet,
) -> Result<MovementAnalysis, SyntError> {
    if step == 0 {
        return Err(SyntError::InvalidStep { step });
    }
    if table.is_empty() {
        return Err(SyntError::EmptyTable);
    }
    if table.len() <= step {
        #[cfg(feature = "tracing")]
        tracing::warn!(
            sessions = table.len(),
            step,
            "series too short for the requested step; no intervals formed"
        );
        return Ok(MovementAnalysis {
            step,
            insufficient_data: true,
            ..MovementAnalysis::default()
        });
    }

    let mut total_intervals = 0usize;
    let mut events: Vec<MovementEvent> = Vec::new();

    for current in interval_starts(table.len(), step) {
        let row_curr = &table[current];
        let row_next = &table[current + step];
        total_intervals += 1;

        let (direction, effective_price) = classify(row_curr, row_next);
        let movement = (effective_price - row_curr.close).abs();

        for t in thresholds.iter().filter(|t| t.is_met_by(movement)) {
            events.push(MovementEvent {
                month: row_next.date.month(),
                date: row_next.date,
                direction,
                reference_price: row_curr.close,
                threshold_name: t.name().to_string(),
                threshold_value: t.value(),
                effective_price,
            });
        }
    }

    let stats = threshold_stats(&events, total_intervals, thresholds);
    #[cfg(feature = "tracing")]
    tracing::debug!(total_intervals, events = events.len(), "movement analysis complete");

    Ok(MovementAnalysis {
        step,
        total_intervals,
        events,
        stats,
        insufficient_data: false,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interval_starts_do_not_overlap() {
        assert_eq!(interval_starts(5, 3).collect::<Vec<_>>(), [0]);
        assert_eq!(interval_starts(7, 3).collect::<Vec<_>>(), [0, 3]);
        assert_eq!(interval_starts(11, 5).collect::<Vec<_>>(), [0, 5]);
        assert_eq!(interval_starts(3, 3).count(), 0);
        assert_eq!(interval_starts(4, 1).collect::<Vec<_>>(), [0, 1, 2]);
    }

    #[test]
    fn huge_step_does_not_overflow() {
        assert_eq!(interval_starts(10, usize::MAX).count(), 0);
    }

    #[test]
    fn ratio_of_zero_intervals_is_zero() {
        assert!(ratio(0, 0).abs() < f64::EPSILON);
        assert!((ratio(1, 4) - 0.25).abs() < f64::EPSILON);
    }
}
