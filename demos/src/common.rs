use std::sync::Arc;
use std::time::Duration;

use chrono::{Days, NaiveDate};
use synt::{DateRange, HistorySource, SyntError, SyntReport};

/// Return a history source for the demos.
///
/// Set `SYNT_DEMOS_SLOW_SOURCE` to add latency to the fixture, which makes
/// the timeout and fallback paths visible in the tracing demo.
#[must_use]
pub fn get_source() -> Arc<dyn HistorySource> {
    let src = synt_mock::MockSource::new();
    if std::env::var("SYNT_DEMOS_SLOW_SOURCE").is_ok() {
        Arc::new(src.with_delay(Duration::from_millis(250)))
    } else {
        Arc::new(src)
    }
}

/// The `days` calendar days ending at `end` (exclusive).
///
/// # Errors
/// Returns `InvalidArg` if `days` is zero or underflows the calendar.
pub fn trailing_range(end: NaiveDate, days: u64) -> Result<DateRange, SyntError> {
    let start = end
        .checked_sub_days(Days::new(days))
        .ok_or_else(|| SyntError::InvalidArg(format!("{days} days before {end}")))?;
    DateRange::new(start, end)
}

/// Print the movement table (most recent first) and the per-threshold rates.
pub fn print_report(report: &SyntReport) {
    let s = &report.summary;
    println!(
        "{} sessions ({}) {} .. {}: min {} / avg {} / max {}",
        s.sessions, report.frequency, s.first_date, s.last_date, s.min_close, s.avg_close, s.max_close
    );

    let a = &report.analysis;
    if a.insufficient_data {
        println!("Not enough sessions for a step of {}.", a.step);
        return;
    }
    if a.events.is_empty() {
        println!("No movements over {} intervals.", a.total_intervals);
    } else {
        println!(
            "{:<10} | {:>3} | {:<4} | {:>9} | {:<6} | {:>9}",
            "Month", "Day", "Dir", "Reference", "Thresh", "Effective"
        );
        println!("{:-<11}|{:-<5}|{:-<6}|{:-<11}|{:-<8}|{:-<10}", "", "", "", "", "", "");
        for e in a.events_by_date_desc() {
            println!(
                "{:<10} | {:>3} | {:<4} | {:>9.2} | {:<6} | {:>9.2}",
                e.month_name(),
                e.day(),
                e.direction.to_string(),
                e.reference_price,
                e.threshold_name,
                e.effective_price
            );
        }
    }

    println!("\nIntervals compared: {}", a.total_intervals);
    for stat in &a.stats {
        println!(
            "  {:<6} >= {:>5.2}: {:>3} hits, {}",
            stat.name,
            stat.threshold_value,
            stat.hit_count,
            stat.hit_rate_label()
        );
    }
}
