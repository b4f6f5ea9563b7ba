//! Closing-price statistics of a prepared series.

use rust_decimal::Decimal;

use crate::{PriceSummary, SessionTable, SyntError};

/// Minimum, average and maximum close of `table`.
///
/// The average is rounded to 4 decimal places.
///
/// # Errors
/// Returns `Err(SyntError::EmptyTable)` if `table` holds no sessions.
pub fn summarize(table: &SessionTable) -> Result<PriceSummary, SyntError> {
    let (Some(first), Some(last)) = (table.first(), table.last()) else {
        return Err(SyntError::EmptyTable);
    };

    let mut min_close = first.close;
    let mut max_close = first.close;
    let mut sum = Decimal::ZERO;
    for s in table {
        min_close = min_close.min(s.close);
        max_close = max_close.max(s.close);
        sum = sum
            .checked_add(s.close)
            .ok_or_else(|| SyntError::Data("close sum overflow".into()))?;
    }
    let avg_close = (sum / Decimal::from(table.len())).round_dp(4);

    Ok(PriceSummary {
        sessions: table.len(),
        first_date: first.date,
        last_date: last.date,
        min_close,
        avg_close,
        max_close,
    })
}
