use std::sync::Arc;
use std::time::Duration;

use chrono::NaiveDate;
use synt::Synt;
use synt_demos::common::{get_source, trailing_range};
use tracing_subscriber::fmt::format::FmtSpan;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize a human-friendly tracing subscriber with env-based filtering.
    // Suggested: RUST_LOG=info,synt=trace,synt_core=trace
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .with_span_events(FmtSpan::ENTER | FmtSpan::EXIT)
        .try_init();

    // A failing primary and an empty secondary ahead of the real source show
    // the fallback chain in the trace.
    let synt = Synt::builder()
        .with_source(Arc::new(synt_mock::MockSource::new().named("primary").failing()))
        .with_source(Arc::new(synt_mock::MockSource::new().named("secondary").empty()))
        .with_source(get_source())
        .source_timeout(Duration::from_secs(2))
        .build()?;

    let end = NaiveDate::from_ymd_opt(2025, 10, 1).ok_or("invalid date")?;
    let report = synt.run(trailing_range(end, 90)?).await?;
    tracing::info!(
        sessions = report.prepared.len(),
        intervals = report.analysis.total_intervals,
        events = report.analysis.events.len(),
        "analysis finished"
    );

    Ok(())
}
