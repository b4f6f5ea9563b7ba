use chrono::NaiveDate;
use synt::{DateRange, Frequency, Synt};
use synt_demos::common::{get_source, print_report};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Prepare the daily fixture into calendar weeks before analysis.
    let synt = Synt::builder()
        .with_source(get_source())
        .frequency(Frequency::Weekly)
        .step(3)
        .build()?;

    // 2. Request one year of daily data.
    let start = NaiveDate::from_ymd_opt(2024, 10, 1).ok_or("invalid date")?;
    let end = NaiveDate::from_ymd_opt(2025, 10, 1).ok_or("invalid date")?;
    let report = synt.run(DateRange::new(start, end)?).await?;

    // 3. Print the first few weekly rows. Each row is dated on its Sunday.
    println!("## Weekly sessions");
    println!(
        "{:<12} | {:<10} | {:<10} | {:<10} | {:<10} | {:>9}",
        "Week End", "Open", "High", "Low", "Close", "Volume"
    );
    println!("{:-<13}|{:-<12}|{:-<12}|{:-<12}|{:-<12}|{:-<10}", "", "", "", "", "", "");
    for s in report.prepared.iter().take(8) {
        println!(
            "{:<12} | ${:<9.2} | ${:<9.2} | ${:<9.2} | ${:<9.2} | {:>9}",
            s.date.format("%Y-%m-%d"),
            s.open,
            s.high,
            s.low,
            s.close,
            s.volume
        );
    }

    println!("\n## Movements every 3 weeks");
    print_report(&report);

    Ok(())
}
