use chrono::NaiveDate;
use synt::{AnalysisOutcome, Synt};
use synt_demos::common::{get_source, print_report, trailing_range};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Default setup: daily sessions, step 5, MOVM1..MOVM4 at 3/4/5/6 dollars.
    let synt = Synt::builder().with_source(get_source()).build()?;

    // 2. Analyze the six months up to the end of September 2025.
    let end = NaiveDate::from_ymd_opt(2025, 10, 1).ok_or("invalid date")?;
    let range = trailing_range(end, 183)?;
    println!("Progressive movements for {range}, step {}\n", synt.config().step);

    let report = synt.run(range).await?;
    print_report(&report);

    // 3. Branch on the outcome the way a front end would.
    match report.outcome() {
        AnalysisOutcome::Movements => println!("\nThresholds were reached in this period."),
        AnalysisOutcome::NoMovements => println!("\nNo threshold was reached."),
        AnalysisOutcome::InsufficientData => println!("\nPick a longer period or a smaller step."),
    }

    Ok(())
}
