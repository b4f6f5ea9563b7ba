use chrono::NaiveDate;
use synt::{Synt, SyntConfig};
use synt_demos::common::{get_source, print_report, trailing_range};

// Thresholds are decimal strings; a zero value disables the threshold.
const CONFIG: &str = r#"{
    "frequency": "monthly",
    "step": 3,
    "thresholds": [
        { "name": "SMALL", "value": "2.50" },
        { "name": "LARGE", "value": "7.50" },
        { "name": "OFF", "value": "0" }
    ],
    "source_timeout": { "secs": 3, "nanos": 0 }
}"#;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cfg: SyntConfig = serde_json::from_str(CONFIG)?;
    println!(
        "Loaded config: {} frequency, step {} (offered steps: {:?})",
        cfg.frequency,
        cfg.step,
        synt::RECOGNIZED_STEPS
    );
    if !cfg.is_recognized_step() {
        println!("note: step {} is not one of the offered values", cfg.step);
    }

    let synt = Synt::builder().with_source(get_source()).config(cfg).build()?;

    let end = NaiveDate::from_ymd_opt(2025, 10, 1).ok_or("invalid date")?;
    let report = synt.run(trailing_range(end, 3 * 365)?).await?;
    print_report(&report);

    // Round-trip the active configuration for inspection.
    println!("\n{}", serde_json::to_string_pretty(synt.config())?);
    Ok(())
}
