use assert_cmd::prelude::*;
use std::path::Path;
use std::process::Command;

// Each demo with a line its stdout must contain; `None` only checks the exit status.
const DEMOS: &[(&str, Option<&str>)] = &[
    ("00_tracing", None),
    ("01_progressive_movements", Some("Intervals compared:")),
    ("02_weekly_resampling", Some("## Weekly sessions")),
    ("03_config_json", Some("Loaded config: monthly frequency, step 3")),
];

fn run_demo(name: &str) -> String {
    let output = Command::new("cargo")
        .args(["run", "--quiet", "--example", name])
        .env("SYNT_DEMOS_SLOW_SOURCE", "1")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    String::from_utf8_lossy(&output).into_owned()
}

#[test]
fn every_demo_is_listed() {
    for (name, _) in DEMOS {
        let file = Path::new("examples").join(format!("{name}.rs"));
        assert!(file.is_file(), "missing demo source {}", file.display());
    }
}

#[test]
fn demos_run_against_the_fixture_source() {
    for (name, expected) in DEMOS {
        let stdout = run_demo(name);
        if let Some(line) = expected {
            assert!(stdout.contains(line), "{name} printed:\n{stdout}");
        }
    }
}

#[test]
fn movement_report_lists_every_default_threshold() {
    let stdout = run_demo("01_progressive_movements");
    for name in ["MOVM1", "MOVM2", "MOVM3", "MOVM4"] {
        assert!(stdout.contains(name), "missing {name} in:\n{stdout}");
    }
}
