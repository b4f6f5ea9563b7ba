use std::collections::BTreeSet;

use chrono::{Days, NaiveDate};
use proptest::prelude::*;
use rust_decimal::Decimal;
use synt_core::{Direction, Session, SessionTable, ThresholdSet, analyze};

fn arb_closes() -> impl Strategy<Value = Vec<(i64, i64, i64)>> {
    // (close, high extra, low extra) in cents
    proptest::collection::vec((5_000i64..9_000, 0i64..400, 0i64..400), 1..120)
}

fn table_from(parts: &[(i64, i64, i64)]) -> SessionTable {
    let start = NaiveDate::from_ymd_opt(2025, 1, 2).unwrap();
    let sessions = parts
        .iter()
        .enumerate()
        .map(|(i, &(c, hx, lx))| {
            let close = Decimal::new(c, 2);
            Session {
                date: start.checked_add_days(Days::new(i as u64)).unwrap(),
                open: close,
                high: close + Decimal::new(hx, 2),
                low: close - Decimal::new(lx, 2),
                close,
                volume: 1,
            }
        })
        .collect();
    SessionTable::new(sessions).unwrap()
}

fn arb_step() -> impl Strategy<Value = usize> {
    prop_oneof![prop::sample::select(vec![3usize, 5, 7, 10]), 1usize..15]
}

proptest! {
    #[test]
    fn interval_count_matches_series_length(parts in arb_closes(), step in arb_step()) {
        let table = table_from(&parts);
        let out = analyze(&table, step, &ThresholdSet::movm_defaults()).unwrap();
        let n = table.len();
        if n <= step {
            prop_assert!(out.insufficient_data);
            prop_assert_eq!(out.total_intervals, 0);
            prop_assert!(out.events.is_empty());
            prop_assert!(out.stats.is_empty());
        } else {
            prop_assert!(!out.insufficient_data);
            prop_assert_eq!(out.total_intervals, (n - 1) / step);
            prop_assert_eq!(out.stats.len(), 4);
        }
    }

    #[test]
    fn events_land_on_interval_ends(parts in arb_closes(), step in arb_step()) {
        let table = table_from(&parts);
        let out = analyze(&table, step, &ThresholdSet::movm_defaults()).unwrap();
        let ends: BTreeSet<NaiveDate> = (1..=out.total_intervals)
            .map(|k| table[k * step].date)
            .collect();
        for e in &out.events {
            prop_assert!(ends.contains(&e.date));
            prop_assert!(e.movement() >= e.threshold_value);
            match e.direction {
                Direction::Up => prop_assert!(e.effective_price >= e.reference_price),
                Direction::Down => prop_assert!(e.effective_price < e.reference_price),
            }
        }
    }

    #[test]
    fn analysis_is_deterministic(parts in arb_closes(), step in arb_step()) {
        let table = table_from(&parts);
        let thresholds = ThresholdSet::movm_defaults();
        let a = analyze(&table, step, &thresholds).unwrap();
        let b = analyze(&table, step, &thresholds).unwrap();
        prop_assert_eq!(a, b);
    }

    #[test]
    fn hit_rates_are_bounded(parts in arb_closes(), step in arb_step()) {
        let table = table_from(&parts);
        let out = analyze(&table, step, &ThresholdSet::movm_defaults()).unwrap();
        for stat in &out.stats {
            prop_assert!(stat.hit_count <= out.total_intervals);
            prop_assert!((0.0..=1.0).contains(&stat.hit_rate));
            let events = out.events_for(&stat.name).count();
            prop_assert_eq!(events, stat.hit_count);
        }
    }

    #[test]
    fn thresholds_do_not_influence_each_other(parts in arb_closes(), step in arb_step()) {
        let table = table_from(&parts);
        let all = ThresholdSet::movm_defaults();
        let joint = analyze(&table, step, &all).unwrap();
        for name in ["MOVM1", "MOVM2", "MOVM3", "MOVM4"] {
            let alone = analyze(&table, step, &all.only(name)).unwrap();
            prop_assert_eq!(alone.stat(name), joint.stat(name));
            let joint_events: Vec<_> = joint.events_for(name).collect();
            let alone_events: Vec<_> = alone.events_for(name).collect();
            prop_assert_eq!(joint_events, alone_events);
        }
    }

    #[test]
    fn larger_thresholds_never_hit_more(parts in arb_closes(), step in arb_step()) {
        let table = table_from(&parts);
        let out = analyze(&table, step, &ThresholdSet::movm_defaults()).unwrap();
        for w in out.stats.windows(2) {
            prop_assert!(w[0].hit_count >= w[1].hit_count);
        }
    }
}
