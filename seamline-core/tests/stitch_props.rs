use chrono::DateTime;
use proptest::prelude::*;
use seamline_core::{
    FixedClock, TimeSeries, TimeSeriesItem, TimeSeriesMeta, mark_delayed_data,
    segment_by_completeness, split_by_completeness,
};

const BASE: i64 = 1_729_000_000_000;

fn build(interval: i64, flags: &[Option<bool>]) -> TimeSeries {
    TimeSeries {
        y_axis: "avg(measurements.lcp)".into(),
        values: flags
            .iter()
            .enumerate()
            .map(|(i, &incomplete)| TimeSeriesItem {
                timestamp: DateTime::from_timestamp_millis(BASE + i as i64 * interval).unwrap(),
                value: if i % 7 == 3 { None } else { Some(i as f64 * 1.5) },
                incomplete,
            })
            .collect(),
        meta: TimeSeriesMeta {
            interval,
            value_type: "duration".into(),
            value_unit: Some("millisecond".into()),
        },
    }
}

fn arb_flagged() -> impl Strategy<Value = TimeSeries> {
    (
        prop::sample::select(vec![5_000i64, 60_000, 3_600_000]),
        proptest::collection::vec(prop::option::of(any::<bool>()), 0..120),
    )
        .prop_map(|(interval, flags)| build(interval, &flags))
}

/// Undo seam stitching: drop the duplicated point at every transition.
fn unstitch(segments: &[(TimeSeries, bool)]) -> Vec<TimeSeriesItem> {
    let mut parts: Vec<Vec<TimeSeriesItem>> =
        segments.iter().map(|(s, _)| s.values.clone()).collect();
    for i in 1..parts.len() {
        if segments[i].1 {
            parts[i].remove(0);
        } else {
            parts[i - 1].pop();
        }
    }
    parts.into_iter().flatten().collect()
}

proptest! {
    #[test]
    fn one_duplicated_point_per_transition(s in arb_flagged()) {
        let n = s.len();
        let segments = segment_by_completeness(s);
        let total: usize = segments.iter().map(|(p, _)| p.len()).sum();
        if n == 0 {
            prop_assert!(segments.is_empty());
        } else {
            prop_assert_eq!(total, n + segments.len() - 1);
        }
    }

    #[test]
    fn unstitching_restores_the_series(s in arb_flagged()) {
        let original = s.values.clone();
        let segments = segment_by_completeness(s.clone());
        prop_assert_eq!(unstitch(&segments), original);
        for (part, _) in &segments {
            prop_assert_eq!(&part.y_axis, &s.y_axis);
            prop_assert_eq!(&part.meta, &s.meta);
        }
    }

    #[test]
    fn flags_alternate_and_complete_runs_are_untouched(s in arb_flagged()) {
        let segments = segment_by_completeness(s);
        for w in segments.windows(2) {
            prop_assert_ne!(w[0].1, w[1].1);
        }
        for (part, incomplete) in &segments {
            if !incomplete {
                prop_assert!(part.values.iter().all(|v| !v.is_incomplete()));
            }
        }
    }

    #[test]
    fn binary_split_reconstructs_marked_values(
        interval in prop::sample::select(vec![5_000i64, 60_000, 3_600_000]),
        n in 0usize..120,
        delay in 1i64..20_000,
        now_off in -10_000_000i64..500_000_000,
    ) {
        let raw = build(interval, &vec![None; n]);
        let clock = FixedClock::from_millis(BASE + now_off).unwrap();
        let marked = mark_delayed_data(raw.clone(), delay, &clock).unwrap();
        let (complete, incomplete) = split_by_completeness(raw, delay, &clock).unwrap();

        let mut rebuilt: Vec<TimeSeriesItem> = Vec::new();
        if let Some(c) = &complete {
            prop_assert!(!c.is_empty());
            rebuilt.extend(c.values.iter().cloned());
        }
        if let Some(i) = &incomplete {
            prop_assert!(!i.is_empty());
            let skip = usize::from(complete.is_some());
            rebuilt.extend(i.values.iter().skip(skip).cloned());
        }
        prop_assert_eq!(&rebuilt, &marked.values);

        // On monotonic input the binary split agrees with stitched segmentation.
        let stitched: Vec<TimeSeries> =
            segment_by_completeness(marked).into_iter().map(|(s, _)| s).collect();
        let binary: Vec<TimeSeries> = complete.into_iter().chain(incomplete).collect();
        prop_assert_eq!(binary, stitched);
    }
}
