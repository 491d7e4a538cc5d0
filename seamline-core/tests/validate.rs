use chrono::DateTime;
use seamline_core::{
    SeamlineError, TimeSeries, TimeSeriesItem, TimeSeriesMeta, is_completeness_monotonic,
    validate_series,
};

fn series(interval: i64, ts_ms: &[i64]) -> TimeSeries {
    TimeSeries {
        y_axis: "count()".into(),
        values: ts_ms
            .iter()
            .map(|&ms| TimeSeriesItem::new(DateTime::from_timestamp_millis(ms).unwrap(), None))
            .collect(),
        meta: TimeSeriesMeta {
            interval,
            value_type: "integer".into(),
            value_unit: None,
        },
    }
}

#[test]
fn well_formed_series_passes() {
    assert!(validate_series(&series(1_000, &[0, 1_000, 2_000])).is_ok());
    assert!(validate_series(&series(1_000, &[])).is_ok());
}

#[test]
fn non_positive_interval_is_a_data_error() {
    for interval in [0, -5] {
        let err = validate_series(&series(interval, &[0])).unwrap_err();
        assert!(matches!(err, SeamlineError::Data(_)));
    }
}

#[test]
fn unordered_or_duplicate_timestamps_are_data_errors() {
    for ts in [&[0, 2_000, 1_000][..], &[0, 1_000, 1_000][..]] {
        let err = validate_series(&series(1_000, ts)).unwrap_err();
        assert!(matches!(err, SeamlineError::Data(_)));
    }
}

#[test]
fn monotonic_means_complete_prefix_then_incomplete_suffix() {
    let flagged = |flags: &[Option<bool>]| -> Vec<TimeSeriesItem> {
        flags
            .iter()
            .enumerate()
            .map(|(i, &incomplete)| TimeSeriesItem {
                incomplete,
                ..TimeSeriesItem::new(DateTime::from_timestamp_millis(i as i64).unwrap(), None)
            })
            .collect()
    };
    assert!(is_completeness_monotonic(&[]));
    assert!(is_completeness_monotonic(&flagged(&[None, Some(false), Some(true)])));
    assert!(is_completeness_monotonic(&flagged(&[Some(true), Some(true)])));
    assert!(!is_completeness_monotonic(&flagged(&[Some(true), None])));
    assert!(!is_completeness_monotonic(&flagged(&[None, Some(true), Some(false)])));
}
