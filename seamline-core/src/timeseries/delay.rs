use chrono::{DateTime, TimeDelta, Utc};
use seamline_types::{SeamlineError, TimeSeries};

use crate::clock::Clock;

/// Flag every bucket whose end falls inside the ingestion-delay window.
///
/// A bucket is incomplete when `timestamp + meta.interval >= now - delay`.
/// Comparing the bucket *end* means a wide bucket stays incomplete until its
/// last instant has aged past the delay, even if it started long ago.
///
/// - `delay_seconds == 0` returns `series` untouched.
/// - Items that already carry an explicit `incomplete` value keep it, so
///   re-marking is idempotent and a set flag is never cleared.
/// - Complete items are left without a flag.
///
/// ```
/// use seamline_core::{FixedClock, TimeSeries, TimeSeriesItem, TimeSeriesMeta, mark_delayed_data};
/// use chrono::DateTime;
///
/// let minute = 60_000;
/// let item = |ms: i64| TimeSeriesItem::new(DateTime::from_timestamp_millis(ms).unwrap(), Some(1.0));
/// let series = TimeSeries {
///     y_axis: "count()".into(),
///     values: vec![item(0), item(minute), item(2 * minute)],
///     meta: TimeSeriesMeta { interval: minute, value_type: "integer".into(), value_unit: None },
/// };
/// // now - 90s lands inside the last bucket
/// let clock = FixedClock::from_millis(3 * minute + 80_000).unwrap();
/// let marked = mark_delayed_data(series, 90, &clock).unwrap();
/// let flags: Vec<Option<bool>> = marked.values.iter().map(|v| v.incomplete).collect();
/// assert_eq!(flags, vec![None, None, Some(true)]);
/// ```
///
/// # Errors
/// Returns `Err(SeamlineError::InvalidArg)` if `delay_seconds` is negative or
/// too large to express as a duration.
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(
        name = "seamline_core::mark_delayed_data",
        skip(series, clock),
        fields(points = series.values.len(), delay_seconds = delay_seconds),
    )
)]
pub fn mark_delayed_data<C>(
    series: TimeSeries,
    delay_seconds: i64,
    clock: &C,
) -> Result<TimeSeries, SeamlineError>
where
    C: Clock + ?Sized,
{
    mark_delayed_data_at(series, delay_seconds, clock.now())
}

/// Same as [`mark_delayed_data`] with "now" passed explicitly.
///
/// # Errors
/// Returns `Err(SeamlineError::InvalidArg)` if `delay_seconds` is negative or
/// too large to express as a duration.
pub fn mark_delayed_data_at(
    series: TimeSeries,
    delay_seconds: i64,
    now: DateTime<Utc>,
) -> Result<TimeSeries, SeamlineError> {
    if delay_seconds < 0 {
        return Err(SeamlineError::invalid_arg(format!(
            "ingestion delay must be non-negative, got {delay_seconds}s"
        )));
    }
    if delay_seconds == 0 {
        return Ok(series);
    }

    let delay = TimeDelta::try_seconds(delay_seconds).ok_or_else(|| {
        SeamlineError::invalid_arg(format!("ingestion delay out of range: {delay_seconds}s"))
    })?;
    let threshold = now
        .checked_sub_signed(delay)
        .unwrap_or(DateTime::<Utc>::MIN_UTC);

    let TimeSeries {
        y_axis,
        values,
        meta,
    } = series;
    let values = values
        .into_iter()
        .map(|mut item| {
            if item.incomplete.is_none() && item.bucket_end(meta.interval) >= threshold {
                item.incomplete = Some(true);
            }
            item
        })
        .collect();

    Ok(TimeSeries {
        y_axis,
        values,
        meta,
    })
}
