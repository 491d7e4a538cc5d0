use seamline_types::{SeamlineError, TimeSeries, TimeSeriesItem};

use super::delay::mark_delayed_data;
use crate::clock::Clock;

/// Mark a raw series and split it into `(complete, incomplete)` parts.
///
/// Values are partitioned by their `incomplete` flag with relative order kept.
/// When both parts are non-empty the last complete point is cloned to the front
/// of the incomplete part so the two lines join. An empty part is `None`.
///
/// Precondition: completeness must be monotonic, i.e. a complete prefix
/// followed by an incomplete suffix. Delay marking alone always produces that
/// shape because bucket ends grow with timestamps; it can only break when the
/// input already carries hand-set flags. Partitioning such a series merges
/// unrelated runs into one line. Use
/// [`segment_by_completeness`](crate::segment_by_completeness) when the input
/// may hold more than one transition.
///
/// # Errors
/// Returns `Err(SeamlineError::InvalidArg)` if `delay_seconds` is rejected by
/// [`mark_delayed_data`].
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(
        name = "seamline_core::split_by_completeness",
        skip(series, clock),
        fields(points = series.values.len(), delay_seconds = delay_seconds),
    )
)]
pub fn split_by_completeness<C>(
    series: TimeSeries,
    delay_seconds: i64,
    clock: &C,
) -> Result<(Option<TimeSeries>, Option<TimeSeries>), SeamlineError>
where
    C: Clock + ?Sized,
{
    let mut marked = mark_delayed_data(series, delay_seconds, clock)?;

    #[cfg(feature = "tracing")]
    {
        if !super::util::is_completeness_monotonic(&marked.values) {
            tracing::warn!(
                y_axis = %marked.y_axis,
                "completeness flags are not monotonic; binary split merges separate runs"
            );
        }
    }

    let values = std::mem::take(&mut marked.values);
    let (mut incomplete, complete): (Vec<TimeSeriesItem>, Vec<TimeSeriesItem>) =
        values.into_iter().partition(TimeSeriesItem::is_incomplete);

    if !incomplete.is_empty() {
        if let Some(seam) = complete.last().cloned() {
            incomplete.insert(0, seam);
        }
    }

    let complete = (!complete.is_empty()).then(|| marked.with_values(complete));
    let incomplete = (!incomplete.is_empty()).then(|| marked.with_values(incomplete));
    Ok((complete, incomplete))
}
