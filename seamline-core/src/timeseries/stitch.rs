use seamline_types::{TimeSeries, TimeSeriesItem};

use super::segment::segment_by;

/// Cut an already-marked series into completeness runs for rendering.
///
/// Each returned pair is a sub-series and its `incomplete` flag, in time order.
/// At every transition the neighbouring runs share one point so two
/// independently drawn lines meet without a gap:
///
/// - complete → incomplete: the last complete point is cloned to the front of
///   the incomplete run;
/// - incomplete → complete: the first complete point is cloned to the back of
///   the incomplete run.
///
/// Complete runs are never extended. With `N` runs the output holds exactly
/// `N - 1` duplicated points; dropping them restores the input order. An empty
/// series yields no runs.
///
/// Call [`mark_delayed_data`](crate::mark_delayed_data) first; unflagged items
/// read as complete.
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(
        name = "seamline_core::segment_by_completeness",
        skip(series),
        fields(points = series.values.len()),
    )
)]
#[must_use]
pub fn segment_by_completeness(mut series: TimeSeries) -> Vec<(TimeSeries, bool)> {
    let values = std::mem::take(&mut series.values);
    let mut runs = segment_by(values, TimeSeriesItem::is_incomplete);

    for i in 1..runs.len() {
        let (head, tail) = runs.split_at_mut(i);
        let (Some(previous), Some(current)) = (head.last_mut(), tail.first_mut()) else {
            continue;
        };
        match (previous.predicate_value, current.predicate_value) {
            (false, true) => {
                if let Some(seam) = previous.data.last().cloned() {
                    current.data.insert(0, seam);
                }
            }
            (true, false) => {
                if let Some(seam) = current.data.first().cloned() {
                    previous.data.push(seam);
                }
            }
            // segment_by never emits adjacent runs with the same flag
            _ => {}
        }
    }

    #[cfg(feature = "tracing")]
    tracing::debug!(segments = runs.len(), "segmented series by completeness");

    runs.into_iter()
        .map(|run| (series.with_values(run.data), run.predicate_value))
        .collect()
}
