//! Shape checks for callers that want to verify series preconditions.

use seamline_types::{SeamlineError, TimeSeries, TimeSeriesItem};

/// Ensure a series has a positive bucket width and strictly ascending
/// timestamps.
///
/// The marking and segmentation passes assume both and do not check them.
///
/// # Errors
/// - Returns `Err(SeamlineError::Data)` if `meta.interval` is zero or negative.
/// - Returns `Err(SeamlineError::Data)` if any timestamp is not strictly greater
///   than its predecessor.
pub fn validate_series(series: &TimeSeries) -> Result<(), SeamlineError> {
    if series.meta.interval <= 0 {
        return Err(SeamlineError::data(format!(
            "bucket interval must be positive, got {}ms",
            series.meta.interval
        )));
    }
    if let Some(w) = series
        .values
        .windows(2)
        .find(|w| w[1].timestamp <= w[0].timestamp)
    {
        return Err(SeamlineError::data(format!(
            "timestamps not strictly ascending: {} follows {}",
            w[1].timestamp, w[0].timestamp
        )));
    }
    Ok(())
}

/// True when no complete item follows an incomplete one.
#[must_use]
pub fn is_completeness_monotonic(values: &[TimeSeriesItem]) -> bool {
    values.is_sorted_by_key(TimeSeriesItem::is_incomplete)
}
