//! Bucketed time-series shapes exchanged with the query layer and the renderer.

use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};

/// Descriptive metadata of a series.
///
/// Only `interval` is interpreted by seamline; the value type and unit are
/// carried through untouched so renderers can format axes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeSeriesMeta {
    /// Uniform bucket width in milliseconds.
    pub interval: i64,
    /// Kind of value plotted (e.g. `"duration"`, `"integer"`).
    pub value_type: String,
    /// Unit of the value (e.g. `"millisecond"`), if any.
    #[serde(default)]
    pub value_unit: Option<String>,
}

/// One aggregated bucket.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeSeriesItem {
    /// Bucket start.
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub timestamp: DateTime<Utc>,
    /// Aggregated value; `None` when the bucket had no data.
    pub value: Option<f64>,
    /// Completeness flag. `None` means "not evaluated" or "known complete".
    /// Once set it is never cleared by seamline.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub incomplete: Option<bool>,
}

impl TimeSeriesItem {
    /// Build an unflagged item.
    #[must_use]
    pub const fn new(timestamp: DateTime<Utc>, value: Option<f64>) -> Self {
        Self {
            timestamp,
            value,
            incomplete: None,
        }
    }

    /// Completeness predicate: an absent flag reads as complete.
    #[must_use]
    pub fn is_incomplete(&self) -> bool {
        self.incomplete.unwrap_or(false)
    }

    /// End of the bucket starting at `timestamp` for a bucket width of
    /// `interval_ms`. Saturates at the representable date range.
    #[must_use]
    pub fn bucket_end(&self, interval_ms: i64) -> DateTime<Utc> {
        let saturated = if interval_ms < 0 {
            DateTime::<Utc>::MIN_UTC
        } else {
            DateTime::<Utc>::MAX_UTC
        };
        TimeDelta::try_milliseconds(interval_ms)
            .and_then(|d| self.timestamp.checked_add_signed(d))
            .unwrap_or(saturated)
    }
}

/// A labelled series of buckets ordered by ascending `timestamp`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeSeries {
    /// Name of the plotted aggregate (e.g. `"p99(span.duration)"`).
    pub y_axis: String,
    /// Buckets in ascending timestamp order.
    pub values: Vec<TimeSeriesItem>,
    /// Bucket width and value formatting metadata.
    pub meta: TimeSeriesMeta,
}

impl TimeSeries {
    /// Build a new series that shares this series' label and metadata but
    /// carries `values` instead.
    #[must_use]
    pub fn with_values(&self, values: Vec<TimeSeriesItem>) -> Self {
        Self {
            y_axis: self.y_axis.clone(),
            values,
            meta: self.meta.clone(),
        }
    }

    /// Number of buckets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True when the series has no buckets.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// A run of consecutive items that share one predicate value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment<T> {
    /// Predicate value shared by every item in `data`.
    pub predicate_value: bool,
    /// Items of the run in original order.
    pub data: Vec<T>,
}
