//! Seamline marks the still-ingesting tail of bucketed metric series and cuts
//! them into runs a chart can draw as separate lines.
//!
//! Overview
//! - Buckets whose end time falls within the configured ingestion delay of
//!   "now" are flagged `incomplete`.
//! - The series is then cut into complete and incomplete runs. Adjacent runs
//!   share the point at each transition so a solid line and a dashed line meet
//!   without a gap.
//! - "Now" comes from an injected [`Clock`], so results are reproducible.
//!
//! Key behaviors and trade-offs
//! - Split strategy:
//!   - `Stitched`: one run per contiguous completeness block; correct for any
//!     flag pattern, including hand-set flags upstream.
//!   - `Binary`: at most one complete and one incomplete series; assumes the
//!     incomplete buckets form a single tail, which delay marking guarantees
//!     for ascending timestamps.
//! - A zero delay disables marking; negative delays are rejected rather than
//!   clamped.
//!
//! Examples
//! ```rust
//! use std::sync::Arc;
//! use chrono::DateTime;
//! use seamline::{FixedClock, Seamline, TimeSeries, TimeSeriesItem, TimeSeriesMeta};
//!
//! let minute = 60_000;
//! let base = 1_729_000_000_000;
//! let series = TimeSeries {
//!     y_axis: "p99(span.duration)".into(),
//!     values: (0..5)
//!         .map(|i| TimeSeriesItem::new(DateTime::from_timestamp_millis(base + i * minute).unwrap(), Some(1.0)))
//!         .collect(),
//!     meta: TimeSeriesMeta { interval: minute, value_type: "duration".into(), value_unit: None },
//! };
//!
//! let seamline = Seamline::builder()
//!     .ingestion_delay_secs(90)
//!     .clock(Arc::new(FixedClock::from_millis(base + 4 * minute).unwrap()))
//!     .build()?;
//!
//! let lines = seamline.segments(series)?;
//! let shape: Vec<(usize, bool)> = lines.iter().map(|(s, incomplete)| (s.len(), *incomplete)).collect();
//! assert_eq!(shape, vec![(2, false), (4, true)]);
//! # Ok::<(), seamline::SeamlineError>(())
//! ```
//!
//! See `seamline/examples/` for a runnable demonstration.
#![warn(missing_docs)]

pub(crate) mod core;

pub use core::{Seamline, SeamlineBuilder};

// Re-export core types for convenience
pub use seamline_core::{
    Clock, FixedClock, SeamlineConfig, SeamlineError, Segment, SplitStrategy, SystemClock,
    TimeSeries, TimeSeriesItem, TimeSeriesMeta, is_completeness_monotonic, mark_delayed_data,
    mark_delayed_data_at, segment_by, segment_by_completeness, split_by_completeness,
    validate_series,
};
