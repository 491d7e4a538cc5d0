//! seamline-core
//!
//! Splits bucketed metric series into complete and incomplete runs so a chart
//! can draw settled data solid and the still-ingesting tail dashed, with no
//! visual gap at the seam.
//!
//! - `clock`: the injectable wall-clock source used by delay marking.
//! - `timeseries`: the marking, segmentation, stitching, and splitting passes.
//! - `types`: re-exports of the shared data model from `seamline-types`.
//!
//! Data flow: raw series → [`mark_delayed_data`] → [`segment_by_completeness`]
//! (any number of transitions) or [`split_by_completeness`] (one transition,
//! marks internally) → one series per renderable line.
//!
//! All passes are synchronous and allocate fresh output; inputs are taken by
//! value and never modified in place.
#![warn(missing_docs)]

/// Wall-clock abstraction used for ingestion-delay thresholds.
pub mod clock;
/// Completeness marking, segmentation, and splitting of bucketed series.
pub mod timeseries;
pub mod types;

pub use clock::{Clock, FixedClock, SystemClock};
pub use timeseries::delay::{mark_delayed_data, mark_delayed_data_at};
pub use timeseries::segment::segment_by;
pub use timeseries::split::split_by_completeness;
pub use timeseries::stitch::segment_by_completeness;
pub use timeseries::util::{is_completeness_monotonic, validate_series};
pub use types::*;
