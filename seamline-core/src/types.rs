//! Re-export of the shared data model from `seamline-types`.
// Consolidated re-exports so downstream crates can depend on `seamline-core` only
pub use seamline_types::{
    SeamlineConfig, SeamlineError, Segment, SplitStrategy, TimeSeries, TimeSeriesItem,
    TimeSeriesMeta,
};
