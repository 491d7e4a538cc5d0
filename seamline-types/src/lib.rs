//! Seamline data transfer objects, errors, and configuration primitives.
#![warn(missing_docs)]

mod config;
mod error;
mod series;

pub use config::{SeamlineConfig, SplitStrategy};
pub use error::SeamlineError;
pub use series::{Segment, TimeSeries, TimeSeriesItem, TimeSeriesMeta};
