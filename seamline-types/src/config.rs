//! Configuration types consumed by the `seamline` facade.

use serde::{Deserialize, Serialize};

/// How a marked series is cut into renderable parts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[non_exhaustive]
pub enum SplitStrategy {
    /// Segment into every contiguous completeness run and stitch each seam.
    /// Handles any number of transitions.
    #[default]
    Stitched,
    /// Collapse into one complete part and one incomplete part.
    /// Assumes completeness is monotonic (a single transition near the tail).
    Binary,
}

/// Configuration for a `Seamline` instance.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeamlineConfig {
    /// Ingestion delay in seconds. Buckets ending within this window of "now"
    /// are flagged incomplete. Zero disables marking.
    pub ingestion_delay_secs: u64,
    /// Strategy used by `Seamline::segments`.
    pub split_strategy: SplitStrategy,
}
