//! Completeness passes over bucketed series.
//!
//! Modules include:
//! - `delay`: flag buckets still inside the ingestion-delay window
//! - `segment`: group consecutive items by a boolean predicate
//! - `stitch`: cut a marked series into completeness runs sharing seam points
//! - `split`: collapse a raw series into one complete and one incomplete part
//! - `util`: precondition checks for callers that want them
/// Ingestion-delay marking.
pub mod delay;
/// Generic run segmentation by predicate.
pub mod segment;
/// Two-part completeness split for monotonic series.
pub mod split;
/// N-run completeness segmentation with seam stitching.
pub mod stitch;
/// Series shape and precondition checks.
pub mod util;
