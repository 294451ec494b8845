//! Blob analysis module
//!
//! Connected-component labeling of binary images, per-blob geometric
//! measurements and the drawing helpers that consume them.

mod annotate;
mod labeling;
mod metrics;
pub mod types;


pub use annotate::{clear_blob_region, count_foreground, draw_bounding_boxes, draw_centroids, roundness};
pub use labeling::{label_blobs, MAX_LABELS};
pub use metrics::blob_metrics;
pub use types::{Blob, BoundingBox};
