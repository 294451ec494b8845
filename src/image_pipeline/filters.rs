//! Filtering module
//!
//! Thresholding, 3×3 smoothing and sharpening, Prewitt edges and histogram
//! operations on one-channel buffers.

mod edge;
mod histogram;
mod smoothing;
mod threshold;


pub use edge::edge_prewitt;
pub use histogram::{histogram, histogram_equalization};
pub use smoothing::{highpass_filter_3x3, mean_filter_3x3, median_filter_3x3};
pub use threshold::{gray_to_binary, gray_to_binary_global_mean, gray_to_binary_midpoint};

pub(crate) use threshold::ensure_gray_pair;
