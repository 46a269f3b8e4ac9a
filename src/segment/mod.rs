//! Alpha-based segmentation
//!
//! This module finds where the visible content of a transparent image is:
//! the tight bounding box of all non-transparent pixels, or the grid of
//! content regions separated by fully transparent rows and columns.

mod alpha_mask;
mod interval;
mod rectangle;
mod segmenter;

pub use alpha_mask::AlphaMask;
pub use interval::{extract_intervals, Interval};
pub use rectangle::Rectangle;
pub use segmenter::{
    bounding_box, grid_cells, grid_from_intervals, grid_intervals, grid_regions, segment,
    SegmentMode,
};
