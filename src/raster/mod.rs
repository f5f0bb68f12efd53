//! Raster primitives for cross-tile stitching.
//!
//! All rasters are flat row-major slices with the origin at the top-left.
//! The final row and column of a tile ("shared edge") duplicate the first
//! row and column of the tile below and to the right, so every operation
//! that crosses a tile boundary states whether it keeps or skips that sample.

pub mod edge;
pub mod stitch;

pub use edge::{extract_bottom_rows, extract_corner, extract_right_columns};
pub use stitch::{crop, crop_to_quad_multiple, expand, CroppedRaster};
