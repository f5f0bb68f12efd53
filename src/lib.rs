//! terrain-stitch - seamless terrain rasters from edge-overlapping tiles

pub mod core;
pub mod raster;
pub mod layer;
pub mod tile;
pub mod proxy;
pub mod import;
