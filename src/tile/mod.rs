//! Captured terrain tiles and the sparse grid that holds them.

pub mod geometry;
pub mod chunk;
pub mod tile;
pub mod grid;

pub use geometry::DatasetGeometry;
pub use chunk::ChunkTable;
pub use tile::{Tile, TileBuilder};
pub use grid::TileGrid;
