//! Error types for terrain stitching

use thiserror::Error;

use crate::layer::LayerHandle;

/// Main error type for the crate
///
/// Everything here is raised while building a grid or parsing metadata.
/// Once a grid has been constructed, assembly itself never fails.
#[derive(Debug, Error)]
pub enum Error {
    #[error("tile ({row}, {col}) lies outside the {rows}x{cols} grid")]
    TileOutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    #[error("tile ({row}, {col}) height raster has {actual} samples, expected {expected}")]
    HeightRasterSize {
        row: usize,
        col: usize,
        expected: usize,
        actual: usize,
    },

    #[error("tile ({row}, {col}) weight raster has {actual} pixels, expected {expected}")]
    WeightRasterSize {
        row: usize,
        col: usize,
        expected: usize,
        actual: usize,
    },

    #[error("tile ({row}, {col}) chunk {chunk} references {count} layers (max 4)")]
    TooManyLayers {
        row: usize,
        col: usize,
        chunk: usize,
        count: usize,
    },

    #[error("chunk index {0} out of range")]
    ChunkIndex(usize),

    #[error("invalid geometry: {0}")]
    InvalidGeometry(String),

    #[error("layer handle {0:?} is not registered")]
    UnknownLayer(LayerHandle),

    #[error("invalid tile name: {0}")]
    InvalidTileName(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
