//! Per-dataset raster dimensions

use crate::core::{Error, Result};
use crate::layer::{ChunkLayout, CHUNKS_PER_SIDE};

/// Raster dimensions shared by every tile of one dataset.
///
/// Capture conventions differ between datasets (255 or 257 height samples,
/// weight rasters from 256 up to 1024 pixels), so nothing here is fixed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DatasetGeometry {
    height_side: usize,
    chunk_layout: ChunkLayout,
}

impl DatasetGeometry {
    /// Geometry for `height_side` height samples and `weight_side` weight pixels per tile side.
    ///
    /// The mid-tile chunk correction is enabled when the weight raster is a
    /// multiple of 256 and finer than the tile's quad count, the convention in
    /// which the one-pixel overlap was observed. Use
    /// [`with_chunk_correction`](Self::with_chunk_correction) to override.
    pub fn new(height_side: usize, weight_side: usize) -> Result<Self> {
        if height_side < 2 {
            return Err(Error::InvalidGeometry(format!(
                "height side {} must be at least 2",
                height_side
            )));
        }
        if weight_side < CHUNKS_PER_SIDE || weight_side % CHUNKS_PER_SIDE != 0 {
            return Err(Error::InvalidGeometry(format!(
                "weight side {} must be a positive multiple of {}",
                weight_side, CHUNKS_PER_SIDE
            )));
        }

        let correction = weight_side % 256 == 0 && weight_side > height_side - 1;
        Ok(Self {
            height_side,
            chunk_layout: ChunkLayout::new(weight_side, correction),
        })
    }

    /// Force the mid-tile chunk correction on or off
    pub fn with_chunk_correction(mut self, enabled: bool) -> Self {
        self.chunk_layout = ChunkLayout::new(self.chunk_layout.weight_side(), enabled);
        self
    }

    pub fn height_side(&self) -> usize {
        self.height_side
    }

    pub fn weight_side(&self) -> usize {
        self.chunk_layout.weight_side()
    }

    pub fn chunk_layout(&self) -> ChunkLayout {
        self.chunk_layout
    }

    /// Samples per height raster
    pub fn height_len(&self) -> usize {
        self.height_side * self.height_side
    }

    /// Pixels per weight raster
    pub fn weight_len(&self) -> usize {
        self.weight_side() * self.weight_side()
    }

    /// Quads per tile side (one less than the sample count)
    pub fn quads_per_tile(&self) -> usize {
        self.height_side - 1
    }

    /// Output side length of a proxy spanning `tiles_per_side` tiles
    pub fn proxy_side(&self, tiles_per_side: usize) -> usize {
        self.quads_per_tile() * tiles_per_side + 1
    }

    /// Weight-raster coordinate for an intra-tile height coordinate.
    ///
    /// Height samples sit on quad corners and weight pixels span the whole
    /// tile, so the ratio is taken against the quad count.
    pub fn weight_coord(&self, height_coord: usize) -> usize {
        let weight_side = self.weight_side();
        (height_coord * weight_side / self.quads_per_tile()).min(weight_side - 1)
    }
}
