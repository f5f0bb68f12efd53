//! A single captured terrain tile

use super::chunk::ChunkTable;
use crate::core::Result;
use crate::layer::{LayerHandle, Pixel};

/// One captured terrain unit: height samples, weight pixels and chunk layers.
///
/// Either raster may be empty when nothing was captured for it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Tile {
    heights: Vec<u16>,
    weights: Vec<Pixel>,
    chunks: ChunkTable,
}

impl Tile {
    pub fn new(heights: Vec<u16>, weights: Vec<Pixel>, chunks: ChunkTable) -> Self {
        Self { heights, weights, chunks }
    }

    pub fn builder() -> TileBuilder {
        TileBuilder::default()
    }

    /// Row-major height samples
    pub fn heights(&self) -> &[u16] {
        &self.heights
    }

    /// Row-major weight pixels
    pub fn weights(&self) -> &[Pixel] {
        &self.weights
    }

    pub fn chunks(&self) -> &ChunkTable {
        &self.chunks
    }

    pub fn has_height_data(&self) -> bool {
        !self.heights.is_empty()
    }

    pub fn has_weight_data(&self) -> bool {
        !self.weights.is_empty()
    }
}

/// Incremental construction of a [`Tile`] by a decoder
#[derive(Clone, Debug, Default)]
pub struct TileBuilder {
    heights: Vec<u16>,
    weights: Vec<Pixel>,
    chunks: ChunkTable,
}

impl TileBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the height raster
    pub fn with_heights(mut self, heights: Vec<u16>) -> Self {
        self.heights = heights;
        self
    }

    /// Set the weight raster
    pub fn with_weights(mut self, weights: Vec<Pixel>) -> Self {
        self.weights = weights;
        self
    }

    /// Append a layer to a chunk
    pub fn add_chunk_layer(&mut self, chunk: usize, layer: LayerHandle) -> Result<()> {
        self.chunks.push(chunk, layer)
    }

    pub fn build(self) -> Tile {
        Tile::new(self.heights, self.weights, self.chunks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let mut builder = Tile::builder()
            .with_heights(vec![1, 2, 3, 4])
            .with_weights(vec![Pixel::default(); 4]);
        builder.add_chunk_layer(0, LayerHandle(0)).unwrap();
        let tile = builder.build();

        assert!(tile.has_height_data());
        assert!(tile.has_weight_data());
        assert_eq!(tile.heights(), &[1, 2, 3, 4]);
        assert_eq!(tile.chunks().layers(0), &[LayerHandle(0)]);
    }

    #[test]
    fn test_empty_tile() {
        let tile = Tile::default();
        assert!(!tile.has_height_data());
        assert!(!tile.has_weight_data());
        assert!(tile.chunks().is_empty());
    }
}
