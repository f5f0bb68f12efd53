//! Per-tile chunk layer table

use crate::core::{Error, Result};
use crate::layer::{LayerHandle, CHUNK_COUNT};

/// Ordered layer list for each of a tile's 16x16 chunks.
///
/// Order matters: a layer's position selects the pixel channel its weight
/// is decoded from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChunkTable {
    chunks: Vec<Vec<LayerHandle>>,
}

impl Default for ChunkTable {
    fn default() -> Self {
        Self::new()
    }
}

impl ChunkTable {
    /// Table with no layers in any chunk
    pub fn new() -> Self {
        Self {
            chunks: vec![Vec::new(); CHUNK_COUNT],
        }
    }

    /// Append a layer to a chunk's list
    pub fn push(&mut self, chunk: usize, layer: LayerHandle) -> Result<()> {
        self.chunks
            .get_mut(chunk)
            .ok_or(Error::ChunkIndex(chunk))?
            .push(layer);
        Ok(())
    }

    /// Layers of one chunk, in decode order
    pub fn layers(&self, chunk: usize) -> &[LayerHandle] {
        self.chunks.get(chunk).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Iterate `(chunk index, layers)` pairs
    pub fn iter(&self) -> impl Iterator<Item = (usize, &[LayerHandle])> {
        self.chunks.iter().map(Vec::as_slice).enumerate()
    }

    /// Every layer handle referenced by any chunk
    pub fn handles(&self) -> impl Iterator<Item = LayerHandle> + '_ {
        self.chunks.iter().flatten().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.chunks.iter().all(Vec::is_empty)
    }
}
