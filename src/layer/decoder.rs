//! Blend weight decoding from 4-channel weight pixels.
//!
//! Each chunk of a tile lists up to four layers. The layer at position 0
//! takes whatever alpha is left after the other three channels; positions
//! 1..=3 read R, G and B directly.

/// Chunks per tile side
pub const CHUNKS_PER_SIDE: usize = 16;

/// Chunks per tile
pub const CHUNK_COUNT: usize = CHUNKS_PER_SIDE * CHUNKS_PER_SIDE;

/// Maximum layers a single chunk can blend
pub const MAX_CHUNK_LAYERS: usize = 4;

/// One 8-bit RGBA weight pixel
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[repr(C)]
pub struct Pixel {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Pixel {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// From bytes in R, G, B, A order
    pub const fn from_rgba(bytes: [u8; 4]) -> Self {
        Self::new(bytes[0], bytes[1], bytes[2], bytes[3])
    }

    /// From bytes in B, G, R, A order (typical decoder output)
    pub const fn from_bgra(bytes: [u8; 4]) -> Self {
        Self::new(bytes[2], bytes[1], bytes[0], bytes[3])
    }

    /// Weight of the layer at `position` in its chunk's layer list.
    ///
    /// Position 0 is `a - r - g - b` in wrapping 8-bit arithmetic: nothing
    /// clamps it, so channel sums above alpha wrap around.
    pub fn weight(&self, position: usize) -> Option<u8> {
        match position {
            0 => Some(self.a.wrapping_sub(self.r).wrapping_sub(self.g).wrapping_sub(self.b)),
            1 => Some(self.r),
            2 => Some(self.g),
            3 => Some(self.b),
            _ => None,
        }
    }

    /// Weights for the first `layer_count` layers of a chunk
    pub fn weights(&self, layer_count: usize) -> impl Iterator<Item = u8> + '_ {
        (0..layer_count.min(MAX_CHUNK_LAYERS)).filter_map(move |i| self.weight(i))
    }
}

/// Maps weight-raster pixel coordinates to chunk indices.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChunkLayout {
    weight_side: usize,
    mid_tile_correction: bool,
}

impl ChunkLayout {
    /// Layout for a weight raster `weight_side` pixels wide.
    ///
    /// `weight_side` must be a positive multiple of [`CHUNKS_PER_SIDE`].
    pub fn new(weight_side: usize, mid_tile_correction: bool) -> Self {
        debug_assert!(weight_side >= CHUNKS_PER_SIDE && weight_side % CHUNKS_PER_SIDE == 0);
        Self { weight_side, mid_tile_correction }
    }

    pub fn weight_side(&self) -> usize {
        self.weight_side
    }

    pub fn mid_tile_correction(&self) -> bool {
        self.mid_tile_correction
    }

    /// Pixels per chunk along one axis
    pub fn block_size(&self) -> usize {
        self.weight_side / CHUNKS_PER_SIDE
    }

    /// Chunk row or column for one pixel coordinate.
    ///
    /// With the mid-tile correction, coordinates in the second half of the
    /// tile are shifted by one pixel to absorb the asymmetric overlap at the
    /// middle chunk boundary. The result is clamped to the last chunk.
    pub fn chunk_coord(&self, coord: usize) -> usize {
        let block = self.block_size();
        let halfway = self.weight_side / 2;
        let chunk = if self.mid_tile_correction && coord >= halfway {
            (coord + 1) / block
        } else {
            coord / block
        };
        chunk.min(CHUNKS_PER_SIDE - 1)
    }

    /// Row-major chunk index for pixel `(px, py)`
    pub fn chunk_index(&self, px: usize, py: usize) -> usize {
        self.chunk_coord(py) * CHUNKS_PER_SIDE + self.chunk_coord(px)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_four_layers() {
        let pixel = Pixel::new(10, 20, 30, 200);
        let weights: Vec<u8> = pixel.weights(4).collect();
        assert_eq!(weights, vec![140, 10, 20, 30]);
    }

    #[test]
    fn test_decode_fewer_layers() {
        let pixel = Pixel::new(10, 20, 30, 200);
        assert_eq!(pixel.weights(2).collect::<Vec<_>>(), vec![140, 10]);
        assert_eq!(pixel.weights(0).count(), 0);
    }

    #[test]
    fn test_decode_position_out_of_range() {
        assert_eq!(Pixel::new(1, 2, 3, 4).weight(4), None);
        assert_eq!(Pixel::new(1, 2, 3, 4).weights(9).count(), 4);
    }

    #[test]
    fn test_base_layer_wraps_on_underflow() {
        // 100 - 100 - 100 - 100 = -200, which wraps to 56 in 8 bits.
        // Unclamped wraparound is the current behaviour, not a saturating 0.
        let pixel = Pixel::new(100, 100, 100, 100);
        assert_eq!(pixel.weight(0), Some(56));
    }

    #[test]
    fn test_channel_order() {
        assert_eq!(Pixel::from_rgba([1, 2, 3, 4]), Pixel::new(1, 2, 3, 4));
        assert_eq!(Pixel::from_bgra([3, 2, 1, 4]), Pixel::new(1, 2, 3, 4));
    }

    #[test]
    fn test_chunk_index_baseline() {
        let layout = ChunkLayout::new(256, false);
        assert_eq!(layout.block_size(), 16);
        assert_eq!(layout.chunk_index(0, 0), 0);
        assert_eq!(layout.chunk_index(15, 15), 0);
        assert_eq!(layout.chunk_index(16, 0), 1);
        assert_eq!(layout.chunk_index(0, 16), 16);
        assert_eq!(layout.chunk_index(255, 255), 255);
    }

    #[test]
    fn test_chunk_index_mid_tile_correction() {
        let layout = ChunkLayout::new(1024, true);
        assert_eq!(layout.block_size(), 64);
        // Below halfway: unchanged
        assert_eq!(layout.chunk_coord(511), 7);
        assert_eq!(layout.chunk_coord(63), 0);
        // From halfway on: shifted by one pixel
        assert_eq!(layout.chunk_coord(512), 8);
        assert_eq!(layout.chunk_coord(574), 8);
        assert_eq!(layout.chunk_coord(575), 9);
        // Last pixel is clamped to the last chunk
        assert_eq!(layout.chunk_coord(1023), 15);
    }

    #[test]
    fn test_correction_only_when_enabled() {
        let plain = ChunkLayout::new(1024, false);
        assert_eq!(plain.chunk_coord(575), 8);
        assert_eq!(plain.chunk_coord(1023), 15);
    }
}
