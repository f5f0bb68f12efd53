//! Assembled proxy output

use std::collections::BTreeMap;

use crate::raster::stitch::{crop_to_quad_multiple, quad_aligned_len};

/// Height buffer plus per-layer weight buffers for one proxy.
///
/// All buffers are square, `side` samples wide and row-major. A layer
/// appears in `weights` only if some pixel of the proxy referenced it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProxyResult {
    pub side: usize,
    pub heights: Vec<u16>,
    pub weights: BTreeMap<String, Vec<u8>>,
}

impl ProxyResult {
    pub fn height_at(&self, x: usize, y: usize) -> u16 {
        self.heights[y * self.side + x]
    }

    /// Weight of `layer` at `(x, y)`, `None` if the layer never appeared
    pub fn weight_at(&self, layer: &str, x: usize, y: usize) -> Option<u8> {
        self.weights.get(layer).map(|buffer| buffer[y * self.side + x])
    }

    pub fn layer_names(&self) -> impl Iterator<Item = &str> {
        self.weights.keys().map(String::as_str)
    }

    /// Crop every buffer so the side is a whole number of `quads`-sized
    /// components plus the closing vertex.
    pub fn crop_to_components(&self, quads: usize) -> ProxyResult {
        let side = quad_aligned_len(self.side, quads);
        let heights = crop_to_quad_multiple(&self.heights, self.side, self.side, quads).data;
        let weights = self
            .weights
            .iter()
            .map(|(name, buffer)| {
                let cropped = crop_to_quad_multiple(buffer, self.side, self.side, quads);
                (name.clone(), cropped.data)
            })
            .collect();
        ProxyResult { side, heights, weights }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ProxyResult {
        let side = 5;
        let heights = (0..side * side).map(|i| i as u16).collect();
        let mut weights = BTreeMap::new();
        weights.insert("grass".to_string(), (0..side * side).map(|i| i as u8).collect());
        ProxyResult { side, heights, weights }
    }

    #[test]
    fn test_accessors() {
        let proxy = sample();
        assert_eq!(proxy.height_at(2, 1), 7);
        assert_eq!(proxy.weight_at("grass", 4, 4), Some(24));
        assert_eq!(proxy.weight_at("rock", 0, 0), None);
        assert_eq!(proxy.layer_names().collect::<Vec<_>>(), vec!["grass"]);
    }

    #[test]
    fn test_crop_to_components() {
        let cropped = sample().crop_to_components(2);
        assert_eq!(cropped.side, 5);

        let cropped = sample().crop_to_components(3);
        assert_eq!(cropped.side, 4);
        assert_eq!(cropped.heights.len(), 16);
        assert_eq!(cropped.height_at(3, 3), 18);
        assert_eq!(cropped.weight_at("grass", 3, 3), Some(18));
    }
}
