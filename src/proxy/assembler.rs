//! Destination-driven proxy assembly

use std::collections::BTreeMap;

use super::plan::{proxy_windows, ProxyWindow};
use super::result::ProxyResult;
use crate::core::{Error, Result};
use crate::layer::{LayerHandle, LayerRegistry};
use crate::tile::TileGrid;

/// Source `(tile index, intra-tile offset)` for each of `len` destination
/// samples along one axis, starting at tile `start`.
///
/// The first tile contributes offsets `0..tile_side`. Every following tile
/// starts at offset 1, since its offset 0 duplicates the previous tile's
/// shared edge.
fn tile_walk(start: usize, len: usize, tile_side: usize) -> impl Iterator<Item = (usize, usize)> {
    let mut tile = start;
    let mut offset = 0;
    (0..len).map(move |_| {
        if offset == tile_side {
            tile += 1;
            offset = 1;
        }
        let at = (tile, offset);
        offset += 1;
        at
    })
}

/// Assembles proxies from a validated tile grid.
///
/// Assembly is a pure function of the grid and the requested window; it
/// never mutates either input, so separate windows can be assembled from
/// different threads.
pub struct ProxyAssembler<'a> {
    grid: &'a TileGrid,
    registry: &'a LayerRegistry,
}

impl<'a> ProxyAssembler<'a> {
    /// Create an assembler, checking that every layer the grid references is registered.
    pub fn new(grid: &'a TileGrid, registry: &'a LayerRegistry) -> Result<Self> {
        if let Some(handle) = grid.layer_handles().into_iter().find(|&h| !registry.contains(h)) {
            return Err(Error::UnknownLayer(handle));
        }
        Ok(Self { grid, registry })
    }

    /// Assemble the `tiles_per_side x tiles_per_side` window whose top-left
    /// tile is `(start_row, start_col)`.
    ///
    /// Missing tiles, and tiles without height data, leave height 0 and no
    /// weights behind. Windows may extend past the grid; those cells count
    /// as missing.
    pub fn assemble(&self, start_row: usize, start_col: usize, tiles_per_side: usize) -> ProxyResult {
        let geometry = self.grid.geometry();
        let tile_side = geometry.height_side();
        let weight_side = geometry.weight_side();
        let layout = geometry.chunk_layout();
        let side = geometry.proxy_side(tiles_per_side);

        let mut heights = vec![0u16; side * side];
        let mut buffers: BTreeMap<LayerHandle, Vec<u8>> = BTreeMap::new();

        // Every destination row walks the same source columns
        let columns: Vec<(usize, usize)> = tile_walk(start_col, side, tile_side).collect();

        for (dy, (tile_row, ty)) in tile_walk(start_row, side, tile_side).enumerate() {
            let wy = geometry.weight_coord(ty);

            for (dx, &(tile_col, tx)) in columns.iter().enumerate() {
                let Some(tile) = self
                    .grid
                    .get(tile_row, tile_col)
                    .filter(|tile| tile.has_height_data())
                else {
                    continue;
                };

                let index = dy * side + dx;
                heights[index] = tile.heights()[ty * tile_side + tx];

                if !tile.has_weight_data() {
                    continue;
                }

                let wx = geometry.weight_coord(tx);
                let pixel = tile.weights()[wy * weight_side + wx];
                let layers = tile.chunks().layers(layout.chunk_index(wx, wy));

                for (position, &handle) in layers.iter().enumerate() {
                    if let Some(weight) = pixel.weight(position) {
                        buffers
                            .entry(handle)
                            .or_insert_with(|| vec![0u8; side * side])[index] = weight;
                    }
                }
            }
        }

        let weights = buffers
            .into_iter()
            .map(|(handle, buffer)| {
                let name = self.registry.name(handle).unwrap_or_else(|| {
                    log::warn!("Layer {:?} vanished from registry, using placeholder name", handle);
                    format!("layer_{}", handle.0)
                });
                (name, buffer)
            })
            .collect::<BTreeMap<_, _>>();

        log::debug!(
            "Assembled proxy at ({}, {}) spanning {} tiles: {}x{} samples, {} layers",
            start_row,
            start_col,
            tiles_per_side,
            side,
            side,
            weights.len()
        );

        ProxyResult { side, heights, weights }
    }

    /// Assemble a planned window
    pub fn assemble_window(&self, window: &ProxyWindow) -> ProxyResult {
        self.assemble(window.start_row, window.start_col, window.tiles_per_side)
    }

    /// Assemble every window needed to cover the grid
    pub fn assemble_all(&self, tiles_per_side: usize) -> Vec<(ProxyWindow, ProxyResult)> {
        proxy_windows(self.grid, tiles_per_side)
            .into_iter()
            .map(|window| {
                let proxy = self.assemble_window(&window);
                (window, proxy)
            })
            .collect()
    }
}
