//! Partitioning a grid into proxy windows

use crate::tile::TileGrid;

/// One square window of tiles to assemble into a proxy
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProxyWindow {
    pub start_row: usize,
    pub start_col: usize,
    pub tiles_per_side: usize,
    /// Destination-space `(x, y)` of the window's first sample, so adjacent
    /// proxies share their boundary sample
    pub section_offset: (usize, usize),
}

/// Non-overlapping windows covering the grid in row-major order.
///
/// Windows that contain no tile at all are left out.
pub fn proxy_windows(grid: &TileGrid, tiles_per_side: usize) -> Vec<ProxyWindow> {
    if tiles_per_side == 0 {
        return Vec::new();
    }

    let quads = grid.geometry().quads_per_tile();
    let mut windows = Vec::new();

    for start_row in (0..grid.rows()).step_by(tiles_per_side) {
        for start_col in (0..grid.cols()).step_by(tiles_per_side) {
            let occupied = (start_row..start_row + tiles_per_side).any(|row| {
                (start_col..start_col + tiles_per_side).any(|col| grid.get(row, col).is_some())
            });
            if !occupied {
                log::debug!("Skipping empty proxy window at ({}, {})", start_row, start_col);
                continue;
            }

            windows.push(ProxyWindow {
                start_row,
                start_col,
                tiles_per_side,
                section_offset: (start_col * quads, start_row * quads),
            });
        }
    }

    log::info!(
        "Planned {} proxies of {}x{} tiles over a {}x{} grid",
        windows.len(),
        tiles_per_side,
        tiles_per_side,
        grid.rows(),
        grid.cols()
    );
    windows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tile::{DatasetGeometry, Tile};

    fn grid_with(tiles: &[(usize, usize)]) -> TileGrid {
        let geometry = DatasetGeometry::new(257, 256).unwrap();
        let mut grid = TileGrid::new(4, 5, geometry);
        for &(row, col) in tiles {
            grid.set(row, col, Tile::default()).unwrap();
        }
        grid
    }

    #[test]
    fn test_windows_cover_grid() {
        let grid = grid_with(&[(0, 0), (0, 4), (3, 1)]);
        let windows = proxy_windows(&grid, 2);

        let starts: Vec<_> = windows.iter().map(|w| (w.start_row, w.start_col)).collect();
        assert_eq!(starts, vec![(0, 0), (0, 4), (2, 0)]);
    }

    #[test]
    fn test_section_offset() {
        let grid = grid_with(&[(3, 4)]);
        let windows = proxy_windows(&grid, 2);
        assert_eq!(windows.len(), 1);
        assert_eq!(windows[0].section_offset, (4 * 256, 2 * 256));
    }

    #[test]
    fn test_zero_tiles_per_side() {
        let grid = grid_with(&[(0, 0)]);
        assert!(proxy_windows(&grid, 0).is_empty());
    }
}
