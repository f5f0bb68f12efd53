//! Sparse rectangular grid of tiles

use std::collections::BTreeSet;

use super::geometry::DatasetGeometry;
use super::tile::Tile;
use crate::core::{Error, GridCoord, Result};
use crate::layer::{LayerHandle, MAX_CHUNK_LAYERS};

/// Tiles indexed by (row, column) over `[0, rows) x [0, cols)`.
///
/// Cells without a tile are holes in the capture. Every inserted tile is
/// checked against the dataset geometry, so assembly can assume uniform
/// tile dimensions.
#[derive(Clone, Debug)]
pub struct TileGrid {
    rows: usize,
    cols: usize,
    geometry: DatasetGeometry,
    /// Absolute position of cell (0, 0) in the source dataset
    origin: GridCoord,
    cells: Vec<Option<Tile>>,
}

impl TileGrid {
    /// Empty grid of `rows x cols` cells
    pub fn new(rows: usize, cols: usize, geometry: DatasetGeometry) -> Self {
        Self {
            rows,
            cols,
            geometry,
            origin: GridCoord::default(),
            cells: std::iter::repeat_with(|| None).take(rows * cols).collect(),
        }
    }

    /// Build a grid from tiles at absolute dataset positions.
    ///
    /// The grid is shrunk to the bounding rectangle of the given positions,
    /// with the minimum row and column becoming cell (0, 0).
    pub fn from_placed<I>(geometry: DatasetGeometry, tiles: I) -> Result<Self>
    where
        I: IntoIterator<Item = (GridCoord, Tile)>,
    {
        let tiles: Vec<(GridCoord, Tile)> = tiles.into_iter().collect();
        let Some(min_row) = tiles.iter().map(|(c, _)| c.row).min() else {
            return Ok(Self::new(0, 0, geometry));
        };
        let min_col = tiles.iter().map(|(c, _)| c.col).min().unwrap_or(0);
        let max_row = tiles.iter().map(|(c, _)| c.row).max().unwrap_or(0);
        let max_col = tiles.iter().map(|(c, _)| c.col).max().unwrap_or(0);

        let mut grid = Self::new(max_row - min_row + 1, max_col - min_col + 1, geometry);
        grid.origin = GridCoord::new(min_row, min_col);

        for (coord, tile) in tiles {
            grid.set(coord.row - min_row, coord.col - min_col, tile)?;
        }

        log::info!(
            "Built {}x{} tile grid with {} tiles, origin {}",
            grid.rows,
            grid.cols,
            grid.tile_count(),
            grid.origin
        );
        Ok(grid)
    }

    /// Insert a tile, returning whatever occupied the cell before.
    pub fn set(&mut self, row: usize, col: usize, tile: Tile) -> Result<Option<Tile>> {
        if row >= self.rows || col >= self.cols {
            return Err(Error::TileOutOfBounds { row, col, rows: self.rows, cols: self.cols });
        }
        self.validate(row, col, &tile)?;

        let index = row * self.cols + col;
        Ok(self.cells[index].replace(tile))
    }

    /// Tile at `(row, col)`, or `None` for holes and positions outside the grid
    pub fn get(&self, row: usize, col: usize) -> Option<&Tile> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        self.cells[row * self.cols + col].as_ref()
    }

    fn validate(&self, row: usize, col: usize, tile: &Tile) -> Result<()> {
        let expected = self.geometry.height_len();
        let actual = tile.heights().len();
        if actual != 0 && actual != expected {
            return Err(Error::HeightRasterSize { row, col, expected, actual });
        }

        let expected = self.geometry.weight_len();
        let actual = tile.weights().len();
        if actual != 0 && actual != expected {
            return Err(Error::WeightRasterSize { row, col, expected, actual });
        }

        if let Some((chunk, layers)) = tile
            .chunks()
            .iter()
            .find(|(_, layers)| layers.len() > MAX_CHUNK_LAYERS)
        {
            return Err(Error::TooManyLayers { row, col, chunk, count: layers.len() });
        }

        Ok(())
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn geometry(&self) -> &DatasetGeometry {
        &self.geometry
    }

    pub fn origin(&self) -> GridCoord {
        self.origin
    }

    /// Number of occupied cells
    pub fn tile_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Iterate occupied cells in row-major order
    pub fn iter(&self) -> impl Iterator<Item = (GridCoord, &Tile)> {
        let cols = self.cols;
        self.cells.iter().enumerate().filter_map(move |(index, cell)| {
            cell.as_ref().map(|tile| (GridCoord::new(index / cols, index % cols), tile))
        })
    }

    /// Every layer handle referenced by any tile
    pub fn layer_handles(&self) -> BTreeSet<LayerHandle> {
        self.iter().flat_map(|(_, tile)| tile.chunks().handles()).collect()
    }
}
