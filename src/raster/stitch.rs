//! Raster expansion and cropping

/// Enlarge a square `tile_side` raster with edge data from its top, left and
/// top-left neighbours.
///
/// Layout of the `(tile_side + add_cols) x (tile_side + add_rows)` result:
/// - top-left `add_cols x add_rows` block: `corner`
/// - rest of the top `add_rows` rows: `top_edge` (`add_rows` rows of `tile_side`)
/// - rest of the left `add_cols` columns: `left_edge` (`tile_side` rows of `add_cols`)
/// - bottom-right `tile_side x tile_side` block: `base`
///
/// Any empty neighbour contribution is filled with the single sample `base[0]`,
/// not with the matching edge of `base`.
pub fn expand<T: Copy>(
    base: &[T],
    top_edge: &[T],
    left_edge: &[T],
    corner: &[T],
    tile_side: usize,
    add_cols: usize,
    add_rows: usize,
) -> Vec<T> {
    let fill = base[0];
    let new_width = tile_side + add_cols;
    let mut out = Vec::with_capacity(new_width * (tile_side + add_rows));

    for y in 0..add_rows {
        if corner.is_empty() {
            out.extend(std::iter::repeat_n(fill, add_cols));
        } else {
            out.extend_from_slice(&corner[y * add_cols..(y + 1) * add_cols]);
        }

        if top_edge.is_empty() {
            out.extend(std::iter::repeat_n(fill, tile_side));
        } else {
            out.extend_from_slice(&top_edge[y * tile_side..(y + 1) * tile_side]);
        }
    }

    for y in 0..tile_side {
        if left_edge.is_empty() {
            out.extend(std::iter::repeat_n(fill, add_cols));
        } else {
            out.extend_from_slice(&left_edge[y * add_cols..(y + 1) * add_cols]);
        }
        out.extend_from_slice(&base[y * tile_side..(y + 1) * tile_side]);
    }

    out
}

/// Copy the `[x0, x1) x [y0, y1)` sub-rectangle of a raster `raster_width` wide.
pub fn crop<T: Copy>(
    raster: &[T],
    raster_width: usize,
    x0: usize,
    y0: usize,
    x1: usize,
    y1: usize,
) -> Vec<T> {
    let mut out = Vec::with_capacity((x1 - x0) * (y1 - y0));
    for y in y0..y1 {
        let row = y * raster_width;
        out.extend_from_slice(&raster[row + x0..row + x1]);
    }
    out
}

/// A raster together with its dimensions
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CroppedRaster<T> {
    pub width: usize,
    pub height: usize,
    pub data: Vec<T>,
}

/// Largest `k * quads + 1` that fits in `dim` vertices.
pub fn quad_aligned_len(dim: usize, quads: usize) -> usize {
    if quads == 0 || dim == 0 {
        return dim;
    }
    (dim - 1) / quads * quads + 1
}

/// Crop a `width x height` raster from the top-left so each axis holds a whole
/// number of `quads`-sized components plus the closing vertex.
pub fn crop_to_quad_multiple<T: Copy>(
    raster: &[T],
    width: usize,
    height: usize,
    quads: usize,
) -> CroppedRaster<T> {
    let new_width = quad_aligned_len(width, quads);
    let new_height = quad_aligned_len(height, quads);
    CroppedRaster {
        width: new_width,
        height: new_height,
        data: crop(raster, width, 0, 0, new_width, new_height),
    }
}
