//! Border strip and corner extraction

/// First index of a trailing strip of `count` samples along a `tile_side` axis.
#[inline]
fn strip_start(tile_side: usize, count: usize, skip_shared_edge: bool) -> usize {
    debug_assert!(count + skip_shared_edge as usize <= tile_side);
    tile_side - count - skip_shared_edge as usize
}

/// Copy the bottom `count` rows of a square `tile_side` raster.
///
/// With `skip_shared_edge` the strip ends one row early so the duplicated
/// final row is left out. Result is `count` rows of `tile_side` samples.
pub fn extract_bottom_rows<T: Copy>(
    raster: &[T],
    tile_side: usize,
    count: usize,
    skip_shared_edge: bool,
) -> Vec<T> {
    let start = strip_start(tile_side, count, skip_shared_edge);
    raster[start * tile_side..(start + count) * tile_side].to_vec()
}

/// Copy the right `count` columns of a square `tile_side` raster.
///
/// Result is `tile_side` rows of `count` samples.
pub fn extract_right_columns<T: Copy>(
    raster: &[T],
    tile_side: usize,
    count: usize,
    skip_shared_edge: bool,
) -> Vec<T> {
    let start = strip_start(tile_side, count, skip_shared_edge);
    let mut out = Vec::with_capacity(tile_side * count);
    for row in raster.chunks_exact(tile_side).take(tile_side) {
        out.extend_from_slice(&row[start..start + count]);
    }
    out
}

/// Copy the bottom-right `corner_w` x `corner_h` block of a square raster.
///
/// The edge-skip rule is applied to each axis independently.
pub fn extract_corner<T: Copy>(
    raster: &[T],
    tile_side: usize,
    corner_w: usize,
    corner_h: usize,
    skip_shared_edge: bool,
) -> Vec<T> {
    let start_x = strip_start(tile_side, corner_w, skip_shared_edge);
    let start_y = strip_start(tile_side, corner_h, skip_shared_edge);
    let mut out = Vec::with_capacity(corner_w * corner_h);
    for y in start_y..start_y + corner_h {
        let row = y * tile_side;
        out.extend_from_slice(&raster[row + start_x..row + start_x + corner_w]);
    }
    out
}
