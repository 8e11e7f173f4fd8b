use rayon::prelude::*;

use imwarp_image::ImageSize;

/// A dense per-pixel map of source coordinates.
///
/// `map_x[row * width + col]` and `map_y[row * width + col]` hold the source
/// column and row that the destination pixel (`row`, `col`) samples from.
#[derive(Debug, Clone, PartialEq)]
pub struct CoordinateMap {
    /// The size of the destination grid.
    pub size: ImageSize,
    /// The source x coordinate (column) of every destination pixel.
    pub map_x: Vec<f64>,
    /// The source y coordinate (row) of every destination pixel.
    pub map_y: Vec<f64>,
}

/// Create a coordinate map by evaluating `f(x, y)` at every grid position.
///
/// # Arguments
///
/// * `cols` - The number of columns indicating the width of the grid
/// * `rows` - The number of rows indicating the height of the grid
/// * `f` - Maps a destination (column, row) to a source (x, y)
///
/// # Returns
///
/// A [`CoordinateMap`] of shape (rows, cols).
pub fn meshgrid_from_fn(
    cols: usize,
    rows: usize,
    f: impl Fn(usize, usize) -> (f64, f64) + Send + Sync,
) -> CoordinateMap {
    let mut map_x = vec![0.0; rows * cols];
    let mut map_y = vec![0.0; rows * cols];

    if cols > 0 {
        map_x
            .par_chunks_exact_mut(cols)
            .zip(map_y.par_chunks_exact_mut(cols))
            .enumerate()
            .for_each(|(r, (xarr, yarr))| {
                xarr.iter_mut()
                    .zip(yarr.iter_mut())
                    .enumerate()
                    .for_each(|(c, (x, y))| (*x, *y) = f(c, r));
            });
    }

    CoordinateMap {
        size: ImageSize {
            width: cols,
            height: rows,
        },
        map_x,
        map_y,
    }
}
