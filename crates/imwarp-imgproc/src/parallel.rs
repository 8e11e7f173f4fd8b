use rayon::prelude::*;

use imwarp_image::Image;

use crate::interpolation::grid::CoordinateMap;

/// Apply a function to each pixel of the destination image in parallel by rows.
///
/// The closure receives the pixel's `(row, col)` and its channel vector in `dst`.
pub fn par_iter_rows_indexed<const C: usize>(
    dst: &mut Image<f32, C>,
    f: impl Fn(usize, usize, &mut [f32]) + Send + Sync,
) {
    let row_len = C * dst.cols();
    if row_len == 0 {
        return;
    }

    dst.as_slice_mut()
        .par_chunks_exact_mut(row_len)
        .enumerate()
        .for_each(|(row, dst_row)| {
            dst_row
                .chunks_exact_mut(C)
                .enumerate()
                .for_each(|(col, dst_pixel)| f(row, col, dst_pixel));
        });
}

/// Apply a function to each pixel for grid sampling in parallel.
///
/// The closure receives the source coordinates `(x, y)` stored in `map` for the
/// destination pixel together with its channel vector.
///
/// PRECONDITION: `map` must have the same size as `dst`.
pub fn par_iter_rows_resample<const C: usize>(
    dst: &mut Image<f32, C>,
    map: &CoordinateMap,
    f: impl Fn(f64, f64, &mut [f32]) + Send + Sync,
) {
    let cols = dst.cols();
    if C * cols == 0 {
        return;
    }

    dst.as_slice_mut()
        .par_chunks_exact_mut(C * cols)
        .zip(map.map_x.par_chunks_exact(cols))
        .zip(map.map_y.par_chunks_exact(cols))
        .for_each(|((dst_chunk, map_x_chunk), map_y_chunk)| {
            dst_chunk
                .chunks_exact_mut(C)
                .zip(map_x_chunk.iter().zip(map_y_chunk.iter()))
                .for_each(|(dst_pixel, (&x, &y))| f(x, y, dst_pixel));
        });
}

#[cfg(test)]
mod tests {
    use super::*;
    use imwarp_image::{ImageError, ImageSize};

    #[test]
    fn par_iter_rows_indexed_visits_every_pixel() -> Result<(), ImageError> {
        let size = ImageSize {
            width: 3,
            height: 2,
        };
        let mut dst = Image::<f32, 2>::from_size_val(size, 0.0)?;

        par_iter_rows_indexed(&mut dst, |row, col, px| {
            px[0] = row as f32;
            px[1] = col as f32;
        });

        assert_eq!(
            dst.as_slice(),
            &[0.0, 0.0, 0.0, 1.0, 0.0, 2.0, 1.0, 0.0, 1.0, 1.0, 1.0, 2.0]
        );
        Ok(())
    }

    #[test]
    fn par_iter_rows_empty_image() -> Result<(), ImageError> {
        let mut dst = Image::<f32, 1>::new(
            ImageSize {
                width: 0,
                height: 0,
            },
            vec![],
        )?;
        par_iter_rows_indexed(&mut dst, |_, _, _| unreachable!());
        Ok(())
    }
}
