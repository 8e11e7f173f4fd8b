use imwarp_image::{Image, ImageError};

use super::grid::CoordinateMap;
use super::{bilinear_interpolation, nearest_neighbor_interpolation, InterpolationMode};
use crate::parallel;

/// Apply a generic geometric transformation to an image.
///
/// Every destination pixel samples `src` at the coordinates stored for it in `map`.
/// Pixels whose sample falls outside `src` are set to zero. The bilinear sampler also
/// writes zero when either coordinate is negative or not finite.
///
/// # Arguments
///
/// * `src` - The input image container with shape (height, width, C).
/// * `dst` - The output image container with shape (height, width, C).
/// * `map` - The source coordinates of every destination pixel.
/// * `interpolation` - The interpolation mode to use.
///
/// # Errors
///
/// The output image must have the same size as the map.
pub fn remap<const C: usize>(
    src: &Image<f32, C>,
    dst: &mut Image<f32, C>,
    map: &CoordinateMap,
    interpolation: InterpolationMode,
) -> Result<(), ImageError> {
    if dst.size() != map.size {
        return Err(ImageError::InvalidImageSize(
            map.size.width,
            map.size.height,
            dst.cols(),
            dst.rows(),
        ));
    }

    parallel::par_iter_rows_resample(dst, map, |x, y, dst_pixel| match interpolation {
        InterpolationMode::Nearest => match nearest_neighbor_interpolation(src, x, y) {
            Some(pixel) => dst_pixel.copy_from_slice(pixel),
            None => dst_pixel.fill(0.0),
        },
        InterpolationMode::Bilinear => {
            let valid = x.is_finite() && y.is_finite() && x >= 0.0 && y >= 0.0;
            if valid {
                dst_pixel.copy_from_slice(&bilinear_interpolation(src, x, y));
            } else {
                dst_pixel.fill(0.0);
            }
        }
    });

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use imwarp_image::ImageSize;

    fn map_2x2(map_x: Vec<f64>, map_y: Vec<f64>) -> CoordinateMap {
        CoordinateMap {
            size: ImageSize {
                width: 2,
                height: 2,
            },
            map_x,
            map_y,
        }
    }

    #[test]
    fn remap_smoke() -> Result<(), ImageError> {
        let image = Image::<_, 1>::new(
            ImageSize {
                width: 3,
                height: 3,
            },
            vec![0f32, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0],
        )?;

        let map = map_2x2(vec![0.0, 2.0, 0.0, 2.0], vec![0.0, 0.0, 2.0, 2.0]);

        let mut image_transformed = Image::<_, 1>::from_size_val(map.size, 0.0)?;
        remap(&image, &mut image_transformed, &map, InterpolationMode::Bilinear)?;
        assert_eq!(image_transformed.as_slice(), &[0.0, 2.0, 6.0, 8.0]);

        remap(&image, &mut image_transformed, &map, InterpolationMode::Nearest)?;
        assert_eq!(image_transformed.as_slice(), &[0.0, 2.0, 6.0, 8.0]);
        Ok(())
    }

    #[test]
    fn remap_invalid_samples_are_zero() -> Result<(), ImageError> {
        let image = Image::<f32, 2>::from_size_val([2, 2].into(), 5.0)?;
        let map = map_2x2(vec![-0.25, f64::NAN, 0.5, 7.0], vec![0.0, 0.0, 0.0, 0.0]);
        let mut dst = Image::<f32, 2>::from_size_val(map.size, 1.0)?;

        remap(&image, &mut dst, &map, InterpolationMode::Bilinear)?;
        assert_eq!(dst.as_slice(), &[0.0, 0.0, 0.0, 0.0, 5.0, 5.0, 0.0, 0.0]);

        remap(&image, &mut dst, &map, InterpolationMode::Nearest)?;
        assert_eq!(dst.as_slice(), &[5.0, 5.0, 0.0, 0.0, 5.0, 5.0, 0.0, 0.0]);
        Ok(())
    }

    #[test]
    fn remap_size_mismatch() -> Result<(), ImageError> {
        let image = Image::<f32, 1>::from_size_val([2, 2].into(), 0.0)?;
        let map = map_2x2(vec![0.0; 4], vec![0.0; 4]);
        let mut dst = Image::<f32, 1>::from_size_val([3, 2].into(), 0.0)?;
        assert_eq!(
            remap(&image, &mut dst, &map, InterpolationMode::Nearest),
            Err(ImageError::InvalidImageSize(2, 2, 3, 2))
        );
        Ok(())
    }
}
