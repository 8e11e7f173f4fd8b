use approx::assert_abs_diff_eq;
use rand::{rngs::StdRng, Rng, SeedableRng};

use imwarp_image::{Image, ImageError, ImageSize};
use imwarp_imgproc::{
    calibration::{
        distortion::{undistort_image, undistort_image_vectorized, RadialDistortion},
        CameraIntrinsic,
    },
    interpolation::InterpolationMode,
    warp::{warp_backward, warp_backward_bilinear, warp_backward_nearest, warp_forward},
};
use imwarp_linalg::{
    matrix::{inverse3x3, IDENTITY3},
    transforms,
};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn random_image<const C: usize>(size: ImageSize, seed: u64) -> Result<Image<f32, C>, ImageError> {
    let mut rng = StdRng::seed_from_u64(seed);
    let data = (0..size.width * size.height * C)
        .map(|_| rng.random_range(0.0..255.0))
        .collect();
    Image::new(size, data)
}

#[test]
fn forward_then_backward_identity() -> Result<(), ImageError> {
    init_logger();

    let size = ImageSize {
        width: 33,
        height: 21,
    };
    let src = random_image::<3>(size, 1)?;
    let m = IDENTITY3;
    let m_inv = inverse3x3(&m).map_err(|_| ImageError::CannotComputeDeterminant)?;

    let mut forward = Image::<f32, 3>::from_size_val(size, 0.0)?;
    warp_forward(&src, &mut forward, &m)?;

    let mut backward = Image::<f32, 3>::from_size_val(size, 0.0)?;
    warp_backward_nearest(&forward, &mut backward, &m_inv)?;

    assert_eq!(backward, src);
    Ok(())
}

#[test]
fn forward_and_backward_nearest_agree_on_integer_shift() -> Result<(), ImageError> {
    init_logger();

    let size = ImageSize {
        width: 16,
        height: 12,
    };
    let src = random_image::<1>(size, 2)?;
    let m = transforms::translation([3.0, -2.0]);

    let mut forward = Image::<f32, 1>::from_size_val(size, 0.0)?;
    warp_forward(&src, &mut forward, &m)?;

    let mut backward = Image::<f32, 1>::from_size_val(size, 0.0)?;
    warp_backward_nearest(&src, &mut backward, &m)?;

    assert_eq!(forward, backward);
    assert_eq!(forward.pixel(0, 3), src.pixel(2, 0));
    assert_eq!(forward.pixel(0, 0), Some(&[0.0][..]));
    Ok(())
}

#[test]
fn backward_bilinear_identity() -> Result<(), ImageError> {
    let size = ImageSize {
        width: 19,
        height: 27,
    };
    let src = random_image::<4>(size, 3)?;

    let mut dst = Image::<f32, 4>::from_size_val(size, 0.0)?;
    warp_backward_bilinear(&src, &mut dst, &IDENTITY3)?;

    assert_eq!(dst, src);
    Ok(())
}

#[test]
fn backward_rotation_keeps_center() -> Result<(), ImageError> {
    let size = ImageSize {
        width: 21,
        height: 21,
    };
    let src = random_image::<1>(size, 4)?;
    let m = transforms::rotation_about_point([10.0, 10.0], 30.0, 1.0)
        .map_err(|_| ImageError::CannotComputeDeterminant)?;

    for mode in [InterpolationMode::Nearest, InterpolationMode::Bilinear] {
        let mut dst = Image::<f32, 1>::from_size_val(size, 0.0)?;
        warp_backward(&src, &mut dst, &m, mode)?;

        let (Some(&[a]), Some(&[b])) = (dst.pixel(10, 10), src.pixel(10, 10)) else {
            panic!("center pixel missing");
        };
        assert_abs_diff_eq!(a, b, epsilon = 1e-3);
    }
    Ok(())
}

#[test]
fn backward_singular_transform_fails() -> Result<(), ImageError> {
    let size = ImageSize {
        width: 4,
        height: 4,
    };
    let src = random_image::<1>(size, 5)?;
    let mut dst = Image::<f32, 1>::from_size_val(size, 0.0)?;

    let m = transforms::scaling(0.0);
    for mode in [InterpolationMode::Nearest, InterpolationMode::Bilinear] {
        assert_eq!(
            warp_backward(&src, &mut dst, &m, mode),
            Err(ImageError::CannotComputeDeterminant)
        );
    }
    Ok(())
}

#[test]
fn undistort_zero_coefficients_is_identity() -> Result<(), ImageError> {
    init_logger();

    let size = ImageSize {
        width: 64,
        height: 48,
    };
    let src = random_image::<3>(size, 6)?;
    let intrinsic = CameraIntrinsic::from_matrix(&[
        57.74858366,
        0.0,
        31.98120526,
        0.0,
        65.27906526,
        23.39837719,
        0.0,
        0.0,
        1.0,
    ]);

    let mut looped = Image::<f32, 3>::from_size_val(size, 0.0)?;
    undistort_image(&src, &mut looped, &intrinsic, &RadialDistortion::default())?;
    assert_eq!(looped, src);

    let mut vectorized = Image::<f32, 3>::from_size_val(size, 0.0)?;
    undistort_image_vectorized(&src, &mut vectorized, &intrinsic, &RadialDistortion::default())?;
    assert_eq!(vectorized, src);
    Ok(())
}

#[test]
fn undistort_barrel_leaves_corners_empty() -> Result<(), ImageError> {
    let size = ImageSize {
        width: 64,
        height: 48,
    };
    let src = Image::<f32, 1>::from_size_val(size, 1.0)?;
    let intrinsic = CameraIntrinsic {
        fx: 32.0,
        fy: 32.0,
        cx: 32.0,
        cy: 24.0,
    };
    let distortion = RadialDistortion {
        k1: 0.3,
        k2: 0.0,
        k3: 0.0,
    };

    let mut dst = Image::<f32, 1>::from_size_val(size, 0.0)?;
    undistort_image(&src, &mut dst, &intrinsic, &distortion)?;

    // the corners sample outside the source, the center samples itself
    assert_eq!(dst.pixel(0, 0), Some(&[0.0][..]));
    assert_eq!(dst.pixel(47, 63), Some(&[0.0][..]));
    assert_eq!(dst.pixel(24, 32), Some(&[1.0][..]));
    Ok(())
}
