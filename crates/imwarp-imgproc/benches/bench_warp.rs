use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use imwarp_image::Image;
use imwarp_imgproc::{
    calibration::{
        distortion::{undistort_image, undistort_image_vectorized, RadialDistortion},
        CameraIntrinsic,
    },
    interpolation::InterpolationMode,
    warp::{warp_backward, warp_forward},
};
use imwarp_linalg::transforms::rotation_about_point;

fn bench_warp(c: &mut Criterion) {
    let mut group = c.benchmark_group("Warp");

    for (width, height) in [(256, 224), (512, 448), (1024, 896)].iter() {
        group.throughput(criterion::Throughput::Elements((*width * *height) as u64));

        let parameter_string = format!("{}x{}", width, height);

        // input image
        let image_size = [*width, *height].into();
        let image = Image::<u8, 3>::new(image_size, vec![0u8; width * height * 3]).unwrap();
        let image_f32 = image.cast::<f32>().unwrap();

        // output image
        let output = Image::<f32, 3>::from_size_val(image_size, 0.0).unwrap();
        let m = rotation_about_point([*width as f64 / 2.0, *height as f64 / 2.0], 45.0, 1.0)
            .unwrap();

        group.bench_with_input(
            BenchmarkId::new("forward", &parameter_string),
            &(&image_f32, &output, m),
            |b, i| {
                let (src, mut dst, m) = (i.0, i.1.clone(), i.2);
                b.iter(|| warp_forward(black_box(src), black_box(&mut dst), black_box(&m)))
            },
        );

        for (name, mode) in [
            ("backward_nearest", InterpolationMode::Nearest),
            ("backward_bilinear", InterpolationMode::Bilinear),
        ] {
            group.bench_with_input(
                BenchmarkId::new(name, &parameter_string),
                &(&image_f32, &output, m),
                |b, i| {
                    let (src, mut dst, m) = (i.0, i.1.clone(), i.2);
                    b.iter(|| {
                        warp_backward(
                            black_box(src),
                            black_box(&mut dst),
                            black_box(&m),
                            black_box(mode),
                        )
                    })
                },
            );
        }
    }
    group.finish();
}

fn bench_undistort(c: &mut Criterion) {
    let mut group = c.benchmark_group("Undistort");

    for (width, height) in [(640, 480), (1280, 960)].iter() {
        group.throughput(criterion::Throughput::Elements((*width * *height) as u64));

        let parameter_string = format!("{}x{}", width, height);

        let image_size = [*width, *height].into();
        let image_f32 = Image::<f32, 3>::from_size_val(image_size, 0.5).unwrap();
        let output = Image::<f32, 3>::from_size_val(image_size, 0.0).unwrap();

        let intrinsic = CameraIntrinsic {
            fx: 577.48583662,
            fy: 652.79065263,
            cx: *width as f64 / 2.0,
            cy: *height as f64 / 2.0,
        };
        let distortion = RadialDistortion {
            k1: 1.7,
            k2: -0.4,
            k3: 0.02,
        };

        group.bench_with_input(
            BenchmarkId::new("per_pixel", &parameter_string),
            &(&image_f32, &output),
            |b, i| {
                let (src, mut dst) = (i.0, i.1.clone());
                b.iter(|| {
                    undistort_image(
                        black_box(src),
                        black_box(&mut dst),
                        black_box(&intrinsic),
                        black_box(&distortion),
                    )
                })
            },
        );

        group.bench_with_input(
            BenchmarkId::new("vectorized", &parameter_string),
            &(&image_f32, &output),
            |b, i| {
                let (src, mut dst) = (i.0, i.1.clone());
                b.iter(|| {
                    undistort_image_vectorized(
                        black_box(src),
                        black_box(&mut dst),
                        black_box(&intrinsic),
                        black_box(&distortion),
                    )
                })
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_warp, bench_undistort);
criterion_main!(benches);
