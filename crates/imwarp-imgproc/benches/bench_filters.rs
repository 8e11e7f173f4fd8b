use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use imwarp_image::Image;
use imwarp_imgproc::filter::{filter2d, kernels, ConvolutionMethod};

fn bench_filter2d(c: &mut Criterion) {
    let mut group = c.benchmark_group("Filter2d");

    for (width, height) in [(256, 224), (512, 448)].iter() {
        for kernel_size in [3, 7, 15].iter() {
            group.throughput(criterion::Throughput::Elements((*width * *height) as u64));

            let parameter_string = format!("{}x{}_{}", width, height, kernel_size);

            // input image
            let image_size = [*width, *height].into();
            let image = Image::<u8, 3>::new(image_size, vec![0u8; width * height * 3]).unwrap();
            let image_f32 = image.cast::<f32>().unwrap();

            // output image
            let output = Image::<f32, 3>::from_size_val(image_size, 0.0).unwrap();
            let kernel = kernels::gaussian((*kernel_size, *kernel_size), (1.5, 1.5)).unwrap();

            for (name, method) in [
                ("direct", ConvolutionMethod::Direct),
                ("clamped", ConvolutionMethod::Clamped),
                ("frequency", ConvolutionMethod::Frequency),
            ] {
                group.bench_with_input(
                    BenchmarkId::new(name, &parameter_string),
                    &(&image_f32, &output, &kernel),
                    |b, i| {
                        let (src, mut dst, kernel) = (i.0, i.1.clone(), i.2);
                        b.iter(|| {
                            filter2d(
                                black_box(src),
                                black_box(&mut dst),
                                black_box(kernel),
                                black_box(method),
                            )
                        })
                    },
                );
            }
        }
    }
    group.finish();
}

criterion_group!(benches, bench_filter2d);
criterion_main!(benches);
