use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use blurbench_image::Image;
use blurbench_imgproc::filter::{
    convolve_fft, convolve_separable, convolve_spatial, gaussian_kernel_1d, gaussian_kernel_2d,
};
use blurbench_imgproc::synthetic::checkerboard_with_noise;

fn bench_convolution(c: &mut Criterion) {
    let mut group = c.benchmark_group("Gaussian Blur");

    for (width, height) in [(256usize, 256usize), (512, 512)] {
        for kernel_size in [3usize, 7, 15, 31] {
            group.throughput(Throughput::Elements((width * height) as u64));

            let parameter_string = format!("{width}x{height}x{kernel_size}");

            let src =
                checkerboard_with_noise([width, height].into(), 50, 50.0, 200.0, 25.0, 42).unwrap();
            let dst = Image::from_size_val(src.size(), 0.0).unwrap();

            let kernel_2d = gaussian_kernel_2d(kernel_size, 2.0).unwrap();
            let kernel_1d = gaussian_kernel_1d(kernel_size, 2.0).unwrap();

            group.bench_with_input(
                BenchmarkId::new("spatial", &parameter_string),
                &(&src, &dst),
                |b, i| {
                    let (src, mut dst) = (i.0, i.1.clone());
                    b.iter(|| black_box(convolve_spatial(src, &mut dst, &kernel_2d)))
                },
            );

            group.bench_with_input(
                BenchmarkId::new("separable", &parameter_string),
                &(&src, &dst),
                |b, i| {
                    let (src, mut dst) = (i.0, i.1.clone());
                    b.iter(|| black_box(convolve_separable(src, &mut dst, &kernel_1d)))
                },
            );

            group.bench_with_input(
                BenchmarkId::new("fft", &parameter_string),
                &(&src, &dst),
                |b, i| {
                    let (src, mut dst) = (i.0, i.1.clone());
                    b.iter(|| black_box(convolve_fft(src, &mut dst, &kernel_2d)))
                },
            );
        }
    }

    group.finish();
}

criterion_group!(benches, bench_convolution);
criterion_main!(benches);
