use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use pixkit_benches::sample_image;
use pixkit_core::buffer::PixelBuffer;
use pixkit_core::traits::OperationsTrait;
use pixkit_procs::color_matrix::ColorMatrix;
use pixkit_procs::contrast::Contrast;
use pixkit_procs::grayscale::RgbToGrayScale;
use pixkit_procs::high_pass::HighPass;
use pixkit_procs::low_pass::LowPass;
use pixkit_procs::otsu::OtsuThreshold;
use pixkit_procs::resize::{Resize, ResizeMethod};

fn bench_inner<T>(c: &mut Criterion, name: &str, operation: T)
where
    T: OperationsTrait
{
    let image = sample_image(3);

    let mut group = c.benchmark_group(name);

    group.throughput(Throughput::Bytes(image.data().len() as u64));

    group.bench_function("pixkit", |b| {
        b.iter(|| {
            let mut im: PixelBuffer = image.clone();
            operation.execute(&mut im).unwrap();
            black_box(im);
        })
    });
}

fn bench_grayscale(c: &mut Criterion) {
    bench_inner(c, "imageprocs: grayscale", RgbToGrayScale::new());
}
fn bench_sepia(c: &mut Criterion) {
    bench_inner(c, "imageprocs: sepia", ColorMatrix::sepia());
}
fn bench_contrast(c: &mut Criterion) {
    bench_inner(c, "imageprocs: contrast", Contrast::new(1.4));
}
fn bench_low_pass(c: &mut Criterion) {
    bench_inner(c, "imageprocs: low-pass-3", LowPass::new(3));
}
fn bench_high_pass(c: &mut Criterion) {
    bench_inner(c, "imageprocs: high-pass", HighPass::new(3));
}
fn bench_otsu(c: &mut Criterion) {
    bench_inner(c, "imageprocs: otsu", OtsuThreshold::new());
}
fn bench_resize_nearest(c: &mut Criterion) {
    bench_inner(
        c,
        "imageprocs: resize-nearest-half",
        Resize::new(960, 540, ResizeMethod::NearestNeighbor)
    );
}

criterion_group!(name=benches;
      config={
      let c = Criterion::default();
        c.measurement_time(Duration::from_secs(10))
      };
    targets=bench_grayscale,bench_sepia,bench_contrast,bench_low_pass,bench_high_pass,bench_otsu,bench_resize_nearest);

criterion_main!(benches);
