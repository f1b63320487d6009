use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use pixkit_benches::sample_image;
use pixkit_io::codecs::ImageFormat;
use pixkit_io::file_io::decode_memory;

fn bench_codec(c: &mut Criterion, format: ImageFormat) {
    let image = sample_image(3);
    let encoded = format.encode(&image, 90).unwrap();

    let mut group = c.benchmark_group(format!("codecs: {}", format.name()));

    group.throughput(Throughput::Bytes(image.data().len() as u64));

    group.bench_function("encode", |b| {
        b.iter(|| black_box(format.encode(&image, 90).unwrap()))
    });

    group.bench_function("decode", |b| {
        b.iter(|| black_box(decode_memory(&encoded).unwrap()))
    });
}

fn bench_png(c: &mut Criterion) {
    bench_codec(c, ImageFormat::PNG);
}

fn bench_jpeg(c: &mut Criterion) {
    bench_codec(c, ImageFormat::JPEG);
}

criterion_group!(benches, bench_png, bench_jpeg);

criterion_main!(benches);
