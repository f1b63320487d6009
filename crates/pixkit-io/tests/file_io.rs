use std::path::PathBuf;

use pixkit_core::buffer::PixelBuffer;
use pixkit_core::errors::PixelErrors;
use pixkit_core::pipelines::Pipeline;
use pixkit_core::traits::OperationsTrait;
use pixkit_io::file_io::{decode_memory, open, save, save_jpeg, save_png, ImageFile};
use pixkit_procs::brighten::Brighten;

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("pixkit-io-{}-{name}", std::process::id()))
}

fn gradient(width: usize, height: usize, channels: usize) -> PixelBuffer {
    PixelBuffer::from_fn(width, height, channels, |x, y, c| {
        ((x * 7 + y * 13 + c * 50) % 256) as u8
    })
    .unwrap()
}

#[test]
fn png_file_round_trip() {
    let path = temp_path("round-trip.png");
    let image = gradient(31, 17, 4);

    save_png(&image, &path).unwrap();
    let decoded = open(&path).unwrap();
    std::fs::remove_file(&path).unwrap();

    assert_eq!(decoded, image);
}

#[test]
fn jpeg_file_keeps_dimensions() {
    let path = temp_path("dimensions.jpg");
    let image = gradient(64, 48, 3);

    save_jpeg(&image, &path, 85).unwrap();
    let decoded = open(&path).unwrap();
    std::fs::remove_file(&path).unwrap();

    assert_eq!(decoded.dimensions(), (64, 48));
}

#[test]
fn save_picks_format_from_extension() {
    let png_path = temp_path("by-extension.PNG");
    let jpg_path = temp_path("by-extension.jpeg");
    let image = gradient(8, 8, 3);

    save(&image, &png_path, 90).unwrap();
    save(&image, &jpg_path, 90).unwrap();

    let png_bytes = std::fs::read(&png_path).unwrap();
    let jpg_bytes = std::fs::read(&jpg_path).unwrap();
    std::fs::remove_file(&png_path).unwrap();
    std::fs::remove_file(&jpg_path).unwrap();

    assert!(png_bytes.starts_with(&[137, 80, 78, 71]));
    assert!(jpg_bytes.starts_with(&[0xff, 0xd8]));
}

#[test]
fn unknown_extension_is_an_encode_error() {
    let image = gradient(2, 2, 3);

    let result = save(&image, temp_path("image.bmp"), 90);
    assert!(matches!(result, Err(PixelErrors::EncodeErrors(_))));

    let result = save(&image, temp_path("no-extension"), 90);
    assert!(matches!(result, Err(PixelErrors::EncodeErrors(_))));
}

#[test]
fn missing_file_is_an_io_error() {
    let result = open(temp_path("does-not-exist.png"));
    assert!(matches!(result, Err(PixelErrors::IoErrors(_))));
}

#[test]
fn unknown_bytes_are_a_decode_error() {
    let result = decode_memory(b"P6\n2 2\n255\n");
    assert!(matches!(result, Err(PixelErrors::DecodeErrors(_))));
}

#[test]
fn pipeline_decodes_image_file() {
    let path = temp_path("pipeline.png");
    save_png(&PixelBuffer::fill(100, 5, 5, 3).unwrap(), &path).unwrap();

    let mut pipeline = Pipeline::new();
    pipeline
        .chain_decoder(ImageFile::new(&path))
        .chain_operations(Box::new(Brighten::new(20)));
    pipeline.advance_to_end().unwrap();
    std::fs::remove_file(&path).unwrap();

    let images = pipeline.into_images();
    assert_eq!(images.len(), 1);
    assert!(images[0].data().iter().all(|x| *x == 120));
}

#[test]
fn operations_survive_encoding() {
    let path = temp_path("after-ops.png");
    let mut image = gradient(10, 10, 1);
    Brighten::new(-300).execute(&mut image).unwrap();

    save_png(&image, &path).unwrap();
    let decoded = open(&path).unwrap();
    std::fs::remove_file(&path).unwrap();

    assert!(decoded.data().iter().all(|x| *x == 0));
}
