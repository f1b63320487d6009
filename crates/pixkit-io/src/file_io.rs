/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Reading and writing images from and to files
use std::path::{Path, PathBuf};

use log::{info, trace};
use pixkit_core::buffer::PixelBuffer;
use pixkit_core::errors::PixelErrors;
use pixkit_core::traits::IntoImage;

use crate::codecs::ImageFormat;

/// Decode an image held in memory, guessing its format from its magic bytes
///
/// # Errors
/// - [`PixelErrors::DecodeErrors`] if the format is unknown or the data is corrupt
pub fn decode_memory(data: &[u8]) -> Result<PixelBuffer, PixelErrors> {
    let Some(format) = ImageFormat::guess_format(data) else {
        return Err(PixelErrors::DecodeErrors(
            "unknown or unsupported image format".to_string()
        ));
    };
    trace!("Guessed format {format:?}");

    format.decode(data)
}

/// Open and decode an image file
///
/// The format is guessed from the file contents, not from its extension
///
/// # Errors
/// - [`PixelErrors::IoErrors`] if the file cannot be read
/// - [`PixelErrors::DecodeErrors`] if the format is unknown or the data is corrupt
///
/// # Example
/// ```no_run
/// use pixkit_io::file_io::open;
///
/// let image = open("photo.jpg").unwrap();
/// println!("{:?}", image.dimensions());
/// ```
pub fn open<P: AsRef<Path>>(file: P) -> Result<PixelBuffer, PixelErrors> {
    let data = std::fs::read(file.as_ref())?;
    info!("Read {} bytes from {:?}", data.len(), file.as_ref());

    decode_memory(&data)
}

/// Encode an image as PNG and write it to `file`
///
/// # Errors
/// Encoding or writing errors
pub fn save_png<P: AsRef<Path>>(image: &PixelBuffer, file: P) -> Result<(), PixelErrors> {
    save_to(image, file, ImageFormat::PNG, 0)
}

/// Encode an image as JPEG with the given quality and write it to `file`
///
/// # Errors
/// - [`PixelErrors::InvalidArgument`] if quality is outside `1..=100`
/// - Encoding or writing errors
pub fn save_jpeg<P: AsRef<Path>>(
    image: &PixelBuffer, file: P, quality: u8
) -> Result<(), PixelErrors> {
    save_to(image, file, ImageFormat::JPEG, quality)
}

/// Save an image, choosing the format from the file extension
///
/// `quality` is used for JPEG files and ignored for PNG
///
/// # Errors
/// - [`PixelErrors::EncodeErrors`] if the extension is missing or has no encoder
/// - Encoding or writing errors
pub fn save<P: AsRef<Path>>(image: &PixelBuffer, file: P, quality: u8) -> Result<(), PixelErrors> {
    let Some(ext) = file.as_ref().extension() else {
        let msg = format!("No extension for file {:?}", file.as_ref());
        return Err(PixelErrors::EncodeErrors(msg));
    };
    let Some(format) = ImageFormat::encoder_for_extension(ext.to_string_lossy()) else {
        let msg = format!("No encoder for extension {ext:?}");
        return Err(PixelErrors::EncodeErrors(msg));
    };
    save_to(image, file, format, quality)
}

/// Save an image to `file` in the given format
///
/// # Errors
/// Encoding or writing errors
pub fn save_to<P: AsRef<Path>>(
    image: &PixelBuffer, file: P, format: ImageFormat, quality: u8
) -> Result<(), PixelErrors> {
    let encoded = format.encode(image, quality)?;

    std::fs::write(file.as_ref(), &encoded)?;
    info!(
        "Wrote {} bytes of {} to {:?}",
        encoded.len(),
        format.name(),
        file.as_ref()
    );
    Ok(())
}

/// An image file that is decoded when a pipeline needs it
pub struct ImageFile {
    file_path: PathBuf
}

impl ImageFile {
    pub fn new<P: Into<PathBuf>>(file_path: P) -> ImageFile {
        ImageFile {
            file_path: file_path.into()
        }
    }
}

impl IntoImage for ImageFile {
    fn into_image(self) -> Result<PixelBuffer, PixelErrors> {
        open(self.file_path)
    }
}
