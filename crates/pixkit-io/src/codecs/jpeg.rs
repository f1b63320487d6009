/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! JPEG support
//!
//! Decoding is done by `zune-jpeg`, encoding by `jpeg-encoder`.
use jpeg_encoder::{ColorType, Encoder};
use log::{debug, warn};
use pixkit_core::buffer::PixelBuffer;
use pixkit_core::errors::PixelErrors;
use zune_core::colorspace::ColorSpace;
use zune_jpeg::JpegDecoder;

/// Decode a JPEG image to 8 bit interleaved pixels
///
/// # Errors
/// [`PixelErrors::DecodeErrors`] if the stream is not a valid JPEG
pub fn decode_jpeg(data: &[u8]) -> Result<PixelBuffer, PixelErrors> {
    let mut decoder = JpegDecoder::new(data);

    let pixels = decoder
        .decode()
        .map_err(|e| PixelErrors::DecodeErrors(format!("jpeg: {e:?}")))?;

    let (width, height) = decoder
        .dimensions()
        .ok_or(PixelErrors::DecodeErrors("jpeg: missing dimensions".to_string()))?;

    let colorspace = decoder
        .get_output_colorspace()
        .ok_or(PixelErrors::DecodeErrors("jpeg: missing colorspace".to_string()))?;

    if !matches!(
        colorspace,
        ColorSpace::Luma | ColorSpace::LumaA | ColorSpace::RGB | ColorSpace::RGBA
    ) {
        return Err(PixelErrors::DecodeErrors(format!(
            "jpeg: unsupported output colorspace {colorspace:?}"
        )));
    }
    PixelBuffer::new(pixels, width, height, colorspace.num_components())
        .map_err(|e| PixelErrors::DecodeErrors(format!("jpeg: {e:?}")))
}

/// Encode an image as a baseline JPEG
///
/// Gray, RGB and RGBA images are supported, alpha is dropped.
///
/// # Errors
/// - [`PixelErrors::InvalidArgument`] if quality is outside `1..=100`
/// - [`PixelErrors::EncodeErrors`] for unsupported channel counts, dimensions above
///   65535 or an encoder failure
pub fn encode_jpeg(image: &PixelBuffer, quality: u8) -> Result<Vec<u8>, PixelErrors> {
    if !(1..=100).contains(&quality) {
        return Err(PixelErrors::InvalidArgument(format!(
            "jpeg quality must be between 1 and 100, found {quality}"
        )));
    }
    let color_type = match image.channels() {
        1 => ColorType::Luma,
        3 => ColorType::Rgb,
        4 => {
            warn!("Jpeg does not support transparency, alpha channel will be dropped");
            ColorType::Rgba
        }
        c => {
            return Err(PixelErrors::EncodeErrors(format!(
                "jpeg: cannot encode an image with {c} channels"
            )))
        }
    };
    let (width, height) = image.dimensions();

    let width = u16::try_from(width).map_err(|_| {
        PixelErrors::EncodeErrors(format!("jpeg: width {width} is larger than 65535"))
    })?;
    let height = u16::try_from(height).map_err(|_| {
        PixelErrors::EncodeErrors(format!("jpeg: height {height} is larger than 65535"))
    })?;

    debug!("Encoding jpeg with quality {quality}");

    let mut output = Vec::new();
    let encoder = Encoder::new(&mut output, quality);

    encoder
        .encode(image.data(), width, height, color_type)
        .map_err(|e| PixelErrors::EncodeErrors(format!("jpeg: {e:?}")))?;

    Ok(output)
}
