/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! PNG support via `zune-png`
use log::debug;
use pixkit_core::buffer::PixelBuffer;
use pixkit_core::errors::PixelErrors;
use zune_core::bit_depth::BitDepth;
use zune_core::options::EncoderOptions;
use zune_core::result::DecodingResult;
use zune_png::{PngDecoder, PngEncoder};

/// Decode a PNG image to 8 bit interleaved pixels
///
/// Palette images are expanded to RGB(A), 16 bit samples keep their high byte.
///
/// # Errors
/// [`PixelErrors::DecodeErrors`] if the stream is not a valid PNG
pub fn decode_png(data: &[u8]) -> Result<PixelBuffer, PixelErrors> {
    let mut decoder = PngDecoder::new(data);

    let pixels = decoder
        .decode()
        .map_err(|e| PixelErrors::DecodeErrors(format!("png: {e:?}")))?;

    let (width, height) = decoder
        .get_dimensions()
        .ok_or(PixelErrors::DecodeErrors("png: missing dimensions".to_string()))?;

    let colorspace = decoder
        .get_colorspace()
        .ok_or(PixelErrors::DecodeErrors("png: missing colorspace".to_string()))?;

    let pixels = match pixels {
        DecodingResult::U8(data) => data,
        DecodingResult::U16(data) => {
            debug!("Reducing 16 bit png to 8 bits");
            data.iter().map(|x| x.to_be_bytes()[0]).collect()
        }
        _ => {
            return Err(PixelErrors::DecodeErrors(
                "png: unsupported sample type".to_string()
            ))
        }
    };

    PixelBuffer::new(pixels, width, height, colorspace.num_components())
        .map_err(|e| PixelErrors::DecodeErrors(format!("png: {e:?}")))
}

/// Encode an image as an 8 bit PNG
///
/// # Errors
/// [`PixelErrors::EncodeErrors`] if the channel count has no PNG colorspace
pub fn encode_png(image: &PixelBuffer) -> Result<Vec<u8>, PixelErrors> {
    let colorspace = image.colorspace().ok_or_else(|| {
        PixelErrors::EncodeErrors(format!(
            "png: cannot encode an image with {} channels",
            image.channels()
        ))
    })?;
    let (width, height) = image.dimensions();

    let options = EncoderOptions::default()
        .set_width(width)
        .set_height(height)
        .set_depth(BitDepth::Eight)
        .set_colorspace(colorspace);

    let mut encoder = PngEncoder::new(image.data(), options);

    Ok(encoder.encode())
}
