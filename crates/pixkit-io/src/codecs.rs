/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Entry point for the codecs the library understands
//!
//! Decoding picks the codec from the magic bytes at the start of the data,
//! encoding picks it from the extension of the output file.
//!
//! Every codec works on 8 bit interleaved pixels, 16 bit PNG images are
//! reduced to 8 bits when decoded.
use log::trace;
use pixkit_core::buffer::PixelBuffer;
use pixkit_core::errors::PixelErrors;

pub mod jpeg;
pub mod png;

/// All supported image formats
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ImageFormat {
    /// Portable Network Graphics
    PNG,
    /// Joint Photographic Experts Group
    JPEG
}

impl ImageFormat {
    /// Guess the format of an image from its magic bytes
    pub fn guess_format(bytes: &[u8]) -> Option<ImageFormat> {
        guess_format(bytes)
    }

    /// Return the format whose encoder handles files with this extension
    ///
    /// The comparison ignores case, so `PNG` and `png` both map to [`ImageFormat::PNG`]
    pub fn encoder_for_extension<P: AsRef<str>>(extension: P) -> Option<ImageFormat> {
        match extension.as_ref().to_ascii_lowercase().as_str() {
            "png" => Some(ImageFormat::PNG),
            "jpeg" | "jpg" => Some(ImageFormat::JPEG),
            _ => None
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            ImageFormat::PNG => "png",
            ImageFormat::JPEG => "jpeg"
        }
    }

    /// Decode `data` with the codec of this format
    ///
    /// # Errors
    /// [`PixelErrors::DecodeErrors`] if the codec rejects the data
    pub fn decode(self, data: &[u8]) -> Result<PixelBuffer, PixelErrors> {
        trace!("Decoding {} bytes as {}", data.len(), self.name());

        match self {
            ImageFormat::PNG => png::decode_png(data),
            ImageFormat::JPEG => jpeg::decode_jpeg(data)
        }
    }

    /// Encode `image` with the codec of this format
    ///
    /// `quality` is only used by lossy formats
    ///
    /// # Errors
    /// See [`png::encode_png`] and [`jpeg::encode_jpeg`]
    pub fn encode(self, image: &PixelBuffer, quality: u8) -> Result<Vec<u8>, PixelErrors> {
        match self {
            ImageFormat::PNG => png::encode_png(image),
            ImageFormat::JPEG => jpeg::encode_jpeg(image, quality)
        }
    }
}

/// Guess the format of an image based on its magic bytes
///
/// # Returns
/// - Some(format): The image format
/// - None: Indicates the format isn't known/understood by the library
pub fn guess_format(bytes: &[u8]) -> Option<ImageFormat> {
    let magic_bytes: [(&[u8], ImageFormat); 2] = [
        (&[137, 80, 78, 71, 13, 10, 26, 10], ImageFormat::PNG),
        // some jpeg images don't carry the full 0xFF,0xD8,0xFF marker so
        // only the start of image marker is checked
        (&[0xff, 0xd8], ImageFormat::JPEG)
    ];

    for (magic, format) in magic_bytes {
        if bytes.starts_with(magic) {
            return Some(format);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use crate::codecs::{guess_format, ImageFormat};

    #[test]
    fn magic_bytes() {
        assert_eq!(
            guess_format(&[137, 80, 78, 71, 13, 10, 26, 10, 0, 0]),
            Some(ImageFormat::PNG)
        );
        assert_eq!(guess_format(&[0xff, 0xd8, 0xff, 0xe0]), Some(ImageFormat::JPEG));
        assert_eq!(guess_format(b"GIF89a"), None);
        assert_eq!(guess_format(&[]), None);
    }

    #[test]
    fn extensions() {
        assert_eq!(ImageFormat::encoder_for_extension("png"), Some(ImageFormat::PNG));
        assert_eq!(ImageFormat::encoder_for_extension("JPG"), Some(ImageFormat::JPEG));
        assert_eq!(ImageFormat::encoder_for_extension("jpeg"), Some(ImageFormat::JPEG));
        assert_eq!(ImageFormat::encoder_for_extension("bmp"), None);
    }
}
