/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Convert an RGB(A) image to grayscale
//!
//! The luma of a pixel is
//! ```text
//! Y = 0.3*R + 0.59*G + 0.11*B
//! ```
//! truncated to an integer and written back to the first three channels,
//! any other channel (e.g alpha) is left alone, so the image keeps its channel count.
//!
//! The weights are applied as integers out of 100, which makes the truncation exact
//! and the conversion idempotent, a gray pixel stays the same gray.
use pixkit_core::buffer::PixelBuffer;
use pixkit_core::errors::PixelErrors;
use pixkit_core::traits::OperationsTrait;

const WEIGHT_R: u32 = 30;
const WEIGHT_G: u32 = 59;
const WEIGHT_B: u32 = 11;

/// Convert an RGB image to grayscale
///
/// # Example
/// ```
/// use pixkit_core::buffer::PixelBuffer;
/// use pixkit_core::traits::OperationsTrait;
/// use pixkit_procs::grayscale::RgbToGrayScale;
///
/// let mut image = PixelBuffer::new(vec![100, 200, 50, 255], 1, 1, 4).unwrap();
/// RgbToGrayScale::new().execute(&mut image).unwrap();
/// // 0.3*100 + 0.59*200 + 0.11*50 = 153.5
/// assert_eq!(image.data(), &[153, 153, 153, 255]);
/// ```
#[derive(Default, Copy, Clone)]
pub struct RgbToGrayScale;

impl RgbToGrayScale {
    #[must_use]
    pub fn new() -> RgbToGrayScale {
        RgbToGrayScale
    }
}

impl OperationsTrait for RgbToGrayScale {
    fn name(&self) -> &'static str {
        "RGB to Grayscale"
    }

    fn execute_impl(&self, image: &mut PixelBuffer) -> Result<(), PixelErrors> {
        let channels = image.channels();
        rgb_to_grayscale(image.data_mut(), channels);
        Ok(())
    }

    fn min_channels(&self) -> usize {
        3
    }
}

/// Convert interleaved RGB pixels to grayscale in place
///
/// # Arguments
/// - data: Interleaved pixels, `channels` samples per pixel
/// - channels: Number of samples per pixel, the first three are R,G,B
///
/// # Panics
/// If `channels` is less than 3
#[allow(clippy::cast_possible_truncation)]
pub fn rgb_to_grayscale(data: &mut [u8], channels: usize) {
    assert!(channels >= 3, "grayscale needs at least three channels");

    for pix in data.chunks_exact_mut(channels) {
        let luma = (WEIGHT_R * u32::from(pix[0])
            + WEIGHT_G * u32::from(pix[1])
            + WEIGHT_B * u32::from(pix[2]))
            / 100;
        // weights sum to 100 so luma is at most 255
        let luma = luma as u8;

        pix[0] = luma;
        pix[1] = luma;
        pix[2] = luma;
    }
}

#[cfg(test)]
mod tests {
    use nanorand::Rng;
    use pixkit_core::buffer::PixelBuffer;
    use pixkit_core::errors::PixelErrors;
    use pixkit_core::traits::OperationsTrait;

    use crate::grayscale::{rgb_to_grayscale, RgbToGrayScale};

    #[test]
    fn luma_weights_truncate() {
        let mut data = [255, 0, 0, 0, 255, 0, 0, 0, 255, 10, 20, 30];
        rgb_to_grayscale(&mut data, 3);
        // 76.5, 150.45, 28.05 and 3+11.8+3.3
        assert_eq!(data, [76, 76, 76, 150, 150, 150, 28, 28, 28, 18, 18, 18]);
    }

    #[test]
    fn white_stays_white() {
        let mut data = [255; 6];
        rgb_to_grayscale(&mut data, 3);
        assert_eq!(data, [255; 6]);
    }

    #[test]
    fn grayscale_is_idempotent() {
        let (w, h) = (64, 48);
        let mut pixels = vec![0_u8; w * h * 4];
        nanorand::WyRand::new().fill(&mut pixels);

        let mut once = PixelBuffer::new(pixels, w, h, 4).unwrap();
        RgbToGrayScale::new().execute(&mut once).unwrap();

        let mut twice = once.clone();
        RgbToGrayScale::new().execute(&mut twice).unwrap();

        assert_eq!(once, twice);
    }

    #[test]
    fn alpha_is_untouched() {
        let mut image = PixelBuffer::new(vec![1, 2, 3, 77, 4, 5, 6, 88], 2, 1, 4).unwrap();
        RgbToGrayScale::new().execute(&mut image).unwrap();
        assert_eq!(image.data()[3], 77);
        assert_eq!(image.data()[7], 88);
    }

    #[test]
    fn gray_input_is_rejected() {
        let mut image = PixelBuffer::fill(10, 4, 4, 1).unwrap();
        let result = RgbToGrayScale::new().execute(&mut image);
        assert!(matches!(result, Err(PixelErrors::InvalidFormat { .. })));

        let mut image = PixelBuffer::fill(10, 4, 4, 2).unwrap();
        assert!(RgbToGrayScale::new().execute(&mut image).is_err());
    }
}

#[cfg(feature = "benchmarks")]
#[cfg(test)]
mod benchmarks {
    extern crate test;

    #[bench]
    fn rgb_to_grayscale_scalar_bench(b: &mut test::Bencher) {
        use crate::grayscale::rgb_to_grayscale;
        let width = 800;
        let height = 800;
        let dimensions = width * height * 3;

        let mut c1 = vec![128_u8; dimensions];

        b.iter(|| {
            rgb_to_grayscale(&mut c1, 3);
        });
    }
}
