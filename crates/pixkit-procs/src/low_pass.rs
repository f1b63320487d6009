/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Box blur (low pass) filter
//!
//! Every output sample is the truncated mean of the input samples of the same
//! channel within `kernel_size/2` pixels in both directions.
//!
//! Near the edges, neighbours that fall outside the image are left out of both
//! the sum and the count, so borders are averaged over fewer pixels instead of
//! being padded.
use pixkit_core::buffer::PixelBuffer;
use pixkit_core::errors::PixelErrors;
use pixkit_core::traits::OperationsTrait;

/// Blur an image by averaging a square neighbourhood
///
/// A kernel size of 0 or 1 leaves the image as is. The window reaches
/// `kernel_size/2` pixels on each side, so a size of 2 behaves like 3.
#[derive(Copy, Clone)]
pub struct LowPass {
    kernel_size: usize
}

impl LowPass {
    #[must_use]
    pub fn new(kernel_size: usize) -> LowPass {
        LowPass { kernel_size }
    }
}

impl OperationsTrait for LowPass {
    fn name(&self) -> &'static str {
        "Low Pass"
    }

    fn execute_impl(&self, image: &mut PixelBuffer) -> Result<(), PixelErrors> {
        let (width, height, channels) = image.shape();
        let mut out = vec![0; image.data().len()];

        low_pass(
            image.data(),
            &mut out,
            width,
            height,
            channels,
            self.kernel_size
        );
        image.data_mut().copy_from_slice(&out);
        Ok(())
    }
}

/// Run a box blur from `in_image` into `out_image`
///
/// # Panics
/// If either slice is shorter than `width*height*channels`
#[allow(clippy::cast_possible_truncation)]
pub fn low_pass(
    in_image: &[u8], out_image: &mut [u8], width: usize, height: usize, channels: usize,
    kernel_size: usize
) {
    let offset = kernel_size / 2;

    if offset == 0 {
        let length = width * height * channels;
        out_image[..length].copy_from_slice(&in_image[..length]);
        return;
    }

    for y in 0..height {
        let y_start = y.saturating_sub(offset);
        let y_end = y.saturating_add(offset).min(height - 1);

        for x in 0..width {
            let x_start = x.saturating_sub(offset);
            let x_end = x.saturating_add(offset).min(width - 1);

            let count = (y_end - y_start + 1) * (x_end - x_start + 1);

            for c in 0..channels {
                let mut sum = 0_usize;

                for ny in y_start..=y_end {
                    let row = &in_image[ny * width * channels..(ny + 1) * width * channels];

                    for nx in x_start..=x_end {
                        sum += usize::from(row[nx * channels + c]);
                    }
                }
                // the mean of u8 values always fits a u8
                out_image[(y * width + x) * channels + c] = (sum / count) as u8;
            }
        }
    }
}
