/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Laplacian style high pass filter
//!
//! The filter correlates every channel with
//! ```text
//! [[-1,-1,-1],
//!  [-1, 8,-1],
//!  [-1,-1,-1]]
//! ```
//! and clamps the result to `0..=255`.
//!
//! Neighbours outside the image are skipped. To keep the kernel summing to zero
//! at the edges the center weight becomes the number of neighbours that were
//! actually read (8 inside the image, 5 on an edge, 3 in a corner), so a flat
//! region maps to zero everywhere, borders included.
use log::debug;
use pixkit_core::buffer::PixelBuffer;
use pixkit_core::errors::PixelErrors;
use pixkit_core::traits::OperationsTrait;

/// Highlight edges in an image
///
/// The kernel is always 3x3, the kernel size is accepted for
/// symmetry with [`LowPass`](crate::low_pass::LowPass) but not used.
#[derive(Copy, Clone)]
pub struct HighPass {
    kernel_size: usize
}

impl HighPass {
    #[must_use]
    pub fn new(kernel_size: usize) -> HighPass {
        HighPass { kernel_size }
    }
}

impl OperationsTrait for HighPass {
    fn name(&self) -> &'static str {
        "High Pass"
    }

    fn execute_impl(&self, image: &mut PixelBuffer) -> Result<(), PixelErrors> {
        if self.kernel_size != 3 {
            debug!(
                "High pass kernel is fixed at 3x3, ignoring kernel size {}",
                self.kernel_size
            );
        }
        let (width, height, channels) = image.shape();
        let mut out = vec![0; image.data().len()];

        high_pass(image.data(), &mut out, width, height, channels);

        image.data_mut().copy_from_slice(&out);
        Ok(())
    }
}

/// Run the 3x3 high pass kernel from `in_image` into `out_image`
///
/// Interior pixels match the classic kernel with a center weight of 8.
/// Border pixels use the reduced center weight described in the module docs,
/// so for non-flat input they differ from a kernel that skips outside taps
/// but keeps the center at 8, e.g. a `[50, 60, 60]` row gives `[0, 10, 0]`
/// here where the fixed weight saturates every sample to 255.
///
/// # Panics
/// If either slice is shorter than `width*height*channels`
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn high_pass(
    in_image: &[u8], out_image: &mut [u8], width: usize, height: usize, channels: usize
) {
    for y in 0..height {
        let y_start = y.saturating_sub(1);
        let y_end = (y + 1).min(height - 1);

        for x in 0..width {
            let x_start = x.saturating_sub(1);
            let x_end = (x + 1).min(width - 1);

            // the pixel itself is inside the window, hence the -1
            let neighbours = ((y_end - y_start + 1) * (x_end - x_start + 1) - 1) as i32;

            let center = (y * width + x) * channels;

            for c in 0..channels {
                let mut sum = neighbours * i32::from(in_image[center + c]);

                for ny in y_start..=y_end {
                    for nx in x_start..=x_end {
                        if nx == x && ny == y {
                            continue;
                        }
                        sum -= i32::from(in_image[(ny * width + nx) * channels + c]);
                    }
                }
                out_image[center + c] = sum.clamp(0, 255) as u8;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use pixkit_core::buffer::PixelBuffer;
    use pixkit_core::traits::OperationsTrait;

    use crate::high_pass::{high_pass, HighPass};

    #[test]
    fn flat_image_is_zero() {
        for value in [0, 1, 128, 255] {
            let mut image = PixelBuffer::fill(value, 6, 4, 3).unwrap();
            HighPass::new(3).execute(&mut image).unwrap();
            assert!(image.data().iter().all(|x| *x == 0), "value {value}");
        }
    }

    #[test]
    fn single_spike() {
        let mut pixels = [0_u8; 25];
        pixels[12] = 10;
        let mut out = [0; 25];

        high_pass(&pixels, &mut out, 5, 5, 1);

        let mut expected = [0_u8; 25];
        expected[12] = 80;
        assert_eq!(out, expected);
    }

    #[test]
    fn edges_use_reduced_center_weight() {
        let pixels = [0, 100];
        let mut out = [0; 2];
        high_pass(&pixels, &mut out, 2, 1, 1);
        assert_eq!(out, [0, 100]);
    }

    #[test]
    fn single_row_borders() {
        let pixels = [50, 60, 60];
        let mut out = [0; 3];
        high_pass(&pixels, &mut out, 3, 1, 1);
        // 50-60, 2*60-50-60, 60-60
        assert_eq!(out, [0, 10, 0]);
    }

    #[test]
    fn kernel_size_is_ignored() {
        let mut a = PixelBuffer::from_fn(5, 5, 1, |x, y, _| ((x * 40) ^ (y * 13)) as u8).unwrap();
        let mut b = a.clone();

        HighPass::new(3).execute(&mut a).unwrap();
        HighPass::new(7).execute(&mut b).unwrap();
        assert_eq!(a, b);
    }
}
