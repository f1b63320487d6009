/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Crop an image
//!
//! The crop always starts at the top left corner, so cropping is a copy of the
//! first `out_height` rows, keeping the first `out_width` pixels of each.
//!
//! ```text
//!    width ──────────────────────────►
//! │ ┌────────────────┬───────────────┐
//! │ │                │               │
//! │ │ CROPPED IMAGE  │               │
//! │ │                │               │
//! │ ├────────────────┘               │
//! │ │                                │
//! ▼ └────────────────────────────────┘
//! ```
use pixkit_core::buffer::PixelBuffer;
use pixkit_core::errors::PixelErrors;
use pixkit_core::traits::OperationsTrait;

/// Keep the top left `width x height` part of an image
///
/// # Example
/// ```
/// use pixkit_core::buffer::PixelBuffer;
/// use pixkit_core::errors::PixelErrors;
/// use pixkit_core::traits::OperationsTrait;
/// use pixkit_procs::crop::Crop;
///
/// fn main() -> Result<(), PixelErrors> {
///     let mut image = PixelBuffer::fill(255, 1000, 1000, 1)?;
///     Crop::new(100, 100).execute(&mut image)?;
///
///     assert_eq!(image.dimensions(), (100, 100));
///     Ok(())
/// }
/// ```
pub struct Crop {
    width:  usize,
    height: usize
}

impl Crop {
    /// Create a new crop operation
    ///
    /// # Arguments
    /// - width: The width of the new cropped out image
    /// - height: The height of the new cropped out image.
    #[must_use]
    pub fn new(width: usize, height: usize) -> Crop {
        Crop { width, height }
    }
}

impl OperationsTrait for Crop {
    fn name(&self) -> &'static str {
        "Crop"
    }

    fn execute_impl(&self, image: &mut PixelBuffer) -> Result<(), PixelErrors> {
        let (in_width, in_height, channels) = image.shape();

        if self.width > in_width || self.height > in_height {
            return Err(PixelErrors::InvalidArgument(format!(
                "cannot crop {}x{} out of a {in_width}x{in_height} image",
                self.width, self.height
            )));
        }
        let mut out = vec![0; self.width * self.height * channels];

        crop(
            image.data(),
            in_width,
            in_height,
            &mut out,
            self.width,
            self.height,
            channels
        );
        image.set_dimensions(out, self.width, self.height)
    }
}

/// Copy the top left `out_width x out_height` region of an interleaved image
///
/// # Arguments
/// * `in_image`:   Input image
/// * `in_width`:   Input width in pixels
/// * `in_height`:  Input height in pixels
/// * `out_image`:  Output image, `out_width*out_height*channels` long
/// * `out_width`:  Output width in pixels
/// * `out_height`: Output height in pixels
/// * `channels`:   Interleaved samples per pixel
///
/// # Panics
/// - If the output is larger than the input in either direction
/// - If either slice is shorter than its dimensions say
pub fn crop(
    in_image: &[u8], in_width: usize, in_height: usize, out_image: &mut [u8], out_width: usize,
    out_height: usize, channels: usize
) {
    assert!(
        out_width <= in_width && out_height <= in_height,
        "crop region {out_width}x{out_height} is larger than image {in_width}x{in_height}"
    );
    let in_stride = in_width * channels;
    let out_stride = out_width * channels;

    if in_stride == 0 || out_stride == 0 {
        return;
    }

    for (in_row, out_row) in in_image
        .chunks_exact(in_stride)
        .take(out_height)
        .zip(out_image.chunks_exact_mut(out_stride))
    {
        out_row.copy_from_slice(&in_row[..out_stride]);
    }
}
