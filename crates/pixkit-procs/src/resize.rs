/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Resize an image to new dimensions
//!
//! Destination pixel `(x,y)` takes the value of source pixel
//! ```text
//! (x * in_width / out_width, y * in_height / out_height)
//! ```
//! with integer division, so resizing to the same size copies the image.
use pixkit_core::buffer::PixelBuffer;
use pixkit_core::errors::PixelErrors;
use pixkit_core::traits::OperationsTrait;

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum ResizeMethod {
    #[default]
    NearestNeighbor
}

/// Resize an image
///
/// # Example
/// ```
/// use pixkit_core::buffer::PixelBuffer;
/// use pixkit_core::traits::OperationsTrait;
/// use pixkit_procs::resize::{Resize, ResizeMethod};
///
/// let mut image = PixelBuffer::fill(12, 10, 10, 3).unwrap();
/// Resize::new(4, 25, ResizeMethod::NearestNeighbor).execute(&mut image).unwrap();
/// assert_eq!(image.dimensions(), (4, 25));
/// ```
pub struct Resize {
    new_width:  usize,
    new_height: usize,
    method:     ResizeMethod
}

impl Resize {
    /// Create a new resize operation
    ///
    /// # Argument
    /// - new_width: The new image width
    /// - new_height: The new image height.
    /// - method: The resize method to use
    #[must_use]
    pub fn new(new_width: usize, new_height: usize, method: ResizeMethod) -> Resize {
        Resize {
            new_width,
            new_height,
            method
        }
    }
}

impl OperationsTrait for Resize {
    fn name(&self) -> &'static str {
        "Resize"
    }

    fn execute_impl(&self, image: &mut PixelBuffer) -> Result<(), PixelErrors> {
        let (old_width, old_height, channels) = image.shape();

        if self.new_width == 0 || self.new_height == 0 {
            return Err(PixelErrors::InvalidArgument(format!(
                "cannot resize to {}x{}, dimensions must be non zero",
                self.new_width, self.new_height
            )));
        }
        if old_width == 0 || old_height == 0 {
            return Err(PixelErrors::InvalidArgument(format!(
                "cannot resize an empty {old_width}x{old_height} image"
            )));
        }
        let new_length = self
            .new_width
            .checked_mul(self.new_height)
            .and_then(|x| x.checked_mul(channels))
            .ok_or(PixelErrors::GenericStr("resize dimensions overflow"))?;

        let mut out = vec![0; new_length];

        resize(
            image.data(),
            &mut out,
            self.method,
            old_width,
            old_height,
            self.new_width,
            self.new_height,
            channels
        );
        image.set_dimensions(out, self.new_width, self.new_height)
    }
}

/// Resize an interleaved image to new dimensions
///
/// # Arguments
/// - in_image: The interleaved source pixels
/// - out_image: Where we will store the new resized pixels
/// - method: The resizing method to use
/// - in_width: `in_image`'s width
/// - in_height:  `in_image`'s height.
/// - out_width: The expected width
/// - out_height: The expected height.
/// - channels: Interleaved samples per pixel
///
/// # Panics
/// - `in_width*in_height*channels` is larger than `in_image.len()`.
/// - `out_width*out_height*channels` is larger than `out_image.len()`.
/// - Either input dimension is zero while the output is not empty
#[allow(clippy::too_many_arguments)]
pub fn resize(
    in_image: &[u8], out_image: &mut [u8], method: ResizeMethod, in_width: usize,
    in_height: usize, out_width: usize, out_height: usize, channels: usize
) {
    match method {
        ResizeMethod::NearestNeighbor => nearest_neighbor(
            in_image, out_image, in_width, in_height, out_width, out_height, channels
        )
    }
}

fn nearest_neighbor(
    in_image: &[u8], out_image: &mut [u8], in_width: usize, in_height: usize, out_width: usize,
    out_height: usize, channels: usize
) {
    let out_stride = out_width * channels;

    if out_stride == 0 {
        return;
    }

    for (y, out_row) in out_image
        .chunks_exact_mut(out_stride)
        .take(out_height)
        .enumerate()
    {
        let src_y = y * in_height / out_height;
        let in_row = &in_image[src_y * in_width * channels..(src_y + 1) * in_width * channels];

        for (x, out_pix) in out_row.chunks_exact_mut(channels).enumerate() {
            let src_x = x * in_width / out_width;
            out_pix.copy_from_slice(&in_row[src_x * channels..(src_x + 1) * channels]);
        }
    }
}

#[cfg(test)]
mod tests {
    use nanorand::Rng;
    use pixkit_core::buffer::PixelBuffer;
    use pixkit_core::errors::PixelErrors;
    use pixkit_core::traits::OperationsTrait;

    use crate::resize::{resize, Resize, ResizeMethod};

    #[test]
    fn same_size_is_identity() {
        let mut rng = nanorand::WyRand::new();
        let mut pixels = vec![0_u8; 13 * 7 * 3];
        rng.fill(&mut pixels);

        let original = PixelBuffer::new(pixels, 13, 7, 3).unwrap();
        let mut image = original.clone();
        Resize::new(13, 7, ResizeMethod::NearestNeighbor)
            .execute(&mut image)
            .unwrap();

        assert_eq!(image, original);
    }

    #[test]
    fn upscale_duplicates_pixels() {
        let pixels = [1, 2, 3, 4];
        let mut out = [0; 16];
        resize(&pixels, &mut out, ResizeMethod::NearestNeighbor, 2, 2, 4, 4, 1);

        #[rustfmt::skip]
        let expected = [
            1, 1, 2, 2,
            1, 1, 2, 2,
            3, 3, 4, 4,
            3, 3, 4, 4
        ];
        assert_eq!(out, expected);
    }

    #[test]
    fn downscale_picks_top_left_of_each_block() {
        let image = PixelBuffer::from_fn(4, 4, 2, |x, y, c| (y * 40 + x * 10 + c) as u8).unwrap();
        let mut out = vec![0; 2 * 2 * 2];
        resize(image.data(), &mut out, ResizeMethod::NearestNeighbor, 4, 4, 2, 2, 2);

        assert_eq!(out, [0, 1, 20, 21, 80, 81, 100, 101]);
    }

    #[test]
    fn zero_size_is_rejected() {
        let mut image = PixelBuffer::fill(0, 4, 4, 1).unwrap();

        for (w, h) in [(0, 4), (4, 0), (0, 0)] {
            let result = Resize::new(w, h, ResizeMethod::NearestNeighbor).execute(&mut image);
            assert!(matches!(result, Err(PixelErrors::InvalidArgument(_))));
        }
        assert_eq!(image.dimensions(), (4, 4));
    }
}
