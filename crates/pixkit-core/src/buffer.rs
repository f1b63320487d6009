/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! This module represents a single decoded image
//!
//! An image is represented as
//!
//! - one contiguous byte buffer
//!     - holding `width*height` pixels in row-major order
//!         - each pixel storing `channels` interleaved 8 bit samples
//!
//! So channel `c` of pixel `(x,y)` is found at
//!
//! ```text
//! (y * width + x) * channels + c
//! ```
//!
//! The length of the buffer is checked once when the buffer is created,
//! routines that receive a [`PixelBuffer`] trust it afterwards.
use zune_core::colorspace::ColorSpace;

use crate::errors::PixelErrors;

/// Represents a single interleaved 8 bit image
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PixelBuffer {
    data:     Vec<u8>,
    width:    usize,
    height:   usize,
    channels: usize
}

impl PixelBuffer {
    /// Create a new pixel buffer from interleaved data
    ///
    /// # Errors
    /// - `channels` is zero
    /// - `data.len()` is not `width*height*channels`
    pub fn new(
        data: Vec<u8>, width: usize, height: usize, channels: usize
    ) -> Result<PixelBuffer, PixelErrors> {
        if channels == 0 {
            return Err(PixelErrors::InvalidArgument(
                "an image needs at least one channel".to_string()
            ));
        }
        let expected = expected_len(width, height, channels)?;

        if data.len() != expected {
            return Err(PixelErrors::InvalidArgument(format!(
                "buffer length {} does not match {width}x{height}x{channels} = {expected}",
                data.len()
            )));
        }
        Ok(PixelBuffer {
            data,
            width,
            height,
            channels
        })
    }

    /// Create an image with every sample set to zero
    ///
    /// # Errors
    /// See [`PixelBuffer::new`]
    pub fn zeroed(width: usize, height: usize, channels: usize) -> Result<PixelBuffer, PixelErrors> {
        PixelBuffer::fill(0, width, height, channels)
    }

    /// Create an image with every sample set to `value`
    ///
    /// # Errors
    /// See [`PixelBuffer::new`]
    pub fn fill(
        value: u8, width: usize, height: usize, channels: usize
    ) -> Result<PixelBuffer, PixelErrors> {
        if channels == 0 {
            return Err(PixelErrors::InvalidArgument(
                "an image needs at least one channel".to_string()
            ));
        }
        let length = expected_len(width, height, channels)?;

        PixelBuffer::new(vec![value; length], width, height, channels)
    }

    /// Create an image by calling `func(x, y, c)` for every sample
    ///
    /// # Errors
    /// See [`PixelBuffer::new`]
    pub fn from_fn<F>(
        width: usize, height: usize, channels: usize, func: F
    ) -> Result<PixelBuffer, PixelErrors>
    where
        F: Fn(usize, usize, usize) -> u8
    {
        let mut image = PixelBuffer::zeroed(width, height, channels)?;

        for (pos, pix) in image.data.chunks_exact_mut(channels).enumerate() {
            let (x, y) = (pos % width, pos / width);

            for (c, sample) in pix.iter_mut().enumerate() {
                *sample = func(x, y, c);
            }
        }
        Ok(image)
    }

    /// Get image dimensions as a tuple of (width,height)
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    pub const fn width(&self) -> usize {
        self.width
    }

    pub const fn height(&self) -> usize {
        self.height
    }

    /// Number of interleaved samples per pixel
    pub const fn channels(&self) -> usize {
        self.channels
    }

    /// Return true if two images have the same width,height and channel count
    pub const fn same_shape(&self, other: &PixelBuffer) -> bool {
        self.width == other.width && self.height == other.height && self.channels == other.channels
    }

    /// Return `(width,height,channels)`
    pub const fn shape(&self) -> (usize, usize, usize) {
        (self.width, self.height, self.channels)
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Consume the image returning the raw interleaved samples
    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }

    /// Return the samples of the pixel at `(x,y)`
    ///
    /// Returns `None` if the coordinates fall outside the image
    pub fn pixel(&self, x: usize, y: usize) -> Option<&[u8]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let start = (y * self.width + x) * self.channels;

        self.data.get(start..start + self.channels)
    }

    /// Replace the image contents with data of a new shape
    ///
    /// This is used by operations that change dimensions, like resize and crop.
    ///
    /// # Errors
    /// The new data doesn't match the new dimensions, in that case the image is left untouched
    pub fn set_dimensions(
        &mut self, data: Vec<u8>, width: usize, height: usize
    ) -> Result<(), PixelErrors> {
        let replacement = PixelBuffer::new(data, width, height, self.channels)?;
        *self = replacement;
        Ok(())
    }

    /// Return the colorspace the channel count describes
    ///
    /// Returns `None` for channel counts that have no common interpretation
    pub const fn colorspace(&self) -> Option<ColorSpace> {
        match self.channels {
            1 => Some(ColorSpace::Luma),
            2 => Some(ColorSpace::LumaA),
            3 => Some(ColorSpace::RGB),
            4 => Some(ColorSpace::RGBA),
            _ => None
        }
    }
}

fn expected_len(width: usize, height: usize, channels: usize) -> Result<usize, PixelErrors> {
    width
        .checked_mul(height)
        .and_then(|x| x.checked_mul(channels))
        .ok_or_else(|| {
            PixelErrors::InvalidArgument(format!(
                "dimensions {width}x{height}x{channels} overflow"
            ))
        })
}
