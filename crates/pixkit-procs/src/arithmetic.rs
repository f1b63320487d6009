/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Add and subtract images sample by sample
//!
//! Both images must have the same width, height and number of channels,
//! results saturate at 0 and 255 instead of wrapping around.
//!
//! Every sample takes part, alpha included.
use pixkit_core::buffer::PixelBuffer;
use pixkit_core::errors::PixelErrors;
use pixkit_core::traits::OperationsTrait;

/// How two images are combined
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum CombineMode {
    /// `a + b`, clamped to 255
    Add,
    /// `a - b`, clamped to 0
    Subtract
}

impl CombineMode {
    pub fn from_string_result(input: &str) -> Result<Self, String> {
        match input {
            "add" => Ok(Self::Add),
            "subtract" => Ok(Self::Subtract),
            _ => Err("Unknown combine mode, accepted values are add,subtract".to_string())
        }
    }

    /// Combine `a` with `b`, `a` being the left hand side
    ///
    /// # Errors
    /// [`PixelErrors::DimensionMismatch`] if the images differ in width, height or channels
    pub fn combine(self, a: &PixelBuffer, b: &PixelBuffer) -> Result<PixelBuffer, PixelErrors> {
        match self {
            CombineMode::Add => add(a, b),
            CombineMode::Subtract => subtract(a, b)
        }
    }
}

/// Combine the image an operation runs on with a second image
///
/// The image being operated on is the left hand side, so with
/// [`CombineMode::Subtract`] the operand is subtracted from it.
///
/// # Example
/// ```
/// use pixkit_core::buffer::PixelBuffer;
/// use pixkit_core::traits::OperationsTrait;
/// use pixkit_procs::arithmetic::{Combine, CombineMode};
///
/// let operand = PixelBuffer::fill(50, 2, 2, 3).unwrap();
/// let mut image = PixelBuffer::fill(40, 2, 2, 3).unwrap();
///
/// Combine::new(operand, CombineMode::Subtract).execute(&mut image).unwrap();
/// assert!(image.data().iter().all(|x| *x == 0));
/// ```
pub struct Combine {
    operand: PixelBuffer,
    mode:    CombineMode
}

impl Combine {
    #[must_use]
    pub fn new(operand: PixelBuffer, mode: CombineMode) -> Combine {
        Combine { operand, mode }
    }
}

impl OperationsTrait for Combine {
    fn name(&self) -> &'static str {
        match self.mode {
            CombineMode::Add => "Add images",
            CombineMode::Subtract => "Subtract images"
        }
    }

    fn execute_impl(&self, image: &mut PixelBuffer) -> Result<(), PixelErrors> {
        *image = self.mode.combine(image, &self.operand)?;
        Ok(())
    }
}

/// Add two images, saturating at 255
///
/// # Errors
/// [`PixelErrors::DimensionMismatch`] if the images differ in width, height or channels
pub fn add(a: &PixelBuffer, b: &PixelBuffer) -> Result<PixelBuffer, PixelErrors> {
    check_same_shape(a, b)?;

    let mut out = vec![0; a.data().len()];
    add_into(a.data(), b.data(), &mut out);

    let (width, height, channels) = a.shape();
    PixelBuffer::new(out, width, height, channels)
}

/// Subtract `b` from `a`, saturating at 0
///
/// # Errors
/// [`PixelErrors::DimensionMismatch`] if the images differ in width, height or channels
pub fn subtract(a: &PixelBuffer, b: &PixelBuffer) -> Result<PixelBuffer, PixelErrors> {
    check_same_shape(a, b)?;

    let mut out = vec![0; a.data().len()];
    subtract_into(a.data(), b.data(), &mut out);

    let (width, height, channels) = a.shape();
    PixelBuffer::new(out, width, height, channels)
}

/// Add `a` and `b` into `out`
///
/// # Panics
/// If the three slices don't have the same length
pub fn add_into(a: &[u8], b: &[u8], out: &mut [u8]) {
    assert_eq!(a.len(), b.len());
    assert_eq!(a.len(), out.len());

    for ((x, y), z) in a.iter().zip(b).zip(out.iter_mut()) {
        *z = x.saturating_add(*y);
    }
}

/// Subtract `b` from `a` into `out`
///
/// # Panics
/// If the three slices don't have the same length
pub fn subtract_into(a: &[u8], b: &[u8], out: &mut [u8]) {
    assert_eq!(a.len(), b.len());
    assert_eq!(a.len(), out.len());

    for ((x, y), z) in a.iter().zip(b).zip(out.iter_mut()) {
        *z = x.saturating_sub(*y);
    }
}

fn check_same_shape(a: &PixelBuffer, b: &PixelBuffer) -> Result<(), PixelErrors> {
    if !a.same_shape(b) {
        return Err(PixelErrors::DimensionMismatch(a.shape(), b.shape()));
    }
    Ok(())
}
