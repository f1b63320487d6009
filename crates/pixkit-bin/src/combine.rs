/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Add or subtract an image read from another file
use std::borrow::Cow;

use log::debug;
use pixkit_core::buffer::PixelBuffer;
use pixkit_core::errors::PixelErrors;
use pixkit_core::traits::OperationsTrait;
use pixkit_procs::arithmetic::CombineMode;
use pixkit_procs::resize::{Resize, ResizeMethod};

/// Combine with a second image, resizing both images to the smaller
/// width and height first when their sizes differ
///
/// Channel counts are never changed, a mismatch is reported by the
/// arithmetic itself.
pub struct FitAndCombine {
    operand: PixelBuffer,
    mode:    CombineMode
}

impl FitAndCombine {
    pub fn new(operand: PixelBuffer, mode: CombineMode) -> FitAndCombine {
        FitAndCombine { operand, mode }
    }
}

impl OperationsTrait for FitAndCombine {
    fn name(&self) -> &'static str {
        match self.mode {
            CombineMode::Add => "Add image file",
            CombineMode::Subtract => "Subtract image file"
        }
    }

    fn execute_impl(&self, image: &mut PixelBuffer) -> Result<(), PixelErrors> {
        let (image_w, image_h) = image.dimensions();
        let (operand_w, operand_h) = self.operand.dimensions();

        let width = image_w.min(operand_w);
        let height = image_h.min(operand_h);

        let mut resized = image.clone();

        if (image_w, image_h) != (width, height) {
            debug!("Resizing image from {image_w}x{image_h} to {width}x{height}");
            Resize::new(width, height, ResizeMethod::NearestNeighbor).execute(&mut resized)?;
        }

        let operand = if (operand_w, operand_h) == (width, height) {
            Cow::Borrowed(&self.operand)
        } else {
            debug!("Resizing operand from {operand_w}x{operand_h} to {width}x{height}");
            let mut operand = self.operand.clone();
            Resize::new(width, height, ResizeMethod::NearestNeighbor).execute(&mut operand)?;
            Cow::Owned(operand)
        };

        *image = self.mode.combine(&resized, &operand)?;
        Ok(())
    }
}
