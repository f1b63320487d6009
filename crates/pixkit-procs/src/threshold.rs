/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Binary thresholding
//!
//! Each sample is compared against the threshold on its own, so on a color
//! image every channel is binarized independently.
use pixkit_core::buffer::PixelBuffer;
use pixkit_core::errors::PixelErrors;
use pixkit_core::traits::OperationsTrait;

/// Set every sample at or above the threshold to 255 and everything else to 0
#[derive(Copy, Clone)]
pub struct Threshold {
    threshold: u8
}

impl Threshold {
    #[must_use]
    pub fn new(threshold: u8) -> Threshold {
        Threshold { threshold }
    }
}

impl OperationsTrait for Threshold {
    fn name(&self) -> &'static str {
        "Threshold"
    }

    fn execute_impl(&self, image: &mut PixelBuffer) -> Result<(), PixelErrors> {
        threshold(image.data_mut(), self.threshold);
        Ok(())
    }
}

pub fn threshold(in_channel: &mut [u8], threshold: u8) {
    for x in in_channel.iter_mut() {
        *x = if *x >= threshold { u8::MAX } else { u8::MIN };
    }
}
