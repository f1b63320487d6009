/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Otsu's adaptive threshold
//!
//! The threshold is picked from the histogram of the first channel by
//! maximizing the between-class variance
//!
//! ```text
//! wb * wf * (mean_b - mean_f)^2
//! ```
//! where `b` is the class of values at or below the candidate threshold and `f`
//! the class above it.
//!
//! The first candidate with the largest variance wins, and images whose first
//! channel holds a single value get a threshold of 0.
//!
//! Every sample of every channel is then binarized with `value > threshold`.
use std::cell::Cell;

use log::debug;
use pixkit_core::buffer::PixelBuffer;
use pixkit_core::errors::PixelErrors;
use pixkit_core::traits::OperationsTrait;

use crate::histogram::histogram_strided;

/// Binarize an image with a threshold computed from its first channel
///
/// The chosen threshold can be fetched via `.threshold()` after calling `execute`
///
/// # Example
/// ```rust
/// use pixkit_core::buffer::PixelBuffer;
/// use pixkit_core::traits::OperationsTrait;
/// use pixkit_procs::otsu::OtsuThreshold;
///
/// let mut image = PixelBuffer::from_fn(4, 4, 1, |x, _, _| if x < 2 { 20 } else { 220 }).unwrap();
/// let otsu = OtsuThreshold::new();
/// otsu.execute(&mut image).unwrap();
///
/// assert_eq!(otsu.threshold(), 20);
/// assert_eq!(image.pixel(3, 0), Some(&[255][..]));
/// ```
#[derive(Default)]
pub struct OtsuThreshold {
    threshold: Cell<u8>
}

impl OtsuThreshold {
    #[must_use]
    pub fn new() -> OtsuThreshold {
        OtsuThreshold::default()
    }
    /// The threshold chosen by the last run, 0 if the operation never ran
    pub fn threshold(&self) -> u8 {
        self.threshold.get()
    }
}

impl OperationsTrait for OtsuThreshold {
    fn name(&self) -> &'static str {
        "Otsu Threshold"
    }

    fn execute_impl(&self, image: &mut PixelBuffer) -> Result<(), PixelErrors> {
        let channels = image.channels();
        let mut out = vec![0; image.data().len()];

        let threshold = otsu_threshold(image.data(), &mut out, channels);
        debug!("Otsu threshold chosen: {threshold}");

        image.data_mut().copy_from_slice(&out);
        self.threshold.set(threshold);
        Ok(())
    }
}

/// Pick the threshold maximizing the between-class variance of a histogram
#[must_use]
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
pub fn otsu_level(histogram: &[u32; 256]) -> u8 {
    let total: u64 = histogram.iter().map(|x| u64::from(*x)).sum();
    let sum: f64 = histogram
        .iter()
        .enumerate()
        .map(|(value, count)| value as f64 * f64::from(*count))
        .sum();

    let mut sum_b = 0.0_f64;
    let mut weight_b = 0_u64;
    let mut max_variance = 0.0_f64;
    let mut threshold = 0;

    for (t, count) in histogram.iter().enumerate() {
        weight_b += u64::from(*count);
        if weight_b == 0 {
            continue;
        }
        let weight_f = total - weight_b;
        if weight_f == 0 {
            break;
        }
        sum_b += t as f64 * f64::from(*count);

        let mean_b = sum_b / weight_b as f64;
        let mean_f = (sum - sum_b) / weight_f as f64;
        let diff = mean_b - mean_f;

        let variance = weight_b as f64 * weight_f as f64 * diff * diff;

        if variance > max_variance {
            max_variance = variance;
            // t comes from enumerating 256 bins
            threshold = t as u8;
        }
    }
    threshold
}

/// Binarize `in_image` into `out_image` returning the threshold used
///
/// # Panics
/// - If `channels` is zero
/// - If `out_image` is shorter than `in_image`
pub fn otsu_threshold(in_image: &[u8], out_image: &mut [u8], channels: usize) -> u8 {
    let histogram = histogram_strided(in_image, channels);
    let threshold = otsu_level(&histogram);

    for (out, value) in out_image.iter_mut().zip(in_image) {
        *out = if *value > threshold { u8::MAX } else { u8::MIN };
    }
    threshold
}
