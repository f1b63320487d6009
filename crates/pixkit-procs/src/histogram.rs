/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Calculate sample histograms
//!
//! An image histogram counts how many samples hold each of the 256 possible
//! intensity values.
//!
//! Interleaved images are histogrammed one channel at a time with
//! [`histogram_strided`], stepping over the other channels.

/// Count the occurrences of every value in `data`
///
/// # Example
/// ```
/// use pixkit_procs::histogram::histogram;
///
/// let counts = histogram(&[0, 0, 7, 255]);
/// assert_eq!(counts[0], 2);
/// assert_eq!(counts[7], 1);
/// assert_eq!(counts[255], 1);
/// ```
#[must_use]
pub fn histogram(data: &[u8]) -> [u32; 256] {
    let mut counts = [0_u32; 256];

    for value in data {
        counts[usize::from(*value)] += 1;
    }
    counts
}

/// Count the occurrences of every value in `data`, reading one sample
/// every `stride` samples starting from the first
///
/// With `stride` set to the number of channels this gives the histogram of
/// the first channel of an interleaved image.
///
/// # Panics
/// If `stride` is zero
#[must_use]
pub fn histogram_strided(data: &[u8], stride: usize) -> [u32; 256] {
    assert_ne!(stride, 0, "histogram stride cannot be zero");

    let mut counts = [0_u32; 256];

    for value in data.iter().step_by(stride) {
        counts[usize::from(*value)] += 1;
    }
    counts
}
