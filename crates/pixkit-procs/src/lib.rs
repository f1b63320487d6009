/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Image processing routines for `pixkit`
//!
//! Every routine comes in two forms
//!
//! - a free function working on raw interleaved slices, with the image
//!   dimensions passed explicitly
//! - an operation struct implementing [`OperationsTrait`](pixkit_core::traits::OperationsTrait)
//!   on a [`PixelBuffer`](pixkit_core::buffer::PixelBuffer), which checks its
//!   preconditions and can be chained in a [`Pipeline`](pixkit_core::pipelines::Pipeline)
//!
//! # Example
//! - Convert an image to sepia and increase its contrast
//! ```
//! use pixkit_core::buffer::PixelBuffer;
//! use pixkit_core::traits::OperationsTrait;
//! use pixkit_procs::color_matrix::ColorMatrix;
//! use pixkit_procs::contrast::Contrast;
//!
//! let mut image = PixelBuffer::fill(120, 100, 100, 3).unwrap();
//! ColorMatrix::sepia().execute(&mut image).unwrap();
//! Contrast::new(1.5).execute(&mut image).unwrap();
//! ```

// Benchmark support needs nightly
#![cfg_attr(feature = "benchmarks", feature(test))]
#![warn(
    clippy::correctness,
    clippy::perf,
    clippy::pedantic,
    clippy::inline_always,
    clippy::missing_errors_doc,
    clippy::panic
)]
#![allow(
    clippy::needless_return,
    clippy::similar_names,
    clippy::doc_markdown,
    clippy::module_name_repetitions,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

pub mod arithmetic;
pub mod brighten;
pub mod color_matrix;
pub mod contrast;
pub mod crop;
pub mod grayscale;
pub mod high_pass;
pub mod histogram;
pub mod hough;
pub mod low_pass;
pub mod otsu;
pub mod resize;
pub mod threshold;
