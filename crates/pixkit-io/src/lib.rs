/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Decoding and encoding for `pixkit`
//!
//! This crate turns PNG and JPEG files into [`PixelBuffer`](pixkit_core::buffer::PixelBuffer)s
//! and back.
//!
//! # Example
//! - Open an image, convert it to grayscale and save it as PNG
//! ```no_run
//! use pixkit_core::errors::PixelErrors;
//! use pixkit_core::traits::OperationsTrait;
//! use pixkit_io::file_io::{open, save_png};
//! use pixkit_procs::grayscale::RgbToGrayScale;
//!
//! fn main() -> Result<(), PixelErrors> {
//!     let mut image = open("input.jpg")?;
//!     RgbToGrayScale::new().execute(&mut image)?;
//!     save_png(&image, "output.png")
//! }
//! ```
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
    clippy::doc_markdown,
    clippy::module_name_repetitions,
    clippy::missing_panics_doc
)]

pub use zune_core;

pub mod codecs;
pub mod file_io;
