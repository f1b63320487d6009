/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Core primitives for the pixkit family of crates
//!
//! This contains the pieces every other crate agrees on
//!
//! - [`PixelBuffer`](buffer::PixelBuffer): an interleaved 8 bit image
//! - [`PixelErrors`](errors::PixelErrors): every error a pixkit crate can return
//! - [`OperationsTrait`](traits::OperationsTrait): an operation on a pixel buffer
//! - [`Pipeline`](pipelines::Pipeline): decode an image and run operations on it
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
    clippy::missing_panics_doc
)]

pub use zune_core;

pub mod buffer;
pub mod errors;
pub mod pipelines;
pub mod traits;
