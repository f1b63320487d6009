/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Errors possible during image processing
use std::fmt::{Debug, Display, Formatter};

/// All possible errors that can occur.
///
/// This contains the processing errors raised by transforms as well as
/// the decoding and encoding errors raised at the I/O boundary
pub enum PixelErrors {
    /// The operation needs more channels than the buffer has
    InvalidFormat {
        operation: &'static str,
        expected:  usize,
        found:     usize
    },
    /// Two buffers that must have the same shape don't.
    ///
    /// Each tuple is `(width, height, channels)`
    DimensionMismatch((usize, usize, usize), (usize, usize, usize)),
    /// A parameter or buffer violated an operation precondition
    InvalidArgument(String),
    /// The codec could not decode the input
    DecodeErrors(String),
    /// The codec could not encode the buffer
    EncodeErrors(String),
    IoErrors(std::io::Error),
    /// A pipeline was asked to run operations but holds no image
    NoImageForOperations,
    GenericString(String),
    GenericStr(&'static str)
}

impl Debug for PixelErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidFormat {
                operation,
                expected,
                found
            } => {
                writeln!(
                    f,
                    "Operation `{operation}` needs at least {expected} channels but the image has {found}"
                )
            }
            Self::DimensionMismatch(expected, found) => {
                writeln!(
                    f,
                    "Dimensions mismatch, expected (width,height,channels) {expected:?} but found {found:?}"
                )
            }
            Self::InvalidArgument(reason) => writeln!(f, "Invalid argument: {reason}"),
            Self::DecodeErrors(err) => writeln!(f, "Decoding failed: {err}"),
            Self::EncodeErrors(err) => writeln!(f, "Encoding failed: {err}"),
            Self::IoErrors(err) => writeln!(f, "I/O error: {err:?}"),
            Self::NoImageForOperations => {
                writeln!(f, "No image found for which we can execute operations")
            }
            Self::GenericString(err) => writeln!(f, "{err}"),
            Self::GenericStr(err) => writeln!(f, "{err}")
        }
    }
}

impl Display for PixelErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{self:?}")
    }
}

impl std::error::Error for PixelErrors {}

impl From<std::io::Error> for PixelErrors {
    fn from(from: std::io::Error) -> Self {
        PixelErrors::IoErrors(from)
    }
}

impl From<String> for PixelErrors {
    fn from(s: String) -> PixelErrors {
        PixelErrors::GenericString(s)
    }
}

impl From<&'static str> for PixelErrors {
    fn from(s: &'static str) -> PixelErrors {
        PixelErrors::GenericStr(s)
    }
}
