/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Traits shared by image operations and image sources
use std::time::Instant;

use log::trace;

use crate::buffer::PixelBuffer;
use crate::errors::PixelErrors;

/// This encapsulates an image operation.
///
/// All operations that can be stored in a pipeline
/// need to implement this trait.
///
/// Implementors provide [`execute_impl`](OperationsTrait::execute_impl),
/// callers use [`execute`](OperationsTrait::execute) which checks the
/// channel precondition before running the operation.
pub trait OperationsTrait {
    /// Get the name of this operation
    fn name(&self) -> &'static str;

    /// Execute the operation on the image without checking preconditions
    ///
    /// # Arguments
    /// - image: A mutable reference to an image which
    /// this operation will manipulate
    ///
    /// # Errors
    /// Any operations error will be propagated to the caller
    fn execute_impl(&self, image: &mut PixelBuffer) -> Result<(), PixelErrors>;

    /// Smallest number of interleaved channels this operation can work on
    fn min_channels(&self) -> usize {
        1
    }

    /// Execute the operation on the image
    ///
    /// # Errors
    /// - [`PixelErrors::InvalidFormat`] if the image has fewer channels than
    /// [`min_channels`](OperationsTrait::min_channels)
    /// - Any error from the operation itself
    ///
    /// # Example
    /// ```
    /// use pixkit_core::buffer::PixelBuffer;
    /// use pixkit_core::errors::PixelErrors;
    /// use pixkit_core::traits::OperationsTrait;
    ///
    /// struct Invert;
    ///
    /// impl OperationsTrait for Invert {
    ///     fn name(&self) -> &'static str {
    ///         "Invert"
    ///     }
    ///     fn execute_impl(&self, image: &mut PixelBuffer) -> Result<(), PixelErrors> {
    ///         image.data_mut().iter_mut().for_each(|x| *x = 255 - *x);
    ///         Ok(())
    ///     }
    /// }
    ///
    /// let mut image = PixelBuffer::fill(200, 4, 4, 3).unwrap();
    /// Invert.execute(&mut image).unwrap();
    /// assert!(image.data().iter().all(|x| *x == 55));
    /// ```
    fn execute(&self, image: &mut PixelBuffer) -> Result<(), PixelErrors> {
        if image.channels() < self.min_channels() {
            return Err(PixelErrors::InvalidFormat {
                operation: self.name(),
                expected:  self.min_channels(),
                found:     image.channels()
            });
        }
        let start = Instant::now();

        self.execute_impl(image)?;

        trace!(
            "Finished running `{}` in {} ms",
            self.name(),
            start.elapsed().as_millis()
        );
        Ok(())
    }
}

/// Anything that can be turned into an image
///
/// Decoders and file handles implement this so a [`Pipeline`](crate::pipelines::Pipeline)
/// can delay decoding until it runs.
pub trait IntoImage {
    /// Consume this struct returning the image it represents
    ///
    /// # Errors
    /// Decoding or reading errors
    fn into_image(self) -> Result<PixelBuffer, PixelErrors>;
}

impl IntoImage for PixelBuffer {
    fn into_image(self) -> Result<PixelBuffer, PixelErrors> {
        Ok(self)
    }
}
