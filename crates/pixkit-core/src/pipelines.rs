/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! Pipelines, running a chain of operations on decoded images
//!
use std::time::Instant;

use log::Level::Trace;
use log::{log_enabled, trace};

use crate::buffer::PixelBuffer;
use crate::errors::PixelErrors;
use crate::traits::{IntoImage, OperationsTrait};

#[derive(Copy, Clone, Debug)]
enum PipelineState {
    /// Initial state, the struct has been defined
    Initialized,
    /// The pipeline is ready to decode its source
    Decode,
    /// The pipeline is ready to carry out image processing routines
    Operations,
    /// The pipeline is done.
    Finished
}

impl PipelineState {
    pub fn next(self) -> Option<Self> {
        match self {
            PipelineState::Initialized => Some(PipelineState::Decode),
            PipelineState::Decode => Some(PipelineState::Operations),
            PipelineState::Operations => Some(PipelineState::Finished),
            PipelineState::Finished => None
        }
    }
}

/// Pipeline, sequential image processing
///
/// A pipeline takes a source, anything that implements [IntoImage](crate::traits::IntoImage),
/// decodes it and runs every chained operation on it, in the order they were chained.
///
/// Operations run one after another on the same buffer, the first failing
/// operation stops the pipeline and its error is returned.
pub struct Pipeline<T: IntoImage> {
    state:      Option<PipelineState>,
    decode:     Option<T>,
    images:     Vec<PixelBuffer>,
    operations: Vec<Box<dyn OperationsTrait>>
}

impl<T> Pipeline<T>
where
    T: IntoImage
{
    /// Create a new empty pipeline
    #[allow(clippy::new_without_default)]
    pub fn new() -> Pipeline<T> {
        Pipeline {
            state:      Some(PipelineState::Initialized),
            decode:     None,
            images:     vec![],
            operations: vec![]
        }
    }

    /// Add an already decoded image to this chain.
    pub fn chain_image(&mut self, image: PixelBuffer) -> &mut Pipeline<T> {
        self.images.push(image);
        self
    }

    /// Override the decoder present in the pipeline.
    ///
    /// There can only be one decoder in a pipeline, so the last decoder
    /// is the one that will be considered.
    pub fn chain_decoder(&mut self, decoder: T) -> &mut Pipeline<T> {
        self.decode = Some(decoder);
        self
    }

    /// Add a new operation to the pipeline.
    ///
    /// # Example
    /// ```
    /// use pixkit_core::buffer::PixelBuffer;
    /// use pixkit_core::errors::PixelErrors;
    /// use pixkit_core::pipelines::Pipeline;
    /// use pixkit_core::traits::OperationsTrait;
    ///
    /// struct AddOne;
    ///
    /// impl OperationsTrait for AddOne {
    ///     fn name(&self) -> &'static str {
    ///         "Add one"
    ///     }
    ///     fn execute_impl(&self, image: &mut PixelBuffer) -> Result<(), PixelErrors> {
    ///         image.data_mut().iter_mut().for_each(|x| *x = x.saturating_add(1));
    ///         Ok(())
    ///     }
    /// }
    ///
    /// let mut pipeline = Pipeline::<PixelBuffer>::new();
    /// pipeline
    ///     .chain_decoder(PixelBuffer::fill(1, 2, 2, 1).unwrap())
    ///     .chain_operations(Box::new(AddOne))
    ///     .chain_operations(Box::new(AddOne));
    ///
    /// pipeline.advance_to_end().unwrap();
    /// assert!(pipeline.images()[0].data().iter().all(|x| *x == 3));
    /// ```
    pub fn chain_operations(&mut self, operations: Box<dyn OperationsTrait>) -> &mut Pipeline<T> {
        self.operations.push(operations);
        self
    }

    /// Return all images in the pipeline
    pub fn images(&self) -> &[PixelBuffer] {
        self.images.as_ref()
    }

    /// Return all images in the pipeline as mutable references
    pub fn images_mut(&mut self) -> &mut [PixelBuffer] {
        self.images.as_mut()
    }

    /// Take the images out of the pipeline
    pub fn into_images(self) -> Vec<PixelBuffer> {
        self.images
    }

    /// Advance the pipeline one state forward
    ///
    /// The pipeline advance is as follows
    ///
    /// 1. Decode
    /// 2. One or more operations [ all ran at once]
    /// 3. Finish
    ///
    /// # Errors
    /// - [`PixelErrors::NoImageForOperations`] if there is neither a decoder nor an image
    /// - Any decoding or operation error
    pub fn advance(&mut self) -> Result<(), PixelErrors> {
        if let Some(state) = self.state {
            match state {
                PipelineState::Decode => {
                    let start = Instant::now();

                    let Some(decode_op) = self.decode.take() else {
                        if self.images.is_empty() {
                            return Err(PixelErrors::NoImageForOperations);
                        }
                        // we have an image, no need to decode a new one
                        trace!("Image already present, no need to decode");
                        self.state = state.next();
                        return Ok(());
                    };

                    if log_enabled!(Trace) {
                        trace!("Current state: {:?}", state);
                    }

                    let image = decode_op.into_image()?;
                    self.images.push(image);

                    self.state = state.next();

                    trace!("Finished decoding in {} ms", start.elapsed().as_millis());
                }
                PipelineState::Operations => {
                    if self.images.is_empty() {
                        return Err(PixelErrors::NoImageForOperations);
                    }

                    if log_enabled!(Trace) && !self.operations.is_empty() {
                        trace!("Current state: {:?}", state);
                    }

                    for image in &mut self.images {
                        for operation in &self.operations {
                            trace!("Running {}", operation.name());

                            operation.execute(image)?;
                        }
                    }
                    self.state = state.next();
                }
                PipelineState::Finished => {
                    trace!("Finished operations for this pipeline");

                    self.state = state.next();
                }
                PipelineState::Initialized => {
                    self.state = state.next();
                }
            }
        }
        Ok(())
    }

    /// Advance the operations in this pipeline up until
    /// we finish.
    ///
    /// # Errors
    /// See [`advance`](Pipeline::advance)
    pub fn advance_to_end(&mut self) -> Result<(), PixelErrors> {
        while self.state.is_some() {
            self.advance()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::buffer::PixelBuffer;
    use crate::errors::PixelErrors;
    use crate::pipelines::Pipeline;
    use crate::traits::{IntoImage, OperationsTrait};

    struct Double;

    impl OperationsTrait for Double {
        fn name(&self) -> &'static str {
            "Double"
        }

        fn execute_impl(&self, image: &mut PixelBuffer) -> Result<(), PixelErrors> {
            image
                .data_mut()
                .iter_mut()
                .for_each(|x| *x = x.saturating_mul(2));
            Ok(())
        }
    }

    struct Fails;

    impl OperationsTrait for Fails {
        fn name(&self) -> &'static str {
            "Fails"
        }

        fn execute_impl(&self, _: &mut PixelBuffer) -> Result<(), PixelErrors> {
            Err(PixelErrors::GenericStr("always fails"))
        }
    }

    struct BrokenSource;

    impl IntoImage for BrokenSource {
        fn into_image(self) -> Result<PixelBuffer, PixelErrors> {
            Err(PixelErrors::DecodeErrors("corrupt stream".to_string()))
        }
    }

    #[test]
    fn operations_run_in_order() {
        let mut pipeline = Pipeline::<PixelBuffer>::new();
        pipeline
            .chain_image(PixelBuffer::fill(3, 2, 2, 1).unwrap())
            .chain_operations(Box::new(Double))
            .chain_operations(Box::new(Double));

        pipeline.advance_to_end().unwrap();
        assert!(pipeline.images()[0].data().iter().all(|x| *x == 12));
    }

    #[test]
    fn images_can_be_edited_after_running() {
        let mut pipeline = Pipeline::<PixelBuffer>::new();
        pipeline
            .chain_image(PixelBuffer::fill(3, 2, 2, 1).unwrap())
            .chain_operations(Box::new(Double));
        pipeline.advance_to_end().unwrap();

        for image in pipeline.images_mut() {
            Double.execute(image).unwrap();
        }
        let images = pipeline.into_images();
        assert!(images[0].data().iter().all(|x| *x == 12));
    }

    #[test]
    fn empty_pipeline_errors() {
        let mut pipeline = Pipeline::<PixelBuffer>::new();
        pipeline.chain_operations(Box::new(Double));

        assert!(matches!(
            pipeline.advance_to_end(),
            Err(PixelErrors::NoImageForOperations)
        ));
    }

    #[test]
    fn failing_operation_stops_pipeline() {
        let mut pipeline = Pipeline::<PixelBuffer>::new();
        pipeline
            .chain_decoder(PixelBuffer::fill(3, 2, 2, 1).unwrap())
            .chain_operations(Box::new(Fails))
            .chain_operations(Box::new(Double));

        assert!(pipeline.advance_to_end().is_err());
    }

    #[test]
    fn decode_errors_propagate() {
        let mut pipeline = Pipeline::<BrokenSource>::new();
        pipeline.chain_decoder(BrokenSource);

        assert!(matches!(
            pipeline.advance_to_end(),
            Err(PixelErrors::DecodeErrors(_))
        ));
    }
}
