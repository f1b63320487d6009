//! Hough line transform
//!
//! Line detection is not implemented yet, the transform copies its input
//! unchanged so pipelines that include it still produce an image.
use log::warn;
use pixkit_core::buffer::PixelBuffer;
use pixkit_core::errors::PixelErrors;
use pixkit_core::traits::OperationsTrait;

/// Hough line transform, currently a pass-through
#[derive(Copy, Clone, Default)]
pub struct HoughTransform;

impl HoughTransform {
    #[must_use]
    pub fn new() -> HoughTransform {
        HoughTransform
    }
}

impl OperationsTrait for HoughTransform {
    fn name(&self) -> &'static str {
        "Hough Transform"
    }

    fn execute_impl(&self, image: &mut PixelBuffer) -> Result<(), PixelErrors> {
        warn!("Hough transform is not implemented, image passes through unchanged");

        let mut out = vec![0; image.data().len()];
        hough_transform(image.data(), &mut out);
        image.data_mut().copy_from_slice(&out);
        Ok(())
    }
}

/// Copy `in_image` into `out_image`
///
/// # Panics
/// If the slices differ in length
pub fn hough_transform(in_image: &[u8], out_image: &mut [u8]) {
    out_image.copy_from_slice(in_image);
}
