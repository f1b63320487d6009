//! Brighten or darken an image
//!
//! Every sample, alpha included, is shifted by the same amount and
//! clamped to `0..=255`
use pixkit_core::buffer::PixelBuffer;
use pixkit_core::errors::PixelErrors;
use pixkit_core::traits::OperationsTrait;

/// Adjust the brightness of an image
///
/// A positive value makes the image brighter, a negative one darker.
#[derive(Copy, Clone)]
pub struct Brighten {
    value: i32
}

impl Brighten {
    #[must_use]
    pub fn new(value: i32) -> Brighten {
        Brighten { value }
    }
}

impl OperationsTrait for Brighten {
    fn name(&self) -> &'static str {
        "Brighten"
    }

    fn execute_impl(&self, image: &mut PixelBuffer) -> Result<(), PixelErrors> {
        brighten(image.data_mut(), self.value);
        Ok(())
    }
}

#[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
pub fn brighten(channel: &mut [u8], value: i32) {
    channel
        .iter_mut()
        .for_each(|x| *x = i32::from(*x).saturating_add(value).clamp(0, 255) as u8);
}
