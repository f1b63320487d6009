//! Adjust image contrast
//!
//! Contrast is scaled around the middle of the `u8` range
//!
//! ```text
//! P' = round((P - 127.5) * factor + 127.5)
//! ```
//! clamped to `0..=255`.
//!
//! A factor of 1.0 does nothing, larger factors push samples away from the
//! midpoint and factors between 0 and 1 pull them towards it.
use pixkit_core::buffer::PixelBuffer;
use pixkit_core::errors::PixelErrors;
use pixkit_core::traits::OperationsTrait;

const MIDPOINT: f32 = 127.5;

/// Adjust the contrast of an image
///
/// Every channel, alpha included, is adjusted.
#[derive(Copy, Clone)]
pub struct Contrast {
    factor: f32
}

impl Contrast {
    #[must_use]
    pub fn new(factor: f32) -> Contrast {
        Contrast { factor }
    }
}

impl OperationsTrait for Contrast {
    fn name(&self) -> &'static str {
        "Contrast"
    }

    fn execute_impl(&self, image: &mut PixelBuffer) -> Result<(), PixelErrors> {
        contrast_u8(image.data_mut(), self.factor);
        Ok(())
    }
}

/// Calculate the contrast of an image
///
/// See module docs for formula
#[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
pub fn contrast_u8(channel: &mut [u8], factor: f32) {
    for pix in channel {
        let float_pix = f32::from(*pix);
        let new_val = ((float_pix - MIDPOINT) * factor + MIDPOINT)
            .round()
            .clamp(0.0, 255.0);
        *pix = new_val as u8;
    }
}
