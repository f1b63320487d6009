//! Perform a color matrix operation
//!
//! A color matrix is a type of operation where the colors of an RGB(A) image are multiplied by
//! an arbitrary 3*3 matrix.
//!
//! The matrix is equivalent to the operation
//! ```text
//! red   = m[0][0]*r + m[0][1]*g + m[0][2]*b
//! green = m[1][0]*r + m[1][1]*g + m[1][2]*b
//! blue  = m[2][0]*r + m[2][1]*g + m[2][2]*b
//!```
//! Results are clamped to `0..=255` and truncated. Channels after the first three
//! (e.g alpha) are not touched.
//!
//! ## Examples of color matrix
//!
//! - An identity color matrix that does nothing
//! ```text
//! [[1.0,0.0,0.0],
//!  [0.0,1.0,0.0],
//!  [0.0,0.0,1.0]]
//! ```
//! - The sepia tone matrix, see [`SEPIA_MATRIX`]
//!
//! ```text
//! [[0.393, 0.769, 0.189],
//!  [0.349, 0.686, 0.168],
//!  [0.272, 0.534, 0.131]]
//! ```
use pixkit_core::buffer::PixelBuffer;
use pixkit_core::errors::PixelErrors;
use pixkit_core::traits::OperationsTrait;

/// Coefficients of the classic sepia tone
pub const SEPIA_MATRIX: [[f32; 3]; 3] = [
    [0.393, 0.769, 0.189],
    [0.349, 0.686, 0.168],
    [0.272, 0.534, 0.131]
];

/// A color matrix filter
///
/// # Example
/// ```rust
/// use pixkit_core::buffer::PixelBuffer;
/// use pixkit_core::errors::PixelErrors;
/// use pixkit_core::traits::OperationsTrait;
/// use pixkit_procs::color_matrix::ColorMatrix;
///
/// fn main()->Result<(),PixelErrors>{
///     let mut image = PixelBuffer::fill(100,10,10,3)?;
///     // swap red and blue
///     let filter = ColorMatrix::new(
///         [[0.0, 0.0, 1.0],
///          [0.0, 1.0, 0.0],
///          [1.0, 0.0, 0.0]]);
///
///     filter.execute(&mut image)?;
///     Ok(())
/// }
/// ```
#[derive(Copy, Clone)]
pub struct ColorMatrix {
    matrix: [[f32; 3]; 3]
}

impl ColorMatrix {
    /// Create a new color matrix
    #[must_use]
    pub fn new(matrix: [[f32; 3]; 3]) -> ColorMatrix {
        ColorMatrix { matrix }
    }
    /// The sepia tone filter
    ///
    /// Because every coefficient is positive, only the upper clamp ever
    /// applies, giving `min(255, value)` per channel.
    #[must_use]
    pub fn sepia() -> ColorMatrix {
        ColorMatrix::new(SEPIA_MATRIX)
    }
    /// Try to create a new color matrix from a slice
    /// of data, the length of the slice must be 9 otherwise
    /// this function will return None
    #[must_use]
    pub fn try_from_slice(slice: &[f32]) -> Option<ColorMatrix> {
        if slice.len() != 9 {
            return None;
        }
        let mut matrix = [[0f32; 3]; 3];

        for (row, values) in matrix.iter_mut().zip(slice.chunks_exact(3)) {
            row.copy_from_slice(values);
        }
        Some(ColorMatrix::new(matrix))
    }
}

impl OperationsTrait for ColorMatrix {
    fn name(&self) -> &'static str {
        "Color Matrix"
    }

    fn execute_impl(&self, image: &mut PixelBuffer) -> Result<(), PixelErrors> {
        let channels = image.channels();
        color_matrix(image.data_mut(), channels, &self.matrix);
        Ok(())
    }

    fn min_channels(&self) -> usize {
        3
    }
}

/// Apply a 3*3 color matrix to interleaved pixels in place
///
/// # Panics
/// If `channels` is less than 3
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::many_single_char_names
)]
pub fn color_matrix(data: &mut [u8], channels: usize, matrix: &[[f32; 3]; 3]) {
    assert!(channels >= 3, "color matrix needs at least three channels");

    for pix in data.chunks_exact_mut(channels) {
        let r = f32::from(pix[0]);
        let g = f32::from(pix[1]);
        let b = f32::from(pix[2]);

        for (out, row) in pix.iter_mut().zip(matrix.iter()) {
            let value = (row[0] * r) + (row[1] * g) + (row[2] * b);
            *out = value.clamp(0.0, 255.0) as u8;
        }
    }
}

/// Apply the sepia tone to interleaved pixels in place
///
/// # Panics
/// If `channels` is less than 3
pub fn sepia(data: &mut [u8], channels: usize) {
    color_matrix(data, channels, &SEPIA_MATRIX);
}

#[cfg(test)]
mod tests {
    use pixkit_core::buffer::PixelBuffer;
    use pixkit_core::errors::PixelErrors;
    use pixkit_core::traits::OperationsTrait;

    use crate::color_matrix::{color_matrix, sepia, ColorMatrix};

    #[test]
    fn sepia_known_values() {
        let mut data = [100, 150, 200];
        sepia(&mut data, 3);
        // 39.3+115.35+37.8, 34.9+102.9+33.6, 27.2+80.1+26.2
        assert_eq!(data, [192, 171, 133]);
    }

    #[test]
    fn sepia_saturates_white() {
        let mut image = PixelBuffer::new(vec![255, 255, 255, 9], 1, 1, 4).unwrap();
        ColorMatrix::sepia().execute(&mut image).unwrap();
        // 1.351*255, 1.203*255 clamp, 0.937*255 = 238.935
        assert_eq!(image.data(), &[255, 255, 238, 9]);
    }

    #[test]
    fn sepia_keeps_black() {
        let mut image = PixelBuffer::fill(0, 3, 3, 3).unwrap();
        ColorMatrix::sepia().execute(&mut image).unwrap();
        assert!(image.data().iter().all(|x| *x == 0));
    }

    #[test]
    fn negative_coefficients_clamp_to_zero() {
        let mut data = [10, 20, 30];
        color_matrix(
            &mut data,
            3,
            &[[-1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]]
        );
        assert_eq!(data, [0, 20, 30]);
    }

    #[test]
    fn sepia_rejects_gray() {
        let mut image = PixelBuffer::fill(0, 3, 3, 1).unwrap();
        let result = ColorMatrix::sepia().execute(&mut image);
        assert!(matches!(result, Err(PixelErrors::InvalidFormat { .. })));
    }

    #[test]
    fn from_slice_needs_nine_values() {
        assert!(ColorMatrix::try_from_slice(&[1.0; 8]).is_none());
        assert!(ColorMatrix::try_from_slice(&[1.0; 9]).is_some());
    }
}
