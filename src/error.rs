//! Error type shared by the candidate model, oracles and driver.

use thiserror::Error;

/// Errors surfaced by `u-trimage`.
///
/// Rejection of a candidate is never an error: it is the normal outcome
/// of [`Strategy::report_result`](crate::strategy::Strategy::report_result).
/// Everything here is an environment or configuration fault that the
/// search cannot recover from by itself.
#[derive(Debug, Error)]
pub enum TrimageError {
    /// Two pixel buffers of different dimensions were compared.
    #[error("image size mismatch: {left_width}x{left_height} vs {right_width}x{right_height}")]
    SizeMismatch {
        left_width: u32,
        left_height: u32,
        right_width: u32,
        right_height: u32,
    },

    /// Raw pixel data does not match `width * height * 3`.
    #[error("pixel buffer holds {actual} bytes, expected {expected}")]
    BufferLength { expected: usize, actual: usize },

    /// A strategy configuration failed validation.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// A candidate was scored before the renderer populated its pixels.
    #[error("candidate of generation {0} has not been rendered")]
    Unrendered(u64),

    /// Image dimensions whose byte size does not fit in memory.
    #[error("image dimensions {width}x{height} overflow")]
    Dimensions { width: u32, height: u32 },

    /// A PPM stream decoded, but not to 8-bit RGB.
    #[error("unsupported ppm: {0}")]
    Ppm(String),

    /// The image codec rejected a stream.
    #[error(transparent)]
    Image(#[from] image::ImageError),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, TrimageError>;
