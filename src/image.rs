//! RGB pixel buffers and PPM encoding.
//!
//! Pixels are stored as one byte triple per pixel, rows in ascending `y`
//! order. This is the layout both the renderer and the fitness oracles
//! agree on. Storage and the PNM codec come from the `image` crate.

use crate::error::{Result, TrimageError};
use image::codecs::pnm::{PnmEncoder, PnmSubtype, SampleEncoding};
use image::{ColorType, ExtendedColorType, ImageEncoder, ImageFormat, ImageReader, Rgb, RgbImage};
use std::io::{BufRead, Seek, Write};

/// An owned `width x height` RGB image.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RawPixels", into = "RawPixels")
)]
pub struct PixelBuffer {
    image: RgbImage,
}

impl PixelBuffer {
    /// A black image.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            image: RgbImage::new(width, height),
        }
    }

    /// An image filled with one colour.
    pub fn solid(width: u32, height: u32, rgb: [u8; 3]) -> Self {
        Self {
            image: RgbImage::from_pixel(width, height, Rgb(rgb)),
        }
    }

    /// Wraps raw RGB bytes. The length must be exactly `width * height * 3`.
    pub fn from_raw(width: u32, height: u32, data: Vec<u8>) -> Result<Self> {
        let expected = byte_len(width, height)?;
        if data.len() != expected {
            return Err(TrimageError::BufferLength {
                expected,
                actual: data.len(),
            });
        }
        let actual = data.len();
        RgbImage::from_raw(width, height, data)
            .map(Self::from)
            .ok_or(TrimageError::BufferLength { expected, actual })
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn data(&self) -> &[u8] {
        self.image.as_raw()
    }

    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.image
    }

    pub fn into_raw(self) -> Vec<u8> {
        self.image.into_raw()
    }

    pub fn as_image(&self) -> &RgbImage {
        &self.image
    }

    /// The pixel at `(x, y)`.
    ///
    /// # Panics
    /// Panics if the coordinates lie outside the image.
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 3] {
        self.image.get_pixel(x, y).0
    }

    pub fn set_pixel(&mut self, x: u32, y: u32, rgb: [u8; 3]) {
        self.image.put_pixel(x, y, Rgb(rgb));
    }

    /// Fails with [`TrimageError::SizeMismatch`] unless both images share
    /// the same dimensions.
    pub fn ensure_same_size(&self, other: &PixelBuffer) -> Result<()> {
        if self.image.dimensions() != other.image.dimensions() {
            return Err(TrimageError::SizeMismatch {
                left_width: self.width(),
                left_height: self.height(),
                right_width: other.width(),
                right_height: other.height(),
            });
        }
        Ok(())
    }

    // ---- PPM ----

    /// Writes the image as binary PPM (`P6`, maxval 255).
    pub fn write_ppm<W: Write>(&self, out: W) -> Result<()> {
        PnmEncoder::new(out)
            .with_subtype(PnmSubtype::Pixmap(SampleEncoding::Binary))
            .write_image(
                self.data(),
                self.width(),
                self.height(),
                ExtendedColorType::Rgb8,
            )?;
        Ok(())
    }

    /// Reads an 8-bit RGB PPM (`P6` binary or `P3` ASCII).
    ///
    /// The decoder runs under the `image` crate's default allocation
    /// limit, so an oversized header fails before any pixel storage is
    /// reserved. Other sample layouts fail with [`TrimageError::Ppm`].
    pub fn read_ppm<R: BufRead + Seek>(input: R) -> Result<Self> {
        let decoded = ImageReader::with_format(input, ImageFormat::Pnm).decode()?;
        if decoded.color() != ColorType::Rgb8 {
            return Err(TrimageError::Ppm(format!(
                "expected 8-bit rgb samples, found {:?}",
                decoded.color()
            )));
        }
        Ok(Self::from(decoded.into_rgb8()))
    }
}

impl From<RgbImage> for PixelBuffer {
    fn from(image: RgbImage) -> Self {
        Self { image }
    }
}

impl From<PixelBuffer> for RgbImage {
    fn from(buffer: PixelBuffer) -> Self {
        buffer.image
    }
}

/// `width * height * 3`, or an error when that does not fit in memory.
fn byte_len(width: u32, height: u32) -> Result<usize> {
    (width as usize)
        .checked_mul(height as usize)
        .and_then(|n| n.checked_mul(3))
        .ok_or(TrimageError::Dimensions { width, height })
}

#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct RawPixels {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

#[cfg(feature = "serde")]
impl From<PixelBuffer> for RawPixels {
    fn from(buffer: PixelBuffer) -> Self {
        Self {
            width: buffer.width(),
            height: buffer.height(),
            data: buffer.into_raw(),
        }
    }
}

#[cfg(feature = "serde")]
impl TryFrom<RawPixels> for PixelBuffer {
    type Error = TrimageError;

    fn try_from(raw: RawPixels) -> Result<Self> {
        PixelBuffer::from_raw(raw.width, raw.height, raw.data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_solid_fill() {
        let img = PixelBuffer::solid(3, 2, [10, 20, 30]);
        assert_eq!(img.data().len(), 18);
        assert_eq!(img.pixel(2, 1), [10, 20, 30]);
    }

    #[test]
    fn test_from_raw_length_check() {
        assert!(PixelBuffer::from_raw(2, 2, vec![0; 12]).is_ok());
        let err = PixelBuffer::from_raw(2, 2, vec![0; 11]).unwrap_err();
        assert!(matches!(err, TrimageError::BufferLength { expected: 12, actual: 11 }));
        // Longer buffers are rejected too, not truncated.
        assert!(PixelBuffer::from_raw(2, 2, vec![0; 13]).is_err());
    }

    #[test]
    fn test_set_pixel() {
        let mut img = PixelBuffer::new(4, 4);
        img.set_pixel(1, 3, [1, 2, 3]);
        assert_eq!(img.pixel(1, 3), [1, 2, 3]);
        assert_eq!(img.pixel(3, 1), [0, 0, 0]);
        assert_eq!(&img.data()[(3 * 4 + 1) * 3..][..3], &[1, 2, 3]);
    }

    #[test]
    fn test_ensure_same_size() {
        let a = PixelBuffer::new(4, 4);
        let b = PixelBuffer::new(4, 5);
        assert!(a.ensure_same_size(&a.clone()).is_ok());
        assert!(matches!(
            a.ensure_same_size(&b),
            Err(TrimageError::SizeMismatch { right_height: 5, .. })
        ));
    }

    #[test]
    fn test_ppm_write_then_read() {
        let mut img = PixelBuffer::new(3, 2);
        img.set_pixel(0, 0, [255, 0, 0]);
        img.set_pixel(2, 1, [0, 0, 255]);

        let mut bytes = Vec::new();
        img.write_ppm(&mut bytes).unwrap();
        assert!(bytes.starts_with(b"P6"));

        let back = PixelBuffer::read_ppm(Cursor::new(bytes)).unwrap();
        assert_eq!(back, img);
    }

    #[test]
    fn test_ppm_header_comments() {
        let mut bytes = b"P6\n# made by hand\n2 1\n255\n".to_vec();
        bytes.extend_from_slice(&[1, 2, 3, 4, 5, 6]);
        let img = PixelBuffer::read_ppm(Cursor::new(bytes)).unwrap();
        assert_eq!((img.width(), img.height()), (2, 1));
        assert_eq!(img.pixel(1, 0), [4, 5, 6]);
    }

    #[test]
    fn test_ppm_rejects_bad_input() {
        let wrong_magic = b"Q6 1 1 255\n\0\0\0".to_vec();
        assert!(PixelBuffer::read_ppm(Cursor::new(wrong_magic)).is_err());

        let gray = b"P5 1 1 255\n\0".to_vec();
        assert!(matches!(
            PixelBuffer::read_ppm(Cursor::new(gray)),
            Err(TrimageError::Ppm(_))
        ));

        let truncated = b"P6 2 2 255\n\0\0\0".to_vec();
        assert!(matches!(
            PixelBuffer::read_ppm(Cursor::new(truncated)),
            Err(TrimageError::Image(_))
        ));
    }

    #[test]
    fn test_ppm_huge_header_fails_without_allocating() {
        let overflow = b"P6 4294967295 4294967295 255\n\0\0\0".to_vec();
        assert!(matches!(
            PixelBuffer::read_ppm(Cursor::new(overflow)),
            Err(TrimageError::Image(_))
        ));

        let large = b"P6 100000 100000 255\n\0\0\0".to_vec();
        assert!(matches!(
            PixelBuffer::read_ppm(Cursor::new(large)),
            Err(TrimageError::Image(_))
        ));
    }

    #[test]
    fn test_dimension_overflow_is_error() {
        assert!(matches!(
            PixelBuffer::from_raw(u32::MAX, u32::MAX, Vec::new()),
            Err(TrimageError::Dimensions { .. })
        ));
        assert_eq!(byte_len(4, 5).unwrap(), 60);
    }
}
