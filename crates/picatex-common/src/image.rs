//! Pixel and source image types.

use zerocopy::{FromBytes, Immutable, IntoBytes, KnownLayout};

use crate::{Error, Result};

/// Size of one RGBA8 pixel in bytes.
pub const BYTES_PER_PIXEL: usize = 4;

/// A single RGBA pixel with 8 bits per channel.
///
/// The memory layout matches the byte order of the source data (R, G, B, A),
/// so a pixel buffer can be viewed as `[Rgba]` without copying.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, FromBytes, IntoBytes, Immutable, KnownLayout)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    /// Fully transparent black, used for pixels outside the image.
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);

    /// Create a pixel from its channels.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque pixel.
    #[inline]
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 0xFF)
    }

    /// The colour channels, alpha dropped.
    #[inline]
    pub const fn rgb(&self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

/// Immutable view over a `width` x `height` RGBA8 image.
///
/// Pixels are stored row-major with row 0 at the visual top. The view is
/// validated on construction so every in-bounds coordinate is readable.
///
/// # Example
///
/// ```
/// use picatex_common::SourceImage;
///
/// let data = vec![0u8; 8 * 8 * 4];
/// let image = SourceImage::new(&data, 8, 8).unwrap();
///
/// assert_eq!(image.pixel_count(), 64);
/// assert!(image.get(7, 7).is_some());
/// assert!(image.get(8, 0).is_none());
/// assert!(image.get(0, -1).is_none());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct SourceImage<'a> {
    pixels: &'a [Rgba],
    width: u16,
    height: u16,
}

impl<'a> SourceImage<'a> {
    /// Create a view over raw RGBA8 bytes.
    ///
    /// Fails if either dimension is zero or if `data` is not exactly
    /// `width * height * 4` bytes long.
    pub fn new(data: &'a [u8], width: u16, height: u16) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimensions {
                width: width.into(),
                height: height.into(),
            });
        }

        let expected = Self::byte_len(width, height);
        if data.len() != expected {
            return Err(Error::BufferSizeMismatch {
                expected,
                actual: data.len(),
            });
        }

        let pixels = <[Rgba]>::ref_from_bytes(data).map_err(|_| Error::BufferSizeMismatch {
            expected,
            actual: data.len(),
        })?;

        Ok(Self {
            pixels,
            width,
            height,
        })
    }

    /// Number of bytes an RGBA8 image of the given dimensions occupies.
    #[inline]
    pub const fn byte_len(width: u16, height: u16) -> usize {
        width as usize * height as usize * BYTES_PER_PIXEL
    }

    /// Image width in pixels.
    #[inline]
    pub const fn width(&self) -> u16 {
        self.width
    }

    /// Image height in pixels.
    #[inline]
    pub const fn height(&self) -> u16 {
        self.height
    }

    /// Total number of pixels.
    #[inline]
    pub const fn pixel_count(&self) -> usize {
        self.pixels.len()
    }

    /// All pixels, row-major.
    #[inline]
    pub const fn pixels(&self) -> &'a [Rgba] {
        self.pixels
    }

    /// The underlying bytes.
    #[inline]
    pub fn as_bytes(&self) -> &'a [u8] {
        self.pixels.as_bytes()
    }

    /// Get the pixel at `(x, y)`, or `None` if the coordinate lies outside the image.
    ///
    /// Signed coordinates are accepted so callers can probe past either edge.
    #[inline]
    pub fn get(&self, x: i32, y: i32) -> Option<&'a Rgba> {
        if x < 0 || y < 0 || x >= i32::from(self.width) || y >= i32::from(self.height) {
            return None;
        }
        self.pixels.get(y as usize * self.width as usize + x as usize)
    }

    /// Get the pixel at `(x, y)`, treating anything outside the image as
    /// [`Rgba::TRANSPARENT`].
    #[inline]
    pub fn get_or_transparent(&self, x: i32, y: i32) -> Rgba {
        self.get(x, y).copied().unwrap_or(Rgba::TRANSPARENT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gradient(width: u16, height: u16) -> Vec<u8> {
        let mut data = Vec::with_capacity(SourceImage::byte_len(width, height));
        for y in 0..height {
            for x in 0..width {
                data.extend_from_slice(&[x as u8, y as u8, 0x80, 0xFF]);
            }
        }
        data
    }

    #[test]
    fn test_pixel_layout() {
        let data = gradient(4, 2);
        let image = SourceImage::new(&data, 4, 2).unwrap();

        assert_eq!(image.get(3, 1), Some(&Rgba::new(3, 1, 0x80, 0xFF)));
        assert_eq!(image.get(0, 0), Some(&Rgba::new(0, 0, 0x80, 0xFF)));
        assert_eq!(image.as_bytes(), &data[..]);
    }

    #[test]
    fn test_out_of_bounds_is_transparent() {
        let data = gradient(2, 2);
        let image = SourceImage::new(&data, 2, 2).unwrap();

        assert_eq!(image.get_or_transparent(2, 0), Rgba::TRANSPARENT);
        assert_eq!(image.get_or_transparent(0, 2), Rgba::TRANSPARENT);
        assert_eq!(image.get_or_transparent(-1, 0), Rgba::TRANSPARENT);
        assert_eq!(image.get_or_transparent(1, 1), Rgba::new(1, 1, 0x80, 0xFF));
    }

    #[test]
    fn test_zero_dimensions_rejected() {
        assert!(matches!(
            SourceImage::new(&[], 0, 4),
            Err(Error::InvalidDimensions { width: 0, height: 4 })
        ));
        assert!(matches!(
            SourceImage::new(&[], 4, 0),
            Err(Error::InvalidDimensions { width: 4, height: 0 })
        ));
    }

    #[test]
    fn test_buffer_size_mismatch() {
        let data = vec![0u8; 15];
        match SourceImage::new(&data, 2, 2) {
            Err(Error::BufferSizeMismatch { expected, actual }) => {
                assert_eq!(expected, 16);
                assert_eq!(actual, 15);
            }
            other => panic!("unexpected result: {other:?}"),
        }

        let data = vec![0u8; 20];
        assert!(SourceImage::new(&data, 2, 2).is_err());
    }
}
