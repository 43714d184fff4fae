//! Encoded texture output.

use std::ops::Deref;

use crate::Etc1Format;

/// Bytes of an encoded ETC1/ETC1A4 texture together with its shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedTexture {
    data: Vec<u8>,
    width: u16,
    height: u16,
    format: Etc1Format,
}

impl EncodedTexture {
    pub(crate) fn new(data: Vec<u8>, width: u16, height: u16, format: Etc1Format) -> Self {
        debug_assert_eq!(data.len(), format.encoded_size(width, height));
        Self {
            data,
            width,
            height,
            format,
        }
    }

    /// Source image width in pixels.
    #[inline]
    pub const fn width(&self) -> u16 {
        self.width
    }

    /// Source image height in pixels.
    #[inline]
    pub const fn height(&self) -> u16 {
        self.height
    }

    #[inline]
    pub const fn format(&self) -> Etc1Format {
        self.format
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Iterate over the encoded sub-blocks in storage order.
    pub fn blocks(&self) -> std::slice::ChunksExact<'_, u8> {
        self.data.chunks_exact(self.format.block_size())
    }

    /// Take ownership of the encoded bytes.
    #[inline]
    pub fn into_vec(self) -> Vec<u8> {
        self.data
    }
}

impl Deref for EncodedTexture {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        &self.data
    }
}

impl AsRef<[u8]> for EncodedTexture {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}

impl From<EncodedTexture> for Vec<u8> {
    fn from(texture: EncodedTexture) -> Self {
        texture.data
    }
}
