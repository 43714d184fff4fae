//! Decoding of PICA200 ETC1/ETC1A4 textures back to RGBA8.

use std::time::Instant;

use picatex_common::{BinaryReader, IntoBytes, Rgba};
use picatex_quantizer::decode_block;

use crate::alpha::alpha_at;
use crate::layout::{image_row, BlockLayout};
use crate::{Error, Etc1Format, Result};

/// Decode an encoded texture into row-major RGBA8 bytes, top row first.
///
/// This is the inverse of the encoder's layout, including the vertical
/// flip, so a decoded image has the orientation of the image that was
/// encoded. Without alpha every pixel is opaque. Trailing bytes past the
/// expected size are ignored.
pub fn decode_image(data: &[u8], width: u16, height: u16, format: Etc1Format) -> Result<Vec<u8>> {
    if width == 0 || height == 0 {
        return Err(picatex_common::Error::InvalidDimensions {
            width: width.into(),
            height: height.into(),
        }
        .into());
    }

    let expected = format.encoded_size(width, height);
    if data.len() < expected {
        return Err(Error::DataTooShort {
            expected,
            actual: data.len(),
        });
    }

    let start = Instant::now();
    let layout = BlockLayout::new(width, height);
    let mut pixels = vec![Rgba::TRANSPARENT; width as usize * height as usize];
    let mut reader = BinaryReader::new(data);
    log::debug!(
        "decoding {}x{} {} texture ({} blocks)",
        width,
        height,
        format,
        layout.block_count()
    );

    for (block_x, block_y) in layout.origins() {
        let alpha = if format.has_alpha() {
            Some(reader.read_word()?)
        } else {
            None
        };
        let colors = decode_block(reader.read_word()?);

        for y in 0..4 {
            let row = image_row(height, (block_y + y) as i32);
            for x in 0..4 {
                let column = block_x + x;
                if row < 0 || column >= u32::from(width) {
                    continue;
                }

                let mut pixel = colors[(y * 4 + x) as usize];
                if let Some(code) = alpha {
                    pixel.a = alpha_at(code, x as usize, y as usize);
                }
                pixels[row as usize * width as usize + column as usize] = pixel;
            }
        }
    }

    log::debug!(
        "decoded {}x{} {} texture ({} blocks) in {:?}",
        width,
        height,
        format,
        layout.block_count(),
        start.elapsed()
    );
    Ok(pixels.as_bytes().to_vec())
}
