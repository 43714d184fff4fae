//! Tile and sub-block geometry.
//!
//! PICA200 textures are stored as a sequence of 8x8 tiles in row-major tile
//! order. Each tile holds four 4x4 sub-blocks, visited as
//!
//! ```text
//! +---+---+
//! | 0 | 1 |
//! +---+---+
//! | 2 | 3 |
//! +---+---+
//! ```
//!
//! Coordinates here are in block space, where row 0 is the bottom row of the
//! source image; [`image_row`] maps a block-space row back to the image.

/// Width and height of a tile in pixels.
pub const TILE_SIZE: u32 = 8;

/// Width and height of a sub-block in pixels.
pub const BLOCK_DIM: u32 = 4;

/// Sub-blocks per tile.
pub const BLOCKS_PER_TILE: usize = 4;

/// `(row offset, column offset)` of each sub-block within its tile, in storage order.
pub const SUB_BLOCK_OFFSETS: [(u32, u32); BLOCKS_PER_TILE] = [(0, 0), (0, 4), (4, 0), (4, 4)];

/// Map a block-space row to the image row it samples.
///
/// The result is negative or past the last row when the block-space row lies
/// outside the image.
#[inline]
pub fn image_row(height: u16, row: i32) -> i32 {
    i32::from(height) - 1 - row
}

/// Tile grid covering an image.
///
/// Partial tiles at the right and bottom edges are counted in full.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockLayout {
    tiles_x: u32,
    tiles_y: u32,
}

impl BlockLayout {
    /// Layout for a `width` x `height` image.
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            tiles_x: u32::from(width).div_ceil(TILE_SIZE),
            tiles_y: u32::from(height).div_ceil(TILE_SIZE),
        }
    }

    /// Number of tile columns.
    #[inline]
    pub const fn tiles_x(&self) -> u32 {
        self.tiles_x
    }

    /// Number of tile rows.
    #[inline]
    pub const fn tiles_y(&self) -> u32 {
        self.tiles_y
    }

    /// Total number of tiles.
    #[inline]
    pub const fn tile_count(&self) -> usize {
        self.tiles_x as usize * self.tiles_y as usize
    }

    /// Total number of 4x4 sub-blocks.
    #[inline]
    pub const fn block_count(&self) -> usize {
        self.tile_count() * BLOCKS_PER_TILE
    }

    /// Block-space origin `(block_x, block_y)` of the sub-block stored at `index`.
    ///
    /// # Panics
    ///
    /// Panics if the layout has no tile columns.
    #[inline]
    pub fn block_origin(&self, index: usize) -> (u32, u32) {
        let tile = index / BLOCKS_PER_TILE;
        let (row, column) = SUB_BLOCK_OFFSETS[index % BLOCKS_PER_TILE];
        let tile_x = (tile % self.tiles_x as usize) as u32 * TILE_SIZE;
        let tile_y = (tile / self.tiles_x as usize) as u32 * TILE_SIZE;
        (tile_x + column, tile_y + row)
    }

    /// Block-space origins of all sub-blocks, in storage order.
    pub fn origins(&self) -> impl Iterator<Item = (u32, u32)> {
        let tiles_x = self.tiles_x;
        (0..self.tiles_y).flat_map(move |tile_y| {
            (0..tiles_x).flat_map(move |tile_x| {
                SUB_BLOCK_OFFSETS
                    .into_iter()
                    .map(move |(row, column)| (tile_x * TILE_SIZE + column, tile_y * TILE_SIZE + row))
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(8, 8, 1, 1)]
    #[case(16, 8, 2, 1)]
    #[case(5, 5, 1, 1)]
    #[case(9, 17, 2, 3)]
    #[case(256, 128, 32, 16)]
    fn test_tile_counts(#[case] width: u16, #[case] height: u16, #[case] tiles_x: u32, #[case] tiles_y: u32) {
        let layout = BlockLayout::new(width, height);
        assert_eq!(layout.tiles_x(), tiles_x);
        assert_eq!(layout.tiles_y(), tiles_y);
        assert_eq!(layout.block_count(), (tiles_x * tiles_y) as usize * 4);
    }

    #[test]
    fn test_sub_block_order() {
        let layout = BlockLayout::new(16, 16);
        let origins: Vec<_> = layout.origins().take(8).collect();
        assert_eq!(
            origins,
            vec![(0, 0), (4, 0), (0, 4), (4, 4), (8, 0), (12, 0), (8, 4), (12, 4)]
        );
    }

    #[test]
    fn test_closed_form_matches_iteration() {
        let layout = BlockLayout::new(40, 24);
        for (index, origin) in layout.origins().enumerate() {
            assert_eq!(layout.block_origin(index), origin, "index {index}");
        }
        assert_eq!(layout.origins().count(), layout.block_count());
    }

    #[test]
    fn test_image_row_flips() {
        assert_eq!(image_row(8, 0), 7);
        assert_eq!(image_row(8, 7), 0);
        assert_eq!(image_row(5, 7), -3);
    }
}
