use crate::constants::{SPRITE_BLOCK_COUNT, TILES_PER_ROW, TILE_SIZE};

/// 8x8 color indices, `tile[row][column]`.
pub type Tile = [[u8; TILE_SIZE]; TILE_SIZE];

/// Color index map of the whole sheet, one [`Tile`] per 8x8 block.
///
/// Tiles are numbered in block-raster order: tile `row * 16 + col` covers the
/// pixels starting at `(col * 8, row * 8)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexMap(Vec<Tile>);

impl Default for IndexMap {
    fn default() -> Self {
        Self::new()
    }
}

impl IndexMap {
    /// All transparent.
    pub fn new() -> Self {
        Self(vec![[[0; TILE_SIZE]; TILE_SIZE]; SPRITE_BLOCK_COUNT])
    }

    /// Panics when the tile count is not 896.
    pub fn from_tiles(tiles: Vec<Tile>) -> Self {
        assert_eq!(
            tiles.len(),
            SPRITE_BLOCK_COUNT,
            "index map must have {} tiles",
            SPRITE_BLOCK_COUNT
        );

        Self(tiles)
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.0
    }

    pub fn tiles_mut(&mut self) -> &mut [Tile] {
        &mut self.0
    }

    pub fn get(&self, x: usize, y: usize) -> u8 {
        let (tile, row, column) = pixel_to_tile(x, y);
        self.0[tile][row][column]
    }

    /// Only the low 4 bits of `index` are kept.
    pub fn set(&mut self, x: usize, y: usize, index: u8) {
        let (tile, row, column) = pixel_to_tile(x, y);
        self.0[tile][row][column] = index & 0x0F;
    }
}

/// Sheet pixel to (tile number, row in tile, column in tile).
#[inline]
pub fn pixel_to_tile(x: usize, y: usize) -> (usize, usize, usize) {
    let tile = (y / TILE_SIZE) * TILES_PER_ROW + x / TILE_SIZE;
    (tile, y % TILE_SIZE, x % TILE_SIZE)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn block_raster_order() {
        assert_eq!(pixel_to_tile(0, 0), (0, 0, 0));
        assert_eq!(pixel_to_tile(8, 0), (1, 0, 0));
        assert_eq!(pixel_to_tile(127, 7), (15, 7, 7));
        assert_eq!(pixel_to_tile(0, 8), (16, 0, 0));
        assert_eq!(pixel_to_tile(127, 447), (895, 7, 7));
    }

    #[test]
    fn set_masks_to_nibble() {
        let mut map = IndexMap::new();

        map.set(9, 17, 0x1F);

        assert_eq!(map.get(9, 17), 0x0F);
        assert_eq!(map.tiles()[33][1][1], 0x0F);
    }
}
