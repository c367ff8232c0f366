//! SNES 4BPP planar tiles.
//!
//! A tile is 32 bytes. The first 16 bytes hold bit planes 0 and 1 of rows 0
//! to 7 interleaved, the last 16 bytes hold planes 2 and 3. Within a byte,
//! bit 7 is the leftmost pixel.
use rayon::prelude::*;

use crate::{
    constants::{SPRITE_BLOCK_SIZE, SPRITE_DATA_SIZE, TILE_SIZE},
    IndexMap, Tile,
};

/// `(row, bit plane)` for each byte position of a tile.
pub const INTERLACE_ORDER: [(usize, u8); SPRITE_BLOCK_SIZE] = [
    (0, 0), (0, 1), (1, 0), (1, 1), (2, 0), (2, 1), (3, 0), (3, 1),
    (4, 0), (4, 1), (5, 0), (5, 1), (6, 0), (6, 1), (7, 0), (7, 1),
    (0, 2), (0, 3), (1, 2), (1, 3), (2, 2), (2, 3), (3, 2), (3, 3),
    (4, 2), (4, 3), (5, 2), (5, 3), (6, 2), (6, 3), (7, 2), (7, 3),
];

/// Sprite data to color indices.
///
/// Panics if `sprite` is not exactly 28672 bytes.
pub fn decode(sprite: &[u8]) -> IndexMap {
    assert_eq!(
        sprite.len(),
        SPRITE_DATA_SIZE,
        "sprite data must be {} bytes",
        SPRITE_DATA_SIZE
    );

    let tiles = sprite
        .par_chunks_exact(SPRITE_BLOCK_SIZE)
        .map(decode_tile)
        .collect::<Vec<Tile>>();

    IndexMap::from_tiles(tiles)
}

/// Color indices to sprite data. Only the low 4 bits of each index are used.
pub fn encode(map: &IndexMap) -> Vec<u8> {
    map.tiles()
        .par_iter()
        .flat_map_iter(encode_tile)
        .collect::<Vec<u8>>()
}

pub fn decode_tile(block: &[u8]) -> Tile {
    let mut tile: Tile = [[0; TILE_SIZE]; TILE_SIZE];

    block
        .iter()
        .zip(INTERLACE_ORDER.iter())
        .for_each(|(byte, &(row, plane))| {
            (0..TILE_SIZE)
                .filter(|column| byte & (0x80 >> column) != 0)
                .for_each(|column| tile[row][column] |= 1 << plane);
        });

    tile
}

pub fn encode_tile(tile: &Tile) -> [u8; SPRITE_BLOCK_SIZE] {
    INTERLACE_ORDER.map(|(row, plane)| {
        tile[row]
            .iter()
            .fold(0u8, |byte, index| (byte << 1) | ((index >> plane) & 1))
    })
}

#[cfg(test)]
mod test {
    use rand::Rng;

    use super::*;
    use crate::constants::SPRITE_BLOCK_COUNT;

    fn random_sprite() -> Vec<u8> {
        let mut rng = rand::thread_rng();
        (0..SPRITE_DATA_SIZE).map(|_| rng.gen::<u8>()).collect()
    }

    #[test]
    fn single_pixel_planes() {
        let mut block = [0u8; SPRITE_BLOCK_SIZE];
        // row 3: plane 0 at byte 6, plane 3 at byte 23
        block[6] = 0b1000_0000;
        block[23] = 0b0000_0001;

        let tile = decode_tile(&block);

        assert_eq!(tile[3][0], 0b0001);
        assert_eq!(tile[3][7], 0b1000);
        assert_eq!(tile.iter().flatten().filter(|i| **i != 0).count(), 2);

        assert_eq!(encode_tile(&tile), block);
    }

    #[test]
    fn full_index_row() {
        let mut tile: Tile = [[0; TILE_SIZE]; TILE_SIZE];
        tile[0] = [15, 0, 15, 0, 15, 0, 15, 0];

        let block = encode_tile(&tile);

        // all four planes of row 0
        assert_eq!(block[0], 0b1010_1010);
        assert_eq!(block[1], 0b1010_1010);
        assert_eq!(block[16], 0b1010_1010);
        assert_eq!(block[17], 0b1010_1010);
        assert_eq!(block.iter().filter(|b| **b != 0).count(), 4);
    }

    #[test]
    fn sprite_round_trip() {
        let sprite = random_sprite();

        let map = decode(&sprite);

        assert!(map.tiles().iter().flatten().flatten().all(|i| *i < 16));
        assert_eq!(encode(&map), sprite);
    }

    #[test]
    fn index_map_round_trip() {
        let mut rng = rand::thread_rng();
        let tiles = (0..SPRITE_BLOCK_COUNT)
            .map(|_| {
                let mut tile: Tile = [[0; TILE_SIZE]; TILE_SIZE];
                tile.iter_mut()
                    .flatten()
                    .for_each(|index| *index = rng.gen_range(0..16));
                tile
            })
            .collect::<Vec<Tile>>();
        let map = IndexMap::from_tiles(tiles);

        let sprite = encode(&map);

        assert_eq!(sprite.len(), SPRITE_DATA_SIZE);
        assert_eq!(decode(&sprite), map);
    }

    #[test]
    fn tile_order_preserved() {
        let mut sprite = vec![0u8; SPRITE_DATA_SIZE];
        // first byte of the last tile
        sprite[SPRITE_DATA_SIZE - SPRITE_BLOCK_SIZE] = 0xFF;

        let map = decode(&sprite);

        assert_eq!(map.tiles()[SPRITE_BLOCK_COUNT - 1][0], [1; TILE_SIZE]);
        assert_eq!(map.get(120, 440), 1);
        assert_eq!(map.get(0, 0), 0);
    }

    #[test]
    #[should_panic]
    fn wrong_size_panics() {
        decode(&[0u8; 100]);
    }
}
