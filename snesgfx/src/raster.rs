//! Index map and palette to a displayable ABGR raster, and back.
use rayon::prelude::*;

use crate::{
    constants::{ABGR_RASTER_SIZE, INDEXED_RASTER_SIZE, MAIL_PALETTE_SIZE, SHEET_WIDTH},
    palette::{round_channel, MailPalette, Rgb},
    IndexMap,
};

/// Draws the sheet as A, B, G, R bytes, row by row.
///
/// Index 0 is fully transparent, everything else fully opaque.
pub fn rasterize(map: &IndexMap, palette: &MailPalette) -> Vec<u8> {
    (0..INDEXED_RASTER_SIZE)
        .into_par_iter()
        .flat_map_iter(|pixel| {
            let index = map.get(pixel % SHEET_WIDTH, pixel / SHEET_WIDTH);
            let [r, g, b] = palette[index as usize];
            let alpha = if index == 0 { 0 } else { 255 };

            [alpha, b, g, r]
        })
        .collect()
}

/// Maps every pixel of an ABGR raster to a color index. Alpha is ignored.
///
/// The first exact match in `color_table` wins and its position is taken mod 16,
/// so a color from any mail resolves to the same slot number. Unmatched pixels
/// become index 0.
///
/// Panics if `abgr` is not a full 128x448 raster.
pub fn indexify(abgr: &[u8], color_table: &[Rgb]) -> IndexMap {
    assert_eq!(
        abgr.len(),
        ABGR_RASTER_SIZE,
        "raster must be {} bytes",
        ABGR_RASTER_SIZE
    );

    let indices = abgr
        .par_chunks_exact(4)
        .map(|pixel| lookup_index(color_table, [pixel[3], pixel[2], pixel[1]]))
        .collect::<Vec<u8>>();

    let mut map = IndexMap::new();

    indices
        .iter()
        .enumerate()
        .for_each(|(pixel, index)| map.set(pixel % SHEET_WIDTH, pixel / SHEET_WIDTH, *index));

    map
}

#[inline]
pub fn lookup_index(color_table: &[Rgb], color: Rgb) -> u8 {
    color_table
        .iter()
        .position(|candidate| *candidate == color)
        .map(|position| (position % MAIL_PALETTE_SIZE) as u8)
        .unwrap_or(0)
}

/// Rounds every byte of the raster down to a multiple of 8.
pub fn round_raster(raster: &[u8]) -> Vec<u8> {
    raster.par_iter().map(|v| round_channel(*v)).collect()
}
