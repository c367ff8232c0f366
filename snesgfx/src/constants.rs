pub const SPRITE_BLOCK_COUNT: usize = 896;
/// Bytes per 8x8 tile in 4BPP.
pub const SPRITE_BLOCK_SIZE: usize = 32;
pub const SPRITE_DATA_SIZE: usize = SPRITE_BLOCK_COUNT * SPRITE_BLOCK_SIZE;

pub const SHEET_WIDTH: usize = 128;
pub const SHEET_HEIGHT: usize = 448;
pub const TILE_SIZE: usize = 8;
pub const TILES_PER_ROW: usize = SHEET_WIDTH / TILE_SIZE;
pub const INDEXED_RASTER_SIZE: usize = SHEET_WIDTH * SHEET_HEIGHT;
/// A, B, G, R per pixel.
pub const ABGR_RASTER_SIZE: usize = INDEXED_RASTER_SIZE * 4;

pub const MAIL_COUNT: usize = 4;
pub const MAIL_PALETTE_SIZE: usize = 16;
pub const ALL_MAILS_PALETTE_SIZE: usize = MAIL_PALETTE_SIZE * MAIL_COUNT;
pub const ALL_MAILS_WITH_GLOVES_SIZE: usize = ALL_MAILS_PALETTE_SIZE + 2;
/// 4 mails, 15 stored colors, 2 bytes per color.
pub const PALETTE_DATA_SIZE: usize = MAIL_COUNT * (MAIL_PALETTE_SIZE - 1) * 2;
/// 2 colors, 2 bytes per color.
pub const GLOVE_DATA_SIZE: usize = 4;
/// Palette slot replaced by the glove color.
pub const GLOVE_PALETTE_INDEX: usize = 13;
pub const VANILLA_GLOVE_COLORS: [u8; GLOVE_DATA_SIZE] = [0xF6, 0x52, 0x76, 0x03];
