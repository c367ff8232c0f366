use snesgfx::constants::{GLOVE_DATA_SIZE, PALETTE_DATA_SIZE};

pub const ZSPR_FLAG: [u8; 4] = *b"ZSPR";
pub const ZSPR_VERSION: u8 = 1;
pub const ZSPR_VERSION_TAG: &str = "v1.0";
pub const ZSPR_EXTENSION: &str = "zspr";

pub const PLAYER_SPRITE_TYPE: u16 = 0x0001;

// header field positions
pub const VERSION_OFFSET: usize = 4;
pub const CHECKSUM_OFFSET: usize = 5;
pub const SPRITE_OFFSET_OFFSET: usize = 9;
pub const SPRITE_SIZE_OFFSET: usize = 13;
pub const PALETTE_OFFSET_OFFSET: usize = 15;
pub const PALETTE_SIZE_OFFSET: usize = 19;
pub const SPRITE_TYPE_OFFSET: usize = 21;
pub const RESERVED_OFFSET: usize = 23;
pub const RESERVED_SIZE: usize = 6;
pub const NAME_OFFSET: usize = RESERVED_OFFSET + RESERVED_SIZE;

pub const CHECKSUM_SIZE: usize = 4;
/// Written before summing. Any valid sum/complement pair adds up to the same
/// 0x1FE, so the sum over a finished file equals the stored sum.
pub const CHECKSUM_PLACEHOLDER: [u8; CHECKSUM_SIZE] = [0x00, 0x00, 0xFF, 0xFF];

/// Palette block as counted by the header: palette plus gloves.
pub const PALETTE_BLOCK_SIZE: usize = PALETTE_DATA_SIZE + GLOVE_DATA_SIZE;

pub const AUTHOR_NAME_ROM_MAX_LENGTH: usize = 20;
pub const DEFAULT_SPRITE_NAME: &str = "Untitled";
pub const DEFAULT_AUTHOR_NAME: &str = "Unknown";
