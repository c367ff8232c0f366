//! Player sprite locations inside an A Link to the Past ROM image.
//!
//! Only byte ranges are moved here. No pixel or color conversion happens.
use snesgfx::constants::{GLOVE_DATA_SIZE, PALETTE_DATA_SIZE, SPRITE_DATA_SIZE};

use crate::{
    error::ZsprError,
    types::{GloveData, PaletteData, SpriteData, Zspr},
};

pub const ROM_SPRITE_OFFSET: usize = 0x80000;
pub const ROM_PALETTE_OFFSET: usize = 0xDD308;
/// Gloves, gloves, mitts, mitts.
pub const ROM_GLOVE_OFFSETS: [usize; GLOVE_DATA_SIZE] = [0xDEDF5, 0xDEDF6, 0xDEDF7, 0xDEDF8];

fn check_length(rom: &[u8], end: usize, what: &'static str) -> Result<(), ZsprError> {
    if rom.len() < end {
        return Err(ZsprError::TruncatedData {
            what,
            length: rom.len(),
        });
    }

    Ok(())
}

fn glove_end() -> usize {
    ROM_GLOVE_OFFSETS.iter().max().copied().unwrap_or_default() + 1
}

pub fn extract_sprite_data(rom: &[u8]) -> Result<SpriteData, ZsprError> {
    let end = ROM_SPRITE_OFFSET + SPRITE_DATA_SIZE;
    check_length(rom, end, "ROM sprite data")?;

    SpriteData::new(&rom[ROM_SPRITE_OFFSET..end])
}

pub fn extract_palette_data(rom: &[u8]) -> Result<PaletteData, ZsprError> {
    let end = ROM_PALETTE_OFFSET + PALETTE_DATA_SIZE;
    check_length(rom, end, "ROM palette data")?;

    PaletteData::new(&rom[ROM_PALETTE_OFFSET..end])
}

pub fn extract_glove_data(rom: &[u8]) -> Result<GloveData, ZsprError> {
    check_length(rom, glove_end(), "ROM glove data")?;

    Ok(GloveData(ROM_GLOVE_OFFSETS.map(|offset| rom[offset])))
}

/// Writes sprite, palette and, unless unset, gloves into `rom`.
///
/// Bounds are checked before anything is written, so a short ROM is left
/// untouched.
pub fn patch_rom(
    rom: &mut [u8],
    sprite_data: &SpriteData,
    palette_data: &PaletteData,
    glove_data: GloveData,
) -> Result<(), ZsprError> {
    let sprite_end = ROM_SPRITE_OFFSET + SPRITE_DATA_SIZE;
    let palette_end = ROM_PALETTE_OFFSET + PALETTE_DATA_SIZE;
    let write_gloves = !glove_data.is_unset();

    check_length(rom, sprite_end, "ROM sprite data")?;
    check_length(rom, palette_end, "ROM palette data")?;

    if write_gloves {
        check_length(rom, glove_end(), "ROM glove data")?;
    }

    rom[ROM_SPRITE_OFFSET..sprite_end].copy_from_slice(sprite_data.get_bytes());
    rom[ROM_PALETTE_OFFSET..palette_end].copy_from_slice(palette_data.get_bytes());

    if write_gloves {
        ROM_GLOVE_OFFSETS
            .iter()
            .zip(glove_data.0)
            .for_each(|(offset, byte)| rom[*offset] = byte);
    } else {
        log::debug!("Glove colors unset, keeping the ROM's own");
    }

    Ok(())
}

impl Zspr {
    /// Reads the player sprite out of a ROM. Names are left at their defaults.
    pub fn from_rom(rom: &[u8]) -> Result<Self, ZsprError> {
        Ok(Zspr::new(
            extract_sprite_data(rom)?,
            extract_palette_data(rom)?,
            extract_glove_data(rom)?,
        ))
    }

    pub fn patch_rom(&self, rom: &mut [u8]) -> Result<(), ZsprError> {
        patch_rom(rom, &self.sprite_data, &self.palette_data, self.glove_data)
    }
}
