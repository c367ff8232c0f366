use std::{fs::OpenOptions, io::Write, path::Path};

use byte_writer::ByteWriter;
use snesgfx::constants::SPRITE_DATA_SIZE;

use crate::{
    constants::{
        CHECKSUM_PLACEHOLDER, NAME_OFFSET, PALETTE_BLOCK_SIZE, PLAYER_SPRITE_TYPE, RESERVED_SIZE,
        ZSPR_FLAG, ZSPR_VERSION,
    },
    error::ZsprError,
    types::{check_extension, Zspr},
    utils::seal_checksum,
};

impl Zspr {
    pub fn write_to_bytes(&self) -> Vec<u8> {
        let mut writer = ByteWriter::with_capacity(NAME_OFFSET + SPRITE_DATA_SIZE + 256);

        writer.append_u8_slice(&ZSPR_FLAG);
        writer.append_u8(ZSPR_VERSION);
        writer.append_u8_slice(&CHECKSUM_PLACEHOLDER);

        // offsets depend on the name lengths, patched below
        let sprite_offset_index = writer.get_offset();
        writer.append_u32(0);
        writer.append_u16(SPRITE_DATA_SIZE as u16);

        let palette_offset_index = writer.get_offset();
        writer.append_u32(0);
        writer.append_u16(PALETTE_BLOCK_SIZE as u16);

        writer.append_u16(PLAYER_SPRITE_TYPE);
        writer.append_zeroes(RESERVED_SIZE);

        // a NUL inside a name would end it early
        writer.append_utf16_nul(&self.sprite_name.replace('\0', ""));
        writer.append_utf16_nul(&self.author_name.replace('\0', ""));
        writer.append_latin1_nul(&self.author_name_rom());

        let sprite_offset = writer.get_offset() as u32;
        writer.replace_with_u32(sprite_offset_index, sprite_offset);
        writer.append_u8_slice(self.sprite_data.get_bytes());

        let palette_offset = writer.get_offset() as u32;
        writer.replace_with_u32(palette_offset_index, palette_offset);
        writer.append_u8_slice(self.palette_data.get_bytes());
        writer.append_u8_slice(&self.glove_data.or_vanilla().0);

        seal_checksum(&mut writer.data);

        log::debug!(
            "Wrote ZSPR '{}' ({} bytes, sprite at {:#x}, palette at {:#x})",
            self.sprite_name,
            writer.data.len(),
            sprite_offset,
            palette_offset
        );

        writer.data
    }

    /// Writes to a `.zspr` path. An empty sprite name is taken from the file name.
    pub fn write_to_file(&self, path: impl AsRef<Path>) -> Result<(), ZsprError> {
        let path = path.as_ref();

        check_extension(path)?;

        let bytes = if self.sprite_name.is_empty() {
            let mut named = self.clone();
            named.set_name_from_path(path);
            named.write_to_bytes()
        } else {
            self.write_to_bytes()
        };

        let mut file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(path)?;

        file.write_all(&bytes)?;
        file.flush()?;

        Ok(())
    }
}
