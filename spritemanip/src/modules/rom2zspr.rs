use std::{
    fs::OpenOptions,
    io::Write,
    path::{Path, PathBuf},
};

use zspr::{constants::ZSPR_EXTENSION, Zspr};

use crate::{err, modules::png2zspr::SpriteNames, utils::misc::sibling_path_with_suffix};

fn read_rom(rom_path: &Path) -> eyre::Result<Vec<u8>> {
    if !rom_path.is_file() {
        return err!("{} is not a file", rom_path.display());
    }

    Ok(std::fs::read(rom_path)?)
}

/// Pulls the player sprite out of a ROM into `<rom stem>.zspr` unless
/// `out_path` is given.
pub fn rom2zspr(
    rom_path: impl AsRef<Path>,
    out_path: Option<PathBuf>,
    names: &SpriteNames,
) -> eyre::Result<PathBuf> {
    let rom_path = rom_path.as_ref();
    let rom = read_rom(rom_path)?;

    let mut zspr = Zspr::from_rom(&rom)?;
    names.apply(&mut zspr);

    let out_path =
        out_path.unwrap_or_else(|| sibling_path_with_suffix(rom_path, "", ZSPR_EXTENSION));

    if names.sprite_name.is_none() {
        zspr.set_name_from_path(&out_path);
    }

    zspr.write_to_file(&out_path)?;

    log::info!("Extracted {} to {}", zspr, out_path.display());

    Ok(out_path)
}

/// Patches a sprite into a ROM. The ROM is modified in place unless
/// `out_path` is given.
pub fn patch_rom_file(
    rom_path: impl AsRef<Path>,
    zspr_path: impl AsRef<Path>,
    out_path: Option<PathBuf>,
) -> eyre::Result<PathBuf> {
    let rom_path = rom_path.as_ref();

    let zspr = Zspr::open_from_file(zspr_path)?;
    let mut rom = read_rom(rom_path)?;

    zspr.patch_rom(&mut rom)?;

    let out_path = out_path.unwrap_or_else(|| rom_path.to_path_buf());

    let mut file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(&out_path)?;

    file.write_all(&rom)?;
    file.flush()?;

    log::info!("Patched {} into {}", zspr, out_path.display());

    Ok(out_path)
}

#[cfg(test)]
mod test {
    use snesgfx::constants::{PALETTE_DATA_SIZE, SPRITE_DATA_SIZE};
    use zspr::{
        rom::{ROM_PALETTE_OFFSET, ROM_SPRITE_OFFSET},
        GloveData, PaletteData, SpriteData,
    };

    use super::*;

    fn temp_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir()
            .join(format!("spritemanip-{}-{}", name, std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn extract_and_patch() {
        let dir = temp_dir("rom");

        let mut rom = vec![0u8; 0x100000];
        rom[ROM_SPRITE_OFFSET..ROM_SPRITE_OFFSET + SPRITE_DATA_SIZE].fill(0x42);
        rom[ROM_PALETTE_OFFSET..ROM_PALETTE_OFFSET + PALETTE_DATA_SIZE].fill(0x24);

        let rom_path = dir.join("alttp.sfc");
        std::fs::write(&rom_path, &rom).unwrap();

        let names = SpriteNames {
            author_name: Some("Jane Müller".to_string()),
            ..Default::default()
        };

        let zspr_path = rom2zspr(&rom_path, None, &names).unwrap();
        assert_eq!(zspr_path, dir.join("alttp.zspr"));

        let zspr = Zspr::open_from_file(&zspr_path).unwrap();
        assert_eq!(zspr.sprite_name, "alttp");
        assert_eq!(zspr.author_name_rom(), "Jane Mller");
        assert_eq!(zspr.sprite_data.get_bytes()[0], 0x42);

        // a different sprite into a copy
        let other = Zspr::new(
            SpriteData::blank(),
            PaletteData::blank(),
            GloveData([1, 2, 3, 4]),
        );
        let other_path = dir.join("other.zspr");
        other.write_to_file(&other_path).unwrap();

        let patched_path = dir.join("patched.sfc");
        patch_rom_file(&rom_path, &other_path, Some(patched_path.clone())).unwrap();

        let patched = Zspr::from_rom(&std::fs::read(&patched_path).unwrap()).unwrap();
        assert_eq!(patched.sprite_data, other.sprite_data);
        assert_eq!(patched.glove_data, GloveData([1, 2, 3, 4]));

        // source ROM untouched
        assert_eq!(std::fs::read(&rom_path).unwrap(), rom);

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn missing_rom() {
        assert!(rom2zspr("does/not/exist.sfc", None, &SpriteNames::default()).is_err());
    }
}
