//! ZSPR v1.0 sprite container
//!
//! Layout, little-endian:
//!
//! | offset | size | field                                   |
//! |--------|------|-----------------------------------------|
//! | 0      | 4    | `ZSPR`                                  |
//! | 4      | 1    | version                                 |
//! | 5      | 4    | checksum, then its complement           |
//! | 9      | 4    | sprite data offset                      |
//! | 13     | 2    | sprite data size (28672)                |
//! | 15     | 4    | palette offset                          |
//! | 19     | 2    | palette size (124, gloves included)     |
//! | 21     | 2    | sprite type (1 for the player)          |
//! | 23     | 6    | reserved                                |
//! | 29     | ...  | sprite name, UTF-16LE, NUL terminated   |
//! | ...    | ...  | author name, UTF-16LE, NUL terminated   |
//! | ...    | ...  | author name for the ROM, NUL terminated |
//! | ...    | ...  | sprite data, palette, gloves            |
pub mod constants;
pub mod error;
mod parser;
pub mod rom;
mod types;
pub mod utils;
mod writer;

pub use error::ZsprError;
pub use parser::parse_zspr;
pub use types::*;

#[cfg(test)]
mod test {
    use snesgfx::constants::{PALETTE_DATA_SIZE, SPRITE_DATA_SIZE, VANILLA_GLOVE_COLORS};

    use crate::{
        constants::{
            CHECKSUM_OFFSET, CHECKSUM_SIZE, NAME_OFFSET, PALETTE_BLOCK_SIZE, PALETTE_SIZE_OFFSET,
            SPRITE_TYPE_OFFSET,
        },
        utils::seal_checksum,
        GloveData, PaletteData, SpriteData, Zspr, ZsprError,
    };

    fn patterned_zspr() -> Zspr {
        let sprite = (0..SPRITE_DATA_SIZE)
            .map(|i| (i % 253) as u8)
            .collect::<Vec<u8>>();
        let palette = (0..PALETTE_DATA_SIZE)
            .map(|i| (i * 3) as u8)
            .collect::<Vec<u8>>();

        Zspr::new(
            SpriteData::new(sprite).unwrap(),
            PaletteData::new(palette).unwrap(),
            GloveData([0x12, 0x34, 0x56, 0x07]),
        )
        .with_names("Link", "Nintendo")
    }

    #[test]
    fn blank_sprite_defaults() {
        let zspr = Zspr::new(
            SpriteData::blank(),
            PaletteData::blank(),
            GloveData::default(),
        );

        let bytes = zspr.write_to_bytes();
        let parsed = Zspr::open_from_bytes(&bytes).unwrap();

        assert_eq!(parsed.header.sprite_type, 0x0001);
        assert_eq!(parsed.header.sprite_size as usize, SPRITE_DATA_SIZE);
        assert_eq!(parsed.header.palette_size as usize, PALETTE_BLOCK_SIZE);
        assert_eq!(parsed.header.version, 1);
        assert_eq!(parsed.glove_data.0, VANILLA_GLOVE_COLORS);
        assert_eq!(parsed.sprite_data, SpriteData::blank());
        assert_eq!(parsed.palette_data, PaletteData::blank());
        assert_eq!(parsed.to_string(), "'Untitled' by Unknown");
    }

    #[test]
    fn round_trip() {
        let zspr = patterned_zspr();

        let bytes = zspr.write_to_bytes();
        let parsed = Zspr::open_from_bytes(&bytes).unwrap();

        assert_eq!(parsed.sprite_name, "Link");
        assert_eq!(parsed.author_name, "Nintendo");
        assert_eq!(parsed.author_name_rom(), "Nintendo");
        assert_eq!(parsed.sprite_data, zspr.sprite_data);
        assert_eq!(parsed.palette_data, zspr.palette_data);
        assert_eq!(parsed.glove_data, zspr.glove_data);

        // serializing again gives the same bytes
        assert_eq!(parsed.write_to_bytes(), bytes);
    }

    #[test]
    fn offsets_follow_names() {
        let bytes = patterned_zspr().write_to_bytes();
        let parsed = Zspr::open_from_bytes(&bytes).unwrap();

        // "Link\0" and "Nintendo\0" in UTF-16, "Nintendo\0" in ASCII
        let sprite_offset = NAME_OFFSET + 5 * 2 + 9 * 2 + 9;

        assert_eq!(parsed.header.sprite_offset as usize, sprite_offset);
        assert_eq!(
            parsed.header.palette_offset as usize,
            sprite_offset + SPRITE_DATA_SIZE
        );
        assert_eq!(bytes.len(), sprite_offset + SPRITE_DATA_SIZE + PALETTE_BLOCK_SIZE);
        assert_eq!(&bytes[9..13], &(sprite_offset as u32).to_le_bytes());
    }

    #[test]
    fn unicode_author() {
        let zspr = patterned_zspr().with_names("リンク", "Jane Müller");

        let parsed = Zspr::open_from_bytes(&zspr.write_to_bytes()).unwrap();

        assert_eq!(parsed.sprite_name, "リンク");
        assert_eq!(parsed.author_name, "Jane Müller");
        assert_eq!(parsed.author_name_rom(), "Jane Mller");
    }

    #[test]
    fn long_rom_author_truncated() {
        let mut zspr = patterned_zspr().with_names("Link", "An Extremely Long Author Name");
        zspr.set_author_name_rom("");

        let parsed = Zspr::open_from_bytes(&zspr.write_to_bytes()).unwrap();

        assert_eq!(parsed.author_name, "An Extremely Long Author Name");
        assert_eq!(parsed.author_name_rom(), "An Extremely Long Au");

        zspr.set_author_name_rom("Émile");
        assert_eq!(zspr.author_name_rom(), "mile");
    }

    #[test]
    fn stored_rom_author_kept() {
        let mut bytes = patterned_zspr()
            .with_names("Link", "Xmile")
            .write_to_bytes();

        // after "Link\0" and "Xmile\0" in UTF-16
        let rom_name_offset = NAME_OFFSET + 5 * 2 + 6 * 2;
        assert_eq!(bytes[rom_name_offset], b'X');

        bytes[rom_name_offset] = 0xC9;
        seal_checksum(&mut bytes);

        let parsed = Zspr::open_from_bytes(&bytes).unwrap();

        assert_eq!(parsed.author_name_rom(), "Émile");
        assert_eq!(parsed.write_to_bytes(), bytes);
    }

    #[test]
    fn non_player_sprite() {
        let mut bytes = patterned_zspr().write_to_bytes();
        bytes[SPRITE_TYPE_OFFSET] = 0x02;
        seal_checksum(&mut bytes);

        let res = Zspr::open_from_bytes(&bytes);

        assert!(matches!(
            res,
            Err(ZsprError::UnsupportedVariant { sprite_type: 0x0002 })
        ));
    }

    #[test]
    fn any_flipped_byte_fails_checksum() {
        let bytes = patterned_zspr().write_to_bytes();
        let checksum_field = CHECKSUM_OFFSET..CHECKSUM_OFFSET + CHECKSUM_SIZE;

        // whole header and names, then a stride through the data blocks
        let positions = (4..120)
            .chain((120..bytes.len()).step_by(97))
            .chain([bytes.len() - 1])
            .filter(|position| !checksum_field.contains(position));

        for position in positions {
            let mut corrupted = bytes.clone();
            corrupted[position] ^= 0x5A;

            let res = Zspr::open_from_bytes(&corrupted);

            assert!(
                matches!(res, Err(ZsprError::IntegrityFailure { .. })),
                "byte {position} flipped but got {res:?}"
            );
        }
    }

    #[test]
    fn wrong_flag() {
        let mut bytes = patterned_zspr().write_to_bytes();
        bytes[0..4].copy_from_slice(b"SPR\x00");

        assert!(matches!(
            Zspr::open_from_bytes(&bytes),
            Err(ZsprError::FormatMismatch { .. })
        ));
        assert!(matches!(
            Zspr::open_from_bytes(b"ZS"),
            Err(ZsprError::TruncatedData { .. })
        ));
    }

    #[test]
    fn truncated_file() {
        let bytes = patterned_zspr().write_to_bytes();

        // cut inside the sprite data and reseal so only the length is wrong
        let mut short = bytes[..NAME_OFFSET + 100].to_vec();
        seal_checksum(&mut short);

        assert!(matches!(
            Zspr::open_from_bytes(&short),
            Err(ZsprError::TruncatedData {
                what: "sprite data",
                ..
            })
        ));

        let mut header_only = bytes[..NAME_OFFSET].to_vec();
        seal_checksum(&mut header_only);

        assert!(matches!(
            Zspr::open_from_bytes(&header_only),
            Err(ZsprError::TruncatedData { .. })
        ));
    }

    #[test]
    fn trailing_bytes_ignored() {
        let zspr = patterned_zspr();
        let mut bytes = zspr.write_to_bytes();
        bytes.extend_from_slice(&[0xDE, 0xAD]);
        seal_checksum(&mut bytes);

        let parsed = Zspr::open_from_bytes(&bytes).unwrap();

        assert_eq!(parsed.sprite_data, zspr.sprite_data);
        assert_eq!(parsed.glove_data, zspr.glove_data);
    }

    #[test]
    fn old_palette_block_without_gloves() {
        let mut bytes = patterned_zspr().write_to_bytes();
        bytes[PALETTE_SIZE_OFFSET..PALETTE_SIZE_OFFSET + 2]
            .copy_from_slice(&(PALETTE_DATA_SIZE as u16).to_le_bytes());
        bytes.truncate(bytes.len() - 4);
        seal_checksum(&mut bytes);

        let parsed = Zspr::open_from_bytes(&bytes).unwrap();

        assert!(parsed.glove_data.is_unset());
    }

    #[test]
    fn size_checked_data() {
        assert!(SpriteData::new(vec![0; 10]).is_err());
        assert!(PaletteData::new(vec![0; PALETTE_DATA_SIZE + 4]).is_err());
    }

    #[test]
    fn file_extension_checked() {
        let zspr = patterned_zspr();
        let res = zspr.write_to_file(std::env::temp_dir().join("link.spr"));

        assert!(matches!(res, Err(ZsprError::WrongExtension { .. })));
        assert!(matches!(
            Zspr::open_from_file("link.png"),
            Err(ZsprError::WrongExtension { .. })
        ));
    }

    #[test]
    fn file_round_trip_names_from_path() {
        let mut zspr = patterned_zspr();
        zspr.sprite_name = String::new();

        let path = std::env::temp_dir().join(format!("zspr-test-{}.zspr", std::process::id()));
        zspr.write_to_file(&path).unwrap();

        let parsed = Zspr::open_from_file(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(parsed.sprite_name, format!("zspr-test-{}", std::process::id()));
        assert_eq!(parsed.sprite_data, zspr.sprite_data);
    }
}
