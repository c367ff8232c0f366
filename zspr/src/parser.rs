use nom::{
    bytes::complete::{tag, take, take_till},
    combinator::map,
    multi::many_till,
    number::complete::{le_u16, le_u32, le_u8},
    sequence::terminated,
    IResult as _IResult, Parser,
};
use snesgfx::constants::{GLOVE_DATA_SIZE, PALETTE_DATA_SIZE, SPRITE_DATA_SIZE};

use crate::{
    constants::{
        AUTHOR_NAME_ROM_MAX_LENGTH, NAME_OFFSET, PALETTE_BLOCK_SIZE, PLAYER_SPRITE_TYPE, RESERVED_SIZE, ZSPR_FLAG,
    },
    error::ZsprError,
    types::{GloveData, PaletteData, SpriteData, Zspr, ZsprHeader},
    utils::verify_checksum,
};

pub type IResult<'a, T> = _IResult<&'a [u8], T>;

pub fn parse_header(i: &'_ [u8]) -> IResult<'_, ZsprHeader> {
    map(
        (
            map(take(4usize), |flag: &[u8]| [flag[0], flag[1], flag[2], flag[3]]),
            le_u8,
            le_u16,
            le_u16,
            le_u32,
            le_u16,
            le_u32,
            le_u16,
            le_u16,
            map(take(RESERVED_SIZE), |reserved: &[u8]| {
                let mut res = [0u8; RESERVED_SIZE];
                res.copy_from_slice(reserved);
                res
            }),
        ),
        |(
            flag,
            version,
            checksum,
            checksum_complement,
            sprite_offset,
            sprite_size,
            palette_offset,
            palette_size,
            sprite_type,
            reserved,
        )| ZsprHeader {
            flag,
            version,
            checksum,
            checksum_complement,
            sprite_offset,
            sprite_size,
            palette_offset,
            palette_size,
            sprite_type,
            reserved,
        },
    )
    .parse(i)
}

/// UTF-16LE code units up to and including a zero unit.
pub fn parse_utf16_nul(i: &'_ [u8]) -> IResult<'_, String> {
    map(many_till(le_u16, tag(&[0u8, 0u8][..])), |(units, _)| {
        String::from_utf16_lossy(&units)
    })
    .parse(i)
}

/// One byte per char up to and including a zero byte.
pub fn parse_latin1_nul(i: &'_ [u8]) -> IResult<'_, String> {
    map(
        terminated(take_till(|b: u8| b == 0), tag(&[0u8][..])),
        |bytes: &[u8]| bytes.iter().map(|b| *b as char).collect::<String>(),
    )
    .parse(i)
}

/// Sprite name, author name, author name for the ROM.
pub fn parse_names(i: &'_ [u8]) -> IResult<'_, (String, String, String)> {
    (parse_utf16_nul, parse_utf16_nul, parse_latin1_nul).parse(i)
}

fn block<'a>(
    i: &'a [u8],
    offset: usize,
    length: usize,
    what: &'static str,
) -> Result<&'a [u8], ZsprError> {
    offset
        .checked_add(length)
        .and_then(|end| i.get(offset..end))
        .ok_or(ZsprError::TruncatedData {
            what,
            length: i.len(),
        })
}

/// Flag, then checksum, then sprite type. Blocks are located through the
/// stored offsets and anything after them is ignored.
pub fn parse_zspr(i: &[u8]) -> Result<Zspr, ZsprError> {
    let flag = block(i, 0, ZSPR_FLAG.len(), "flag")?;

    if flag != ZSPR_FLAG {
        return Err(ZsprError::FormatMismatch {
            flag: flag.to_vec(),
        });
    }

    let (_, header) = parse_header(i).map_err(|_| ZsprError::TruncatedData {
        what: "header",
        length: i.len(),
    })?;

    verify_checksum(i)?;

    if header.sprite_type != PLAYER_SPRITE_TYPE {
        return Err(ZsprError::UnsupportedVariant {
            sprite_type: header.sprite_type,
        });
    }

    let (_, (sprite_name, author_name, author_name_rom)) =
        parse_names(&i[NAME_OFFSET..]).map_err(|_| ZsprError::TruncatedData {
            what: "sprite and author names",
            length: i.len(),
        })?;

    let sprite_offset = header.sprite_offset as usize;
    let palette_offset = header.palette_offset as usize;

    let sprite_data = block(i, sprite_offset, SPRITE_DATA_SIZE, "sprite data")?;
    let palette_data = block(i, palette_offset, PALETTE_DATA_SIZE, "palette data")?;

    // files written before gloves were part of the palette block
    let glove_data = if header.palette_size as usize >= PALETTE_BLOCK_SIZE {
        let gloves = block(
            i,
            palette_offset + PALETTE_DATA_SIZE,
            GLOVE_DATA_SIZE,
            "glove data",
        )?;

        GloveData([gloves[0], gloves[1], gloves[2], gloves[3]])
    } else {
        log::warn!(
            "Palette block is {} bytes, no glove colors stored",
            header.palette_size
        );

        GloveData::default()
    };

    log::debug!(
        "Parsed ZSPR '{}' by {} (sprite at {:#x}, palette at {:#x})",
        sprite_name,
        author_name,
        sprite_offset,
        palette_offset
    );

    Ok(Zspr {
        header,
        sprite_name,
        author_name,
        // kept as stored, one byte per char
        author_name_rom: author_name_rom
            .chars()
            .take(AUTHOR_NAME_ROM_MAX_LENGTH)
            .collect(),
        sprite_data: SpriteData::new(sprite_data)?,
        palette_data: PaletteData::new(palette_data)?,
        glove_data,
    })
}
