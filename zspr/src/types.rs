use std::{
    fmt,
    path::{Path, PathBuf},
};

use snesgfx::{
    bitplane,
    constants::{
        ALL_MAILS_WITH_GLOVES_SIZE, GLOVE_DATA_SIZE, PALETTE_DATA_SIZE, SPRITE_DATA_SIZE,
        VANILLA_GLOVE_COLORS,
    },
    palette::{glove_color, pack_glove_colors, GloveLevel, Palette, Rgb},
    IndexMap,
};

use crate::{
    constants::{
        DEFAULT_AUTHOR_NAME, DEFAULT_SPRITE_NAME, PALETTE_BLOCK_SIZE, PLAYER_SPRITE_TYPE,
        RESERVED_SIZE, ZSPR_FLAG, ZSPR_VERSION,
    },
    error::ZsprError,
    parser::parse_zspr,
    utils::{name_from_path, rom_name},
};

/// Fixed part of a ZSPR file as found on disk.
///
/// Offsets and checksum are recomputed on every write, so these values only
/// describe the file a [`Zspr`] was parsed from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZsprHeader {
    pub flag: [u8; 4],
    pub version: u8,
    pub checksum: u16,
    pub checksum_complement: u16,
    pub sprite_offset: u32,
    pub sprite_size: u16,
    pub palette_offset: u32,
    pub palette_size: u16,
    pub sprite_type: u16,
    pub reserved: [u8; RESERVED_SIZE],
}

impl ZsprHeader {
    pub fn new() -> Self {
        Self {
            flag: ZSPR_FLAG,
            version: ZSPR_VERSION,
            checksum: 0,
            checksum_complement: 0xFFFF,
            sprite_offset: 0,
            sprite_size: SPRITE_DATA_SIZE as u16,
            palette_offset: 0,
            palette_size: PALETTE_BLOCK_SIZE as u16,
            sprite_type: PLAYER_SPRITE_TYPE,
            reserved: [0; RESERVED_SIZE],
        }
    }
}

impl Default for ZsprHeader {
    fn default() -> Self {
        Self::new()
    }
}

/// 4BPP sprite sheet, always 28672 bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpriteData(Vec<u8>);

impl SpriteData {
    pub fn new(bytes: impl Into<Vec<u8>>) -> Result<Self, ZsprError> {
        let bytes = bytes.into();

        if bytes.len() != SPRITE_DATA_SIZE {
            return Err(ZsprError::TruncatedData {
                what: "sprite data",
                length: bytes.len(),
            });
        }

        Ok(Self(bytes))
    }

    pub fn blank() -> Self {
        Self(vec![0; SPRITE_DATA_SIZE])
    }

    pub fn from_index_map(map: &IndexMap) -> Self {
        Self(bitplane::encode(map))
    }

    pub fn get_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn to_index_map(&self) -> IndexMap {
        bitplane::decode(&self.0)
    }
}

/// Packed 5:5:5 mail palettes, always 120 bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaletteData(Vec<u8>);

impl PaletteData {
    pub fn new(bytes: impl Into<Vec<u8>>) -> Result<Self, ZsprError> {
        let bytes = bytes.into();

        if bytes.len() != PALETTE_DATA_SIZE {
            return Err(ZsprError::TruncatedData {
                what: "palette data",
                length: bytes.len(),
            });
        }

        Ok(Self(bytes))
    }

    pub fn blank() -> Self {
        Self(vec![0; PALETTE_DATA_SIZE])
    }

    pub fn from_palette(palette: &Palette) -> Self {
        Self(palette.pack())
    }

    pub fn get_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn to_palette(&self) -> Palette {
        Palette::unpack(&self.0)
    }
}

/// Gloves and mitts colors. All zero means the game's own colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GloveData(pub [u8; GLOVE_DATA_SIZE]);

impl GloveData {
    pub fn vanilla() -> Self {
        Self(VANILLA_GLOVE_COLORS)
    }

    pub fn is_unset(&self) -> bool {
        self.0.iter().all(|b| *b == 0)
    }

    pub fn or_vanilla(self) -> Self {
        if self.is_unset() {
            Self::vanilla()
        } else {
            self
        }
    }

    /// Reads the two trailing colors of a 66 color list. Shorter lists have no
    /// glove colors and give the unset value.
    pub fn from_colors(colors: &[Rgb]) -> Self {
        if colors.len() < ALL_MAILS_WITH_GLOVES_SIZE {
            return Self::default();
        }

        let start = ALL_MAILS_WITH_GLOVES_SIZE - 2;

        Self(pack_glove_colors([colors[start], colors[start + 1]]))
    }

    pub fn color(&self, level: GloveLevel) -> Option<Rgb> {
        glove_color(self.or_vanilla().0, level)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Zspr {
    pub header: ZsprHeader,
    pub sprite_name: String,
    pub author_name: String,
    /// Empty means derived from `author_name`.
    pub(crate) author_name_rom: String,
    pub sprite_data: SpriteData,
    pub palette_data: PaletteData,
    pub glove_data: GloveData,
}

impl Zspr {
    pub fn new(sprite_data: SpriteData, palette_data: PaletteData, glove_data: GloveData) -> Self {
        Self {
            header: ZsprHeader::new(),
            sprite_name: DEFAULT_SPRITE_NAME.to_string(),
            author_name: DEFAULT_AUTHOR_NAME.to_string(),
            author_name_rom: String::new(),
            sprite_data,
            palette_data,
            glove_data,
        }
    }

    pub fn with_names(
        mut self,
        sprite_name: impl Into<String>,
        author_name: impl Into<String>,
    ) -> Self {
        self.sprite_name = sprite_name.into();
        self.author_name = author_name.into();
        self
    }

    pub fn open_from_bytes(i: &[u8]) -> Result<Self, ZsprError> {
        parse_zspr(i)
    }

    pub fn open_from_file(path: impl AsRef<Path>) -> Result<Self, ZsprError> {
        let path = path.as_ref();

        check_extension(path)?;

        let bytes = std::fs::read(path)?;

        Self::open_from_bytes(&bytes)
    }

    /// Name written to the ROM, at most 20 characters. Derived names are
    /// ASCII only, names read from a file are kept as stored.
    pub fn author_name_rom(&self) -> String {
        if self.author_name_rom.is_empty() {
            rom_name(&self.author_name)
        } else {
            self.author_name_rom.clone()
        }
    }

    /// Non-ASCII characters are dropped and the result is capped at 20
    /// characters. An empty name falls back to the author name.
    pub fn set_author_name_rom(&mut self, s: &str) {
        self.author_name_rom = rom_name(s);
    }

    /// Uses the file stem, `foo/link.zspr` becomes `link`.
    pub fn set_name_from_path(&mut self, path: impl AsRef<Path>) {
        if let Some(name) = name_from_path(path) {
            self.sprite_name = name;
        }
    }

    pub fn index_map(&self) -> IndexMap {
        self.sprite_data.to_index_map()
    }

    pub fn palette(&self) -> Palette {
        self.palette_data.to_palette()
    }
}

impl fmt::Display for Zspr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{}' by {}", self.sprite_name, self.author_name)
    }
}

pub(crate) fn check_extension(path: &Path) -> Result<(), ZsprError> {
    if crate::utils::has_zspr_extension(path) {
        Ok(())
    } else {
        Err(ZsprError::WrongExtension {
            path: PathBuf::from(path),
        })
    }
}
