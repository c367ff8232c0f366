//! 5:5:5 palette words and the mail sub-palettes.
//!
//! Words are little-endian with red in bits 0-4, green in bits 5-9 and blue
//! in bits 10-14. Expanding a channel shifts it left by 3, packing rounds it
//! down to a multiple of 8 first.
use std::{fmt, str::FromStr};

use crate::constants::{
    ALL_MAILS_PALETTE_SIZE, GLOVE_DATA_SIZE, GLOVE_PALETTE_INDEX, MAIL_COUNT, MAIL_PALETTE_SIZE,
    PALETTE_DATA_SIZE,
};

pub type Rgb = [u8; 3];
pub type MailPalette = [Rgb; MAIL_PALETTE_SIZE];

const BLACK: Rgb = [0, 0, 0];

/// Palette the game switches to while Link is electrocuted. Never stored.
pub const ZAP_PALETTE: MailPalette = [
    [0, 0, 0],
    [0, 0, 0],
    [208, 184, 24],
    [136, 112, 248],
    [0, 0, 0],
    [208, 192, 248],
    [0, 0, 0],
    [208, 192, 248],
    [112, 88, 224],
    [136, 112, 248],
    [56, 40, 128],
    [136, 112, 248],
    [56, 40, 128],
    [72, 56, 144],
    [120, 48, 160],
    [248, 248, 248],
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mail {
    Green,
    Blue,
    Red,
    Bunny,
}

impl Mail {
    pub const ALL: [Mail; MAIL_COUNT] = [Mail::Green, Mail::Blue, Mail::Red, Mail::Bunny];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            Mail::Green => "green",
            Mail::Blue => "blue",
            Mail::Red => "red",
            Mail::Bunny => "bunny",
        }
    }
}

impl fmt::Display for Mail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Mail {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Mail::ALL
            .into_iter()
            .find(|mail| mail.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown mail `{s}`, expected green, blue, red or bunny"))
    }
}

/// Which of the two stored glove colors is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GloveLevel {
    #[default]
    None,
    Gloves,
    Mitts,
}

impl GloveLevel {
    pub const ALL: [GloveLevel; 3] = [GloveLevel::None, GloveLevel::Gloves, GloveLevel::Mitts];

    pub fn name(self) -> &'static str {
        match self {
            GloveLevel::None => "none",
            GloveLevel::Gloves => "gloves",
            GloveLevel::Mitts => "mitts",
        }
    }
}

impl fmt::Display for GloveLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for GloveLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GloveLevel::ALL
            .into_iter()
            .find(|level| level.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown glove level `{s}`, expected none, gloves or mitts"))
    }
}

#[inline]
pub fn round_channel(v: u8) -> u8 {
    (v / 8) * 8
}

#[inline]
pub fn round_color(c: Rgb) -> Rgb {
    c.map(round_channel)
}

/// Rounds every color down to what 5:5:5 can represent.
pub fn round_palette(colors: &[Rgb]) -> Vec<Rgb> {
    colors.iter().copied().map(round_color).collect()
}

#[inline]
pub fn unpack_color(word: [u8; 2]) -> Rgb {
    let color = u16::from_le_bytes(word);

    [
        ((color & 0x1F) << 3) as u8,
        (((color >> 5) & 0x1F) << 3) as u8,
        (((color >> 10) & 0x1F) << 3) as u8,
    ]
}

#[inline]
pub fn pack_color(c: Rgb) -> [u8; 2] {
    let [r, g, b] = round_color(c).map(|channel| (channel >> 3) as u16);

    ((b << 10) | (g << 5) | r).to_le_bytes()
}

/// The four mail palettes, expanded to 8 bits per channel.
///
/// Index 0 of every mail is black and stands for transparency.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    mails: [MailPalette; MAIL_COUNT],
}

impl Palette {
    /// Expands 120 bytes of palette data.
    ///
    /// Panics if `bytes` is not exactly 120 bytes.
    pub fn unpack(bytes: &[u8]) -> Self {
        assert_eq!(
            bytes.len(),
            PALETTE_DATA_SIZE,
            "palette data must be {} bytes",
            PALETTE_DATA_SIZE
        );

        let mut words = bytes.chunks_exact(2).map(|word| [word[0], word[1]]);
        let mut mails = [[BLACK; MAIL_PALETTE_SIZE]; MAIL_COUNT];

        mails.iter_mut().for_each(|mail| {
            mail.iter_mut()
                .skip(1)
                .zip(words.by_ref())
                .for_each(|(color, word)| *color = unpack_color(word))
        });

        Self { mails }
    }

    /// Builds a palette from a flat color list, mail after mail.
    ///
    /// Only the first 64 colors are read. Slot 0 of each mail is forced to black.
    /// Panics if there are fewer than 64 colors.
    pub fn from_colors(colors: &[Rgb]) -> Self {
        assert!(
            colors.len() >= ALL_MAILS_PALETTE_SIZE,
            "need at least {} colors",
            ALL_MAILS_PALETTE_SIZE
        );

        let mut mails = [[BLACK; MAIL_PALETTE_SIZE]; MAIL_COUNT];

        mails
            .iter_mut()
            .zip(colors.chunks_exact(MAIL_PALETTE_SIZE))
            .for_each(|(mail, source)| {
                mail.copy_from_slice(source);
                mail[0] = BLACK;
            });

        Self { mails }
    }

    /// Packs back into 120 bytes. Lossy below 8-bit multiples of 8.
    pub fn pack(&self) -> Vec<u8> {
        self.mails
            .iter()
            .flat_map(|mail| mail.iter().skip(1))
            .flat_map(|color| pack_color(*color))
            .collect()
    }

    pub fn mail(&self, mail: Mail) -> &MailPalette {
        &self.mails[mail.index()]
    }

    /// The 16 colors used to draw `mail`.
    ///
    /// `glove` replaces slot 13 for every mail but the bunny.
    pub fn sub_palette(&self, mail: Mail, glove: Option<Rgb>) -> MailPalette {
        let mut res = *self.mail(mail);

        res[0] = BLACK;

        if let (Some(glove), false) = (glove, mail == Mail::Bunny) {
            res[GLOVE_PALETTE_INDEX] = glove;
        }

        res
    }

    /// All 64 colors, mail after mail, for reverse lookup.
    pub fn color_table(&self) -> Vec<Rgb> {
        self.mails.iter().flatten().copied().collect()
    }
}

/// Expands the 4 glove bytes into (gloves, mitts).
pub fn unpack_glove_colors(gloves: [u8; GLOVE_DATA_SIZE]) -> [Rgb; 2] {
    [
        unpack_color([gloves[0], gloves[1]]),
        unpack_color([gloves[2], gloves[3]]),
    ]
}

pub fn pack_glove_colors(colors: [Rgb; 2]) -> [u8; GLOVE_DATA_SIZE] {
    let [a, b] = colors.map(pack_color);
    [a[0], a[1], b[0], b[1]]
}

/// Glove color shown at `level`, `None` when no gloves are worn.
pub fn glove_color(gloves: [u8; GLOVE_DATA_SIZE], level: GloveLevel) -> Option<Rgb> {
    let [power_glove, titan_mitt] = unpack_glove_colors(gloves);

    match level {
        GloveLevel::None => None,
        GloveLevel::Gloves => Some(power_glove),
        GloveLevel::Mitts => Some(titan_mitt),
    }
}
