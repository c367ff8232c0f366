//! Palette files exported by common pixel editors.
//!
//! 64 colors are the four mails in order. Two more colors, when present, are
//! the gloves and mitts colors.
use std::path::Path;

use eyre::eyre;
use nom::{
    bytes::complete::take_while_m_n,
    character::complete::{space0, space1, u8 as dec_u8},
    combinator::{all_consuming, map, map_res},
    sequence::{preceded, terminated},
    IResult, Parser,
};
use snesgfx::{
    constants::{ALL_MAILS_PALETTE_SIZE, ALL_MAILS_WITH_GLOVES_SIZE},
    palette::Rgb,
};

use crate::err;

static GIMP_HEADER: &str = "GIMP Palette";
static JASC_HEADER: &str = "JASC-PAL";
static JASC_VERSION: &str = "0100";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaletteFormat {
    /// `.gpl`
    Gimp,
    /// `.pal`, also written by Graphics Gale
    Jasc,
    /// `.txt`, one `AARRGGBB` per line
    PaintNet,
}

impl PaletteFormat {
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();

        match ext.as_str() {
            "gpl" => Some(Self::Gimp),
            "pal" => Some(Self::Jasc),
            "txt" => Some(Self::PaintNet),
            _ => None,
        }
    }
}

fn rgb_triplet(i: &str) -> IResult<&str, Rgb> {
    map(
        (
            preceded(space0, dec_u8),
            preceded(space1, dec_u8),
            preceded(space1, dec_u8),
        ),
        |(r, g, b)| [r, g, b],
    )
    .parse(i)
}

// gimp allows a color name after the numbers
fn gimp_color(i: &str) -> IResult<&str, Rgb> {
    rgb_triplet(i)
}

fn jasc_color(i: &str) -> IResult<&str, Rgb> {
    all_consuming(terminated(rgb_triplet, space0)).parse(i)
}

fn paint_net_color(i: &str) -> IResult<&str, Rgb> {
    map(
        all_consuming(map_res(
            take_while_m_n(8, 8, |c: char| c.is_ascii_hexdigit()),
            |hex: &str| u32::from_str_radix(hex, 16),
        )),
        |argb| [(argb >> 16) as u8, (argb >> 8) as u8, argb as u8],
    )
    .parse(i)
}

fn parse_line(parser: fn(&str) -> IResult<&str, Rgb>, line: &str) -> eyre::Result<Rgb> {
    parser(line)
        .map(|(_, color)| color)
        .map_err(|_| eyre!("cannot read a color from `{}`", line))
}

fn parse_gimp(s: &str) -> eyre::Result<Vec<Rgb>> {
    let mut lines = s.lines().map(str::trim);

    if lines.next() != Some(GIMP_HEADER) {
        return err!("missing `{}` header", GIMP_HEADER);
    }

    lines
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter(|line| !line.starts_with("Name:") && !line.starts_with("Columns:"))
        .map(|line| parse_line(gimp_color, line))
        .collect()
}

fn parse_jasc(s: &str) -> eyre::Result<Vec<Rgb>> {
    let mut lines = s.lines().map(str::trim).filter(|line| !line.is_empty());

    if lines.next() != Some(JASC_HEADER) {
        return err!("missing `{}` header", JASC_HEADER);
    }

    if lines.next() != Some(JASC_VERSION) {
        return err!("unsupported JASC palette version");
    }

    let Some(count) = lines.next().and_then(|line| line.parse::<usize>().ok()) else {
        return err!("missing JASC palette color count");
    };

    let colors = lines
        .take(count)
        .map(|line| parse_line(jasc_color, line))
        .collect::<eyre::Result<Vec<Rgb>>>()?;

    if colors.len() != count {
        return err!("JASC palette declares {} colors but has {}", count, colors.len());
    }

    Ok(colors)
}

fn parse_paint_net(s: &str) -> eyre::Result<Vec<Rgb>> {
    s.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with(';'))
        .map(|line| parse_line(paint_net_color, line))
        .collect()
}

/// Parses palette text and keeps at most 66 colors.
pub fn parse_palette_str(s: &str, format: PaletteFormat) -> eyre::Result<Vec<Rgb>> {
    let s = s.trim_start_matches('\u{feff}');

    let colors = match format {
        PaletteFormat::Gimp => parse_gimp(s),
        PaletteFormat::Jasc => parse_jasc(s),
        PaletteFormat::PaintNet => parse_paint_net(s),
    }?;

    if colors.len() < ALL_MAILS_PALETTE_SIZE {
        return err!(
            "palette has {} colors, need at least {}",
            colors.len(),
            ALL_MAILS_PALETTE_SIZE
        );
    }

    if colors.len() > ALL_MAILS_WITH_GLOVES_SIZE {
        log::warn!(
            "Palette has {} colors, only the first {} are used",
            colors.len(),
            ALL_MAILS_WITH_GLOVES_SIZE
        );
    }

    Ok(colors
        .into_iter()
        .take(ALL_MAILS_WITH_GLOVES_SIZE)
        .collect())
}

pub fn parse_palette_file(path: impl AsRef<Path>) -> eyre::Result<Vec<Rgb>> {
    let path = path.as_ref();

    let Some(format) = PaletteFormat::from_path(path) else {
        return err!("{} is not a .gpl, .pal or .txt palette", path.display());
    };

    let s = std::fs::read_to_string(path)?;

    parse_palette_str(&s, format)
}
