use std::path::{Path, PathBuf};

use image::RgbaImage;
use snesgfx::{
    constants::{ALL_MAILS_PALETTE_SIZE, ALL_MAILS_WITH_GLOVES_SIZE},
    palette::{round_palette, Palette, Rgb},
    raster::{indexify, round_raster},
};
use zspr::{constants::ZSPR_EXTENSION, GloveData, PaletteData, SpriteData, Zspr};

use crate::{
    err,
    utils::{
        img_stuffs::{load_sheet, rgba_image_to_abgr},
        misc::sibling_path_with_suffix,
        palette_file::parse_palette_file,
    },
};

/// Names stored with a new sprite.
#[derive(Debug, Clone, Default)]
pub struct SpriteNames {
    /// `None` takes the output file name
    pub sprite_name: Option<String>,
    pub author_name: Option<String>,
    pub author_name_rom: Option<String>,
}

impl SpriteNames {
    pub fn apply(&self, zspr: &mut Zspr) {
        if let Some(sprite_name) = &self.sprite_name {
            zspr.sprite_name = sprite_name.clone();
        }

        if let Some(author_name) = &self.author_name {
            zspr.author_name = author_name.clone();
        }

        if let Some(author_name_rom) = &self.author_name_rom {
            zspr.set_author_name_rom(author_name_rom);
        }
    }
}

/// Builds a sprite from a 128x448 sheet and a 64 or 66 color list.
///
/// Sheet and colors are rounded down to multiples of 8 first. Pixels that match
/// no palette color become transparent.
pub fn png2zspr_from_image(img: &RgbaImage, colors: &[Rgb]) -> eyre::Result<Zspr> {
    if colors.len() < ALL_MAILS_PALETTE_SIZE {
        return err!(
            "palette has {} colors, need at least {}",
            colors.len(),
            ALL_MAILS_PALETTE_SIZE
        );
    }

    let colors = round_palette(&colors[..colors.len().min(ALL_MAILS_WITH_GLOVES_SIZE)]);
    let abgr = round_raster(&rgba_image_to_abgr(img)?);

    let index_map = indexify(&abgr, &colors);
    let palette = Palette::from_colors(&colors);

    let glove_data = GloveData::from_colors(&colors);

    if glove_data.is_unset() {
        log::info!("No glove colors in palette, the game's own will be used");
    }

    let mut zspr = Zspr::new(
        SpriteData::from_index_map(&index_map),
        PaletteData::from_palette(&palette),
        glove_data,
    );

    // filled in from the output path unless given
    zspr.sprite_name.clear();

    Ok(zspr)
}

/// Writes `<png stem>.zspr` next to the sheet unless `out_path` is given.
pub fn png2zspr(
    png_path: impl AsRef<Path>,
    palette_path: impl AsRef<Path>,
    out_path: Option<PathBuf>,
    names: &SpriteNames,
) -> eyre::Result<PathBuf> {
    let png_path = png_path.as_ref();

    let img = load_sheet(png_path)?;
    let colors = parse_palette_file(palette_path)?;

    let mut zspr = png2zspr_from_image(&img, &colors)?;
    names.apply(&mut zspr);

    let out_path =
        out_path.unwrap_or_else(|| sibling_path_with_suffix(png_path, "", ZSPR_EXTENSION));

    if zspr.sprite_name.is_empty() {
        zspr.set_name_from_path(&out_path);
    }

    zspr.write_to_file(&out_path)?;

    log::info!("Wrote {} to {}", zspr, out_path.display());

    Ok(out_path)
}
