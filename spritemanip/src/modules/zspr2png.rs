use std::path::{Path, PathBuf};

use image::RgbaImage;
use snesgfx::{
    constants::SPRITE_BLOCK_SIZE,
    palette::{GloveLevel, Mail, MailPalette, ZAP_PALETTE},
    raster::rasterize,
    IndexMap,
};
use zspr::Zspr;

use crate::utils::{
    img_stuffs::{abgr_to_rgba_image, crop, save_png},
    misc::sibling_path_with_suffix,
};

const PREVIEW_SIZE: u32 = 16;
// two blocks of the head each, the first rows of the sheet
const HEAD_BLOCKS: [usize; 2] = [2, 18];

fn render(map: &IndexMap, palette: &MailPalette) -> eyre::Result<RgbaImage> {
    abgr_to_rgba_image(&rasterize(map, palette))
}

pub fn render_sheet(zspr: &Zspr, mail: Mail, glove_level: GloveLevel) -> eyre::Result<RgbaImage> {
    let palette = zspr
        .palette()
        .sub_palette(mail, zspr.glove_data.color(glove_level));

    render(&zspr.index_map(), &palette)
}

/// Sheet drawn with the electrocuted palette.
pub fn render_zap_sheet(zspr: &Zspr) -> eyre::Result<RgbaImage> {
    render(&zspr.index_map(), &ZAP_PALETTE)
}

pub fn sheet_suffix(mail: Mail, glove_level: GloveLevel) -> String {
    match (mail, glove_level) {
        (Mail::Bunny, _) | (_, GloveLevel::None) => mail.name().to_string(),
        (mail, glove_level) => format!("{}_{}", mail.name(), glove_level.name()),
    }
}

/// Every mail at every glove level, then the zap sheet.
///
/// The bunny has no gloves so it is drawn once.
pub fn render_all_mails(zspr: &Zspr) -> eyre::Result<Vec<(String, RgbaImage)>> {
    let map = zspr.index_map();
    let palette = zspr.palette();

    let mut res = Mail::ALL
        .into_iter()
        .flat_map(|mail| {
            let levels: &[GloveLevel] = if mail == Mail::Bunny {
                &[GloveLevel::None]
            } else {
                &GloveLevel::ALL
            };

            levels.iter().map(move |level| (mail, *level))
        })
        .map(|(mail, level)| {
            let sub_palette = palette.sub_palette(mail, zspr.glove_data.color(level));

            render(&map, &sub_palette).map(|img| (sheet_suffix(mail, level), img))
        })
        .collect::<eyre::Result<Vec<(String, RgbaImage)>>>()?;

    res.push(("zap".to_string(), render(&map, &ZAP_PALETTE)?));

    Ok(res)
}

/// 16x16 crop of the green mail sheet showing the head, or the first
/// standing pose when the head blocks are empty.
pub fn sprite_preview(zspr: &Zspr) -> eyre::Result<RgbaImage> {
    let bytes = zspr.sprite_data.get_bytes();

    let empty_head = HEAD_BLOCKS.iter().all(|block| {
        let start = block * SPRITE_BLOCK_SIZE;

        bytes[start..start + SPRITE_BLOCK_SIZE * 2]
            .iter()
            .all(|b| *b == 0)
    });

    let (x, y) = if empty_head { (48, 16) } else { (16, 0) };

    let sheet = render_sheet(zspr, Mail::Green, GloveLevel::None)?;

    Ok(crop(&sheet, x, y, PREVIEW_SIZE, PREVIEW_SIZE))
}

/// Writes one sheet, `<zspr stem>_<mail>[_<gloves>].png` by default.
pub fn zspr2png(
    zspr_path: impl AsRef<Path>,
    mail: Mail,
    glove_level: GloveLevel,
    out_path: Option<PathBuf>,
) -> eyre::Result<PathBuf> {
    let zspr_path = zspr_path.as_ref();
    let zspr = Zspr::open_from_file(zspr_path)?;

    let out_path = out_path.unwrap_or_else(|| {
        sibling_path_with_suffix(zspr_path, &sheet_suffix(mail, glove_level), "png")
    });

    save_png(&render_sheet(&zspr, mail, glove_level)?, &out_path)?;

    log::info!("Exported {} to {}", zspr, out_path.display());

    Ok(out_path)
}

/// Writes every sheet of [`render_all_mails`] next to the sprite.
pub fn zspr2png_all_mails(zspr_path: impl AsRef<Path>) -> eyre::Result<Vec<PathBuf>> {
    let zspr_path = zspr_path.as_ref();
    let zspr = Zspr::open_from_file(zspr_path)?;

    render_all_mails(&zspr)?
        .into_iter()
        .map(|(suffix, img)| {
            let out_path = sibling_path_with_suffix(zspr_path, &suffix, "png");
            save_png(&img, &out_path)?;

            log::debug!("Exported {}", out_path.display());

            Ok(out_path)
        })
        .collect()
}

pub fn zspr_preview(
    zspr_path: impl AsRef<Path>,
    out_path: Option<PathBuf>,
) -> eyre::Result<PathBuf> {
    let zspr_path = zspr_path.as_ref();
    let zspr = Zspr::open_from_file(zspr_path)?;

    let out_path =
        out_path.unwrap_or_else(|| sibling_path_with_suffix(zspr_path, "preview", "png"));

    save_png(&sprite_preview(&zspr)?, &out_path)?;

    Ok(out_path)
}

#[cfg(test)]
mod test {
    use snesgfx::{
        constants::{GLOVE_PALETTE_INDEX, PALETTE_DATA_SIZE},
        palette::Rgb,
    };
    use zspr::{GloveData, PaletteData, SpriteData};

    use super::*;

    fn filled_zspr(index: u8) -> Zspr {
        let mut map = IndexMap::new();
        (0..128).for_each(|x| (0..448).for_each(|y| map.set(x, y, index)));

        let palette = (0..PALETTE_DATA_SIZE).map(|i| i as u8).collect::<Vec<u8>>();

        Zspr::new(
            SpriteData::from_index_map(&map),
            PaletteData::new(palette).unwrap(),
            GloveData::vanilla(),
        )
    }

    fn rgb_at(img: &RgbaImage, x: u32, y: u32) -> Rgb {
        let [r, g, b, _] = img.get_pixel(x, y).0;
        [r, g, b]
    }

    #[test]
    fn glove_colors_replace_slot() {
        let zspr = filled_zspr(GLOVE_PALETTE_INDEX as u8);

        let plain = render_sheet(&zspr, Mail::Red, GloveLevel::None).unwrap();
        let gloves = render_sheet(&zspr, Mail::Red, GloveLevel::Gloves).unwrap();
        let mitts = render_sheet(&zspr, Mail::Red, GloveLevel::Mitts).unwrap();

        assert_eq!(
            rgb_at(&plain, 3, 3),
            zspr.palette().mail(Mail::Red)[GLOVE_PALETTE_INDEX]
        );
        assert_eq!(rgb_at(&gloves, 3, 3), [176, 184, 160]);
        assert_eq!(rgb_at(&mitts, 3, 3), [176, 216, 0]);
    }

    #[test]
    fn all_mails() {
        let zspr = filled_zspr(GLOVE_PALETTE_INDEX as u8);

        let sheets = render_all_mails(&zspr).unwrap();
        let names = sheets
            .iter()
            .map(|(name, _)| name.as_str())
            .collect::<Vec<&str>>();

        assert_eq!(
            names,
            [
                "green",
                "green_gloves",
                "green_mitts",
                "blue",
                "blue_gloves",
                "blue_mitts",
                "red",
                "red_gloves",
                "red_mitts",
                "bunny",
                "zap"
            ]
        );

        let (_, bunny) = &sheets[9];
        assert_eq!(
            rgb_at(bunny, 0, 0),
            zspr.palette().mail(Mail::Bunny)[GLOVE_PALETTE_INDEX]
        );

        let (_, zap) = &sheets[10];
        assert_eq!(rgb_at(zap, 0, 0), ZAP_PALETTE[GLOVE_PALETTE_INDEX]);
    }

    #[test]
    fn transparent_background() {
        let zspr = filled_zspr(0);

        let sheet = render_sheet(&zspr, Mail::Green, GloveLevel::Mitts).unwrap();

        assert_eq!(sheet.get_pixel(10, 10).0, [0, 0, 0, 0]);
    }

    #[test]
    fn preview_position() {
        let mut map = IndexMap::new();
        // only the standing pose is drawn
        map.set(48, 16, 1);

        let zspr = Zspr::new(
            SpriteData::from_index_map(&map),
            PaletteData::blank(),
            GloveData::default(),
        );

        let preview = sprite_preview(&zspr).unwrap();

        assert_eq!(preview.dimensions(), (16, 16));
        assert_eq!(preview.get_pixel(0, 0).0[3], 255);
        assert_eq!(preview.get_pixel(1, 0).0[3], 0);

        // something in the head block moves the preview back to the head
        map.set(16, 0, 2);
        let zspr = Zspr::new(
            SpriteData::from_index_map(&map),
            PaletteData::blank(),
            GloveData::default(),
        );

        let preview = sprite_preview(&zspr).unwrap();
        assert_eq!(preview.get_pixel(0, 0).0[3], 255);
        assert_eq!(preview.get_pixel(0, 1).0[3], 0);
    }

    #[test]
    fn suffixes() {
        assert_eq!(sheet_suffix(Mail::Blue, GloveLevel::Mitts), "blue_mitts");
        assert_eq!(sheet_suffix(Mail::Bunny, GloveLevel::Mitts), "bunny");
        assert_eq!(sheet_suffix(Mail::Green, GloveLevel::None), "green");
    }
}
