use std::path::Path;

use eyre::eyre;
use image::{imageops, RgbaImage};
use rayon::prelude::*;
use snesgfx::constants::{ABGR_RASTER_SIZE, SHEET_HEIGHT, SHEET_WIDTH};

use crate::err;

// A, B, G, R <-> R, G, B, A is the same byte reversal both ways
fn swap_pixel_order(pixels: &[u8]) -> Vec<u8> {
    pixels
        .par_chunks_exact(4)
        .flat_map_iter(|pixel| [pixel[3], pixel[2], pixel[1], pixel[0]])
        .collect()
}

pub fn abgr_to_rgba_image(abgr: &[u8]) -> eyre::Result<RgbaImage> {
    if abgr.len() != ABGR_RASTER_SIZE {
        return err!(
            "raster is {} bytes, expected {}",
            abgr.len(),
            ABGR_RASTER_SIZE
        );
    }

    RgbaImage::from_raw(
        SHEET_WIDTH as u32,
        SHEET_HEIGHT as u32,
        swap_pixel_order(abgr),
    )
    .ok_or(eyre!("cannot make image from raster"))
}

pub fn rgba_image_to_abgr(img: &RgbaImage) -> eyre::Result<Vec<u8>> {
    check_sheet_dimensions(img)?;

    Ok(swap_pixel_order(img.as_raw()))
}

fn check_sheet_dimensions(img: &RgbaImage) -> eyre::Result<()> {
    let (width, height) = img.dimensions();

    if width as usize != SHEET_WIDTH || height as usize != SHEET_HEIGHT {
        return err!(
            "sprite sheet is {}x{}, expected {}x{}",
            width,
            height,
            SHEET_WIDTH,
            SHEET_HEIGHT
        );
    }

    Ok(())
}

/// Opens an image as a 128x448 RGBA sheet.
pub fn load_sheet(path: impl AsRef<Path>) -> eyre::Result<RgbaImage> {
    let path = path.as_ref();

    if !path.exists() {
        return err!("{} does not exist", path.display());
    }

    let img = image::open(path)?.into_rgba8();

    check_sheet_dimensions(&img)?;

    Ok(img)
}

pub fn save_png(img: &RgbaImage, path: impl AsRef<Path>) -> eyre::Result<()> {
    img.save_with_format(path.as_ref(), image::ImageFormat::Png)?;

    Ok(())
}

pub fn crop(img: &RgbaImage, x: u32, y: u32, width: u32, height: u32) -> RgbaImage {
    imageops::crop_imm(img, x, y, width, height).to_image()
}
