//! Picture graphic raster decoding
//!
//! Rows are byte aligned. 1-bit data packs eight pixels per byte with bit 7
//! leftmost, 4-bit data two palette indices per byte with the high nibble
//! first, 8-bit data one index per byte.

use crate::error::{PoolError, Result};
use crate::objects::{PictureFormat, PictureGraphic};
use crate::types::options::PictureOptions;
use crate::types::{Rgb, PALETTE};
use image::RgbImage;

/// Decoded picture, 8-bit RGB
pub type RasterImage = RgbImage;

/// Bytes per row for `format` at `width` pixels
pub fn row_stride(format: PictureFormat, width: u32) -> Result<usize> {
    let width = width as usize;
    match format {
        PictureFormat::Monochrome => Ok(width.div_ceil(8)),
        PictureFormat::FourBit => Ok(width.div_ceil(2)),
        PictureFormat::EightBit => Ok(width),
        PictureFormat::Unknown(code) => Err(PoolError::UnsupportedPictureFormat(format!(
            "format code {code}"
        ))),
    }
}

/// Palette index of pixel `x` within `row`
fn pixel_index(format: PictureFormat, row: &[u8], x: usize) -> Option<u8> {
    match format {
        PictureFormat::Monochrome => {
            let bit = 7 - (x % 8);
            Some((row[x / 8] >> bit) & 0x01)
        }
        PictureFormat::FourBit => {
            let byte = row[x / 2];
            Some(if x % 2 == 0 { byte >> 4 } else { byte & 0x0F })
        }
        PictureFormat::EightBit => Some(row[x]),
        PictureFormat::Unknown(_) => None,
    }
}

/// Decode indexed pixel data into an RGB image.
///
/// 1-bit pixels are black when set and white when clear. 4-bit and 8-bit
/// indices go through `palette`, clamped to its last entry.
pub fn decode_raster(
    format: PictureFormat,
    width: u32,
    height: u32,
    palette: &[Rgb],
    data: &[u8],
) -> Result<RgbImage> {
    let stride = row_stride(format, width)?;
    let needed = stride * height as usize;
    if data.len() < needed {
        return Err(PoolError::DataCorruption(format!(
            "{} picture of {}x{} needs {} bytes, found {}",
            format.name(),
            width,
            height,
            needed,
            data.len()
        )));
    }
    let last = palette.len().checked_sub(1).ok_or_else(|| {
        PoolError::DataCorruption("empty palette".to_string())
    })?;

    let mut image = RgbImage::new(width, height);
    if stride == 0 {
        return Ok(image);
    }
    for (y, row) in data.chunks(stride).take(height as usize).enumerate() {
        for x in 0..width as usize {
            let index = pixel_index(format, row, x).unwrap_or(0);
            let colour = match format {
                PictureFormat::Monochrome if index == 1 => Rgb::BLACK,
                PictureFormat::Monochrome => Rgb::WHITE,
                _ => palette[(index as usize).min(last)],
            };
            image.put_pixel(x as u32, y as u32, image::Rgb([colour.r, colour.g, colour.b]));
        }
    }

    Ok(image)
}

/// Decode a picture graphic with the default palette.
///
/// Transparent and run-length encoded pictures are refused rather than
/// decoded wrongly.
pub fn decode_picture(picture: &PictureGraphic) -> Result<RasterImage> {
    if let PictureFormat::Unknown(code) = picture.format {
        return Err(PoolError::UnsupportedPictureFormat(format!(
            "format code {code}"
        )));
    }
    if picture.options.contains(PictureOptions::RUN_LENGTH_ENCODED) {
        return Err(PoolError::UnsupportedPictureFormat(
            "run-length encoded data".to_string(),
        ));
    }
    if picture.options.contains(PictureOptions::TRANSPARENT) {
        return Err(PoolError::UnsupportedPictureFormat(
            "transparency colour".to_string(),
        ));
    }
    decode_raster(
        picture.format,
        picture.actual_width as u32,
        picture.actual_height as u32,
        PALETTE.as_slice(),
        &picture.data,
    )
}
