//! PNG output: tight bounding box and physical resolution
//!
//! Charts are rendered onto a fixed canvas and then cropped to the painted
//! region plus a small white margin before encoding. The encoder writes a
//! pHYs chunk so viewers and print pipelines pick up the configured DPI.

use png::{BitDepth, ColorType, Encoder, PixelDimensions, Unit};

use crate::config::ChartStyle;
use crate::error::{ImpactError, ImpactResult};

const WHITE: [u8; 3] = [255, 255, 255];
const METERS_PER_INCH: f64 = 0.0254;

/// DPI to PNG pixels-per-meter (300 dpi → 11811)
pub fn pixels_per_meter(dpi: u32) -> u32 {
    (f64::from(dpi) / METERS_PER_INCH).round() as u32
}

/// Crop an RGB buffer to its non-white bounding box, padded with white
///
/// Returns the cropped pixels and their dimensions. A blank canvas is
/// returned unchanged. `pixels` must hold exactly `width * height * 3` bytes.
pub fn crop_to_content(
    pixels: &[u8],
    width: u32,
    height: u32,
    padding: u32,
) -> ImpactResult<(Vec<u8>, u32, u32)> {
    let (w, h) = (width as usize, height as usize);
    let expected = w * h * 3;
    if pixels.len() != expected {
        return Err(ImpactError::PixelBuffer { width, height, expected, actual: pixels.len() });
    }
    let mut bounds: Option<(usize, usize, usize, usize)> = None;

    for y in 0..h {
        for x in 0..w {
            let i = (y * w + x) * 3;
            if pixels[i..i + 3] != WHITE {
                bounds = Some(match bounds {
                    None => (x, y, x, y),
                    Some((x0, y0, x1, y1)) => (x0.min(x), y0.min(y), x1.max(x), y1.max(y)),
                });
            }
        }
    }

    let Some((x0, y0, x1, y1)) = bounds else {
        return Ok((pixels.to_vec(), width, height));
    };

    let pad = padding as usize;
    let content_w = x1 - x0 + 1;
    let content_h = y1 - y0 + 1;
    let out_w = content_w + 2 * pad;
    let out_h = content_h + 2 * pad;

    let mut out = vec![255u8; out_w * out_h * 3];
    for row in 0..content_h {
        let src = ((y0 + row) * w + x0) * 3;
        let dst = ((pad + row) * out_w + pad) * 3;
        out[dst..dst + content_w * 3].copy_from_slice(&pixels[src..src + content_w * 3]);
    }

    Ok((out, out_w as u32, out_h as u32))
}

/// Encode 8-bit RGB pixels as PNG with a pHYs chunk for `dpi`
pub fn encode_png(pixels: &[u8], width: u32, height: u32, dpi: u32) -> ImpactResult<Vec<u8>> {
    let ppm = pixels_per_meter(dpi);
    let mut out = Vec::new();

    {
        let mut encoder = Encoder::new(&mut out, width, height);
        encoder.set_color(ColorType::Rgb);
        encoder.set_depth(BitDepth::Eight);
        encoder.set_pixel_dims(Some(PixelDimensions { xppu: ppm, yppu: ppm, unit: Unit::Meter }));

        let mut writer = encoder.write_header()?;
        writer.write_image_data(pixels)?;
        writer.finish()?;
    }

    Ok(out)
}

/// Crop then encode with the style's padding and DPI
pub(crate) fn encode_tight(pixels: &[u8], width: u32, height: u32, style: &ChartStyle) -> ImpactResult<Vec<u8>> {
    let (cropped, w, h) = crop_to_content(pixels, width, height, style.tight_padding_px)?;
    encode_png(&cropped, w, h, style.dpi)
}
