use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use image::codecs::png::PngEncoder;
use image::{ColorType, ImageEncoder, Rgb, RgbImage};
use rusttype::{point, Font};

use crate::config::RenderConfig;
use crate::error::Result;
use crate::font::pixel_scale;
use crate::layout::{Placement, TextMetrics};

/// Draws `text` centered on a canvas filled with the background colour.
///
/// Coverage from the rasterizer is blended over whatever is already on the
/// canvas, so glyph edges come out antialiased. Anything past the canvas
/// edges is dropped.
pub fn render_text(config: &RenderConfig, font: &Font<'_>, text: &str) -> RgbImage {
    let scale = pixel_scale(font, config.font.size);
    let metrics = TextMetrics::measure(font, scale, text);
    let placement = Placement::centered(&metrics, config.width, config.height);
    log::debug!("{metrics:?} placed at {placement:?}");

    if placement.overflows(&metrics, config.width, config.height) {
        log::warn!(
            "Text box {}x{} does not fit the {}x{} canvas; it will be clipped",
            metrics.advance_width,
            metrics.height,
            config.width,
            config.height
        );
    }

    let mut canvas = RgbImage::from_pixel(config.width, config.height, config.background);

    let origin = point(placement.x as f32, placement.baseline as f32);

    for glyph in font.layout(text, scale, origin) {
        // whitespace
        let Some(bounding_box) = glyph.pixel_bounding_box() else {
            continue;
        };

        glyph.draw(|x, y, v| {
            let (Ok(x), Ok(y)) = (i32::try_from(x), i32::try_from(y)) else {
                return;
            };
            let (Ok(x), Ok(y)) = (
                u32::try_from(bounding_box.min.x + x),
                u32::try_from(bounding_box.min.y + y),
            ) else {
                return;
            };
            if x >= config.width || y >= config.height {
                return;
            }

            blend(canvas.get_pixel_mut(x, y), config.foreground, v);
        });
    }

    canvas
}

/// Mixes `coverage` of `color` into `pixel`.
fn blend(pixel: &mut Rgb<u8>, color: Rgb<u8>, coverage: f32) {
    let coverage = coverage.clamp(0.0, 1.0);
    for (dst, src) in pixel.0.iter_mut().zip(color.0) {
        let mixed = f32::from(*dst) + (f32::from(src) - f32::from(*dst)) * coverage;
        *dst = mixed.round().clamp(0.0, 255.0) as u8;
    }
}

/// Encodes `image` as PNG into `path`, replacing any existing file.
///
/// # Errors
/// [`crate::Error::Io`] if the file cannot be created or written,
/// [`crate::Error::Encode`] if the encoder fails.
pub fn write_png(image: &RgbImage, path: &Path) -> Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);

    PngEncoder::new(&mut writer).write_image(
        image.as_raw(),
        image.width(),
        image.height(),
        ColorType::Rgb8,
    )?;
    writer.flush()?;

    log::info!("Wrote {}x{} PNG to {}", image.width(), image.height(), path.display());
    Ok(())
}
