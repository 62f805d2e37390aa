//! Mosaic composition: grid math, the per-tile loop, and output encoding.
//!
//! The compositor owns the whole pipeline between the two decoded surfaces
//! and the encoded output bytes. Tiles are processed strictly sequentially:
//! each tile's color is estimated from the canvas content written by the
//! base-image draw, so processing order is part of the observable contract.

use crate::error::BrickifyError;
use crate::models::{OutputFormat, RenderOptions};
use crate::rendering::canvas::{pixmap_from_rgba, BrickCanvas};
use crate::rendering::sampling::estimate_color;
use image::RgbaImage;
use std::io::Cursor;
use tiny_skia::{BlendMode, Pixmap};

/// Tile grid dimensions for a source/sprite pairing.
///
/// Remainder strips along the right and bottom edges of the source are
/// dropped: the output canvas is exactly `tiles_x * sprite_w` by
/// `tiles_y * sprite_h`, which may be smaller than the source.
pub fn grid_size(source: &Pixmap, sprite: &Pixmap) -> (u32, u32) {
    (
        source.width() / sprite.width(),
        source.height() / sprite.height(),
    )
}

/// Decode an encoded image into a straight-RGBA pixmap.
pub fn decode_surface(bytes: &[u8]) -> Result<Pixmap, BrickifyError> {
    let decoded = image::load_from_memory(bytes)
        .map_err(|e| BrickifyError::Decode(e.to_string()))?
        .to_rgba8();
    pixmap_from_rgba(decoded.as_raw(), decoded.width(), decoded.height())
}

/// Composite the brick mosaic and encode it.
///
/// Steps, in order: grid sizing, canvas allocation, stride resolution,
/// hard-light base draw, then the column-major tile loop (read back,
/// estimate, clear, blit sprite, tinted fill), and finally serialization
/// to `options.format`.
pub fn compose(
    source: &Pixmap,
    sprite: &Pixmap,
    options: &RenderOptions,
) -> Result<Vec<u8>, BrickifyError> {
    let (tiles_x, tiles_y) = grid_size(source, sprite);
    let stride = options.resolve_stride()?;

    // A source smaller than the sprite in either dimension has no tiles.
    // tiny-skia cannot allocate a zero-extent pixmap, so the degenerate
    // output is an empty buffer rather than an error.
    if tiles_x == 0 || tiles_y == 0 {
        tracing::debug!(
            source_width = source.width(),
            source_height = source.height(),
            sprite_width = sprite.width(),
            sprite_height = sprite.height(),
            "Source smaller than sprite, producing empty output"
        );
        return Ok(Vec::new());
    }

    let sprite_w = sprite.width();
    let sprite_h = sprite.height();
    let mut canvas = BrickCanvas::new(tiles_x * sprite_w, tiles_y * sprite_h)?;

    tracing::debug!(
        tiles_x,
        tiles_y,
        stride,
        canvas_width = canvas.width(),
        canvas_height = canvas.height(),
        "Compositing brick mosaic"
    );

    let filter_quality = options.resolve_filter_quality();
    let pattern_quality = options.resolve_pattern_quality();

    // Base layer: the source at the origin, hard-light over the blank canvas.
    // Anything past the canvas edge (the remainder strips) is clipped.
    canvas.draw_sprite(source, 0, 0, BlendMode::HardLight, filter_quality);

    // Column-major traversal. The order is fixed: each read-back observes
    // the canvas as left by every earlier draw, so instrumented-surface
    // tests may assert the exact call sequence.
    for tx in 0..tiles_x {
        for ty in 0..tiles_y {
            let x = tx * sprite_w;
            let y = ty * sprite_h;

            // The read-back sees the already-composited base layer, not the
            // raw source pixels.
            let pixels = canvas.read_region(x, y, sprite_w, sprite_h);
            let color = estimate_color(&pixels, stride);

            canvas.clear_region(x, y, sprite_w, sprite_h);
            canvas.draw_sprite(
                sprite,
                x as i32,
                y as i32,
                BlendMode::HardLight,
                pattern_quality,
            );
            canvas.fill_region(
                x,
                y,
                sprite_w,
                sprite_h,
                color.r,
                color.g,
                color.b,
                BlendMode::HardLight,
            );
        }
    }

    encode(canvas.into_pixmap(), options.format)
}

/// Serialize the finished canvas to the requested encoding.
fn encode(pixmap: Pixmap, format: OutputFormat) -> Result<Vec<u8>, BrickifyError> {
    let width = pixmap.width();
    let height = pixmap.height();

    let mut rgba = Vec::with_capacity((width * height * 4) as usize);
    for pixel in pixmap.pixels() {
        let c = pixel.demultiply();
        rgba.extend_from_slice(&[c.red(), c.green(), c.blue(), c.alpha()]);
    }

    let img = RgbaImage::from_raw(width, height, rgba)
        .ok_or_else(|| BrickifyError::Encode("canvas buffer size mismatch".to_string()))?;

    let mut out = Cursor::new(Vec::new());
    match format {
        OutputFormat::Jpeg => {
            // JPEG has no alpha channel.
            image::DynamicImage::ImageRgba8(img)
                .to_rgb8()
                .write_to(&mut out, image::ImageFormat::Jpeg)
        }
        OutputFormat::Png => img.write_to(&mut out, image::ImageFormat::Png),
    }
    .map_err(|e| BrickifyError::Encode(e.to_string()))?;

    Ok(out.into_inner())
}
