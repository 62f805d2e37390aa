//! Shared helpers for integration tests.

use image::{Rgba, RgbaImage};
use std::io::Cursor;

/// Encode a solid-color RGBA image as PNG bytes.
pub fn solid_png(width: u32, height: u32, rgba: [u8; 4]) -> Vec<u8> {
    let img = RgbaImage::from_pixel(width, height, Rgba(rgba));
    let mut out = Cursor::new(Vec::new());
    img.write_to(&mut out, image::ImageFormat::Png)
        .expect("in-memory PNG encode");
    out.into_inner()
}

/// A fully opaque mid-gray sprite, PNG-encoded.
pub fn gray_sprite_png(width: u32, height: u32) -> Vec<u8> {
    solid_png(width, height, [128, 128, 128, 255])
}
