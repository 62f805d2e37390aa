//! Drawing surface for mosaic composition.
//!
//! [`BrickCanvas`] wraps a [`tiny_skia::Pixmap`] with the operations the
//! compositor needs: base-image and sprite draws with an explicit blend mode,
//! tile-region read-back as straight RGBA, tile clears, and solid fills.
//! There is no surface-wide composite state: every draw call names its blend
//! mode explicitly, which pins down the scoping (base draw, sprite blits and
//! tile fills all use hard-light, clears do not blend at all).

use crate::error::BrickifyError;
use tiny_skia::{
    BlendMode, Color, ColorU8, FilterQuality, Paint, Pixmap, PixmapPaint, Rect, Transform,
};

/// Convert straight RGBA bytes into a premultiplied pixmap.
///
/// tiny-skia stores premultiplied alpha internally; decoded images arrive as
/// straight RGBA from the image collaborator.
pub fn pixmap_from_rgba(rgba: &[u8], width: u32, height: u32) -> Result<Pixmap, BrickifyError> {
    let mut pixmap = Pixmap::new(width, height)
        .ok_or(BrickifyError::CanvasAllocation { width, height })?;

    for (dst, src) in pixmap.pixels_mut().iter_mut().zip(rgba.chunks_exact(4)) {
        *dst = ColorU8::from_rgba(src[0], src[1], src[2], src[3]).premultiply();
    }

    Ok(pixmap)
}

/// The mutable 2D target one render composites into.
///
/// Exclusively owned by the compositor for the duration of a render; handed
/// to serialization at the end via [`BrickCanvas::into_pixmap`].
pub struct BrickCanvas {
    pixmap: Pixmap,
}

impl BrickCanvas {
    /// Allocate a transparent canvas. Zero-extent dimensions are rejected by
    /// tiny-skia, so degenerate grids must be handled before allocation.
    pub fn new(width: u32, height: u32) -> Result<Self, BrickifyError> {
        let pixmap = Pixmap::new(width, height)
            .ok_or(BrickifyError::CanvasAllocation { width, height })?;
        Ok(Self { pixmap })
    }

    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    /// Draw `sprite` with its top-left corner at `(x, y)`.
    ///
    /// Pixels falling outside the canvas are clipped away, which is how the
    /// oversized base-image draw loses its remainder strips.
    pub fn draw_sprite(
        &mut self,
        sprite: &Pixmap,
        x: i32,
        y: i32,
        blend_mode: BlendMode,
        quality: FilterQuality,
    ) {
        let paint = PixmapPaint {
            opacity: 1.0,
            blend_mode,
            quality,
        };
        self.pixmap
            .draw_pixmap(x, y, sprite.as_ref(), &paint, Transform::identity(), None);
    }

    /// Read the region `(x, y, w, h)` back as straight RGBA bytes.
    ///
    /// The returned buffer is exactly `4 * w * h` bytes, row-major. The
    /// caller owns it transiently; nothing is retained. The region must lie
    /// within the canvas (tile origins always do).
    pub fn read_region(&self, x: u32, y: u32, w: u32, h: u32) -> Vec<u8> {
        debug_assert!(x + w <= self.width() && y + h <= self.height());

        let canvas_width = self.width() as usize;
        let pixels = self.pixmap.pixels();
        let mut rgba = Vec::with_capacity((w * h * 4) as usize);

        for row in y..y + h {
            let start = row as usize * canvas_width + x as usize;
            for premultiplied in &pixels[start..start + w as usize] {
                let c = premultiplied.demultiply();
                rgba.extend_from_slice(&[c.red(), c.green(), c.blue(), c.alpha()]);
            }
        }

        rgba
    }

    /// Reset the region `(x, y, w, h)` to fully transparent.
    pub fn clear_region(&mut self, x: u32, y: u32, w: u32, h: u32) {
        if let Some(rect) = Rect::from_xywh(x as f32, y as f32, w as f32, h as f32) {
            let paint = Paint {
                blend_mode: BlendMode::Clear,
                anti_alias: false,
                ..Paint::default()
            };
            self.pixmap
                .fill_rect(rect, &paint, Transform::identity(), None);
        }
    }

    /// Fill the region `(x, y, w, h)` with an opaque color.
    pub fn fill_region(
        &mut self,
        x: u32,
        y: u32,
        w: u32,
        h: u32,
        r: u8,
        g: u8,
        b: u8,
        blend_mode: BlendMode,
    ) {
        if let Some(rect) = Rect::from_xywh(x as f32, y as f32, w as f32, h as f32) {
            // The lowp pipeline's hard-light multiply (2*s*d in u16 lanes)
            // overflows for bright channels over an opaque backdrop; the
            // fill must take the f32 pipeline. Sprite and base draws only
            // ever hard-light over transparent pixels, where no lowp term
            // can overflow.
            let mut paint = Paint {
                blend_mode,
                anti_alias: false,
                force_hq_pipeline: true,
                ..Paint::default()
            };
            paint.set_color(Color::from_rgba8(r, g, b, 255));
            self.pixmap
                .fill_rect(rect, &paint, Transform::identity(), None);
        }
    }

    /// Hand the finished surface to serialization.
    pub fn into_pixmap(self) -> Pixmap {
        self.pixmap
    }
}
