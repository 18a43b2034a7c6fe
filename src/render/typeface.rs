//! Text measuring and drawing
//!
//! The renderer only talks to [`Typeface`]; production text goes through
//! rusttype, tests can plug in a face with predictable metrics.

use crate::error::{CertGenError, Result};
use image::{Rgba, RgbaImage};
use rusttype::{point, Font, Scale};
use std::path::Path;

pub trait Typeface {
    /// Rendered width of `text` in pixels at `size`
    fn text_width(&self, text: &str, size: f32) -> f32;

    /// Draw `text` with the top of its line box at `y` and its origin at `x`
    fn draw(&self, image: &mut RgbaImage, text: &str, size: f32, x: i32, y: i32, color: Rgba<u8>);
}

/// TrueType/OpenType face loaded through rusttype
pub struct RusttypeFace {
    font: Font<'static>,
}

impl RusttypeFace {
    pub fn load(path: &Path) -> Result<Self> {
        let font_error = |reason: &str| CertGenError::FontLoad {
            path: path.display().to_string(),
            reason: reason.to_string(),
        };

        let bytes = std::fs::read(path).map_err(|e| font_error(&e.to_string()))?;
        Self::from_bytes(bytes).ok_or_else(|| font_error("not a TrueType/OpenType font"))
    }

    pub fn from_bytes(bytes: Vec<u8>) -> Option<Self> {
        Font::try_from_vec(bytes).map(|font| Self { font })
    }
}

impl Typeface for RusttypeFace {
    fn text_width(&self, text: &str, size: f32) -> f32 {
        if text.is_empty() {
            return 0.0;
        }
        let scale = Scale::uniform(size);
        let ascent = self.font.v_metrics(scale).ascent;

        let mut min_x = i32::MAX;
        let mut max_x = i32::MIN;
        for glyph in self.font.layout(text, scale, point(0.0, ascent)) {
            if let Some(bb) = glyph.pixel_bounding_box() {
                min_x = min_x.min(bb.min.x);
                max_x = max_x.max(bb.max.x);
            }
        }

        // whitespace only
        if max_x < min_x {
            return 0.0;
        }
        (max_x - min_x) as f32
    }

    fn draw(&self, image: &mut RgbaImage, text: &str, size: f32, x: i32, y: i32, color: Rgba<u8>) {
        let scale = Scale::uniform(size);
        let baseline = y as f32 + self.font.v_metrics(scale).ascent;

        for glyph in self.font.layout(text, scale, point(x as f32, baseline)) {
            let Some(bb) = glyph.pixel_bounding_box() else {
                continue;
            };
            glyph.draw(|gx, gy, coverage| {
                blend_pixel(image, gx as i32 + bb.min.x, gy as i32 + bb.min.y, color, coverage);
            });
        }
    }
}

/// Alpha-blend `color` onto one pixel; out-of-bounds pixels are clipped
pub fn blend_pixel(image: &mut RgbaImage, x: i32, y: i32, color: Rgba<u8>, coverage: f32) {
    if x < 0 || y < 0 {
        return;
    }
    let (x, y) = (x as u32, y as u32);
    if x >= image.width() || y >= image.height() {
        return;
    }

    let alpha = coverage.clamp(0.0, 1.0) * (color.0[3] as f32 / 255.0);
    if alpha <= 0.0 {
        return;
    }

    let dst = image.get_pixel_mut(x, y);
    let inv = 1.0 - alpha;
    for c in 0..3 {
        dst.0[c] = (color.0[c] as f32 * alpha + dst.0[c] as f32 * inv).round() as u8;
    }
    dst.0[3] = dst.0[3].max((alpha * 255.0).round() as u8);
}
