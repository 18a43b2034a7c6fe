#![allow(dead_code)]

use certgen::error::{CertGenError, Result};
use certgen::export::{DocumentConverter, Exporter, PdfConverter};
use certgen::pipeline::{Pipeline, PipelineOptions};
use certgen::render::{blend_pixel, FontBook, Renderer, Templates, Typeface};
use certgen_common::{Anchor, RenderConfig};
use image::{Rgba, RgbaImage};
use rust_xlsxwriter::Workbook;
use std::collections::HashSet;
use std::path::Path;
use std::sync::Arc;

pub const WIDTH: u32 = 600;
pub const HEIGHT: u32 = 300;

pub const SINGLE_BG: Rgba<u8> = Rgba([255, 255, 255, 255]);
pub const TWO_BG: Rgba<u8> = Rgba([240, 240, 240, 255]);

pub const NAME_COLOR: [u8; 3] = [0xff, 0x00, 0x00];
pub const INSTITUTE_COLOR: [u8; 3] = [0x00, 0xa0, 0x00];
pub const TYPE_COLOR: [u8; 3] = [0x00, 0x00, 0xff];
pub const TITLE_COLOR: [u8; 3] = [0x10, 0x10, 0x10];

/// Monospaced face drawing each non-space character as a solid block
///
/// Every glyph is `size / 2` pixels wide (one pixel gap) and `size` tall.
pub struct BlockFace;

pub fn advance(size: f32) -> i32 {
    ((size / 2.0).floor() as i32).max(2)
}

impl Typeface for BlockFace {
    fn text_width(&self, text: &str, size: f32) -> f32 {
        (text.chars().count() as i32 * advance(size)) as f32
    }

    fn draw(&self, image: &mut RgbaImage, text: &str, size: f32, x: i32, y: i32, color: Rgba<u8>) {
        let adv = advance(size);
        for (i, ch) in text.chars().enumerate() {
            if ch.is_whitespace() {
                continue;
            }
            let left = x + i as i32 * adv;
            for dy in 0..size as i32 {
                for dx in 0..adv - 1 {
                    blend_pixel(image, left + dx, y + dy, color, 1.0);
                }
            }
        }
    }
}

fn hex(rgb: [u8; 3]) -> String {
    format!("#{:02x}{:02x}{:02x}", rgb[0], rgb[1], rgb[2])
}

/// Small layout for a 600x300 canvas
pub fn test_config() -> RenderConfig {
    let mut config = RenderConfig::default();
    config.participant_name.text.size = 20.0;
    config.participant_name.text.color = hex(NAME_COLOR);
    config.participant_name.anchor = Anchor::new(300, 40);
    config.institute.text.size = 10.0;
    config.institute.text.color = hex(INSTITUTE_COLOR);
    config.institute.anchor = Anchor::new(300, 80);
    config.participant_type.text.size = 10.0;
    config.participant_type.text.color = hex(TYPE_COLOR);
    config.participant_type.anchor = Anchor::new(80, 120);
    config.paper_title.size = 10.0;
    config.paper_title.color = hex(TITLE_COLOR);
    config.title_single_line = Anchor::new(300, 160);
    config.title_multi_line = Anchor::new(310, 150);
    config.line_spacing = 4;
    config
}

pub fn templates() -> Templates {
    Templates::new(
        RgbaImage::from_pixel(WIDTH, HEIGHT, SINGLE_BG),
        RgbaImage::from_pixel(WIDTH, HEIGHT, TWO_BG),
    )
}

pub fn renderer(config: RenderConfig) -> Renderer {
    let fonts = FontBook::with_face(Arc::new(BlockFace), &config).expect("font book");
    Renderer::new(templates(), fonts, config)
}

pub fn pipeline(out: &Path, converter: Box<dyn DocumentConverter>, config: RenderConfig) -> Pipeline {
    Pipeline::new(
        renderer(config),
        Exporter::new(out, converter),
        PipelineOptions::default(),
    )
}

/// PDF conversion that fails for the listed paper ids
pub struct FailingConverter {
    pub fail_ids: HashSet<String>,
    pub inner: PdfConverter,
}

impl FailingConverter {
    pub fn new(ids: &[&str]) -> Self {
        Self {
            fail_ids: ids.iter().map(|s| s.to_string()).collect(),
            inner: PdfConverter::default(),
        }
    }
}

impl DocumentConverter for FailingConverter {
    fn convert(&self, png_path: &Path, pdf_path: &Path) -> Result<()> {
        let stem = png_path
            .file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_default();
        if self.fail_ids.contains(&stem) {
            return Err(CertGenError::PdfGeneration("simulated conversion failure".into()));
        }
        self.inner.convert(png_path, pdf_path)
    }
}

/// Write a one-sheet xlsx; every cell is written as text
pub fn write_sheet(path: &Path, headers: &[&str], rows: &[Vec<String>]) {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    for (col, header) in headers.iter().enumerate() {
        worksheet.write_string(0, col as u16, *header).unwrap();
    }
    for (r, row) in rows.iter().enumerate() {
        for (col, value) in row.iter().enumerate() {
            worksheet.write_string(r as u32 + 1, col as u16, value.as_str()).unwrap();
        }
    }
    workbook.save(path).unwrap();
}

pub fn row(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
}

pub fn is_color(pixel: &Rgba<u8>, rgb: [u8; 3]) -> bool {
    pixel.0[0] == rgb[0] && pixel.0[1] == rgb[1] && pixel.0[2] == rgb[2]
}

/// Pixels of `rgb` in pixel row `y` between `x0` and `x1` (exclusive)
pub fn count_in_row(image: &RgbaImage, y: u32, x0: u32, x1: u32, rgb: [u8; 3]) -> usize {
    (x0..x1.min(image.width()))
        .filter(|&x| is_color(image.get_pixel(x, y), rgb))
        .count()
}

pub fn count_color(image: &RgbaImage, rgb: [u8; 3]) -> usize {
    image.pixels().filter(|p| is_color(p, rgb)).count()
}

/// Leftmost and rightmost x of `rgb` in pixel row `y`
pub fn row_extent(image: &RgbaImage, y: u32, rgb: [u8; 3]) -> Option<(u32, u32)> {
    let xs: Vec<u32> = (0..image.width())
        .filter(|&x| is_color(image.get_pixel(x, y), rgb))
        .collect();
    Some((*xs.first()?, *xs.last()?))
}
