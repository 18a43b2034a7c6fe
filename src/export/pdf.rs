use super::DocumentConverter;
use crate::error::{CertGenError, Result};
use certgen_common::export::pdf_core::{PageGeometry, DEFAULT_DPI};
use printpdf::{
    Mm, Op, PdfDocument, PdfPage, PdfSaveOptions, Pt, RawImage, RawImageData, RawImageFormat,
    XObjectTransform,
};
use std::path::Path;

/// Embeds a PNG on a single PDF page sized to the image
#[derive(Debug, Clone, Copy)]
pub struct PdfConverter {
    pub dpi: f32,
}

impl Default for PdfConverter {
    fn default() -> Self {
        Self { dpi: DEFAULT_DPI }
    }
}

impl DocumentConverter for PdfConverter {
    fn convert(&self, png_path: &Path, pdf_path: &Path) -> Result<()> {
        let image = image::open(png_path)
            .map_err(|e| CertGenError::PdfGeneration(format!("{}: {}", png_path.display(), e)))?
            .to_rgb8();
        let (width, height) = image.dimensions();
        let page = PageGeometry::for_image(width, height, self.dpi);

        let title = png_path
            .file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_default();
        let mut doc = PdfDocument::new(&title);

        let raw = RawImage {
            pixels: RawImageData::U8(image.into_raw()),
            width: width as usize,
            height: height as usize,
            data_format: RawImageFormat::RGB8,
            tag: Vec::new(),
        };
        let image_id = doc.add_image(&raw);

        let ops = vec![Op::UseXobject {
            id: image_id,
            transform: XObjectTransform {
                translate_x: Some(Pt(0.0)),
                translate_y: Some(Pt(0.0)),
                dpi: Some(page.dpi),
                ..Default::default()
            },
        }];
        let pdf_page = PdfPage::new(Mm(page.width_mm), Mm(page.height_mm), ops);

        let mut warnings = Vec::new();
        let bytes = doc
            .with_pages(vec![pdf_page])
            .save(&PdfSaveOptions::default(), &mut warnings);
        for warning in &warnings {
            tracing::debug!(?warning, "pdf warning");
        }

        std::fs::write(pdf_path, bytes)?;
        Ok(())
    }
}
