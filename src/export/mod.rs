//! Certificate export
//!
//! Every row yields `<out>/png/<id>.png` and, best-effort,
//! `<out>/pdf/<id>.pdf` converted from that PNG.

pub mod pdf;

pub use pdf::PdfConverter;

use crate::error::{CertGenError, Result};
use image::RgbaImage;
use std::path::{Path, PathBuf};

pub const PNG_DIR: &str = "png";
pub const PDF_DIR: &str = "pdf";

/// Raster → document conversion step
pub trait DocumentConverter {
    fn convert(&self, png_path: &Path, pdf_path: &Path) -> Result<()>;
}

/// Files written for one certificate
#[derive(Debug)]
pub struct ExportOutcome {
    pub png: PathBuf,
    /// PDF path, or why the conversion failed
    pub pdf: Result<PathBuf>,
}

pub struct Exporter {
    output_dir: PathBuf,
    converter: Box<dyn DocumentConverter>,
}

impl Exporter {
    pub fn new(output_dir: impl Into<PathBuf>, converter: Box<dyn DocumentConverter>) -> Self {
        Self {
            output_dir: output_dir.into(),
            converter,
        }
    }

    /// Exporter using the built-in PDF converter
    pub fn with_pdf(output_dir: impl Into<PathBuf>) -> Self {
        Self::new(output_dir, Box::new(PdfConverter::default()))
    }

    pub fn png_path(&self, paper_id: &str) -> PathBuf {
        self.output_dir
            .join(PNG_DIR)
            .join(format!("{}.png", file_stem_for(paper_id)))
    }

    pub fn pdf_path(&self, paper_id: &str) -> PathBuf {
        self.output_dir
            .join(PDF_DIR)
            .join(format!("{}.pdf", file_stem_for(paper_id)))
    }

    /// Create the output folders; safe to call repeatedly
    pub fn prepare(&self) -> Result<()> {
        std::fs::create_dir_all(self.output_dir.join(PNG_DIR))?;
        std::fs::create_dir_all(self.output_dir.join(PDF_DIR))?;
        Ok(())
    }

    /// Write the PNG (errors propagate), then convert it to PDF (errors are
    /// returned inside the outcome)
    pub fn export(&self, image: &RgbaImage, paper_id: &str) -> Result<ExportOutcome> {
        let png = self.png_path(paper_id);
        image.save(&png).map_err(|e| CertGenError::ImageSave {
            path: png.display().to_string(),
            reason: e.to_string(),
        })?;
        tracing::debug!(path = %png.display(), "png written");

        let pdf_path = self.pdf_path(paper_id);
        let pdf = match self.converter.convert(&png, &pdf_path) {
            Ok(()) => Ok(pdf_path),
            Err(e) => {
                tracing::error!(paper_id, error = %e, "pdf conversion failed");
                // no half-written PDF for a failed row
                if pdf_path.exists() {
                    std::fs::remove_file(&pdf_path).ok();
                }
                Err(e)
            }
        };

        Ok(ExportOutcome { png, pdf })
    }
}

/// Paper id with path separators and reserved characters replaced
pub fn file_stem_for(paper_id: &str) -> String {
    paper_id
        .trim()
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect()
}
