//! Certificate rendering
//!
//! Draws a participant's fields onto a private copy of the template chosen
//! by the title layout. Text is centered horizontally on each anchor; the
//! anchor y is the top of the text, there is no vertical centering.

mod typeface;

pub use typeface::{blend_pixel, RusttypeFace, Typeface};

use crate::error::{CertGenError, Result};
use certgen_common::{
    Anchor, LayoutVariant, ParticipantRecord, RenderConfig, TextStyle, WrappedTitle,
};
use image::{Rgba, RgbaImage};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// The two background templates, never modified after loading
#[derive(Debug, Clone)]
pub struct Templates {
    single_line: RgbaImage,
    two_line: RgbaImage,
}

impl Templates {
    pub fn new(single_line: RgbaImage, two_line: RgbaImage) -> Self {
        Self { single_line, two_line }
    }

    pub fn load(single_line: &Path, two_line: &Path) -> Result<Self> {
        Ok(Self::new(load_template(single_line)?, load_template(two_line)?))
    }

    pub fn get(&self, variant: LayoutVariant) -> &RgbaImage {
        match variant {
            LayoutVariant::Single => &self.single_line,
            LayoutVariant::Two => &self.two_line,
        }
    }
}

fn load_template(path: &Path) -> Result<RgbaImage> {
    if !path.exists() {
        return Err(CertGenError::FileNotFound(path.display().to_string()));
    }
    let image = image::open(path).map_err(|e| CertGenError::TemplateLoad {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;
    Ok(image.to_rgba8())
}

/// Face, size and color for one text field
#[derive(Clone)]
pub struct Pen {
    pub face: Arc<dyn Typeface>,
    pub size: f32,
    pub color: Rgba<u8>,
}

impl Pen {
    fn new(face: Arc<dyn Typeface>, style: &TextStyle) -> Result<Self> {
        let color = certgen_common::parse_color(&style.color)?;
        let [r, g, b] = color.to_array();
        Ok(Self {
            face,
            size: style.size,
            color: Rgba([r, g, b, 255]),
        })
    }
}

/// Loaded fonts and parsed colors for every field
#[derive(Clone)]
pub struct FontBook {
    pub participant_name: Pen,
    pub institute: Pen,
    pub participant_type: Pen,
    pub paper_title: Pen,
}

impl FontBook {
    /// Load every configured font file up front; each file is read once
    pub fn load(config: &RenderConfig) -> Result<Self> {
        let mut faces: HashMap<PathBuf, Arc<dyn Typeface>> = HashMap::new();
        let mut face_for = |path: &Path| -> Result<Arc<dyn Typeface>> {
            if let Some(face) = faces.get(path) {
                return Ok(face.clone());
            }
            if !path.exists() {
                return Err(CertGenError::FontLoad {
                    path: path.display().to_string(),
                    reason: "file not found".into(),
                });
            }
            let face: Arc<dyn Typeface> = Arc::new(RusttypeFace::load(path)?);
            faces.insert(path.to_path_buf(), face.clone());
            tracing::debug!(font = %path.display(), "font loaded");
            Ok(face)
        };

        let name = face_for(&config.participant_name.text.font)?;
        let institute = face_for(&config.institute.text.font)?;
        let participant_type = face_for(&config.participant_type.text.font)?;
        let title = face_for(&config.paper_title.font)?;

        Ok(Self {
            participant_name: Pen::new(name, &config.participant_name.text)?,
            institute: Pen::new(institute, &config.institute.text)?,
            participant_type: Pen::new(participant_type, &config.participant_type.text)?,
            paper_title: Pen::new(title, &config.paper_title)?,
        })
    }

    /// Use one face for every field, keeping configured sizes and colors
    pub fn with_face(face: Arc<dyn Typeface>, config: &RenderConfig) -> Result<Self> {
        Ok(Self {
            participant_name: Pen::new(face.clone(), &config.participant_name.text)?,
            institute: Pen::new(face.clone(), &config.institute.text)?,
            participant_type: Pen::new(face.clone(), &config.participant_type.text)?,
            paper_title: Pen::new(face, &config.paper_title)?,
        })
    }
}

/// Left x that centers a text of `width` pixels on `anchor_x`
pub fn centered_x(anchor_x: i32, width: f32) -> i32 {
    anchor_x - (width.round() as i32) / 2
}

/// Draw `text` horizontally centered on `anchor_x`, top edge at `y`
pub fn draw_text_centered(image: &mut RgbaImage, pen: &Pen, text: &str, anchor_x: i32, y: i32) {
    if text.is_empty() {
        return;
    }
    let width = pen.face.text_width(text, pen.size);
    let x = centered_x(anchor_x, width);
    pen.face.draw(image, text, pen.size, x, y, pen.color);
}

pub struct Renderer {
    templates: Templates,
    fonts: FontBook,
    config: RenderConfig,
}

impl Renderer {
    pub fn new(templates: Templates, fonts: FontBook, config: RenderConfig) -> Self {
        Self {
            templates,
            fonts,
            config,
        }
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    pub fn templates(&self) -> &Templates {
        &self.templates
    }

    /// Render one certificate on a copy of the template for `title.variant`
    pub fn render(&self, record: &ParticipantRecord, title: &WrappedTitle) -> RgbaImage {
        let mut image = self.templates.get(title.variant).clone();
        let config = &self.config;

        let fields = [
            (&self.fonts.participant_name, record.name.as_str(), config.participant_name.anchor),
            (&self.fonts.institute, record.institute.as_str(), config.institute.anchor),
            (
                &self.fonts.participant_type,
                record.participant_type.as_str(),
                config.participant_type.anchor,
            ),
        ];
        for (pen, text, anchor) in fields {
            draw_text_centered(&mut image, pen, text, anchor.x, anchor.y);
        }

        for (line, anchor) in title_line_positions(config, title) {
            draw_text_centered(&mut image, &self.fonts.paper_title, line, anchor.x, anchor.y);
        }

        image
    }
}

/// Anchor of every title line: same x, y advancing by size + spacing
pub fn title_line_positions<'a>(
    config: &RenderConfig,
    title: &'a WrappedTitle,
) -> Vec<(&'a str, Anchor)> {
    let start = config.title_anchor(title.variant);
    let advance = config.title_line_advance();
    title
        .lines
        .iter()
        .enumerate()
        .map(|(i, line)| (line.as_str(), Anchor::new(start.x, start.y + advance * i as i32)))
        .collect()
}
