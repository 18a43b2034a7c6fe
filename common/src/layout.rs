//! Certificate layout configuration
//!
//! Pixel anchors, fonts and colors for every text field. The defaults
//! match the stock certificate templates (2000px wide landscape).

use crate::color::parse_color;
use crate::error::{Error, Result};
use crate::wrap::LayoutVariant;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

// ============================================
// Defaults
// ============================================

/// Maximum characters per title line before wrapping
pub const DEFAULT_MAX_LINE_WIDTH: usize = 95;

/// Extra pixels between wrapped title lines
pub const DEFAULT_LINE_SPACING: i32 = 20;

/// Participant type label used when the column is absent
pub const DEFAULT_PARTICIPANT_TYPE: &str = "Participant";

const SCRIPT_FONT: &str = "fonts/EuphoriaScript-Regular.ttf";
const SERIF_FONT: &str = "fonts/Lora-VariableFont_wght.ttf";

// ============================================
// Structures
// ============================================

/// Horizontal-center reference point (x) and top edge (y), in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Anchor {
    pub x: i32,
    pub y: i32,
}

impl Anchor {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Font file, pixel size and hex color
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextStyle {
    pub font: PathBuf,
    pub size: f32,
    pub color: String,
}

/// Text style plus the anchor the text is centered on
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldStyle {
    #[serde(flatten)]
    pub text: TextStyle,
    pub anchor: Anchor,
}

/// Render configuration, fixed before the first row is processed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub participant_name: FieldStyle,
    pub institute: FieldStyle,
    pub participant_type: FieldStyle,
    pub paper_title: TextStyle,
    /// Title anchor for the single-line template
    pub title_single_line: Anchor,
    /// Title anchor for the two-line template
    pub title_multi_line: Anchor,
    pub max_line_width: usize,
    pub line_spacing: i32,
    pub default_participant_type: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            participant_name: field(SCRIPT_FONT, 85.0, "#921717", 1000, 620),
            institute: field(SERIF_FONT, 35.0, "#4d0000", 906, 765),
            participant_type: field(SERIF_FONT, 35.0, "#020202", 263, 777),
            paper_title: TextStyle {
                font: PathBuf::from(SERIF_FONT),
                size: 35.0,
                color: "#4d0000".into(),
            },
            title_single_line: Anchor::new(938, 820),
            title_multi_line: Anchor::new(1017, 820),
            max_line_width: DEFAULT_MAX_LINE_WIDTH,
            line_spacing: DEFAULT_LINE_SPACING,
            default_participant_type: DEFAULT_PARTICIPANT_TYPE.into(),
        }
    }
}

fn field(font: &str, size: f32, color: &str, x: i32, y: i32) -> FieldStyle {
    FieldStyle {
        text: TextStyle {
            font: PathBuf::from(font),
            size,
            color: color.into(),
        },
        anchor: Anchor::new(x, y),
    }
}

impl RenderConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        Ok(config)
    }

    pub fn title_anchor(&self, variant: LayoutVariant) -> Anchor {
        match variant {
            LayoutVariant::Single => self.title_single_line,
            LayoutVariant::Two => self.title_multi_line,
        }
    }

    /// Y distance between consecutive title lines
    pub fn title_line_advance(&self) -> i32 {
        self.paper_title.size.round() as i32 + self.line_spacing
    }

    /// Every text style, keyed by logical field name
    pub fn text_styles(&self) -> [(&'static str, &TextStyle); 4] {
        [
            ("participant_name", &self.participant_name.text),
            ("institute", &self.institute.text),
            ("participant_type", &self.participant_type.text),
            ("paper_title", &self.paper_title),
        ]
    }

    /// Make relative font paths relative to `base` (the config file's folder)
    pub fn resolve_font_paths(&mut self, base: &Path) {
        let fix = |path: &mut PathBuf| {
            if path.is_relative() {
                *path = base.join(&*path);
            }
        };
        fix(&mut self.participant_name.text.font);
        fix(&mut self.institute.text.font);
        fix(&mut self.participant_type.text.font);
        fix(&mut self.paper_title.font);
    }

    /// Reject configurations that would fail on the first row
    pub fn validate(&self) -> Result<()> {
        if self.max_line_width == 0 {
            return Err(Error::Config("max_line_width must be at least 1".into()));
        }
        for (key, style) in self.text_styles() {
            if !(style.size.is_finite() && style.size > 0.0) {
                return Err(Error::Config(format!("{}: font size must be positive", key)));
            }
            parse_color(&style.color)
                .map_err(|e| Error::Config(format!("{}: {}", key, e)))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_coordinates() {
        let config = RenderConfig::default();
        assert_eq!(config.participant_name.anchor, Anchor::new(1000, 620));
        assert_eq!(config.institute.anchor, Anchor::new(906, 765));
        assert_eq!(config.participant_type.anchor, Anchor::new(263, 777));
        assert_eq!(config.title_anchor(LayoutVariant::Single), Anchor::new(938, 820));
        assert_eq!(config.title_anchor(LayoutVariant::Two), Anchor::new(1017, 820));
        assert_eq!(config.max_line_width, 95);
        assert_eq!(config.title_line_advance(), 55);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = RenderConfig::from_json(
            r#"{ "max_line_width": 60, "title_single_line": { "x": 500, "y": 400 } }"#,
        )
        .unwrap();
        assert_eq!(config.max_line_width, 60);
        assert_eq!(config.title_single_line, Anchor::new(500, 400));
        assert_eq!(config.line_spacing, DEFAULT_LINE_SPACING);
        assert_eq!(config.default_participant_type, "Participant");
    }

    #[test]
    fn test_field_style_json_is_flat() {
        let json = serde_json::to_value(&RenderConfig::default()).unwrap();
        let name = &json["participant_name"];
        assert_eq!(name["size"], 85.0);
        assert_eq!(name["color"], "#921717");
        assert_eq!(name["anchor"]["x"], 1000);
    }

    #[test]
    fn test_validate_rejects_bad_color() {
        let mut config = RenderConfig::default();
        config.institute.text.color = "maroonish".into();
        let err = config.validate().unwrap_err();
        assert!(format!("{}", err).contains("institute"));
    }

    #[test]
    fn test_validate_rejects_zero_width() {
        let config = RenderConfig {
            max_line_width: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_resolve_font_paths() {
        let mut config = RenderConfig::default();
        config.institute.text.font = PathBuf::from("/abs/Lora.ttf");
        config.resolve_font_paths(Path::new("/etc/certgen"));
        assert_eq!(
            config.participant_name.text.font,
            PathBuf::from("/etc/certgen/fonts/EuphoriaScript-Regular.ttf")
        );
        assert_eq!(config.institute.text.font, PathBuf::from("/abs/Lora.ttf"));
    }
}
