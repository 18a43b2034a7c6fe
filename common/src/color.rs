//! Hex color parsing

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

/// Parse "#RRGGBB", "RRGGBB" or the short "#RGB" form
pub fn parse_color(s: &str) -> Result<Color> {
    let digits = s.trim().trim_start_matches('#');

    let expanded: String = match digits.len() {
        6 => digits.to_string(),
        3 => digits.chars().flat_map(|c| [c, c]).collect(),
        _ => return Err(Error::InvalidColor(s.to_string())),
    };

    let bytes = hex::decode(&expanded).map_err(|_| Error::InvalidColor(s.to_string()))?;
    Ok(Color::rgb(bytes[0], bytes[1], bytes[2]))
}
