//! PDF page geometry for raster certificates.

/// Resolution assumed for raster images without DPI metadata
pub const DEFAULT_DPI: f32 = 96.0;

/// mm per inch
pub const MM_PER_INCH: f32 = 25.4;

/// Single page sized to fit one image exactly
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageGeometry {
    pub width_mm: f32,
    pub height_mm: f32,
    pub dpi: f32,
}

impl PageGeometry {
    /// Page whose size equals the image size at `dpi`
    pub fn for_image(width_px: u32, height_px: u32, dpi: f32) -> Self {
        let dpi = if dpi.is_finite() && dpi > 0.0 { dpi } else { DEFAULT_DPI };
        Self {
            width_mm: px_to_mm(width_px, dpi),
            height_mm: px_to_mm(height_px, dpi),
            dpi,
        }
    }
}

pub fn px_to_mm(px: u32, dpi: f32) -> f32 {
    px as f32 * MM_PER_INCH / dpi
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_matches_image_at_96_dpi() {
        let page = PageGeometry::for_image(960, 480, DEFAULT_DPI);
        assert!((page.width_mm - 254.0).abs() < 1e-3);
        assert!((page.height_mm - 127.0).abs() < 1e-3);
    }

    #[test]
    fn test_invalid_dpi_falls_back() {
        let page = PageGeometry::for_image(96, 96, 0.0);
        assert_eq!(page.dpi, DEFAULT_DPI);
        assert!((page.width_mm - MM_PER_INCH).abs() < 1e-3);
    }
}
