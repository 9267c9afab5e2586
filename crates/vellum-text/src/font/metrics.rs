/// Font-level metrics in font units.
#[derive(Debug, Clone, Copy)]
pub struct FontMetrics {
    /// Ascent above baseline (positive).
    pub ascent: f32,
    /// Descent below baseline (positive).
    pub descent: f32,
    /// Line gap (leading).
    pub line_gap: f32,
    /// Units per em.
    pub units_per_em: u16,
}

impl FontMetrics {
    /// Calculate line height (ascent + descent + line_gap).
    pub fn line_height(&self) -> f32 {
        self.ascent + self.descent + self.line_gap
    }

    /// Scale metrics to pixel size, where `font_size` is in logical pixels
    /// (px per em).
    pub fn scale_to_pixels(&self, font_size: f32) -> ScaledFontMetrics {
        let scale = if self.units_per_em != 0 {
            font_size / self.units_per_em as f32
        } else {
            1.0
        };
        ScaledFontMetrics {
            ascent: self.ascent * scale,
            descent: self.descent * scale,
            line_gap: self.line_gap * scale,
            font_size,
        }
    }
}

/// Scaled font metrics in pixels.
#[derive(Debug, Clone, Copy)]
pub struct ScaledFontMetrics {
    pub ascent: f32,
    pub descent: f32,
    pub line_gap: f32,
    pub font_size: f32,
}

impl ScaledFontMetrics {
    /// Baseline-to-baseline distance in pixels.
    pub fn line_height(&self) -> f32 {
        self.ascent + self.descent + self.line_gap
    }
}

/// Source of horizontal advances and vertical metrics for boxed layout.
///
/// The layout routines read fonts exclusively through this trait, so a
/// render backend can plug in a real [`FontFace`](crate::font::FontFace)
/// while tests substitute fixed-advance stubs.
pub trait TextMetrics {
    /// Horizontal advance of one grapheme cluster at `font_size`, in pixels.
    fn cluster_advance(&self, cluster: &str, font_size: f32) -> f32;

    /// Baseline-to-baseline distance at `font_size`, in pixels.
    fn line_height(&self, font_size: f32) -> f32;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scale_to_pixels_divides_by_upem() {
        let metrics = FontMetrics {
            ascent: 1600.0,
            descent: 400.0,
            line_gap: 0.0,
            units_per_em: 2000,
        };
        let scaled = metrics.scale_to_pixels(20.0);
        assert!((scaled.ascent - 16.0).abs() < 1e-6);
        assert!((scaled.descent - 4.0).abs() < 1e-6);
        assert!((scaled.line_height() - 20.0).abs() < 1e-6);
    }

    #[test]
    fn zero_upem_does_not_divide_by_zero() {
        let metrics = FontMetrics {
            ascent: 10.0,
            descent: 2.0,
            line_gap: 1.0,
            units_per_em: 0,
        };
        let scaled = metrics.scale_to_pixels(16.0);
        assert_eq!(scaled.ascent, 10.0);
    }
}
