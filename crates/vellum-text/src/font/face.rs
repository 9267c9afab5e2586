use std::sync::Arc;

use swash::{FontRef, GlyphId, Metrics};

use crate::font::{FontError, FontMetrics, Result, ScaledFontMetrics, TextMetrics};

/// Loaded font face backed by a font file (TTF/OTF).
///
/// This is a thin wrapper around `swash::FontRef` that owns the
/// underlying font data and exposes the metrics and per-glyph advance
/// widths the layout routines consume.
#[derive(Debug, Clone)]
pub struct FontFace {
    /// Full font data.
    data: Arc<[u8]>,
    /// Offset to the table directory for this font.
    offset: u32,
    /// Cache key used internally by swash.
    key: swash::CacheKey,
    /// Extracted font metrics in font units.
    metrics: FontMetrics,
}

impl FontFace {
    /// Create a font face from raw bytes and a font index within the file.
    pub fn from_bytes(data: Arc<[u8]>, index: usize) -> Result<Self> {
        let font = FontRef::from_index(&data, index).ok_or(FontError::InvalidFont)?;
        let metrics = Self::metrics_from_swash(&font);
        let (offset, key) = (font.offset, font.key);
        Ok(Self {
            data,
            offset,
            key,
            metrics,
        })
    }

    /// Create a font face from raw bytes owned by a `Vec<u8>`.
    pub fn from_vec(data: Vec<u8>, index: usize) -> Result<Self> {
        Self::from_bytes(Arc::from(data), index)
    }

    /// Create a font face from a font file on disk.
    pub fn from_path(path: impl AsRef<std::path::Path>, index: usize) -> Result<Self> {
        let data = std::fs::read(path)?;
        Self::from_vec(data, index)
    }

    /// Return a transient `FontRef` for interacting with swash APIs.
    fn as_swash_ref(&self) -> FontRef<'_> {
        FontRef {
            data: &self.data,
            offset: self.offset,
            key: self.key,
        }
    }

    fn metrics_from_swash(font: &FontRef<'_>) -> FontMetrics {
        // Use default (no variation) coordinates.
        let Metrics {
            units_per_em,
            ascent,
            descent,
            leading,
            ..
        } = font.metrics(&[]);

        FontMetrics {
            ascent,
            descent,
            line_gap: leading,
            units_per_em,
        }
    }

    /// Font metrics in font units.
    pub fn metrics(&self) -> FontMetrics {
        self.metrics
    }

    /// Font metrics scaled to the requested pixel size (px per em).
    pub fn scaled_metrics(&self, font_size: f32) -> ScaledFontMetrics {
        self.metrics.scale_to_pixels(font_size)
    }

    fn scale_factor(&self, font_size: f32) -> f32 {
        if self.metrics.units_per_em != 0 {
            font_size / self.metrics.units_per_em as f32
        } else {
            1.0
        }
    }

    /// Advance width of the glyph mapped from `ch` at `font_size`, in pixels.
    pub fn glyph_advance(&self, ch: char, font_size: f32) -> f32 {
        let font = self.as_swash_ref();
        let glyph: GlyphId = font.charmap().map(ch);
        font.glyph_metrics(&[]).advance_width(glyph) * self.scale_factor(font_size)
    }
}

impl TextMetrics for FontFace {
    fn cluster_advance(&self, cluster: &str, font_size: f32) -> f32 {
        cluster
            .chars()
            .map(|ch| self.glyph_advance(ch, font_size))
            .sum()
    }

    fn line_height(&self, font_size: f32) -> f32 {
        self.scaled_metrics(font_size).line_height()
    }
}
