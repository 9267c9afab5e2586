//! vellum-text: boxed text layout and measurement.
//!
//! - font management layer (font loading, metrics, glyph advances)
//! - single-pass word wrap of text into a bounding rectangle
//! - measurement and per-glyph draw emission over the same line table

pub mod font;
pub mod layout;

pub use font::{
    FontError,
    face::FontFace,
    loader::{FontCache, FontKey},
    metrics::{FontMetrics, ScaledFontMetrics, TextMetrics},
};

pub use layout::{BoxedLayout, GlyphDraw, LineBox, WrapMode, draw_text_boxed, measure_text_boxed};
