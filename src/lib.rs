//! Facade over the vellum workspace: boxed text layout, measurement, and
//! per-glyph draw emission, plus the geometry value types and the
//! configuration layer.

pub use vellum_config as config;
pub use vellum_geom as geom;
pub use vellum_text as text;

pub use vellum_geom::{Color, Mat4, Rect};
pub use vellum_text::{
    BoxedLayout, FontCache, FontFace, GlyphDraw, TextMetrics, WrapMode, draw_text_boxed,
    measure_text_boxed,
};
