pub mod boxed;
pub mod line_box;

pub use boxed::{BoxedLayout, GlyphDraw, draw_text_boxed, measure_text_boxed};
pub use line_box::LineBox;

/// Line wrapping strategy inside a bounding rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WrapMode {
    /// Break at the most recent whitespace cluster on the line, falling
    /// back to cluster boundaries when a single word exceeds the box width.
    #[default]
    Word,
    /// Break between grapheme clusters wherever the width runs out.
    Character,
}
