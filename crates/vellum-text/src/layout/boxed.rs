use unicode_segmentation::UnicodeSegmentation;

use vellum_geom::{Color, Rect};

use crate::font::TextMetrics;
use crate::layout::{LineBox, WrapMode};

/// Word-wrapped layout of a string inside a bounding rectangle.
///
/// The layout is ephemeral: it is recomputed on every call and holds
/// nothing beyond the line table, so both measurement and drawing are
/// pure functions of their inputs.
#[derive(Debug, Clone, Default)]
pub struct BoxedLayout {
    lines: Vec<LineBox>,
    height: f32,
}

/// Break candidate: the most recent whitespace cluster on the line.
struct BreakPoint {
    /// Byte offset of the whitespace cluster.
    start: usize,
    /// Byte offset just past the whitespace cluster.
    end: usize,
    /// Line width up to (excluding) the whitespace.
    width_before: f32,
    /// Width accumulated after the whitespace, internal spacing included.
    width_after: f32,
    /// Number of clusters accumulated after the whitespace.
    clusters_after: usize,
}

impl BoxedLayout {
    /// Wrap `text` into `bounds` with no extra padding between lines.
    pub fn new<M: TextMetrics + ?Sized>(
        metrics: &M,
        text: &str,
        bounds: Rect,
        font_size: f32,
        spacing: f32,
        wrap: WrapMode,
    ) -> Self {
        Self::with_line_padding(metrics, text, bounds, font_size, spacing, wrap, 0.0)
    }

    /// Wrap `text` into `bounds`, spreading lines apart by `line_padding`
    /// pixels on top of the font's own line height.
    ///
    /// Degenerate inputs (empty text, non-positive font size, empty
    /// rectangle) yield an empty layout rather than an error.
    pub fn with_line_padding<M: TextMetrics + ?Sized>(
        metrics: &M,
        text: &str,
        bounds: Rect,
        font_size: f32,
        spacing: f32,
        wrap: WrapMode,
        line_padding: f32,
    ) -> Self {
        if text.is_empty() || font_size <= 0.0 || bounds.is_empty() {
            return Self::default();
        }

        let line_height = metrics.line_height(font_size) + line_padding;
        let mut lines: Vec<LineBox> = Vec::new();
        let mut y = 0.0f32;

        let mut flush = |start: usize, end: usize, width: f32, y: &mut f32| {
            lines.push(LineBox {
                text_range: start..end,
                width,
                height: line_height,
                y_offset: *y,
            });
            *y += line_height;
        };

        let mut line_start = 0usize;
        let mut line_width = 0.0f32;
        let mut cluster_count = 0usize;
        let mut break_point: Option<BreakPoint> = None;

        for (idx, cluster) in text.grapheme_indices(true) {
            if matches!(cluster, "\n" | "\r\n" | "\r") {
                flush(line_start, idx, line_width, &mut y);
                line_start = idx + cluster.len();
                line_width = 0.0;
                cluster_count = 0;
                break_point = None;
                continue;
            }

            let advance = metrics.cluster_advance(cluster, font_size);
            let is_whitespace = cluster.chars().all(char::is_whitespace);
            let sep = if cluster_count == 0 { 0.0 } else { spacing };

            if cluster_count > 0 && line_width + sep + advance > bounds.width {
                match (wrap, break_point.take()) {
                    (WrapMode::Word, _) if is_whitespace => {
                        // The overflowing cluster is itself a break: end the
                        // line here and swallow the whitespace.
                        flush(line_start, idx, line_width, &mut y);
                        line_start = idx + cluster.len();
                        line_width = 0.0;
                        cluster_count = 0;
                        continue;
                    }
                    (WrapMode::Word, Some(bp)) => {
                        // Wrap at the last whitespace; the clusters after it
                        // move down along with the one that overflowed.
                        flush(line_start, bp.start, bp.width_before, &mut y);
                        line_start = bp.end;
                        let sep = if bp.clusters_after == 0 { 0.0 } else { spacing };
                        line_width = bp.width_after + sep + advance;
                        cluster_count = bp.clusters_after + 1;
                    }
                    _ => {
                        // Character wrap: the overflowing cluster opens the
                        // next line.
                        flush(line_start, idx, line_width, &mut y);
                        line_start = idx;
                        line_width = advance;
                        cluster_count = 1;
                    }
                }
            } else {
                if is_whitespace && wrap == WrapMode::Word {
                    break_point = Some(BreakPoint {
                        start: idx,
                        end: idx + cluster.len(),
                        width_before: line_width,
                        width_after: 0.0,
                        clusters_after: 0,
                    });
                } else if let Some(bp) = break_point.as_mut() {
                    let sep = if bp.clusters_after == 0 { 0.0 } else { spacing };
                    bp.width_after += sep + advance;
                    bp.clusters_after += 1;
                }
                line_width += sep + advance;
                cluster_count += 1;
            }
        }

        flush(line_start, text.len(), line_width, &mut y);

        Self { lines, height: y }
    }

    /// All wrapped lines, top to bottom.
    pub fn lines(&self) -> &[LineBox] {
        &self.lines
    }

    /// Total vertical extent of the wrapped text in pixels.
    pub fn height(&self) -> f32 {
        self.height
    }
}

/// A single glyph emission from [`draw_text_boxed`].
#[derive(Debug, Clone, Copy)]
pub struct GlyphDraw<'a> {
    /// Grapheme cluster to render.
    pub cluster: &'a str,
    /// Pen X position in the caller's coordinate space.
    pub x: f32,
    /// Line-top Y position in the caller's coordinate space.
    pub y: f32,
    /// Font size the cluster was measured at.
    pub font_size: f32,
    /// Tint to render with.
    pub tint: Color,
}

/// Measure the total height `text` occupies when wrapped to the width of
/// `bounds`.
///
/// Returns 0.0 for degenerate inputs; never fails.
pub fn measure_text_boxed<M: TextMetrics + ?Sized>(
    metrics: &M,
    text: &str,
    bounds: Rect,
    font_size: f32,
    spacing: f32,
    wrap: WrapMode,
) -> f32 {
    BoxedLayout::new(metrics, text, bounds, font_size, spacing, wrap).height()
}

/// Wrap `text` into `bounds` and emit a [`GlyphDraw`] per visible cluster.
///
/// Lines whose bottom edge falls outside the rectangle are skipped
/// entirely; whitespace advances the pen without emitting. Returns the
/// same total height as [`measure_text_boxed`] for the same inputs.
#[allow(clippy::too_many_arguments)]
pub fn draw_text_boxed<'a, M, F>(
    metrics: &M,
    text: &'a str,
    bounds: Rect,
    font_size: f32,
    spacing: f32,
    wrap: WrapMode,
    tint: Color,
    mut emit: F,
) -> f32
where
    M: TextMetrics + ?Sized,
    F: FnMut(GlyphDraw<'a>),
{
    let layout = BoxedLayout::new(metrics, text, bounds, font_size, spacing, wrap);

    for line in layout.lines() {
        if line.bottom_y() > bounds.height {
            break;
        }

        let mut pen_x = bounds.x;
        let mut first = true;
        for cluster in text[line.text_range.clone()].graphemes(true) {
            if !first {
                pen_x += spacing;
            }
            first = false;

            if !cluster.chars().all(char::is_whitespace) {
                emit(GlyphDraw {
                    cluster,
                    x: pen_x,
                    y: bounds.y + line.y_offset,
                    font_size,
                    tint,
                });
            }
            pen_x += metrics.cluster_advance(cluster, font_size);
        }
    }

    layout.height()
}
