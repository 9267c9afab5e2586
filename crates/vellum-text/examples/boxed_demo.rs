use vellum_geom::{Color, Rect};
use vellum_text::{TextMetrics, WrapMode, draw_text_boxed, measure_text_boxed};

/// Fixed-advance metrics so the demo runs without a font file on disk.
struct Mono;

impl TextMetrics for Mono {
    fn cluster_advance(&self, cluster: &str, font_size: f32) -> f32 {
        cluster.chars().count() as f32 * font_size * 0.6
    }

    fn line_height(&self, font_size: f32) -> f32 {
        font_size * 1.25
    }
}

fn main() {
    let text = "The quick brown fox jumps over the lazy dog, \
                then wraps neatly inside its box.";
    let bounds = Rect::new(0.0, 0.0, 240.0, 80.0);

    let height = measure_text_boxed(&Mono, text, bounds, 16.0, 0.0, WrapMode::Word);
    println!("Text: {text:?}");
    println!(
        "Box: {}x{} -> measured height {height:.1}px",
        bounds.width, bounds.height
    );
    println!();

    println!("Visible glyphs (lines past the box bottom are clipped):");
    draw_text_boxed(
        &Mono,
        text,
        bounds,
        16.0,
        0.0,
        WrapMode::Word,
        Color::BLACK,
        |glyph| {
            println!(
                "  {:>4} at x={:6.1} y={:5.1}",
                format!("{:?}", glyph.cluster),
                glyph.x,
                glyph.y
            );
        },
    );
}
