use vellum_geom::Rect;
use vellum_text::{BoxedLayout, TextMetrics, WrapMode};

struct Mono;

impl TextMetrics for Mono {
    fn cluster_advance(&self, cluster: &str, font_size: f32) -> f32 {
        cluster.chars().count() as f32 * font_size * 0.6
    }

    fn line_height(&self, font_size: f32) -> f32 {
        font_size * 1.25
    }
}

fn print_lines(label: &str, text: &str, layout: &BoxedLayout) {
    println!("{label}:");
    for line in layout.lines() {
        println!(
            "  {:?} (width {:.1}, y {:.1})",
            &text[line.text_range.clone()],
            line.width,
            line.y_offset
        );
    }
    println!("  total height: {:.1}px", layout.height());
    println!();
}

fn main() {
    let text = "word wrapping versus character wrapping";
    let bounds = Rect::new(0.0, 0.0, 130.0, 400.0);

    let word = BoxedLayout::new(&Mono, text, bounds, 16.0, 0.0, WrapMode::Word);
    print_lines("WrapMode::Word", text, &word);

    let character = BoxedLayout::new(&Mono, text, bounds, 16.0, 0.0, WrapMode::Character);
    print_lines("WrapMode::Character", text, &character);
}
