use palette::{FromColor, LinSrgba, Srgba};
use serde::{Deserialize, Serialize};

/// sRGB color with straight (unpremultiplied) alpha.
///
/// Used as the tint on emitted glyphs. Conversion to the linear
/// premultiplied form most render backends want goes through `palette`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    pub const BLACK: Self = Self::rgb(0, 0, 0);

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, 255)
    }

    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    /// Convert to linear premultiplied RGBA components.
    pub fn to_linear_premul(&self) -> [f32; 4] {
        let s = Srgba::new(
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
            self.a as f32 / 255.0,
        );
        let lin: LinSrgba = LinSrgba::from_color(s);
        [
            lin.red * lin.alpha,
            lin.green * lin.alpha,
            lin.blue * lin.alpha,
            lin.alpha,
        ]
    }

    /// Rebuild from linear premultiplied RGBA components.
    pub fn from_linear_premul(c: [f32; 4]) -> Self {
        // Unpremultiply
        let (r, g, b) = if c[3] > 0.0001 {
            (c[0] / c[3], c[1] / c[3], c[2] / c[3])
        } else {
            (0.0, 0.0, 0.0)
        };

        let lin = LinSrgba::new(r, g, b, c[3]);
        let srgb: Srgba = Srgba::from_color(lin);

        Self {
            r: (srgb.red * 255.0).round().clamp(0.0, 255.0) as u8,
            g: (srgb.green * 255.0).round().clamp(0.0, 255.0) as u8,
            b: (srgb.blue * 255.0).round().clamp(0.0, 255.0) as u8,
            a: (srgb.alpha * 255.0).round().clamp(0.0, 255.0) as u8,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opaque_roundtrip() {
        let c = Color::rgba(200, 100, 50, 255);
        let lin = c.to_linear_premul();
        assert_eq!(Color::from_linear_premul(lin), c);
    }

    #[test]
    fn translucent_roundtrip_within_rounding() {
        let c = Color::rgba(200, 100, 50, 128);
        let back = Color::from_linear_premul(c.to_linear_premul());
        assert!((back.r as i16 - c.r as i16).abs() <= 1);
        assert!((back.g as i16 - c.g as i16).abs() <= 1);
        assert!((back.b as i16 - c.b as i16).abs() <= 1);
        assert_eq!(back.a, c.a);
    }

    #[test]
    fn fully_transparent_premultiplies_to_zero() {
        let lin = Color::rgba(255, 255, 255, 0).to_linear_premul();
        assert_eq!(lin, [0.0, 0.0, 0.0, 0.0]);
    }
}
