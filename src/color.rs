//! Colors.

/// An RGBA color with components nominally in `0..=1`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Color {
    pub const WHITE: Color = Color::rgba(1., 1., 1., 1.);
    pub const BLACK: Color = Color::rgba(0., 0., 0., 1.);
    pub const RED: Color = Color::rgba(1., 0., 0., 1.);
    pub const GREEN: Color = Color::rgba(0., 1., 0., 1.);
    pub const BLUE: Color = Color::rgba(0., 0., 1., 1.);
    pub const TRANSPARENT: Color = Color::rgba(0., 0., 0., 0.);

    pub const fn rgba(r: f64, g: f64, b: f64, a: f64) -> Color {
        Color { r, g, b, a }
    }

    /// Formats the color as a CSS `rgba()` value.
    ///
    /// Components are clamped to `0..=1` first; color channels are then scaled to `0..=255`.
    pub fn to_css(&self) -> String {
        let channel = |v: f64| clamp(v) * 255.;
        format!(
            "rgba({}, {}, {}, {})",
            channel(self.r),
            channel(self.g),
            channel(self.b),
            clamp(self.a)
        )
    }
}

fn clamp(v: f64) -> f64 {
    v.max(0.).min(1.)
}

#[test]
fn test_color_to_css() {
    assert_eq!(Color::WHITE.to_css(), "rgba(255, 255, 255, 1)");
    assert_eq!(Color::rgba(2., -1., 0.5, 0.4).to_css(), "rgba(255, 0, 127.5, 0.4)");
}
