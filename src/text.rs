//! Text measurement.

use crate::layer::Font;
use cgmath::Vector2;

/// Measures text for layout purposes. The reconciler never calls this; only application code does.
pub trait TextMeasure {
    /// Returns the size of `text` when rendered with `font` (or the default font).
    fn measure(&self, font: Option<&Font>, text: &str) -> Vector2<f64>;
}

/// Approximates every font as monospace.
///
/// Widths are `advance * size` per character, heights `line_height * size` per line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonospaceMeasure {
    /// Character advance, as a fraction of the font size.
    pub advance: f64,
    /// Line height, as a fraction of the font size.
    pub line_height: f64,
    /// Font size used when the font doesn’t specify one.
    pub default_size: f64,
}

impl Default for MonospaceMeasure {
    fn default() -> Self {
        MonospaceMeasure {
            advance: 0.6,
            line_height: 1.2,
            default_size: 16.,
        }
    }
}

impl TextMeasure for MonospaceMeasure {
    fn measure(&self, font: Option<&Font>, text: &str) -> Vector2<f64> {
        let size = font.and_then(|f| f.size).unwrap_or(self.default_size);
        if text.is_empty() {
            return Vector2::new(0., 0.);
        }
        let columns = text.lines().map(|l| l.chars().count()).max().unwrap_or(0);
        let lines = text.lines().count().max(1);
        Vector2::new(
            columns as f64 * self.advance * size,
            lines as f64 * self.line_height * size,
        )
    }
}

#[test]
fn test_monospace_measure() {
    let measure = MonospaceMeasure {
        advance: 0.5,
        line_height: 1.25,
        default_size: 16.,
    };
    let font = Font::new("monospace", 10.);
    assert_eq!(measure.measure(Some(&font), "abcd"), Vector2::new(20., 12.5));
    assert_eq!(measure.measure(Some(&font), "ab\nabcdef"), Vector2::new(30., 25.));
    assert_eq!(measure.measure(None, ""), Vector2::new(0., 0.));
    assert_eq!(measure.measure(None, "a"), Vector2::new(8., 20.));
}
