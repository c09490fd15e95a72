//! Style records for each kind of draw command.
//!
//! Every record is closed: it lists exactly the properties its command kind understands. Anything
//! else a particular backend supports goes into `extra`, which is applied last and may override
//! the generated properties.

use crate::color::Color;
use crate::patch::{px, StyleMap};
use cgmath::Vector2;

/// Backend-specific extension properties, as `(key, value)` pairs.
pub type Extra = Vec<(String, String)>;

/// A font description.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Font {
    /// Font family; the backend default if `None`.
    pub family: Option<String>,

    /// Font size in points.
    pub size: Option<f64>,

    /// Numeric weight (400 is regular, 700 is bold).
    pub weight: Option<u16>,

    pub italic: bool,

    pub letter_spacing: Option<f64>,

    pub line_height: Option<f64>,
}

impl Font {
    pub fn new(family: &str, size: f64) -> Font {
        Font {
            family: Some(family.into()),
            size: Some(size),
            ..Font::default()
        }
    }

    fn write_to(&self, styles: &mut StyleMap) {
        if let Some(family) = &self.family {
            styles.set("font-family", family.clone());
        }
        if let Some(size) = self.size {
            styles.set("font-size", px(size));
        }
        if let Some(weight) = self.weight {
            styles.set("font-weight", weight.to_string());
        }
        if self.italic {
            styles.set("font-style", "italic");
        }
        if let Some(spacing) = self.letter_spacing {
            styles.set("letter-spacing", px(spacing));
        }
        if let Some(height) = self.line_height {
            styles.set("line-height", px(height));
        }
    }
}

/// Style of a filled rectangle.
#[derive(Debug, Clone, PartialEq)]
pub struct RectStyle {
    /// Fill color, respecting the corner radius.
    pub color: Color,

    pub corner_radius: f64,

    /// Border (width, color).
    pub border: Option<(f64, Color)>,

    pub opacity: f64,

    pub extra: Extra,
}

impl Default for RectStyle {
    fn default() -> Self {
        RectStyle {
            color: Color::default(),
            corner_radius: 0.,
            border: None,
            opacity: 1.,
            extra: Vec::new(),
        }
    }
}

impl RectStyle {
    pub fn filled(color: Color) -> RectStyle {
        RectStyle {
            color,
            ..RectStyle::default()
        }
    }

    pub(crate) fn write_to(&self, styles: &mut StyleMap) {
        styles.set("background", self.color.to_css());
        if self.corner_radius != 0. {
            styles.set("border-radius", px(self.corner_radius));
        }
        if let Some((width, color)) = self.border {
            styles.set("border", format!("{} solid {}", px(width), color.to_css()));
        }
        if self.opacity != 1. {
            styles.set("opacity", self.opacity.to_string());
        }
        styles.extend(&self.extra);
    }
}

/// Style of a text run.
#[derive(Debug, Clone, PartialEq)]
pub struct TextStyle {
    pub font: Option<Font>,

    pub color: Color,

    /// Where the text sits inside its rectangle: (0, 0) is top left, (0.5, 0.5) is centered and
    /// (1, 1) is bottom right. Other values are treated as the nearest of these.
    pub anchor: Vector2<f64>,

    pub extra: Extra,
}

impl Default for TextStyle {
    fn default() -> Self {
        TextStyle {
            font: None,
            color: Color::WHITE,
            anchor: Vector2::new(0., 0.),
            extra: Vec::new(),
        }
    }
}

impl TextStyle {
    /// White text centered in its rectangle.
    pub fn centered(font: Option<Font>) -> TextStyle {
        TextStyle {
            font,
            anchor: Vector2::new(0.5, 0.5),
            ..TextStyle::default()
        }
    }

    pub(crate) fn write_to(&self, styles: &mut StyleMap) {
        styles.set("color", self.color.to_css());
        if let Some(font) = &self.font {
            font.write_to(styles);
        }

        let horiz = align(self.anchor.x);
        let vert = align(self.anchor.y);
        if horiz.is_some() || vert.is_some() {
            styles.set("display", "flex");
        }
        if let Some(justify) = horiz {
            styles.set("justify-content", justify);
            styles.set("text-align", if justify == "center" { "center" } else { "right" });
        }
        if let Some(align_items) = vert {
            styles.set("align-items", align_items);
        }
        styles.extend(&self.extra);
    }
}

/// Maps an anchor component to a flex alignment; `None` for the start edge.
fn align(anchor: f64) -> Option<&'static str> {
    if anchor >= 0.75 {
        Some("flex-end")
    } else if anchor >= 0.25 {
        Some("center")
    } else {
        None
    }
}

/// Style of an image.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageStyle {
    /// Image location, as understood by the backend (usually a URL).
    pub source: String,

    pub opacity: f64,

    pub extra: Extra,
}

impl ImageStyle {
    pub fn new(source: &str) -> ImageStyle {
        ImageStyle {
            source: source.into(),
            opacity: 1.,
            extra: Vec::new(),
        }
    }

    pub(crate) fn write_to(&self, styles: &mut StyleMap) {
        styles.set("background-image", format!("url(\"{}\")", css_escape(&self.source)));
        styles.set("background-size", "100% 100%");
        if self.opacity != 1. {
            styles.set("opacity", self.opacity.to_string());
        }
        styles.extend(&self.extra);
    }
}

/// Escapes a string for use inside a double-quoted CSS string.
fn css_escape(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len());
    for c in s.chars() {
        if c == '"' || c == '\\' {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// Style of a region container.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RegionStyle {
    /// Whether contents will be clipped to the region’s bounds.
    pub clip_contents: bool,

    pub background: Option<Color>,

    pub corner_radius: f64,

    pub extra: Extra,
}

impl RegionStyle {
    pub fn clipping() -> RegionStyle {
        RegionStyle {
            clip_contents: true,
            ..RegionStyle::default()
        }
    }

    pub(crate) fn write_to(&self, styles: &mut StyleMap) {
        if self.clip_contents {
            styles.set("overflow", "hidden");
        }
        if let Some(background) = self.background {
            styles.set("background", background.to_css());
        }
        if self.corner_radius != 0. {
            styles.set("border-radius", px(self.corner_radius));
        }
        styles.extend(&self.extra);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_text_uses_flex() {
        let mut styles = StyleMap::new();
        TextStyle::centered(Some(Font::new("monospace", 48.))).write_to(&mut styles);
        assert_eq!(styles.get("display"), Some("flex"));
        assert_eq!(styles.get("justify-content"), Some("center"));
        assert_eq!(styles.get("text-align"), Some("center"));
        assert_eq!(styles.get("align-items"), Some("center"));
        assert_eq!(styles.get("font-size"), Some("48px"));
        assert_eq!(styles.get("font-family"), Some("monospace"));
    }

    #[test]
    fn top_left_text_has_no_alignment() {
        let mut styles = StyleMap::new();
        TextStyle::default().write_to(&mut styles);
        assert_eq!(styles.get("display"), None);
        assert_eq!(styles.get("color"), Some("rgba(255, 255, 255, 1)"));
    }

    #[test]
    fn extra_overrides_generated() {
        let mut styles = StyleMap::new();
        let style = RectStyle {
            corner_radius: 8.,
            extra: vec![("background".into(), "papayawhip".into())],
            ..RectStyle::filled(Color::RED)
        };
        style.write_to(&mut styles);
        assert_eq!(styles.get("background"), Some("papayawhip"));
        assert_eq!(styles.get("border-radius"), Some("8px"));
    }

    #[test]
    fn image_source_is_quoted() {
        let mut styles = StyleMap::new();
        ImageStyle::new("a \"b\"\\c\nd.png").write_to(&mut styles);
        assert_eq!(
            styles.get("background-image"),
            Some("url(\"a \\\"b\\\"\\\\c\nd.png\")")
        );
        assert_eq!(styles.get("opacity"), None);
    }

    #[test]
    fn clipping_region() {
        let mut styles = StyleMap::new();
        RegionStyle::clipping().write_to(&mut styles);
        assert_eq!(styles.get("overflow"), Some("hidden"));
        assert_eq!(styles.len(), 1);
    }
}
