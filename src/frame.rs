use crate::color::Color;
use crate::command::{CommandBuffer, Region};
use crate::events::{InputState, KeyCode};
use crate::interaction::{self, InteractionId, Registry};
use crate::layer::{Font, ImageStyle, RectStyle, RegionStyle, TextStyle};
use crate::rect::Rect;
use crate::text::TextMeasure;
use cgmath::{Point2, Vector2};
use std::time::Duration;

/// The interface application code sees while describing one frame.
///
/// A frame only exists inside [`Host::frame`](crate::Host::frame), so hover and click queries
/// can’t be made outside of one.
pub struct Frame<'a> {
    pub(crate) input: &'a InputState,
    pub(crate) registry: &'a mut Registry,
    pub(crate) buffer: &'a mut CommandBuffer,
    pub(crate) measure: &'a dyn TextMeasure,
    pub(crate) clear_color: &'a mut Color,
    pub(crate) viewport: Vector2<f64>,
    pub(crate) delta: Duration,
    pub(crate) index: u64,
}

impl<'a> Frame<'a> {
    /// Time since the previous frame; zero for the first one.
    pub fn delta(&self) -> Duration {
        self.delta
    }

    /// Number of frames rendered before this one.
    pub fn index(&self) -> u64 {
        self.index
    }

    pub fn viewport(&self) -> Vector2<f64> {
        self.viewport
    }

    /// The whole viewport as a rectangle at the origin.
    pub fn bounds(&self) -> Rect {
        Rect::from_origin_size(Point2::new(0., 0.), self.viewport)
    }

    pub fn measure_text(&self, font: Option<&Font>, text: &str) -> Vector2<f64> {
        self.measure.measure(font, text)
    }

    // input

    pub fn input(&self) -> &InputState {
        self.input
    }

    pub fn pointer_position(&self) -> Point2<f64> {
        self.input.pointer_position()
    }

    pub fn pointer_pressed(&self) -> bool {
        self.input.pointer_pressed()
    }

    pub fn pointer_down(&self) -> bool {
        self.input.pointer_down()
    }

    pub fn pointer_released(&self) -> bool {
        self.input.pointer_released()
    }

    pub fn key_pressed(&self, code: KeyCode) -> bool {
        self.input.key_pressed(code)
    }

    pub fn key_down(&self, code: KeyCode) -> bool {
        self.input.key_down(code)
    }

    pub fn key_released(&self, code: KeyCode) -> bool {
        self.input.key_released(code)
    }

    // interaction

    pub fn unique_id(&self, rect: Rect, salt: i64) -> InteractionId {
        interaction::unique_id(rect, salt)
    }

    /// See [`Registry::hover`].
    pub fn hover(&mut self, id: InteractionId, rect: Rect) -> bool {
        self.registry.hover(id, rect, self.input)
    }

    /// See [`Registry::click`].
    pub fn click(&mut self, id: InteractionId, rect: Rect) -> bool {
        self.registry.click(id, rect, self.input)
    }

    pub fn is_hovered(&self, id: InteractionId) -> bool {
        self.registry.is_hovered(id)
    }

    pub fn is_focused(&self, id: InteractionId) -> bool {
        self.registry.is_focused(id)
    }

    // drawing

    /// Sets the background color of the root node.
    pub fn clear(&mut self, color: Color) {
        *self.clear_color = color;
    }

    pub fn rect(&mut self, rect: Rect, style: RectStyle) {
        self.buffer.push_rect(rect, style);
    }

    pub fn fill(&mut self, rect: Rect, color: Color) {
        self.buffer.push_rect(rect, RectStyle::filled(color));
    }

    pub fn text(&mut self, rect: Rect, text: &str, style: TextStyle) {
        self.buffer.push_text(rect, text, style);
    }

    pub fn image(&mut self, rect: Rect, style: ImageStyle) {
        self.buffer.push_image(rect, style);
    }

    /// Opens a region. Everything drawn until the matching [`Frame::end_region`] is nested inside
    /// it; coordinates stay global.
    pub fn begin_region(&mut self, rect: Rect, style: RegionStyle) -> Region {
        self.buffer.begin_region(rect, style)
    }

    /// Opens a region that clips its contents.
    pub fn begin_clipping_region(&mut self, rect: Rect) -> Region {
        self.buffer.begin_region(rect, RegionStyle::clipping())
    }

    /// # Panics
    /// If `region` is not the innermost open region.
    pub fn end_region(&mut self, region: Region) {
        self.buffer.end_region(region);
    }

    /// Draws the contents of a region, closing it afterwards.
    pub fn region<R, F>(&mut self, rect: Rect, style: RegionStyle, contents: F) -> R
    where
        F: FnOnce(&mut Frame<'a>) -> R,
    {
        let region = self.begin_region(rect, style);
        let result = contents(self);
        self.end_region(region);
        result
    }
}
