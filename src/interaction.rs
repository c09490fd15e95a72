//! Hover, focus and click resolution for widgets without persistent identity.
//!
//! Widgets are identified by an [`InteractionId`] derived from their geometry and a salt. Every
//! frame, each widget that is hit-tested under the pointer writes itself as the pending hover
//! candidate; the last writer wins, since there is no depth ordering. At the end of the frame the
//! candidate becomes the resolved hover id, which is what the *next* frame's queries see. Click
//! resolution compares the current frame's press edge against that resolved value, so it does
//! not lag.
//!
//! # Collisions
//! Ids are a weak hash of the rectangle coordinates. Two distinct `(rect, salt)` pairs can map to
//! the same id, in which case hover and focus will be shared between them. This is not detected.

use crate::events::InputState;
use crate::rect::Rect;
use cgmath::Point2;

/// Identifies an interactive element across frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct InteractionId(pub i64);

impl InteractionId {
    /// No element. Never produce this on purpose; salt 0 on a zero rect aliases it.
    pub const NONE: InteractionId = InteractionId(0);

    pub fn is_none(self) -> bool {
        self == InteractionId::NONE
    }
}

/// Converts a coordinate to a 32-bit integer with wrapping, truncating the fraction.
fn to_int32(v: f64) -> i32 {
    if !v.is_finite() {
        return 0;
    }
    let m = v.trunc().rem_euclid(4_294_967_296.);
    m as u64 as u32 as i32
}

/// The per-coordinate mixer. Shifts are arithmetic.
fn mix(v: f64) -> i64 {
    let mut v = to_int32(v);
    v ^= (v >> 20) ^ (v >> 12);
    i64::from(v ^ (v >> 7) ^ (v >> 4))
}

/// Derives an id from a rectangle and a caller-supplied salt. The sum wraps.
pub fn unique_id(rect: Rect, salt: i64) -> InteractionId {
    InteractionId(
        mix(rect.x0)
            .wrapping_add(mix(rect.y0))
            .wrapping_add(mix(rect.x1))
            .wrapping_add(mix(rect.y1))
            .wrapping_add(salt),
    )
}

/// Derives an id from a point and a caller-supplied salt.
pub fn unique_point_id(point: Point2<f64>, salt: i64) -> InteractionId {
    InteractionId(mix(point.x).wrapping_add(mix(point.y)).wrapping_add(salt))
}

/// Per-root hover and focus state.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    focus: InteractionId,
    hover: InteractionId,
    pending_hover: InteractionId,
}

impl Registry {
    pub fn new() -> Registry {
        Registry::default()
    }

    /// The hover id resolved at the end of the previous frame.
    pub fn hover_id(&self) -> InteractionId {
        self.hover
    }

    /// The focused id. Focus is sticky until another element is clicked.
    pub fn focus_id(&self) -> InteractionId {
        self.focus
    }

    pub fn is_hovered(&self, id: InteractionId) -> bool {
        self.hover == id
    }

    pub fn is_focused(&self, id: InteractionId) -> bool {
        self.focus == id
    }

    fn track(&mut self, id: InteractionId, rect: Rect, input: &InputState) {
        if rect.contains(input.pointer_position()) {
            self.pending_hover = id;
        }
    }

    /// Hit-tests the pointer against `rect` and returns whether `id` was hovered last frame.
    pub fn hover(&mut self, id: InteractionId, rect: Rect, input: &InputState) -> bool {
        self.track(id, rect, input);
        self.hover == id
    }

    /// Returns true if `id` was hovered last frame and the pointer was pressed this frame, in
    /// which case `id` also becomes focused.
    ///
    /// Otherwise behaves like [`Registry::hover`] and returns false.
    pub fn click(&mut self, id: InteractionId, rect: Rect, input: &InputState) -> bool {
        if self.hover == id && input.pointer_pressed() {
            self.focus = id;
            return true;
        }
        self.track(id, rect, input);
        false
    }

    /// Promotes the pending hover candidate; called once at the end of every frame.
    pub fn end_frame(&mut self) {
        self.hover = self.pending_hover;
        self.pending_hover = InteractionId::NONE;
    }
}
