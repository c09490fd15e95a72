//! Simple widgets built on top of [`Frame`].

use crate::color::Color;
use crate::frame::Frame;
use crate::layer::{RectStyle, TextStyle};
use crate::rect::Rect;

/// Salt for button ids.
const BUTTON_SALT: i64 = 1;

/// A push button. Returns true in the frame it was clicked.
///
/// The button is black, turns dark red while hovered and green for the frame it is clicked in.
pub fn button(frame: &mut Frame<'_>, rect: Rect, label: &str) -> bool {
    let id = frame.unique_id(rect, BUTTON_SALT);

    let clicked = frame.click(id, rect);
    let mut color = Color::BLACK;
    if frame.is_hovered(id) {
        color.r = 0.3;
    }
    if clicked {
        color = Color::GREEN;
    }

    let region = frame.begin_clipping_region(rect);
    frame.rect(
        rect,
        RectStyle {
            corner_radius: 8.,
            ..RectStyle::filled(color)
        },
    );
    frame.text(rect, label, TextStyle::centered(None));
    frame.end_region(region);

    clicked
}

/// A text label centered in `rect`.
pub fn label(frame: &mut Frame<'_>, rect: Rect, text: &str, color: Color) {
    frame.text(
        rect,
        text,
        TextStyle {
            color,
            ..TextStyle::centered(None)
        },
    );
}
