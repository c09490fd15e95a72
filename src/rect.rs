//! Rectangles.

use cgmath::{Point2, Vector2};
use std::ops;

/// An axis-aligned rectangle, stored as two corners in global coordinates.
///
/// There is no ordering invariant: `x0` may be larger than `x1`. Width and height are always
/// reported as absolute values, while [`Rect::size`] keeps the sign.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x0: f64,
    pub y0: f64,
    pub x1: f64,
    pub y1: f64,
}

impl Rect {
    /// Creates a new rectangle from its corner coordinates.
    pub fn new(x0: f64, y0: f64, x1: f64, y1: f64) -> Rect {
        Rect { x0, y0, x1, y1 }
    }

    /// Creates a new rectangle spanning two corner points.
    pub fn from_points(p0: Point2<f64>, p1: Point2<f64>) -> Rect {
        Rect::new(p0.x, p0.y, p1.x, p1.y)
    }

    /// Creates a new rectangle with the given origin and size.
    pub fn from_origin_size(origin: Point2<f64>, size: Vector2<f64>) -> Rect {
        Rect::from_points(origin, origin + size)
    }

    /// Returns a zero-sized rectangle at the origin.
    pub fn zero() -> Rect {
        Rect::default()
    }

    /// Returns the first corner.
    pub fn origin(&self) -> Point2<f64> {
        Point2::new(self.x0, self.y0)
    }

    /// Returns the second corner.
    pub fn far_corner(&self) -> Point2<f64> {
        Point2::new(self.x1, self.y1)
    }

    /// Returns the signed extent from the origin to the far corner.
    pub fn size(&self) -> Vector2<f64> {
        Vector2::new(self.x1 - self.x0, self.y1 - self.y0)
    }

    /// Returns the center point.
    pub fn center(&self) -> Point2<f64> {
        self.origin() + self.size() / 2.
    }

    pub fn width(&self) -> f64 {
        (self.x1 - self.x0).abs()
    }

    pub fn height(&self) -> f64 {
        (self.y1 - self.y0).abs()
    }

    /// Returns true if the point is inside the rectangle. All four edges count as inside.
    pub fn contains(&self, point: Point2<f64>) -> bool {
        point.x >= self.x0 && point.x <= self.x1 && point.y >= self.y0 && point.y <= self.y1
    }

    /// Returns a rectangle of the given size centered inside `bounds`.
    pub fn center_in_bounds(bounds: Rect, size: Vector2<f64>) -> Rect {
        let center = bounds.center();
        Rect::new(
            center.x - size.x * 0.5,
            center.y - size.y * 0.5,
            center.x + size.x * 0.5,
            center.y + size.y * 0.5,
        )
    }

    /// Returns a new rectangle moved by the given offset.
    pub fn translate(&self, offset: Vector2<f64>) -> Rect {
        Rect::from_points(self.origin() + offset, self.far_corner() + offset)
    }

    /// Returns a new rectangle inset by the specified amount.
    pub fn inset(&self, horiz: f64, vert: f64) -> Rect {
        Rect::new(
            self.x0 + horiz,
            self.y0 + vert,
            self.x1 - horiz,
            self.y1 - vert,
        )
    }
}

/// Expresses the rectangle relative to another origin.
impl ops::Sub<Point2<f64>> for Rect {
    type Output = Rect;
    fn sub(self, origin: Point2<f64>) -> Rect {
        Rect::new(
            self.x0 - origin.x,
            self.y0 - origin.y,
            self.x1 - origin.x,
            self.y1 - origin.y,
        )
    }
}

#[test]
fn test_rect_measurements() {
    let rect = Rect::new(30., 40., 10., 10.);
    assert_eq!(rect.size(), Vector2::new(-20., -30.));
    assert_eq!(rect.width(), 20.);
    assert_eq!(rect.height(), 30.);
    assert_eq!(rect.center(), Point2::new(20., 25.));
    assert_eq!(rect.far_corner(), Point2::new(10., 10.));
}

#[test]
fn test_rect_contains_edges() {
    let rect = Rect::new(0., 0., 20., 20.);
    assert!(rect.contains(Point2::new(0., 0.)));
    assert!(rect.contains(Point2::new(20., 20.)));
    assert!(rect.contains(Point2::new(20., 0.)));
    assert!(!rect.contains(Point2::new(20.5, 10.)));
    assert!(!rect.contains(Point2::new(10., -0.1)));
}

#[test]
fn test_rect_center_in_bounds() {
    let bounds = Rect::new(0., 0., 800., 600.);
    let rect = Rect::center_in_bounds(bounds, Vector2::new(256., 48.));
    assert_eq!(rect, Rect::new(272., 276., 528., 324.));
    assert_eq!(rect.center(), bounds.center());
}

#[test]
fn test_rect_relative() {
    let rect = Rect::new(50., 60., 70., 90.) - Point2::new(10., 20.);
    assert_eq!(rect, Rect::new(40., 40., 60., 70.));
    assert_eq!(rect.translate(Vector2::new(10., 20.)), Rect::new(50., 60., 70., 90.));
}
