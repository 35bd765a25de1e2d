//! Pill geometry.
//!
//! A pill of height `h` is two half circles of radius `h / 2` joined by
//! straight edges. Their centers are the focal points: the knob rests on
//! the left one when off and on the right one when on.

use pillswitch_core::{Point, Rect};

/// Radius of the end caps (and of the knob) for a pill filling `bounds`.
#[must_use]
pub fn cap_radius(bounds: Rect) -> f32 {
    bounds.height / 2.0
}

/// Center of the left end cap.
#[must_use]
pub fn left_focal_point(bounds: Rect) -> Point {
    let radius = cap_radius(bounds);
    Point::new(bounds.x + radius, bounds.y + radius)
}

/// Center of the right end cap.
#[must_use]
pub fn right_focal_point(bounds: Rect) -> Point {
    let radius = cap_radius(bounds);
    Point::new(bounds.x + bounds.width - radius, bounds.y + radius)
}

/// Both focal points, left first.
#[must_use]
pub fn focal_points(bounds: Rect) -> (Point, Point) {
    (left_focal_point(bounds), right_focal_point(bounds))
}
