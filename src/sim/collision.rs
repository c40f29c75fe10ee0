//! Collision predicates for the ball, walls, paddle and bricks
//!
//! Everything here is an overlap or crossing test; the reaction (an
//! axis-aligned velocity sign flip) is decided by the tick function.

use glam::Vec2;

use super::rect::Rect;
use crate::consts::{SCREEN_HEIGHT, SCREEN_WIDTH};

/// Check overlap between a circle and an axis-aligned rectangle
///
/// Closest-point test: the circle overlaps the rectangle iff the nearest
/// point of the rectangle to the circle center lies within the radius.
pub fn circle_overlaps_rect(center: Vec2, radius: f32, rect: &Rect) -> bool {
    let closest = rect.closest_point(center);
    center.distance_squared(closest) <= radius * radius
}

/// True when the circle's leading edge crosses the left or right wall
pub fn crosses_side_wall(center: Vec2, radius: f32) -> bool {
    center.x + radius >= SCREEN_WIDTH || center.x - radius <= 0.0
}

/// True when the circle's leading edge crosses the top wall
pub fn crosses_top_wall(center: Vec2, radius: f32) -> bool {
    center.y - radius <= 0.0
}

/// True when the circle's center has fallen past the bottom of the screen
///
/// The bottom wall never bounces; falling through it is the out-of-bounds
/// condition that costs a life.
pub fn out_of_bounds(center: Vec2, radius: f32) -> bool {
    center.y >= SCREEN_HEIGHT + radius
}
