//! Collision tests for circles
//!
//! Everything in Snowfall is a circle: the player is drawn as one and the
//! snowflakes are one. Touching edges (distance == sum of radii) is a miss.

use glam::Vec2;

/// True if two circles overlap
#[inline]
pub fn circles_overlap(a: Vec2, a_radius: f32, b: Vec2, b_radius: f32) -> bool {
    a.distance(b) < a_radius + b_radius
}

/// True if a point lies strictly inside a circle
#[inline]
pub fn point_in_circle(point: Vec2, center: Vec2, radius: f32) -> bool {
    point.distance(center) < radius
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlapping_circles() {
        let player = Vec2::new(287.5, 362.5);
        let flake = Vec2::new(300.0, 330.0);
        assert!(circles_overlap(player, 12.5, flake, 30.0));
    }

    #[test]
    fn test_touching_is_a_miss() {
        let a = Vec2::new(0.0, 0.0);
        let b = Vec2::new(42.5, 0.0);
        assert!(!circles_overlap(a, 12.5, b, 30.0));
    }

    #[test]
    fn test_point_in_circle() {
        let center = Vec2::new(100.0, 100.0);
        assert!(point_in_circle(Vec2::new(110.0, 120.0), center, 30.0));
        assert!(!point_in_circle(Vec2::new(130.0, 100.0), center, 30.0));
        assert!(!point_in_circle(Vec2::new(200.0, 200.0), center, 30.0));
    }
}
