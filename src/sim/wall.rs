//! Straight wall geometry
//!
//! A wall is the infinite line through two points. Its thickness is not part
//! of the geometry; collision code adds `wall_width / 2` to the threshold.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Immutable wall line
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Wall {
    start: Vec2,
    end: Vec2,
}

impl Wall {
    pub fn new(start: Vec2, end: Vec2) -> Self {
        Self { start, end }
    }

    /// The line `y = a·x + b`
    pub fn from_slope_intercept(a: f32, b: f32) -> Self {
        Self::new(Vec2::new(0.0, b), Vec2::new(1.0, a + b))
    }

    /// The line `x = x`
    pub fn vertical(x: f32) -> Self {
        Self::new(Vec2::new(x, 0.0), Vec2::new(x, 1.0))
    }

    #[inline]
    pub fn start(&self) -> Vec2 {
        self.start
    }

    #[inline]
    pub fn end(&self) -> Vec2 {
        self.end
    }

    /// Rise over run, `None` for a vertical wall
    pub fn slope(&self) -> Option<f32> {
        let d = self.end - self.start;
        if d.x == 0.0 { None } else { Some(d.y / d.x) }
    }

    /// Perpendicular distance from the line to `p`
    pub fn distance_to_point(&self, p: Vec2) -> f32 {
        let dir = self.end - self.start;
        let len = dir.length();
        if len == 0.0 {
            // Degenerate wall, treat it as a point
            return (p - self.start).length();
        }
        dir.perp_dot(p - self.start).abs() / len
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slope() {
        assert_eq!(Wall::new(Vec2::ZERO, Vec2::new(2.0, 1.0)).slope(), Some(0.5));
        assert_eq!(Wall::vertical(10.0).slope(), None);
        assert_eq!(Wall::from_slope_intercept(-3.0, 7.0).slope(), Some(-3.0));
    }

    #[test]
    fn test_distance_horizontal() {
        let wall = Wall::new(Vec2::new(0.0, 50.0), Vec2::new(100.0, 50.0));
        assert!((wall.distance_to_point(Vec2::new(20.0, 58.0)) - 8.0).abs() < 1e-5);
        assert!((wall.distance_to_point(Vec2::new(20.0, 42.0)) - 8.0).abs() < 1e-5);
    }

    #[test]
    fn test_distance_is_to_infinite_line() {
        let wall = Wall::new(Vec2::new(0.0, 0.0), Vec2::new(10.0, 0.0));
        // Far beyond the endpoints, still measured perpendicular to the line
        assert!((wall.distance_to_point(Vec2::new(500.0, 3.0)) - 3.0).abs() < 1e-4);
    }

    #[test]
    fn test_distance_diagonal() {
        let wall = Wall::from_slope_intercept(1.0, 0.0);
        let d = wall.distance_to_point(Vec2::new(0.0, 2.0));
        assert!((d - 2.0_f32.sqrt()).abs() < 1e-5);
    }

    #[test]
    fn test_distance_vertical() {
        let wall = Wall::vertical(100.0);
        assert!((wall.distance_to_point(Vec2::new(97.0, 400.0)) - 3.0).abs() < 1e-5);
    }

    #[test]
    fn test_degenerate_wall() {
        let wall = Wall::new(Vec2::new(1.0, 1.0), Vec2::new(1.0, 1.0));
        assert!((wall.distance_to_point(Vec2::new(4.0, 5.0)) - 5.0).abs() < 1e-5);
    }
}
