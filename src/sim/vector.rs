//! 2D vector helpers
//!
//! `Vector2` is glam's `Vec2`: a `Copy` value type. Reading a tank's heading
//! or a bullet's velocity always hands out a copy, so two entities can never
//! end up sharing one mutable vector.

use glam::Vec2;

pub type Vector2 = Vec2;

/// Unit vector pointing along `theta` (radians, 0 = +x)
#[inline]
pub fn from_angle(theta: f32) -> Vector2 {
    Vec2::new(theta.cos(), theta.sin())
}

/// Extra vector operations used by the simulation
pub trait VectorExt: Sized {
    fn magnitude(self) -> f32;

    /// Unit vector in the same direction, or zero when there is no direction
    fn normalized(self) -> Self;

    /// Same direction with length `m`; zero stays zero
    fn with_magnitude(self, m: f32) -> Self;

    fn scaled(self, k: f32) -> Self;
}

impl VectorExt for Vec2 {
    #[inline]
    fn magnitude(self) -> f32 {
        self.length()
    }

    #[inline]
    fn normalized(self) -> Self {
        self.normalize_or_zero()
    }

    #[inline]
    fn with_magnitude(self, m: f32) -> Self {
        self.normalized() * m
    }

    #[inline]
    fn scaled(self, k: f32) -> Self {
        self * k
    }
}
