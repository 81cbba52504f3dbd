//! Bullet kinematics and lifetime

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::vector::from_angle;

/// How long a bullet may fly
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BulletLifetime {
    /// Ticks before the bullet expires
    pub ticks: u32,
    /// Optional path-length bound
    pub max_travel: Option<f32>,
}

/// A point projectile owned by the tank that fired it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bullet {
    location: Vec2,
    velocity: Vec2,
    /// Heading at launch (informational, reflections don't change it)
    rotation: f32,
    origin: Vec2,
    ticks_remaining: u32,
    max_travel: Option<f32>,
    traveled: f32,
    alive: bool,
}

impl Bullet {
    pub fn new(location: Vec2, rotation: f32, speed: f32, lifetime: BulletLifetime) -> Self {
        Self {
            location,
            velocity: from_angle(rotation) * speed,
            rotation,
            origin: location,
            ticks_remaining: lifetime.ticks,
            max_travel: lifetime.max_travel,
            traveled: 0.0,
            alive: lifetime.ticks > 0,
        }
    }

    /// Move one tick along the current velocity and spend one tick of lifetime
    pub fn advance(&mut self) {
        if !self.alive {
            return;
        }

        self.location += self.velocity;
        self.traveled += self.velocity.length();
        self.ticks_remaining = self.ticks_remaining.saturating_sub(1);

        let out_of_range = self.max_travel.is_some_and(|max| self.traveled >= max);
        if self.ticks_remaining == 0 || out_of_range {
            self.alive = false;
        }
    }

    /// Replace the velocity (lifetime is untouched)
    #[inline]
    pub fn set_velocity(&mut self, velocity: Vec2) {
        self.velocity = velocity;
    }

    /// Kill the bullet now
    #[inline]
    pub fn expire(&mut self) {
        self.alive = false;
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        self.alive
    }

    #[inline]
    pub fn location(&self) -> Vec2 {
        self.location
    }

    #[inline]
    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    #[inline]
    pub fn rotation(&self) -> f32 {
        self.rotation
    }

    #[inline]
    pub fn origin(&self) -> Vec2 {
        self.origin
    }

    #[inline]
    pub fn traveled(&self) -> f32 {
        self.traveled
    }

    #[inline]
    pub fn ticks_remaining(&self) -> u32 {
        self.ticks_remaining
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lifetime(ticks: u32) -> BulletLifetime {
        BulletLifetime {
            ticks,
            max_travel: None,
        }
    }

    #[test]
    fn test_integration_law() {
        let mut bullet = Bullet::new(Vec2::new(10.0, 20.0), 0.0, 5.0, lifetime(100));
        let v = bullet.velocity();
        for _ in 0..7 {
            bullet.advance();
        }
        let expected = Vec2::new(10.0, 20.0) + v * 7.0;
        assert!((bullet.location() - expected).length() < 1e-4);
        assert_eq!(bullet.ticks_remaining(), 93);
        assert!(bullet.is_alive());
    }

    #[test]
    fn test_expires_after_budget() {
        let mut bullet = Bullet::new(Vec2::ZERO, 0.0, 1.0, lifetime(3));
        bullet.advance();
        bullet.advance();
        assert!(bullet.is_alive());
        bullet.advance();
        assert!(!bullet.is_alive());

        // Dead bullets stay put
        let loc = bullet.location();
        bullet.advance();
        assert_eq!(bullet.location(), loc);
    }

    #[test]
    fn test_expires_after_travel() {
        let mut bullet = Bullet::new(
            Vec2::ZERO,
            0.0,
            4.0,
            BulletLifetime {
                ticks: 1000,
                max_travel: Some(10.0),
            },
        );
        bullet.advance();
        bullet.advance();
        assert!(bullet.is_alive());
        bullet.advance();
        assert!(!bullet.is_alive());
        assert!((bullet.traveled() - 12.0).abs() < 1e-5);
    }

    #[test]
    fn test_set_velocity_keeps_lifetime() {
        let mut bullet = Bullet::new(Vec2::ZERO, 0.0, 1.0, lifetime(5));
        bullet.advance();
        bullet.set_velocity(Vec2::new(0.0, -3.0));
        assert_eq!(bullet.ticks_remaining(), 4);
        assert_eq!(bullet.rotation(), 0.0);
        bullet.advance();
        assert!((bullet.location() - Vec2::new(1.0, -3.0)).length() < 1e-5);
    }

    #[test]
    fn test_expire() {
        let mut bullet = Bullet::new(Vec2::ZERO, 1.0, 1.0, lifetime(5));
        bullet.expire();
        assert!(!bullet.is_alive());
        assert_eq!(bullet.origin(), Vec2::ZERO);
    }
}
