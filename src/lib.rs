//! Tank Duel - simulation core for a top-down two-player tank game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (tanks, bullets, walls, reflection, ticking)
//! - `tuning`: Data-driven game balance (all gameplay constants, JSON-loadable)
//!
//! Rendering, key mapping and frame timing live outside this crate. The core
//! takes discrete [`sim::ControlEvent`]s and exposes read-only state.

pub mod sim;
pub mod tuning;

pub use tuning::{Tuning, TuningError};

use std::f32::consts::TAU;

/// Default gameplay constants (overridable through [`Tuning`])
pub mod consts {
    /// Arena dimensions
    pub const ARENA_WIDTH: f32 = 800.0;
    pub const ARENA_HEIGHT: f32 = 600.0;

    /// Tank body and cannon shaft
    pub const TANK_WIDTH: f32 = 40.0;
    pub const TANK_HEIGHT: f32 = 30.0;
    pub const TANK_SHAFT_WIDTH: f32 = 6.0;
    pub const TANK_SHAFT_HEIGHT: f32 = 20.0;

    /// Tank motion (per tick)
    pub const TANK_ROTATIONAL_VEL: f32 = 0.05;
    pub const TANK_DRIVING_VEL: f32 = 2.0;

    pub const TANK_START_HEALTH: f32 = 100.0;
    /// Radius of the circle used for bullet-vs-tank hits
    pub const TANK_HIT_RADIUS: f32 = 20.0;

    /// Bullet defaults
    pub const BULLET_SPEED: f32 = 5.0;
    pub const BULLET_RADIUS: f32 = 4.0;
    pub const BULLET_LIFETIME_TICKS: u32 = 300;
    pub const BULLET_DAMAGE: f32 = 10.0;

    /// Full thickness of a wall
    pub const WALL_WIDTH: f32 = 10.0;

    /// Ticks between shots (0 = limited only by the trigger edge)
    pub const FIRE_DELAY_TICKS: u32 = 0;
}

/// Largest representable rotation strictly below 2π
pub const MAX_ROTATION: f32 = f32::from_bits(TAU.to_bits() - 1);

/// Normalize an angle to [0, 2π)
#[inline]
pub fn normalize_rotation(angle: f32) -> f32 {
    let wrapped = angle.rem_euclid(TAU);
    // rem_euclid can round up to exactly TAU for tiny negative inputs
    if wrapped >= TAU { 0.0 } else { wrapped }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_max_rotation_below_tau() {
        assert!(MAX_ROTATION < TAU);
        assert!(TAU - MAX_ROTATION < 1e-5);
    }

    #[test]
    fn test_normalize_rotation() {
        assert_eq!(normalize_rotation(0.0), 0.0);
        assert!((normalize_rotation(TAU + 1.0) - 1.0).abs() < 1e-5);
        assert!((normalize_rotation(-1.0) - (TAU - 1.0)).abs() < 1e-5);
        assert!(normalize_rotation(-1e-9) < TAU);
        assert_eq!(normalize_rotation(TAU), 0.0);
    }
}
