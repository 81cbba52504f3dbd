//! Data-driven game balance
//!
//! Every gameplay constant the simulation reads lives in [`Tuning`]. Missing
//! JSON fields fall back to the defaults in [`crate::consts`].

use std::f32::consts::TAU;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::sim::{Arena, BulletLifetime};

/// Errors produced while loading or validating a [`Tuning`]
#[derive(thiserror::Error, Debug)]
pub enum TuningError {
    /// The JSON text could not be parsed
    #[error("failed to parse tuning: {0}")]
    Parse(#[from] serde_json::Error),
    /// A field holds a value the simulation cannot run with
    #[error("invalid tuning field `{field}`: {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

/// Gameplay constants
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Arena ===
    pub arena_width: f32,
    pub arena_height: f32,

    // === Tank ===
    pub tank_width: f32,
    pub tank_height: f32,
    pub shaft_width: f32,
    pub shaft_height: f32,
    /// Radians per tick while a rotate control is held
    pub rotation_speed: f32,
    /// Distance per tick while a drive control is held
    pub drive_speed: f32,
    pub tank_start_health: f32,
    pub tank_hit_radius: f32,
    /// Cooldown after each shot, in ticks
    pub fire_delay_ticks: u32,

    // === Bullet ===
    pub bullet_speed: f32,
    pub bullet_radius: f32,
    pub bullet_lifetime_ticks: u32,
    /// Optional path-length bound on top of the tick budget
    pub bullet_max_travel: Option<f32>,
    pub bullet_damage: f32,

    // === Wall ===
    pub wall_width: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            arena_width: ARENA_WIDTH,
            arena_height: ARENA_HEIGHT,

            tank_width: TANK_WIDTH,
            tank_height: TANK_HEIGHT,
            shaft_width: TANK_SHAFT_WIDTH,
            shaft_height: TANK_SHAFT_HEIGHT,
            rotation_speed: TANK_ROTATIONAL_VEL,
            drive_speed: TANK_DRIVING_VEL,
            tank_start_health: TANK_START_HEALTH,
            tank_hit_radius: TANK_HIT_RADIUS,
            fire_delay_ticks: FIRE_DELAY_TICKS,

            bullet_speed: BULLET_SPEED,
            bullet_radius: BULLET_RADIUS,
            bullet_lifetime_ticks: BULLET_LIFETIME_TICKS,
            bullet_max_travel: None,
            bullet_damage: BULLET_DAMAGE,

            wall_width: WALL_WIDTH,
        }
    }
}

impl Tuning {
    /// Parse and validate tuning from JSON text
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        log::info!(
            "Loaded tuning (arena {}x{}, bullet lifetime {} ticks)",
            tuning.arena_width,
            tuning.arena_height,
            tuning.bullet_lifetime_ticks
        );
        Ok(tuning)
    }

    /// Check that every field is usable by the simulation
    pub fn validate(&self) -> Result<(), TuningError> {
        let positive = [
            ("arena_width", self.arena_width),
            ("arena_height", self.arena_height),
            ("tank_width", self.tank_width),
            ("tank_height", self.tank_height),
            ("drive_speed", self.drive_speed),
            ("tank_start_health", self.tank_start_health),
            ("bullet_speed", self.bullet_speed),
        ];
        for (field, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(TuningError::Invalid {
                    field,
                    reason: "must be finite and greater than zero",
                });
            }
        }

        let non_negative = [
            ("shaft_width", self.shaft_width),
            ("shaft_height", self.shaft_height),
            ("tank_hit_radius", self.tank_hit_radius),
            ("bullet_radius", self.bullet_radius),
            ("bullet_damage", self.bullet_damage),
            ("wall_width", self.wall_width),
        ];
        for (field, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(TuningError::Invalid {
                    field,
                    reason: "must be finite and not negative",
                });
            }
        }

        if !(self.rotation_speed > 0.0 && self.rotation_speed < TAU) {
            return Err(TuningError::Invalid {
                field: "rotation_speed",
                reason: "must lie strictly between 0 and 2π",
            });
        }

        if self.bullet_lifetime_ticks == 0 {
            return Err(TuningError::Invalid {
                field: "bullet_lifetime_ticks",
                reason: "must be at least one tick",
            });
        }

        if let Some(max) = self.bullet_max_travel {
            if !max.is_finite() || max <= 0.0 {
                return Err(TuningError::Invalid {
                    field: "bullet_max_travel",
                    reason: "must be finite and greater than zero",
                });
            }
        }

        Ok(())
    }

    /// Arena bounds described by this tuning
    pub fn arena(&self) -> Arena {
        Arena::new(self.arena_width, self.arena_height)
    }

    /// Lifetime budget handed to every new bullet
    pub fn bullet_lifetime(&self) -> BulletLifetime {
        BulletLifetime {
            ticks: self.bullet_lifetime_ticks,
            max_travel: self.bullet_max_travel,
        }
    }

    /// Distance from the tank center to the muzzle
    #[inline]
    pub fn muzzle_offset(&self) -> f32 {
        self.tank_height / 2.0 + self.shaft_height
    }

    /// Bullet-to-wall-centerline distance that triggers a reflection
    #[inline]
    pub fn wall_collision_threshold(&self) -> f32 {
        self.wall_width / 2.0 + self.bullet_radius
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(Tuning::default().validate().is_ok());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let json = r#"{ "bullet_lifetime_ticks": 42, "bullet_max_travel": 120.0 }"#;
        let tuning = Tuning::from_json(json).expect("valid tuning");
        assert_eq!(tuning.bullet_lifetime_ticks, 42);
        assert_eq!(tuning.bullet_max_travel, Some(120.0));
        assert_eq!(tuning.drive_speed, TANK_DRIVING_VEL);
    }

    #[test]
    fn test_rejects_zero_lifetime() {
        let err = Tuning::from_json(r#"{ "bullet_lifetime_ticks": 0 }"#).unwrap_err();
        assert!(matches!(
            err,
            TuningError::Invalid {
                field: "bullet_lifetime_ticks",
                ..
            }
        ));
    }

    #[test]
    fn test_rejects_full_turn_rotation() {
        let tuning = Tuning {
            rotation_speed: TAU,
            ..Default::default()
        };
        assert!(tuning.validate().is_err());
    }

    #[test]
    fn test_rejects_bad_json() {
        let err = Tuning::from_json("{ not json").unwrap_err();
        assert!(matches!(err, TuningError::Parse(_)));
        assert!(err.to_string().starts_with("failed to parse tuning"));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_invalid_error_message() {
        let tuning = Tuning {
            drive_speed: -1.0,
            ..Default::default()
        };
        let err = tuning.validate().unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid tuning field `drive_speed`: must be finite and greater than zero"
        );
        assert!(std::error::Error::source(&err).is_none());
    }

    #[test]
    fn test_derived_values() {
        let tuning = Tuning::default();
        assert_eq!(tuning.muzzle_offset(), TANK_HEIGHT / 2.0 + TANK_SHAFT_HEIGHT);
        assert_eq!(
            tuning.wall_collision_threshold(),
            WALL_WIDTH / 2.0 + BULLET_RADIUS
        );
    }
}
