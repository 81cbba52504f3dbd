//! The player tank: intent flags, pose, firing and bullet upkeep
//!
//! Input events only flip flags. Everything else happens in [`Tank::update`],
//! once per tick, in a fixed order: rotate, drive, fire, then advance,
//! reflect and prune bullets.

use std::f32::consts::TAU;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::bullet::Bullet;
use super::collision::resolve_wall_collisions;
use super::state::Arena;
use super::vector::{VectorExt, from_angle};
use super::wall::Wall;
use crate::tuning::Tuning;
use crate::{MAX_ROTATION, normalize_rotation};

/// A player control the input layer can report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ControlKind {
    Shoot,
    RotateUp,
    RotateDown,
    DriveForward,
    DriveBackward,
}

/// A control was pressed (`pressed = true`) or released
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControlEvent {
    pub kind: ControlKind,
    pub pressed: bool,
}

impl ControlEvent {
    pub fn press(kind: ControlKind) -> Self {
        Self { kind, pressed: true }
    }

    pub fn release(kind: ControlKind) -> Self {
        Self {
            kind,
            pressed: false,
        }
    }
}

/// Which way the tank turns this tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RotationIntent {
    Idle,
    Up,
    Down,
}

/// Which drive controls are held (both flags sum and cancel out)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriveIntent {
    Idle,
    Forward,
    Backward,
    Both,
}

/// Held controls, consumed on the next tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Intents {
    pub rotate_up: bool,
    pub rotate_down: bool,
    pub drive_forward: bool,
    pub drive_backward: bool,
    /// Cleared by the tick that services it
    pub shoot_requested: bool,
}

impl Intents {
    /// Up wins when both rotate controls are held
    pub fn rotation_intent(&self) -> RotationIntent {
        if self.rotate_up {
            RotationIntent::Up
        } else if self.rotate_down {
            RotationIntent::Down
        } else {
            RotationIntent::Idle
        }
    }

    pub fn drive_intent(&self) -> DriveIntent {
        match (self.drive_forward, self.drive_backward) {
            (false, false) => DriveIntent::Idle,
            (true, false) => DriveIntent::Forward,
            (false, true) => DriveIntent::Backward,
            (true, true) => DriveIntent::Both,
        }
    }
}

/// A player-controlled tank
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tank {
    location: Vec2,
    /// Radians in [0, 2π)
    rotation: f32,
    health: f32,
    /// 0xRRGGBB, carried for the renderer
    color: u32,
    intents: Intents,
    /// Ticks until the cannon may fire again
    fire_delay: u32,
    /// Live bullets in fire order
    bullets: Vec<Bullet>,
}

impl Tank {
    pub fn new(location: Vec2, rotation: f32, color: u32, health: f32) -> Self {
        Self {
            location,
            rotation: normalize_rotation(rotation),
            health: health.max(0.0),
            color,
            intents: Intents::default(),
            fire_delay: 0,
            bullets: Vec::new(),
        }
    }

    /// Record a press/release; no simulation happens here
    pub fn handle_event(&mut self, event: ControlEvent) {
        let flag = match event.kind {
            ControlKind::Shoot => &mut self.intents.shoot_requested,
            ControlKind::RotateUp => &mut self.intents.rotate_up,
            ControlKind::RotateDown => &mut self.intents.rotate_down,
            ControlKind::DriveForward => &mut self.intents.drive_forward,
            ControlKind::DriveBackward => &mut self.intents.drive_backward,
        };
        *flag = event.pressed;
    }

    /// Advance this tank by one tick
    pub fn update(&mut self, arena: &Arena, walls: &[Wall], tuning: &Tuning) {
        self.update_rotation(tuning.rotation_speed);
        self.update_location(arena, tuning.drive_speed);
        self.update_firing(tuning);
        self.update_bullets(walls, tuning.wall_collision_threshold());
    }

    fn update_rotation(&mut self, speed: f32) {
        match self.intents.rotation_intent() {
            RotationIntent::Up => {
                self.rotation += speed;
                if self.rotation >= TAU {
                    self.rotation = 0.0;
                }
            }
            RotationIntent::Down => {
                self.rotation -= speed;
                if self.rotation < 0.0 {
                    self.rotation = MAX_ROTATION;
                }
            }
            RotationIntent::Idle => {}
        }
    }

    /// Move only if the whole step lands strictly inside the arena
    fn update_location(&mut self, arena: &Arena, speed: f32) {
        let heading = self.heading().with_magnitude(speed);

        let mut candidate = self.location;
        if self.intents.drive_forward {
            candidate += heading;
        }
        if self.intents.drive_backward {
            candidate -= heading;
        }

        if arena.contains_strict(candidate) {
            self.location = candidate;
        }
    }

    fn update_firing(&mut self, tuning: &Tuning) {
        self.fire_delay = self.fire_delay.saturating_sub(1);

        if self.intents.shoot_requested {
            if self.is_destroyed() {
                log::debug!("Shot dropped, tank is destroyed");
            } else if self.fire_delay == 0 {
                self.fire(tuning);
                self.fire_delay = tuning.fire_delay_ticks;
            } else {
                log::debug!("Shot dropped, cannon cooling down ({} ticks)", self.fire_delay);
            }
            // One shot per press
            self.intents.shoot_requested = false;
        }
    }

    fn fire(&mut self, tuning: &Tuning) {
        let muzzle = self.location + self.heading() * tuning.muzzle_offset();
        let bullet = Bullet::new(
            muzzle,
            self.rotation,
            tuning.bullet_speed,
            tuning.bullet_lifetime(),
        );
        log::debug!("Tank fired from ({:.1}, {:.1})", muzzle.x, muzzle.y);
        self.bullets.push(bullet);
    }

    fn update_bullets(&mut self, walls: &[Wall], threshold: f32) {
        for bullet in &mut self.bullets {
            bullet.advance();
        }
        resolve_wall_collisions(&mut self.bullets, walls, threshold);
        self.prune_bullets();
    }

    /// Drop dead bullets, keeping fire order
    pub(crate) fn prune_bullets(&mut self) {
        self.bullets.retain(Bullet::is_alive);
    }

    /// Kill one owned bullet (pruned on the next `prune_bullets`)
    pub(crate) fn expire_bullet(&mut self, index: usize) {
        if let Some(bullet) = self.bullets.get_mut(index) {
            bullet.expire();
        }
    }

    /// Subtract damage, flooring at zero. Returns the new health.
    pub fn apply_damage(&mut self, amount: f32) -> f32 {
        self.health = (self.health - amount.max(0.0)).max(0.0);
        self.health
    }

    /// A destroyed tank stays in the world but is not drawn
    #[inline]
    pub fn is_destroyed(&self) -> bool {
        self.health <= 0.0
    }

    /// Unit vector the cannon points along
    #[inline]
    pub fn heading(&self) -> Vec2 {
        from_angle(self.rotation)
    }

    #[inline]
    pub fn location(&self) -> Vec2 {
        self.location
    }

    #[inline]
    pub fn rotation(&self) -> f32 {
        self.rotation
    }

    #[inline]
    pub fn health(&self) -> f32 {
        self.health
    }

    #[inline]
    pub fn color(&self) -> u32 {
        self.color
    }

    #[inline]
    pub fn intents(&self) -> Intents {
        self.intents
    }

    #[inline]
    pub fn fire_delay(&self) -> u32 {
        self.fire_delay
    }

    #[inline]
    pub fn bullets(&self) -> &[Bullet] {
        &self.bullets
    }
}
