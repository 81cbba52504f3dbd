//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One logical tick per call, no wall-clock time
//! - Stable iteration order (tanks by slot, bullets by fire order, walls by index)
//! - No rendering or platform dependencies

pub mod bullet;
pub mod collision;
pub mod state;
pub mod tank;
pub mod tick;
pub mod vector;
pub mod wall;

pub use bullet::{Bullet, BulletLifetime};
pub use collision::{
    bullet_touches_wall, reflect_about_normal, resolve_wall_collisions, wall_normal,
};
pub use state::{Arena, GameEvent, PlayerSlot, World};
pub use tank::{ControlEvent, ControlKind, DriveIntent, Intents, RotationIntent, Tank};
pub use tick::{TickInput, tick};
pub use vector::{Vector2, VectorExt, from_angle};
pub use wall::Wall;
