//! World state: arena bounds, walls and tanks
//!
//! Walls are fixtures owned by the world and lent to every tank update as a
//! shared slice. Each tank owns its own bullets.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::tank::{ControlEvent, Tank};
use super::wall::Wall;
use crate::tuning::Tuning;

/// Rectangular playfield `[0, width] × [0, height]`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Arena {
    pub width: f32,
    pub height: f32,
}

impl Arena {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Inside the open interval `(0, width) × (0, height)`
    #[inline]
    pub fn contains_strict(&self, p: Vec2) -> bool {
        p.x > 0.0 && p.x < self.width && p.y > 0.0 && p.y < self.height
    }

    /// Clamp into the open interior, so the result passes [`Self::contains_strict`]
    #[inline]
    pub fn clamp(&self, p: Vec2) -> Vec2 {
        let inset = f32::EPSILON * self.width.max(self.height);
        p.clamp(
            Vec2::splat(inset),
            Vec2::new(self.width - inset, self.height - inset),
        )
    }
}

/// Index of a tank in the world (stable for the world's lifetime)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerSlot(pub usize);

/// Gameplay events for the presentation layer (sound, score, UI)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A bullet from `shooter` struck `target`
    TankHit {
        shooter: PlayerSlot,
        target: PlayerSlot,
        health: f32,
    },
    /// `target` dropped to zero health
    TankDestroyed { target: PlayerSlot },
}

/// Complete simulation state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct World {
    arena: Arena,
    walls: Vec<Wall>,
    /// Tanks in slot order
    tanks: Vec<Tank>,
    /// Events emitted since the last drain
    #[serde(skip)]
    pub(crate) events: Vec<GameEvent>,
    /// Simulation tick counter
    pub(crate) time_ticks: u64,
}

impl World {
    pub fn new(arena: Arena, walls: Vec<Wall>) -> Self {
        Self {
            arena,
            walls,
            tanks: Vec::new(),
            events: Vec::new(),
            time_ticks: 0,
        }
    }

    /// Add a tank with full health, clamping its location into the arena
    pub fn spawn_tank(
        &mut self,
        location: Vec2,
        rotation: f32,
        color: u32,
        tuning: &Tuning,
    ) -> PlayerSlot {
        let clamped = self.arena.clamp(location);
        if clamped != location {
            log::warn!(
                "Spawn point ({}, {}) outside arena, clamped to ({}, {})",
                location.x,
                location.y,
                clamped.x,
                clamped.y
            );
        }

        let slot = PlayerSlot(self.tanks.len());
        self.tanks
            .push(Tank::new(clamped, rotation, color, tuning.tank_start_health));
        log::debug!("Spawned tank {} at ({}, {})", slot.0, clamped.x, clamped.y);
        slot
    }

    /// Route an input event to a tank; unknown slots are ignored
    pub fn handle_input(&mut self, slot: PlayerSlot, event: ControlEvent) {
        match self.tanks.get_mut(slot.0) {
            Some(tank) => tank.handle_event(event),
            None => log::debug!("Ignoring {:?} for unknown player {}", event, slot.0),
        }
    }

    #[inline]
    pub fn arena(&self) -> &Arena {
        &self.arena
    }

    #[inline]
    pub fn walls(&self) -> &[Wall] {
        &self.walls
    }

    #[inline]
    pub fn tanks(&self) -> &[Tank] {
        &self.tanks
    }

    pub fn tank(&self, slot: PlayerSlot) -> Option<&Tank> {
        self.tanks.get(slot.0)
    }

    #[inline]
    pub fn time_ticks(&self) -> u64 {
        self.time_ticks
    }

    /// Tanks still above zero health
    pub fn survivors(&self) -> impl Iterator<Item = PlayerSlot> + '_ {
        self.tanks
            .iter()
            .enumerate()
            .filter(|(_, t)| !t.is_destroyed())
            .map(|(i, _)| PlayerSlot(i))
    }

    /// Take all pending events
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Update every tank against the shared arena and walls
    pub(crate) fn update_tanks(&mut self, tuning: &Tuning) {
        let arena = self.arena;
        for tank in &mut self.tanks {
            tank.update(&arena, &self.walls, tuning);
        }
    }

    pub(crate) fn tanks_mut(&mut self) -> &mut [Tank] {
        &mut self.tanks
    }
}
