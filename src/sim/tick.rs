//! Fixed logical tick
//!
//! One call advances the whole world by one frame: queued input first, then
//! each tank in slot order, then bullet-vs-tank hits.

use serde::{Deserialize, Serialize};

use super::state::{GameEvent, PlayerSlot, World};
use super::tank::ControlEvent;
use crate::tuning::Tuning;

/// Input events received since the previous tick, in arrival order
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TickInput {
    pub events: Vec<(PlayerSlot, ControlEvent)>,
}

impl TickInput {
    pub fn push(&mut self, slot: PlayerSlot, event: ControlEvent) {
        self.events.push((slot, event));
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

/// Advance the world by one tick
pub fn tick(world: &mut World, input: &TickInput, tuning: &Tuning) {
    for &(slot, event) in &input.events {
        world.handle_input(slot, event);
    }

    world.update_tanks(tuning);
    resolve_tank_hits(world, tuning);

    world.time_ticks += 1;
}

/// A bullet (owner slot, index in owner's list) striking a target
struct Hit {
    shooter: usize,
    bullet: usize,
    target: usize,
}

/// Damage tanks struck by an opponent's bullet and retire those bullets
///
/// Hits are gathered against the state at the start of the step, in shooter,
/// bullet, then target order. Each bullet strikes at most one tank. Tanks never
/// hit themselves, destroyed tanks are neither shooters nor targets, and a
/// bullet whose target was finished earlier in the same step flies on.
fn resolve_tank_hits(world: &mut World, tuning: &Tuning) {
    let reach = tuning.tank_hit_radius + tuning.bullet_radius;
    let tanks = world.tanks();

    let mut hits = Vec::new();
    for (shooter, owner) in tanks.iter().enumerate() {
        // Bullets left behind by a destroyed tank are harmless
        if owner.is_destroyed() {
            continue;
        }
        for (index, bullet) in owner.bullets().iter().enumerate() {
            if !bullet.is_alive() {
                continue;
            }
            let struck = tanks.iter().enumerate().find(|(target, tank)| {
                *target != shooter
                    && !tank.is_destroyed()
                    && tank.location().distance(bullet.location()) < reach
            });
            if let Some((target, _)) = struck {
                hits.push(Hit {
                    shooter,
                    bullet: index,
                    target,
                });
            }
        }
    }

    if hits.is_empty() {
        return;
    }

    let mut events = Vec::with_capacity(hits.len());
    let tanks = world.tanks_mut();
    for hit in hits {
        // An earlier hit this tick may already have finished the target
        if tanks[hit.target].is_destroyed() {
            continue;
        }

        tanks[hit.shooter].expire_bullet(hit.bullet);
        let health = tanks[hit.target].apply_damage(tuning.bullet_damage);
        events.push(GameEvent::TankHit {
            shooter: PlayerSlot(hit.shooter),
            target: PlayerSlot(hit.target),
            health,
        });

        if health <= 0.0 {
            log::info!("Tank {} destroyed by tank {}", hit.target, hit.shooter);
            events.push(GameEvent::TankDestroyed {
                target: PlayerSlot(hit.target),
            });
        }
    }

    for tank in tanks.iter_mut() {
        tank.prune_bullets();
    }
    world.events.extend(events);
}
