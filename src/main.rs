//! Headless tank duel
//!
//! Runs two tanks driven by a seeded random input script and prints the final
//! world as JSON. See `tank-duel --help`.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser as _;
use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use tank_duel::Tuning;
use tank_duel::sim::{
    ControlEvent, ControlKind, GameEvent, PlayerSlot, TickInput, Wall, World, tick,
};

const CONTROLS: [ControlKind; 5] = [
    ControlKind::Shoot,
    ControlKind::RotateUp,
    ControlKind::RotateDown,
    ControlKind::DriveForward,
    ControlKind::DriveBackward,
];

#[derive(clap::Parser, Debug)]
#[clap(about = "Run a headless tank duel and print the final world as JSON")]
struct Arguments {
    /// JSON file overriding the default tuning
    #[clap(long, value_parser)]
    tuning: Option<PathBuf>,

    /// Seed for the scripted input
    #[clap(long, value_parser, default_value = "12345")]
    seed: u64,

    /// Maximum ticks to simulate
    #[clap(long, value_parser, default_value = "600")]
    ticks: u64,
}

fn load_tuning(path: Option<&Path>) -> Result<Tuning> {
    let Some(path) = path else {
        return Ok(Tuning::default());
    };
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("reading tuning file {}", path.display()))?;
    Tuning::from_json(&json).with_context(|| format!("loading tuning file {}", path.display()))
}

/// Border walls inset from the arena edge plus one slanted deflector
fn arena_walls(tuning: &Tuning) -> Vec<Wall> {
    let (w, h) = (tuning.arena_width, tuning.arena_height);
    let inset = tuning.wall_width;
    vec![
        Wall::new(Vec2::new(0.0, inset), Vec2::new(w, inset)),
        Wall::new(Vec2::new(0.0, h - inset), Vec2::new(w, h - inset)),
        Wall::vertical(inset),
        Wall::vertical(w - inset),
        Wall::new(Vec2::new(w * 0.4, h * 0.3), Vec2::new(w * 0.6, h * 0.7)),
    ]
}

/// Randomly press or release a few controls for each player
fn scripted_input(rng: &mut Pcg32, players: &[PlayerSlot]) -> TickInput {
    let mut input = TickInput::default();
    for &slot in players {
        if rng.random_bool(0.15) {
            let kind = CONTROLS[rng.random_range(0..CONTROLS.len())];
            let pressed = rng.random_bool(0.6);
            input.push(slot, ControlEvent { kind, pressed });
        }
    }
    input
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Arguments::parse();
    let tuning = &load_tuning(args.tuning.as_deref())?;
    log::info!(
        "Tank duel (headless) starting: seed {}, {} ticks",
        args.seed,
        args.ticks
    );

    let mut world = World::new(tuning.arena(), arena_walls(tuning));
    let players = [
        world.spawn_tank(
            Vec2::new(tuning.arena_width * 0.2, tuning.arena_height * 0.5),
            0.0,
            0xd03030,
            tuning,
        ),
        world.spawn_tank(
            Vec2::new(tuning.arena_width * 0.8, tuning.arena_height * 0.5),
            std::f32::consts::PI,
            0x3050d0,
            tuning,
        ),
    ];

    let mut rng = Pcg32::seed_from_u64(args.seed);
    for _ in 0..args.ticks {
        let input = scripted_input(&mut rng, &players);
        tick(&mut world, &input, tuning);

        for event in world.drain_events() {
            match event {
                GameEvent::TankHit {
                    shooter,
                    target,
                    health,
                } => log::info!(
                    "Tick {}: tank {} hit tank {} ({} health left)",
                    world.time_ticks(),
                    shooter.0,
                    target.0,
                    health
                ),
                GameEvent::TankDestroyed { target } => {
                    log::info!("Tick {}: tank {} destroyed", world.time_ticks(), target.0)
                }
            }
        }

        if world.survivors().count() <= 1 {
            log::info!("Duel decided after {} ticks", world.time_ticks());
            break;
        }
    }

    let snapshot = serde_json::to_string_pretty(&world).context("serializing world")?;
    println!("{}", snapshot);
    Ok(())
}
