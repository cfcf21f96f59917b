//! Pollen Rush entry point
//!
//! Headless demo driver. Gather mode steers the bee with a greedy
//! autopilot until the meadow is cleared; bounce mode launches the free
//! body and lets it ricochet for a while. Both print what a real host
//! would render from the tick deltas.

use std::error::Error;
use std::process::ExitCode;

use glam::Vec2;
use pollen_rush::WorldConfig;
use pollen_rush::sim::{Direction, GamePhase, World, move_bee, tick};

struct Args {
    bounce: bool,
    seed: u64,
    ticks: u64,
    config: Option<String>,
}

fn parse_args() -> Result<Args, String> {
    let mut args = Args {
        bounce: false,
        seed: 42,
        ticks: 600,
        config: None,
    };
    let mut iter = std::env::args().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--bounce" => args.bounce = true,
            "--seed" => {
                let value = iter.next().ok_or("--seed needs a value")?;
                args.seed = value.parse().map_err(|_| format!("bad seed: {value}"))?;
            }
            "--ticks" => {
                let value = iter.next().ok_or("--ticks needs a value")?;
                args.ticks = value.parse().map_err(|_| format!("bad tick count: {value}"))?;
            }
            "--config" => args.config = Some(iter.next().ok_or("--config needs a path")?),
            "--help" | "-h" => {
                println!(
                    "usage: pollen-rush [--bounce] [--seed N] [--ticks N] [--config tuning.json]"
                );
                std::process::exit(0);
            }
            other => return Err(format!("unknown argument: {other}")),
        }
    }
    Ok(args)
}

fn main() -> ExitCode {
    env_logger::init();

    let args = match parse_args() {
        Ok(args) => args,
        Err(message) => {
            eprintln!("{message}");
            return ExitCode::from(2);
        }
    };

    let result = if args.bounce {
        run_bounce(&args)
    } else {
        run_gather(&args)
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn load_config(args: &Args, fallback: WorldConfig) -> Result<WorldConfig, Box<dyn Error>> {
    let mut config = match &args.config {
        Some(path) => WorldConfig::from_json(&std::fs::read_to_string(path)?)?,
        None => fallback,
    };
    config.seed = args.seed;
    Ok(config)
}

/// Let the ball ricochet and narrate its path.
fn run_bounce(args: &Args) -> Result<(), Box<dyn Error>> {
    let config = load_config(args, WorldConfig::bounce(args.seed))?;
    let mut world = config.build()?;
    world.bee.pos = Vec2::ZERO;

    log::info!(
        "bounce: {}x{} arena, launch velocity ({}, {})",
        world.bounds.x,
        world.bounds.y,
        world.velocity.x,
        world.velocity.y
    );

    for _ in 0..args.ticks {
        let delta = tick(&mut world, 1.0);
        if world.time_ticks % 60 == 0 {
            println!(
                "tick {:>5}  pos ({:>7.1}, {:>7.1})  vel ({:>5.1}, {:>5.1})",
                world.time_ticks, delta.bee_pos.x, delta.bee_pos.y, world.velocity.x, world.velocity.y
            );
        }
    }
    Ok(())
}

/// Greedy autopilot: head for the nearest unharvested flower, one
/// arrow-key press per tick, until every grain is gathered.
fn run_gather(args: &Args) -> Result<(), Box<dyn Error>> {
    let config = load_config(args, WorldConfig::gather(args.seed))?;
    let speed = config.bee_speed;
    let mut world = config.build()?;

    log::info!(
        "gather: {} flowers, {} grains, seed {}",
        world.flowers.len(),
        world.total_pollen,
        world.seed
    );

    // Safety margin over the worst case so a bug cannot spin forever
    let max_ticks = args.ticks.max(100_000);

    while world.phase == GamePhase::Playing && world.time_ticks < max_ticks {
        if let Some(direction) = steer_toward_nearest_flower(&world) {
            move_bee(&mut world, direction, speed);
        }
        let delta = tick(&mut world, 1.0);
        if delta.gathered > 0 {
            println!(
                "tick {:>5}  gathered {} grains  score {}/{}",
                world.time_ticks, delta.gathered, delta.score, world.total_pollen
            );
        }
        if delta.just_won {
            println!("meadow cleared in {} ticks", world.time_ticks);
            return Ok(());
        }
    }

    Err(format!(
        "autopilot gave up after {} ticks with score {}/{}",
        world.time_ticks, world.score, world.total_pollen
    )
    .into())
}

/// One arrow-key press worth of steering: the axis with the larger gap to
/// the nearest unharvested flower wins.
fn steer_toward_nearest_flower(world: &World) -> Option<Direction> {
    let bee_center = world.bee.center();
    let target = world
        .flowers
        .iter()
        .filter(|flower| !flower.pollen.is_empty())
        .min_by(|a, b| {
            let da = a.rect.center().distance_squared(bee_center);
            let db = b.rect.center().distance_squared(bee_center);
            da.partial_cmp(&db).unwrap_or(std::cmp::Ordering::Equal)
        })?;

    let gap = target.rect.center() - bee_center;
    let direction = if gap.x.abs() > gap.y.abs() {
        if gap.x > 0.0 { Direction::Right } else { Direction::Left }
    } else if gap.y > 0.0 {
        Direction::Up
    } else {
        Direction::Down
    };
    Some(direction)
}
