//! Game state and core simulation types
//!
//! Everything needed to reconstruct or snapshot a run lives here. The
//! world is built once from a config and seed, mutated only through
//! [`super::tick`] and [`super::move_bee`], and rebuilt wholesale on
//! restart.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use crate::config::WorldConfig;
use crate::error::{ConfigError, InputError};

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Every pollen grain has been gathered; terminal
    Won,
}

/// What happens when the moving body reaches the arena edge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BoundsPolicy {
    /// No edge handling; the bee may wander out of the visible arena
    #[default]
    Unbounded,
    /// Velocity component negates when that axis crosses a bound
    Reflect,
}

/// One of the four discrete steering directions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Displacement for a single input of the given distance.
    pub fn offset(self, distance: f32) -> Vec2 {
        match self {
            Direction::Up => Vec2::new(0.0, distance),
            Direction::Down => Vec2::new(0.0, -distance),
            Direction::Left => Vec2::new(-distance, 0.0),
            Direction::Right => Vec2::new(distance, 0.0),
        }
    }

    /// Heading angle in radians (zero = facing right, counter-clockwise).
    ///
    /// Display-only: collision and scoring never look at it.
    pub fn facing_angle(self) -> f32 {
        use std::f32::consts::{FRAC_PI_2, PI};
        match self {
            Direction::Right => 0.0,
            Direction::Up => FRAC_PI_2,
            Direction::Left => PI,
            Direction::Down => -FRAC_PI_2,
        }
    }

    /// Map a host key name to a direction.
    ///
    /// This is the host's keyboard seam; an unmapped name is an error
    /// rather than a silent no-op so mapping bugs show up in tests.
    pub fn from_name(name: &str) -> Result<Self, InputError> {
        match name.to_ascii_lowercase().as_str() {
            "up" => Ok(Direction::Up),
            "down" => Ok(Direction::Down),
            "left" => Ok(Direction::Left),
            "right" => Ok(Direction::Right),
            _ => Err(InputError::UnknownDirection(name.to_string())),
        }
    }
}

/// A single pollen grain sitting on a flower
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pollen {
    pub rect: Rect,
}

/// A flower holding a fixed clutch of pollen grains
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Flower {
    pub rect: Rect,
    /// Remaining grains, in spawn order; emptied exactly once by `collect`
    pub pollen: Vec<Pollen>,
}

impl Flower {
    /// Drain every remaining grain, returning how many were taken.
    ///
    /// Idempotent after the first call: an already-harvested flower
    /// yields 0.
    pub fn collect(&mut self) -> usize {
        let taken = self.pollen.len();
        self.pollen.clear();
        taken
    }
}

/// Complete simulation state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct World {
    /// Seed the meadow was planted from, for reproducibility
    pub seed: u64,
    /// Arena extent; the playfield spans (0,0)..bounds
    pub bounds: Vec2,
    /// Edge behavior for the moving body
    pub policy: BoundsPolicy,
    /// The player-steered (or free-flying) body
    pub bee: Rect,
    /// Velocity in units per tick; zero for a purely keyboard-steered bee
    pub velocity: Vec2,
    /// Cosmetic heading angle in radians, updated by steering input only
    pub facing: f32,
    /// Flowers in planting order; iteration order is stable
    pub flowers: Vec<Flower>,
    /// Grains gathered so far
    pub score: u32,
    /// Sum of all grains planted at construction; never recomputed
    pub total_pollen: u32,
    /// Current phase
    pub phase: GamePhase,
    /// Simulation tick counter
    pub time_ticks: u64,
}

impl World {
    /// Validate the config and plant a fresh world.
    ///
    /// The bee starts at the arena center. Each flower lands at a
    /// uniformly random position that fits fully inside the bounds, with
    /// its grains at uniformly random offsets fully inside the flower.
    /// Flowers may overlap each other; placement makes no attempt to
    /// avoid it.
    pub fn new(config: &WorldConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut rng = Pcg32::seed_from_u64(config.seed);
        let mut flowers = Vec::with_capacity(config.flower_count);
        for _ in 0..config.flower_count {
            flowers.push(plant_flower(&mut rng, config));
        }
        let total_pollen = flowers.iter().map(|f| f.pollen.len() as u32).sum();

        log::debug!(
            "planted {} flowers holding {} grains (seed {})",
            flowers.len(),
            total_pollen,
            config.seed
        );

        Ok(Self {
            seed: config.seed,
            bounds: config.bounds,
            policy: config.policy,
            bee: Rect::new((config.bounds - config.bee_size) * 0.5, config.bee_size),
            velocity: config.velocity,
            facing: 0.0,
            flowers,
            score: 0,
            total_pollen,
            phase: GamePhase::Playing,
            time_ticks: 0,
        })
    }

    /// Grains still waiting on flowers.
    pub fn pollen_remaining(&self) -> u32 {
        self.total_pollen - self.score
    }
}

/// Place one flower and its pollen clutch.
fn plant_flower(rng: &mut Pcg32, config: &WorldConfig) -> Flower {
    let pos = Vec2::new(
        rng.random_range(0.0..=(config.bounds.x - config.flower_size.x)),
        rng.random_range(0.0..=(config.bounds.y - config.flower_size.y)),
    );
    let rect = Rect::new(pos, config.flower_size);

    let pollen = (0..config.pollen_per_flower)
        .map(|_| {
            let offset = Vec2::new(
                rng.random_range(0.0..=(config.flower_size.x - config.pollen_size.x)),
                rng.random_range(0.0..=(config.flower_size.y - config.pollen_size.y)),
            );
            Pollen {
                rect: Rect::new(pos + offset, config.pollen_size),
            }
        })
        .collect();

    Flower { rect, pollen }
}
