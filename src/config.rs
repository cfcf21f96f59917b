//! Data-driven world tuning
//!
//! One config value describes an entire run: arena bounds, boundary
//! policy, entity sizes, flower/pollen counts, and the RNG seed. Hosts
//! tweak fields directly or load a JSON tuning file; `build` validates the
//! geometry and constructs a fresh [`World`]. Restart is just another
//! `build` call - the old world is discarded, never reset in place.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;
use crate::sim::{BoundsPolicy, World};

/// World tuning parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldConfig {
    /// Arena extent (width, height); the playfield spans (0,0)..bounds
    pub bounds: Vec2,
    /// What happens at the arena edges
    pub policy: BoundsPolicy,
    /// Number of flowers planted at construction
    pub flower_count: usize,
    /// Pollen grains per flower
    pub pollen_per_flower: usize,
    /// Bee collider size
    pub bee_size: Vec2,
    /// Distance covered by one steering input
    pub bee_speed: f32,
    /// Flower collider size
    pub flower_size: Vec2,
    /// Pollen grain size (grains always spawn fully inside their flower)
    pub pollen_size: Vec2,
    /// Initial velocity in units per tick (zero for a keyboard-steered bee)
    pub velocity: Vec2,
    /// Seed for deterministic flower placement
    pub seed: u64,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            bounds: Vec2::new(ARENA_WIDTH, ARENA_HEIGHT),
            policy: BoundsPolicy::Unbounded,
            flower_count: FLOWER_COUNT,
            pollen_per_flower: POLLEN_PER_FLOWER,
            bee_size: Vec2::splat(BEE_SIZE),
            bee_speed: BEE_SPEED,
            flower_size: Vec2::splat(FLOWER_SIZE),
            pollen_size: Vec2::splat(POLLEN_SIZE),
            velocity: Vec2::ZERO,
            seed: 42,
        }
    }
}

impl WorldConfig {
    /// Config for the gather game: keyboard-steered bee, a meadow of flowers.
    pub fn gather(seed: u64) -> Self {
        Self {
            seed,
            ..Self::default()
        }
    }

    /// Config for the bounce demo: one free body reflecting off the walls.
    pub fn bounce(seed: u64) -> Self {
        Self {
            policy: BoundsPolicy::Reflect,
            flower_count: 0,
            velocity: BALL_VELOCITY,
            seed,
            ..Self::default()
        }
    }

    /// Parse a JSON tuning file; absent fields keep their defaults.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Reject impossible geometry before any placement happens.
    pub fn validate(&self) -> Result<(), ConfigError> {
        fn positive(field: &'static str, value: Vec2) -> Result<(), ConfigError> {
            if value.is_finite() && value.x > 0.0 && value.y > 0.0 {
                Ok(())
            } else {
                Err(ConfigError::NonPositiveSize { field, value })
            }
        }

        positive("bounds", self.bounds)?;
        positive("bee_size", self.bee_size)?;
        positive("flower_size", self.flower_size)?;
        positive("pollen_size", self.pollen_size)?;

        if self.bee_size.x > self.bounds.x || self.bee_size.y > self.bounds.y {
            return Err(ConfigError::BeeTooLarge {
                bounds: self.bounds,
                bee_size: self.bee_size,
            });
        }
        if self.flower_count > 0
            && (self.flower_size.x > self.bounds.x || self.flower_size.y > self.bounds.y)
        {
            return Err(ConfigError::BoundsTooSmall {
                bounds: self.bounds,
                flower_size: self.flower_size,
            });
        }
        if self.flower_count > 0
            && self.pollen_per_flower > 0
            && (self.pollen_size.x > self.flower_size.x
                || self.pollen_size.y > self.flower_size.y)
        {
            return Err(ConfigError::PollenTooLarge {
                pollen_size: self.pollen_size,
                flower_size: self.flower_size,
            });
        }

        Ok(())
    }

    /// Validate and construct a fresh world from this config.
    pub fn build(&self) -> Result<World, ConfigError> {
        World::new(self)
    }
}
