//! Pollen Rush - a meadow arcade simulation
//!
//! Core modules:
//! - `sim`: Deterministic simulation (movement, collisions, game state)
//! - `config`: Data-driven world tuning and the world factory
//! - `error`: Construction and input error types
//!
//! The crate is headless by design: a host owns the frame clock, the
//! keyboard mapping, and all rendering, and drives the simulation through
//! [`config::WorldConfig::build`], [`sim::move_bee`] and [`sim::tick`],
//! reading positions and score back after each call.

pub mod config;
pub mod error;
pub mod sim;

pub use config::WorldConfig;
pub use error::{ConfigError, InputError};

/// Game configuration constants
pub mod consts {
    use glam::Vec2;

    /// Nominal host tick rate (informational; `tick` takes an explicit dt)
    pub const TICK_HZ: f32 = 60.0;

    /// Arena dimensions (width, height)
    pub const ARENA_WIDTH: f32 = 800.0;
    pub const ARENA_HEIGHT: f32 = 600.0;

    /// Bee defaults
    pub const BEE_SIZE: f32 = 50.0;
    /// Distance covered by one steering input, in arena units
    pub const BEE_SPEED: f32 = 10.0;

    /// Flower defaults
    pub const FLOWER_SIZE: f32 = 70.0;
    pub const FLOWER_COUNT: usize = 10;

    /// Pollen defaults
    pub const POLLEN_SIZE: f32 = 20.0;
    pub const POLLEN_PER_FLOWER: usize = 3;

    /// Free-body (bounce mode) launch velocity, in units per tick
    pub const BALL_VELOCITY: Vec2 = Vec2::new(3.0, 4.0);
}
