//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only (construction-time placement; ticks use no RNG)
//! - Stable iteration order (flowers in planting order)
//! - No rendering or platform dependencies
//!
//! The reference host is single-threaded: one frame clock drives [`tick`]
//! and one keyboard callback drives [`move_bee`], both on the same thread.
//! A threaded host must serialize all world mutation behind a single
//! `Mutex<World>` - score, position, and pollen are multi-field
//! read-modify-write updates that must never interleave.

pub mod collision;
pub mod rect;
pub mod state;
pub mod tick;

pub use collision::{contains, intersects};
pub use rect::Rect;
pub use state::{BoundsPolicy, Direction, Flower, GamePhase, Pollen, World};
pub use tick::{TickDelta, move_bee, tick};
