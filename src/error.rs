//! Error types for world construction and host input mapping.

use glam::Vec2;

/// Errors raised while building a [`crate::sim::World`] from a config.
///
/// All of these are impossible-geometry errors: they are fatal to that
/// construction attempt and must be surfaced to the caller, never retried
/// automatically.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// A size field has a zero, negative, or non-finite component.
    #[error("{field} must have strictly positive finite dimensions, got ({x}, {y})", x = .value.x, y = .value.y)]
    NonPositiveSize {
        /// Name of the offending config field.
        field: &'static str,
        /// The rejected value.
        value: Vec2,
    },

    /// The arena cannot fit a single flower.
    #[error("bounds ({bw}, {bh}) too small for a ({fw}, {fh}) flower", bw = .bounds.x, bh = .bounds.y, fw = .flower_size.x, fh = .flower_size.y)]
    BoundsTooSmall {
        /// Requested arena bounds.
        bounds: Vec2,
        /// Requested flower size.
        flower_size: Vec2,
    },

    /// The arena cannot fit the bee's starting rectangle.
    #[error("bounds ({bw}, {bh}) too small for a ({sw}, {sh}) bee", bw = .bounds.x, bh = .bounds.y, sw = .bee_size.x, sh = .bee_size.y)]
    BeeTooLarge {
        /// Requested arena bounds.
        bounds: Vec2,
        /// Requested bee size.
        bee_size: Vec2,
    },

    /// A pollen grain cannot fit inside its flower.
    #[error("pollen ({pw}, {ph}) does not fit inside a ({fw}, {fh}) flower", pw = .pollen_size.x, ph = .pollen_size.y, fw = .flower_size.x, fh = .flower_size.y)]
    PollenTooLarge {
        /// Requested pollen size.
        pollen_size: Vec2,
        /// Requested flower size.
        flower_size: Vec2,
    },
}

/// Errors raised at the host input seam.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    /// A key name did not map to one of the four steering directions.
    #[error("unknown direction: {0:?}")]
    UnknownDirection(String),
}
