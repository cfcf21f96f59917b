//! Fixed timestep simulation tick
//!
//! The whole game loop in two entry points: [`tick`] advances the world by
//! one fixed step (movement integration, boundary reflection, pollen
//! gathering, win detection) and [`move_bee`] applies one steering input.
//! Both are total over valid worlds and no-ops once the run is won.

use glam::Vec2;

use super::collision::intersects;
use super::state::{BoundsPolicy, Direction, GamePhase, World};

/// What one tick changed, for the host to render from.
///
/// Hosts that prefer polling can ignore this and read the world's fields
/// directly; there is no observer machinery.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickDelta {
    /// Bee position after the tick
    pub bee_pos: Vec2,
    /// Score after the tick
    pub score: u32,
    /// Grains gathered during this tick
    pub gathered: u32,
    /// True exactly on the tick that entered [`GamePhase::Won`]
    pub just_won: bool,
}

/// Advance the world by one fixed timestep.
///
/// `dt` is a fixed per-call step in tick units (the reference host passes
/// 1.0 per frame); it is never wall-clock scaled. Velocity integration and
/// edge reflection run first, then every flower is tested against the bee
/// in planting order. Reflection flips each axis at most once per tick and
/// preserves speed; there is no sub-stepping.
pub fn tick(world: &mut World, dt: f32) -> TickDelta {
    if world.phase == GamePhase::Won {
        return TickDelta {
            bee_pos: world.bee.pos,
            score: world.score,
            gathered: 0,
            just_won: false,
        };
    }

    world.time_ticks += 1;
    world.bee.pos += world.velocity * dt;

    if world.policy == BoundsPolicy::Reflect {
        if world.bee.pos.x < 0.0 || world.bee.right() > world.bounds.x {
            world.velocity.x = -world.velocity.x;
        }
        if world.bee.pos.y < 0.0 || world.bee.top() > world.bounds.y {
            world.velocity.y = -world.velocity.y;
        }
    }

    // Every flower is tested every tick; overlapping flowers can both
    // score in the same pass.
    let mut gathered = 0u32;
    for flower in &mut world.flowers {
        if intersects(&world.bee, &flower.rect) {
            gathered += flower.collect() as u32;
        }
    }
    if gathered > 0 {
        world.score += gathered;
        log::debug!(
            "gathered {gathered} grains, score {}/{}",
            world.score,
            world.total_pollen
        );
    }

    let mut just_won = false;
    if world.total_pollen > 0 && world.score >= world.total_pollen {
        world.phase = GamePhase::Won;
        just_won = true;
        log::info!("meadow cleared in {} ticks", world.time_ticks);
    }

    TickDelta {
        bee_pos: world.bee.pos,
        score: world.score,
        gathered,
        just_won,
    }
}

/// Apply one steering input: move the bee by `distance` along `direction`.
///
/// A pure position update - no bounds clamping (edge handling is the tick's
/// job, per the world's [`BoundsPolicy`]) and no effect on score. Updates
/// the cosmetic facing angle. No-op once the run is won.
pub fn move_bee(world: &mut World, direction: Direction, distance: f32) {
    if world.phase == GamePhase::Won {
        return;
    }
    world.bee.pos += direction.offset(distance);
    world.facing = direction.facing_angle();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::WorldConfig;
    use crate::sim::rect::Rect;
    use proptest::prelude::*;

    fn bounce_config() -> WorldConfig {
        WorldConfig {
            bounds: Vec2::splat(100.0),
            bee_size: Vec2::splat(50.0),
            ..WorldConfig::bounce(0)
        }
    }

    fn one_flower_config() -> WorldConfig {
        WorldConfig {
            flower_count: 1,
            ..WorldConfig::gather(5)
        }
    }

    #[test]
    fn test_free_flight_does_not_reflect() {
        let mut world = bounce_config().build().unwrap();
        world.bee.pos = Vec2::ZERO;

        let delta = tick(&mut world, 1.0);

        assert_eq!(delta.bee_pos, Vec2::new(3.0, 4.0));
        assert_eq!(world.velocity, Vec2::new(3.0, 4.0));
        assert_eq!(delta.score, 0);
        assert!(!delta.just_won);
    }

    #[test]
    fn test_reflects_at_upper_bound() {
        let mut world = bounce_config().build().unwrap();
        // Leading edge will land at x = 53 + 50 > 100
        world.bee.pos = Vec2::new(50.0, 0.0);
        world.velocity = Vec2::new(3.0, 4.0);

        tick(&mut world, 1.0);

        assert_eq!(world.velocity, Vec2::new(-3.0, 4.0));
        // Position integrated before the flip; no sub-stepping
        assert_eq!(world.bee.pos, Vec2::new(53.0, 4.0));
    }

    #[test]
    fn test_reflects_at_lower_bound() {
        let mut world = bounce_config().build().unwrap();
        world.bee.pos = Vec2::new(2.0, 2.0);
        world.velocity = Vec2::new(-3.0, -4.0);

        tick(&mut world, 1.0);

        assert_eq!(world.velocity, Vec2::new(3.0, 4.0));
    }

    #[test]
    fn test_corner_reflects_both_axes_once() {
        let mut world = bounce_config().build().unwrap();
        world.bee.pos = Vec2::new(1.0, 1.0);
        world.velocity = Vec2::new(-5.0, -6.0);

        tick(&mut world, 1.0);

        assert_eq!(world.velocity, Vec2::new(5.0, 6.0));
    }

    #[test]
    fn test_unbounded_bee_may_leave_arena() {
        let mut world = one_flower_config().build().unwrap();
        for _ in 0..200 {
            move_bee(&mut world, Direction::Left, 10.0);
        }
        tick(&mut world, 1.0);
        assert!(world.bee.pos.x < 0.0, "no clamping under Unbounded");
    }

    #[test]
    fn test_gather_end_to_end() {
        let mut world = one_flower_config().build().unwrap();
        assert_eq!(world.total_pollen, 3);

        // Park the bee right on top of the only flower
        world.bee.pos = world.flowers[0].rect.pos;
        let delta = tick(&mut world, 1.0);

        assert_eq!(delta.gathered, 3);
        assert_eq!(delta.score, 3);
        assert!(delta.just_won);
        assert_eq!(world.phase, GamePhase::Won);
    }

    #[test]
    fn test_touching_flower_edge_does_not_score() {
        let mut world = one_flower_config().build().unwrap();
        let flower = world.flowers[0].rect;
        // Bee's right edge exactly on the flower's left edge
        world.bee.pos = Vec2::new(flower.pos.x - world.bee.size.x, flower.pos.y);

        let delta = tick(&mut world, 1.0);

        assert_eq!(delta.gathered, 0);
        assert_eq!(world.phase, GamePhase::Playing);
    }

    #[test]
    fn test_won_is_terminal() {
        let mut world = one_flower_config().build().unwrap();
        world.bee.pos = world.flowers[0].rect.pos;
        assert!(tick(&mut world, 1.0).just_won);

        let pos = world.bee.pos;
        let ticks = world.time_ticks;

        let delta = tick(&mut world, 1.0);
        assert!(!delta.just_won);
        assert_eq!(delta.score, 3);
        assert_eq!(world.time_ticks, ticks, "won world does not advance");

        move_bee(&mut world, Direction::Up, 10.0);
        assert_eq!(world.bee.pos, pos, "won world ignores steering");
    }

    #[test]
    fn test_overlapping_flowers_both_score_in_one_tick() {
        // Placement never prevents overlap, so the gather pass must cope:
        // each overlapped flower drains independently in the same tick.
        let mut world = WorldConfig {
            flower_count: 2,
            ..WorldConfig::gather(11)
        }
        .build()
        .unwrap();
        world.flowers[0].rect = Rect::new(Vec2::new(100.0, 100.0), Vec2::splat(70.0));
        world.flowers[1].rect = Rect::new(Vec2::new(120.0, 120.0), Vec2::splat(70.0));
        world.bee.pos = Vec2::new(110.0, 110.0);

        let delta = tick(&mut world, 1.0);

        assert_eq!(delta.gathered, 6);
        assert!(delta.just_won);
    }

    #[test]
    fn test_empty_meadow_never_wins() {
        let mut world = bounce_config().build().unwrap();
        for _ in 0..500 {
            assert!(!tick(&mut world, 1.0).just_won);
        }
        assert_eq!(world.phase, GamePhase::Playing);
    }

    #[test]
    fn test_steering_updates_facing_only() {
        let mut world = one_flower_config().build().unwrap();
        let score = world.score;
        move_bee(&mut world, Direction::Left, 10.0);
        assert_eq!(world.facing, std::f32::consts::PI);
        assert_eq!(world.score, score);
    }

    proptest! {
        #[test]
        fn prop_reflection_flips_sign_once_and_keeps_magnitude(
            px in 0.0f32..50.0,
            py in 0.0f32..50.0,
            vx in -20.0f32..20.0,
            vy in -20.0f32..20.0,
        ) {
            let mut world = bounce_config().build().unwrap();
            world.bee.pos = Vec2::new(px, py);
            world.velocity = Vec2::new(vx, vy);
            let before = world.velocity;

            // Predict the crossing from the pre-tick state
            let landing = world.bee.pos + before;
            let crosses_x = landing.x < 0.0 || landing.x + world.bee.size.x > world.bounds.x;
            let crosses_y = landing.y < 0.0 || landing.y + world.bee.size.y > world.bounds.y;

            tick(&mut world, 1.0);

            prop_assert_eq!(world.velocity.x, if crosses_x { -before.x } else { before.x });
            prop_assert_eq!(world.velocity.y, if crosses_y { -before.y } else { before.y });
        }

        #[test]
        fn prop_score_stays_within_total(
            seed in 0u64..512,
            steps in prop::collection::vec((0u8..4u8, 1.0f32..40.0), 0..150),
        ) {
            let mut world = WorldConfig {
                flower_count: 5,
                ..WorldConfig::gather(seed)
            }
            .build()
            .unwrap();

            for (code, distance) in steps {
                let direction = match code {
                    0 => Direction::Up,
                    1 => Direction::Down,
                    2 => Direction::Left,
                    _ => Direction::Right,
                };
                move_bee(&mut world, direction, distance);
                let delta = tick(&mut world, 1.0);

                prop_assert!(world.score <= world.total_pollen);
                prop_assert_eq!(delta.score, world.score);
                // Won exactly when every grain is gathered
                prop_assert_eq!(
                    world.phase == GamePhase::Won,
                    world.score == world.total_pollen
                );
            }
        }
    }
}
