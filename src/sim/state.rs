//! Simulation state and tunables
//!
//! One object owns everything that changes between frames: the random
//! stream, the brick field and the ball world.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::field::BrickField;
use super::rng::SimRng;
use super::world::World;
use crate::consts::*;

/// Physics tunables, defaulting to the constants in [`crate::consts`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub min_speed: f32,
    pub max_speed: f32,
    pub speed_delta: f32,
    pub initial_speed: f32,
    /// Buzz chance is 1 in this many steps (0 disables buzzing)
    pub buzz_one_in: u32,
    pub ball_radius: f32,
    pub circle_segments: u32,
    pub spawn: Vec2,
    pub brick_half_width: f32,
    pub min_brick_half_width: f32,
    /// Spawns beyond this many balls are ignored. `None` grows without bound.
    pub max_balls: Option<usize>,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            min_speed: MIN_SPEED,
            max_speed: MAX_SPEED,
            speed_delta: SPEED_DELTA,
            initial_speed: INITIAL_SPEED,
            buzz_one_in: RANDOM_DIRECTION_PROBABILITY,
            ball_radius: BALL_RADIUS,
            circle_segments: CIRCLE_SEGMENTS,
            spawn: crate::spawn_point(),
            brick_half_width: BRICK_HALF_WIDTH,
            min_brick_half_width: MIN_BRICK_HALF_WIDTH,
            max_balls: None,
        }
    }
}

impl Tuning {
    /// Repair values that would break the simulation invariants
    pub fn sanitized(mut self) -> Self {
        let defaults = Self::default();

        if self.min_speed > self.max_speed {
            log::warn!(
                "min_speed {} > max_speed {}, swapping",
                self.min_speed,
                self.max_speed
            );
            std::mem::swap(&mut self.min_speed, &mut self.max_speed);
        }
        if self.min_speed <= 0.0 {
            log::warn!(
                "min_speed {} must be positive, using {}",
                self.min_speed,
                defaults.min_speed
            );
            self.min_speed = defaults.min_speed;
            self.max_speed = self.max_speed.max(self.min_speed);
        }
        if self.speed_delta < 0.0 {
            log::warn!("speed_delta {} is negative, using magnitude", self.speed_delta);
            self.speed_delta = self.speed_delta.abs();
        }
        if !(self.ball_radius > 0.0 && self.ball_radius < 1.0) {
            log::warn!(
                "ball_radius {} out of (0, 1), using {}",
                self.ball_radius,
                defaults.ball_radius
            );
            self.ball_radius = defaults.ball_radius;
        }
        if self.circle_segments < 3 {
            log::warn!("circle_segments {} < 3, using 3", self.circle_segments);
            self.circle_segments = 3;
        }
        if self.brick_half_width <= 0.0 {
            log::warn!(
                "brick_half_width {} must be positive, using {}",
                self.brick_half_width,
                defaults.brick_half_width
            );
            self.brick_half_width = defaults.brick_half_width;
        }
        // Halving never reaches a non-positive floor, so bricks would never die
        if self.min_brick_half_width.is_nan() || self.min_brick_half_width <= 0.0 {
            log::warn!(
                "min_brick_half_width {} must be positive, using {}",
                self.min_brick_half_width,
                defaults.min_brick_half_width
            );
            self.min_brick_half_width = defaults.min_brick_half_width;
        }

        let limit = 1.0 - self.ball_radius;
        let spawn = self.spawn.clamp(Vec2::splat(-limit), Vec2::splat(limit));
        if spawn != self.spawn {
            log::warn!("spawn point {} outside the world, clamped to {}", self.spawn, spawn);
            self.spawn = spawn;
        }

        self
    }
}

/// Complete simulation state (deterministic for a given seed and input)
#[derive(Debug, Clone)]
pub struct SimState {
    pub tuning: Tuning,
    pub rng: SimRng,
    pub field: BrickField,
    pub world: World,
    /// Frames advanced so far
    pub frame: u64,
}

impl SimState {
    /// Fresh state with the pyramid layout and no balls
    pub fn new(seed: u64, tuning: Tuning) -> Self {
        let tuning = tuning.sanitized();
        let mut rng = SimRng::new(seed);
        let field = BrickField::pyramid(&tuning, &mut rng);
        log::info!("Simulation seeded with {} ({} bricks)", seed, field.len());

        Self {
            tuning,
            rng,
            field,
            world: World::new(),
            frame: 0,
        }
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// Request one new ball. Returns false if the ball cap rejected it.
    pub fn spawn_ball(&mut self) -> bool {
        self.world.on_spawn_event(&self.tuning, &mut self.rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{Brick, BrickKind, Rgb, ScriptedRng};

    #[test]
    fn test_new_state() {
        let state = SimState::new(12345, Tuning::default());
        assert_eq!(state.seed(), 12345);
        assert_eq!(state.field.len(), 15);
        assert!(state.world.is_empty());
        assert_eq!(state.frame, 0);
    }

    #[test]
    fn test_sanitize_swaps_speed_bounds() {
        let tuning = Tuning {
            min_speed: 0.09,
            max_speed: 0.01,
            ..Default::default()
        }
        .sanitized();
        assert_eq!(tuning.min_speed, 0.01);
        assert_eq!(tuning.max_speed, 0.09);
    }

    #[test]
    fn test_sanitize_repairs_shapes() {
        let tuning = Tuning {
            ball_radius: -1.0,
            circle_segments: 0,
            brick_half_width: 0.0,
            speed_delta: -0.002,
            spawn: Vec2::new(3.0, -3.0),
            min_brick_half_width: 0.0,
            ..Default::default()
        }
        .sanitized();
        assert_eq!(tuning.ball_radius, BALL_RADIUS);
        assert_eq!(tuning.circle_segments, 3);
        assert_eq!(tuning.brick_half_width, BRICK_HALF_WIDTH);
        assert_eq!(tuning.speed_delta, 0.002);
        assert_eq!(tuning.spawn, Vec2::new(1.0 - BALL_RADIUS, -1.0 + BALL_RADIUS));
        assert_eq!(tuning.min_brick_half_width, MIN_BRICK_HALF_WIDTH);
    }

    #[test]
    fn test_zero_brick_floor_still_lets_bricks_die() {
        let tuning = Tuning {
            min_brick_half_width: 0.0,
            ..Default::default()
        }
        .sanitized();
        let mut brick = Brick::new(
            BrickKind::Destructible,
            Vec2::ZERO,
            tuning.brick_half_width,
            Rgb::default(),
        );
        let mut rng = ScriptedRng::new();
        for _ in 0..200 {
            brick.on_hit(tuning.min_brick_half_width, &mut rng);
            assert!(!brick.is_active() || brick.half_width() > 0.0);
        }
        assert!(!brick.is_active());
    }

    #[test]
    fn test_default_is_already_sane() {
        assert_eq!(Tuning::default().sanitized(), Tuning::default());
    }
}
