//! Kinetic Bricks - buzzing balls in a field of shrinking bricks
//!
//! Core modules:
//! - `sim`: Deterministic simulation (movement, collisions, state mutation)
//! - `renderer`: Tessellation of draw commands into vertex lists
//! - `platform`: Host shell abstraction and the frame loop
//! - `settings`: Tunables loaded from JSON

pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use settings::Settings;
pub use sim::{SimState, Tuning};

use glam::Vec2;

/// Simulation configuration constants
pub mod consts {
    /// World edges. The world is the square [-1, 1] x [-1, 1].
    pub const BOUNDARY_LEFT: f32 = -1.0;
    pub const BOUNDARY_RIGHT: f32 = 1.0;
    /// "Up" travels toward negative y
    pub const BOUNDARY_TOP: f32 = -1.0;
    pub const BOUNDARY_BOTTOM: f32 = 1.0;

    /// Ball speed limits (world units per frame)
    pub const MIN_SPEED: f32 = 0.01;
    pub const MAX_SPEED: f32 = 0.09;
    /// Speed change applied on every brick hit
    pub const SPEED_DELTA: f32 = 0.001;
    pub const INITIAL_SPEED: f32 = MIN_SPEED;
    /// One step in this many picks a random heading ("buzzing")
    pub const RANDOM_DIRECTION_PROBABILITY: u32 = 10;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 0.05;
    pub const CIRCLE_SEGMENTS: u32 = 360;
    pub const SPAWN_X: f32 = 0.8;
    pub const SPAWN_Y: f32 = -0.8;

    /// Brick defaults (bricks are squares)
    pub const BRICK_HALF_WIDTH: f32 = 0.1;
    /// A destructible brick shrunk below this is gone for good
    pub const MIN_BRICK_HALF_WIDTH: f32 = 0.01;

    /// Pyramid layout
    pub const PYRAMID_ROWS: usize = 5;
    pub const PYRAMID_BASE_Y: f32 = -0.25;
    pub const PYRAMID_ROW_SPACING: f32 = 0.25;
    pub const PYRAMID_BASE_X: f32 = -0.5;
    /// Each row starts this much further right than the one below
    pub const PYRAMID_ROW_INDENT: f32 = 0.125;
    pub const PYRAMID_COLUMN_SPACING: f32 = 0.25;
}

/// Spawn point for new balls
#[inline]
pub fn spawn_point() -> Vec2 {
    Vec2::new(consts::SPAWN_X, consts::SPAWN_Y)
}
