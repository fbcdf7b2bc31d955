//! The eight fixed headings a ball can travel in
//!
//! Headings are a closed set; the only way to leave one is to reflect it
//! (fixed involutive pairing) or to draw a fresh one from the random source.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::rng::RandomSource;

/// A ball heading. Diagonals move on both axes in the same step.
///
/// "Up" travels toward the world's top edge at y = -1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
    UpRight,
    UpLeft,
    DownRight,
    DownLeft,
}

/// How to pick the next heading
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Steer {
    /// Bounce back along the axis of travel
    Reflect,
    /// Uniform pick among all eight headings (the current one included)
    Randomize,
}

impl Direction {
    pub const ALL: [Direction; 8] = [
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Left,
        Direction::UpRight,
        Direction::UpLeft,
        Direction::DownRight,
        Direction::DownLeft,
    ];

    /// Reflection pairing. Applying it twice is the identity.
    pub fn reflect(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Right => Direction::Left,
            Direction::Left => Direction::Right,
            Direction::UpRight => Direction::DownLeft,
            Direction::DownLeft => Direction::UpRight,
            Direction::UpLeft => Direction::DownRight,
            Direction::DownRight => Direction::UpLeft,
        }
    }

    /// Unit step per axis: each component is -1, 0 or 1
    pub fn offset(self) -> Vec2 {
        match self {
            Direction::Up => Vec2::new(0.0, -1.0),
            Direction::Right => Vec2::new(1.0, 0.0),
            Direction::Down => Vec2::new(0.0, 1.0),
            Direction::Left => Vec2::new(-1.0, 0.0),
            Direction::UpRight => Vec2::new(1.0, -1.0),
            Direction::UpLeft => Vec2::new(-1.0, -1.0),
            Direction::DownRight => Vec2::new(1.0, 1.0),
            Direction::DownLeft => Vec2::new(-1.0, 1.0),
        }
    }
}

/// Pick the next heading.
///
/// A missing heading (e.g. one that failed to deserialize) always falls
/// back to a random pick, whatever the mode.
pub fn next_direction<R: RandomSource + ?Sized>(
    current: Option<Direction>,
    steer: Steer,
    rng: &mut R,
) -> Direction {
    match (current, steer) {
        (Some(dir), Steer::Reflect) => dir.reflect(),
        _ => rng.direction(),
    }
}
