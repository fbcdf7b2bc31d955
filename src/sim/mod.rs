//! Deterministic simulation module
//!
//! All behavior lives here. This module must be pure and deterministic:
//! - One step per presented frame
//! - Injected random source only
//! - Stable iteration order (insertion order for balls and bricks)
//! - No rendering or platform dependencies

pub mod ball;
pub mod brick;
pub mod direction;
pub mod draw;
pub mod field;
pub mod rng;
pub mod state;
pub mod tick;
pub mod world;

pub use ball::{Ball, Hit};
pub use brick::{Brick, BrickKind};
pub use direction::{Direction, Steer, next_direction};
pub use draw::{DrawCommand, DrawSink, Rgb};
pub use field::BrickField;
pub use rng::{RandomSource, ScriptedRng, SimRng};
pub use state::{SimState, Tuning};
pub use tick::{FrameInput, FrameOutput, FrameStats, tick};
pub use world::{Contacts, World};
