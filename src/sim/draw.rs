//! Draw requests handed to the host each frame

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An RGB color with channels in [0, 1]
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Rgb {
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    pub fn to_rgba(self, alpha: f32) -> [f32; 4] {
        [self.r, self.g, self.b, alpha]
    }
}

/// A single filled-shape request
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawCommand {
    /// Axis-aligned filled square (a brick)
    Square {
        center: Vec2,
        half_width: f32,
        color: Rgb,
    },
    /// Regular polygon standing in for a filled circle (a ball)
    Polygon {
        center: Vec2,
        radius: f32,
        color: Rgb,
        segments: u32,
    },
}

/// Anything that accepts draw requests in order
pub trait DrawSink {
    fn submit(&mut self, command: DrawCommand);
}

impl DrawSink for Vec<DrawCommand> {
    fn submit(&mut self, command: DrawCommand) {
        self.push(command);
    }
}
