//! Square bricks: overlap test and hit response

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::draw::{DrawCommand, DrawSink, Rgb};
use super::rng::RandomSource;

/// Brick behavior on contact
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BrickKind {
    /// Bounces the first ball that touches it, then turns destructible
    Reflective,
    /// Halves in size on every hit
    #[default]
    Destructible,
}

/// A square brick. Once inactive it never comes back.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Brick {
    pub pos: Vec2,
    pub kind: BrickKind,
    pub color: Rgb,
    half_width: f32,
    active: bool,
}

impl Brick {
    pub fn new(kind: BrickKind, pos: Vec2, half_width: f32, color: Rgb) -> Self {
        Self {
            pos,
            kind,
            color,
            half_width,
            active: half_width > 0.0,
        }
    }

    #[inline]
    pub fn half_width(&self) -> f32 {
        self.half_width
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Box/circle overlap using the ball's bounding box.
    ///
    /// Every edge is open: a ball exactly touching a side does not count.
    pub fn collides_with(&self, ball_pos: Vec2, ball_radius: f32) -> bool {
        if !self.active {
            return false;
        }
        let h = self.half_width;
        ball_pos.x + ball_radius > self.pos.x - h
            && ball_pos.x - ball_radius < self.pos.x + h
            && ball_pos.y + ball_radius > self.pos.y - h
            && ball_pos.y - ball_radius < self.pos.y + h
    }

    /// A reflective brick becomes destructible; it never reflects again.
    pub fn demote(&mut self) {
        self.kind = BrickKind::Destructible;
    }

    /// Hit response. Only destructible bricks change shape: they halve,
    /// deactivate once smaller than `min_half_width`, and take a new color.
    ///
    /// Returns true if this hit deactivated the brick.
    pub fn on_hit<R: RandomSource + ?Sized>(
        &mut self,
        min_half_width: f32,
        rng: &mut R,
    ) -> bool {
        if !self.active || self.kind != BrickKind::Destructible {
            return false;
        }

        self.half_width /= 2.0;
        if self.half_width < min_half_width {
            self.active = false;
        }
        self.color = rng.color();

        !self.active
    }

    pub fn draw<S: DrawSink + ?Sized>(&self, sink: &mut S) {
        if self.active {
            sink.submit(DrawCommand::Square {
                center: self.pos,
                half_width: self.half_width,
                color: self.color,
            });
        }
    }
}
