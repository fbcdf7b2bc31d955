//! Balls: brick contact response and per-frame movement

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::brick::{Brick, BrickKind};
use super::direction::{Direction, Steer, next_direction};
use super::draw::{DrawCommand, DrawSink, Rgb};
use super::rng::RandomSource;
use super::state::Tuning;
use crate::consts::*;

/// What a ball did to a brick it touched
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hit {
    /// Bounced off a reflective brick (now destructible)
    Reflected,
    /// Struck a destructible brick
    Struck { destroyed: bool },
}

/// A ball entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    pos: Vec2,
    /// World units per step, kept within [min_speed, max_speed]
    speed: f32,
    pub direction: Direction,
    pub color: Rgb,
    radius: f32,
}

impl Ball {
    pub fn new(pos: Vec2, radius: f32, speed: f32, direction: Direction, color: Rgb) -> Self {
        Self {
            pos,
            speed,
            direction,
            color,
            radius,
        }
    }

    /// New ball at the spawn point with a random heading and color
    pub fn spawn<R: RandomSource + ?Sized>(tuning: &Tuning, rng: &mut R) -> Self {
        let direction = next_direction(None, Steer::Randomize, rng);
        let color = rng.color();
        Self::new(
            tuning.spawn,
            tuning.ball_radius,
            tuning.initial_speed.max(tuning.min_speed).min(tuning.max_speed),
            direction,
            color,
        )
    }

    #[inline]
    pub fn pos(&self) -> Vec2 {
        self.pos
    }

    #[inline]
    pub fn speed(&self) -> f32 {
        self.speed
    }

    #[inline]
    pub fn radius(&self) -> f32 {
        self.radius
    }

    fn nudge_speed(&mut self, delta: f32, tuning: &Tuning) {
        self.speed = (self.speed + delta).max(tuning.min_speed).min(tuning.max_speed);
    }

    /// Test one brick and apply its response.
    ///
    /// Reflective: slow down, demote the brick, reflect the heading.
    /// Destructible: speed up, shrink the brick, take a new color.
    pub fn check_collision<R: RandomSource + ?Sized>(
        &mut self,
        brick: &mut Brick,
        tuning: &Tuning,
        rng: &mut R,
    ) -> Option<Hit> {
        if !brick.is_active() || brick.half_width() <= 0.0 {
            return None;
        }
        if !brick.collides_with(self.pos, self.radius) {
            return None;
        }

        match brick.kind {
            BrickKind::Reflective => {
                self.nudge_speed(-tuning.speed_delta, tuning);
                brick.demote();
                self.direction = next_direction(Some(self.direction), Steer::Reflect, rng);
                Some(Hit::Reflected)
            }
            BrickKind::Destructible => {
                self.nudge_speed(tuning.speed_delta, tuning);
                let destroyed = brick.on_hit(tuning.min_brick_half_width, rng);
                self.color = rng.color();
                Some(Hit::Struck { destroyed })
            }
        }
    }

    /// Advance one frame.
    ///
    /// May buzz to a random heading first. Each axis of the heading then
    /// moves by `speed` unless that would leave [-1 + r, 1 - r]; a blocked
    /// axis stays put and randomizes the heading instead. Which axes move
    /// is fixed by the heading held when the move starts.
    pub fn step<R: RandomSource + ?Sized>(&mut self, tuning: &Tuning, rng: &mut R) {
        if rng.one_in(tuning.buzz_one_in) {
            self.direction = next_direction(Some(self.direction), Steer::Randomize, rng);
        }

        let offset = self.direction.offset();
        let r = self.radius;

        if offset.x != 0.0 {
            let next = self.pos.x + offset.x * self.speed;
            if (BOUNDARY_LEFT + r..=BOUNDARY_RIGHT - r).contains(&next) {
                self.pos.x = next;
            } else {
                self.direction = next_direction(Some(self.direction), Steer::Randomize, rng);
            }
        }

        if offset.y != 0.0 {
            let next = self.pos.y + offset.y * self.speed;
            if (BOUNDARY_TOP + r..=BOUNDARY_BOTTOM - r).contains(&next) {
                self.pos.y = next;
            } else {
                self.direction = next_direction(Some(self.direction), Steer::Randomize, rng);
            }
        }
    }

    pub fn draw<S: DrawSink + ?Sized>(&self, segments: u32, sink: &mut S) {
        sink.submit(DrawCommand::Polygon {
            center: self.pos,
            radius: self.radius,
            color: self.color,
            segments,
        });
    }
}
