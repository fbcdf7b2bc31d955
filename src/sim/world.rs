//! The ball world: spawning and the per-frame collide/step/draw pass

use super::ball::{Ball, Hit};
use super::draw::DrawSink;
use super::field::BrickField;
use super::rng::RandomSource;
use super::state::Tuning;

/// Contacts resolved during one frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Contacts {
    pub reflected: u32,
    pub struck: u32,
    pub destroyed: u32,
}

impl Contacts {
    fn record(&mut self, hit: Hit) {
        match hit {
            Hit::Reflected => self.reflected += 1,
            Hit::Struck { destroyed } => {
                self.struck += 1;
                if destroyed {
                    self.destroyed += 1;
                }
            }
        }
    }
}

/// Owns every ball. Balls are never removed.
#[derive(Debug, Clone, Default)]
pub struct World {
    balls: Vec<Ball>,
}

impl World {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.balls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.balls.is_empty()
    }

    pub fn balls(&self) -> &[Ball] {
        &self.balls
    }

    pub fn push(&mut self, ball: Ball) {
        self.balls.push(ball);
    }

    /// Add one ball at the spawn point. Returns false if `max_balls`
    /// is set and already reached.
    pub fn on_spawn_event<R: RandomSource + ?Sized>(
        &mut self,
        tuning: &Tuning,
        rng: &mut R,
    ) -> bool {
        if let Some(max) = tuning.max_balls {
            if self.balls.len() >= max {
                log::warn!("Ball cap of {} reached, spawn ignored", max);
                return false;
            }
        }

        let ball = Ball::spawn(tuning, rng);
        log::debug!(
            "Spawned ball #{} heading {:?}",
            self.balls.len() + 1,
            ball.direction
        );
        self.balls.push(ball);
        true
    }

    /// One frame for every ball, in order: test it against every brick
    /// still active (bricks mutate as the loop runs, so earlier pairs win),
    /// step it, then queue its draw.
    pub fn advance_frame<R, S>(
        &mut self,
        field: &mut BrickField,
        tuning: &Tuning,
        rng: &mut R,
        sink: &mut S,
    ) -> Contacts
    where
        R: RandomSource + ?Sized,
        S: DrawSink + ?Sized,
    {
        let mut contacts = Contacts::default();

        for ball in &mut self.balls {
            for brick in field.iter_mut().filter(|b| b.is_active()) {
                if let Some(hit) = ball.check_collision(brick, tuning, rng) {
                    log::debug!("Ball at {} hit brick at {}: {:?}", ball.pos(), brick.pos, hit);
                    contacts.record(hit);
                }
            }
            ball.step(tuning, rng);
            ball.draw(tuning.circle_segments, sink);
        }

        contacts
    }
}
