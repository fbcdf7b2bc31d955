//! Random source capability
//!
//! Every random draw in the simulation goes through [`RandomSource`], so a
//! seeded PCG stream gives reproducible runs and tests can script exact
//! outcomes.

use std::collections::VecDeque;

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::direction::Direction;
use super::draw::Rgb;

pub trait RandomSource {
    /// Uniform real in [0, 1)
    fn unit(&mut self) -> f32;

    /// Uniform pick among the eight headings
    fn direction(&mut self) -> Direction;

    /// True with probability 1/n. Never true for n == 0.
    fn one_in(&mut self, n: u32) -> bool {
        match n {
            0 => false,
            1 => true,
            n => self.unit() * (n as f32) < 1.0,
        }
    }

    /// Uniform random color, one draw per channel
    fn color(&mut self) -> Rgb {
        let r = self.unit();
        let g = self.unit();
        let b = self.unit();
        Rgb::new(r, g, b)
    }
}

/// Seeded PCG32 stream
#[derive(Debug, Clone)]
pub struct SimRng {
    seed: u64,
    rng: Pcg32,
}

impl SimRng {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl RandomSource for SimRng {
    fn unit(&mut self) -> f32 {
        self.rng.random::<f32>()
    }

    fn direction(&mut self) -> Direction {
        Direction::ALL[self.rng.random_range(0..Direction::ALL.len())]
    }
}

/// Replays queued values. When a queue runs dry it falls back to 0.5 for
/// reals (never triggers `one_in(n)` for n >= 2) and `Up` for headings.
#[derive(Debug, Clone, Default)]
pub struct ScriptedRng {
    units: VecDeque<f32>,
    directions: VecDeque<Direction>,
}

impl ScriptedRng {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_units(mut self, units: impl IntoIterator<Item = f32>) -> Self {
        self.units.extend(units);
        self
    }

    pub fn with_directions(mut self, dirs: impl IntoIterator<Item = Direction>) -> Self {
        self.directions.extend(dirs);
        self
    }

    /// Nothing queued remains
    pub fn is_drained(&self) -> bool {
        self.units.is_empty() && self.directions.is_empty()
    }
}

impl RandomSource for ScriptedRng {
    fn unit(&mut self) -> f32 {
        self.units.pop_front().unwrap_or(0.5)
    }

    fn direction(&mut self) -> Direction {
        self.directions.pop_front().unwrap_or(Direction::Up)
    }
}
