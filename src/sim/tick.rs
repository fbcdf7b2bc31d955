//! One simulation frame
//!
//! Core loop body: spawn, collide and move balls, prune dead bricks, draw.

use super::draw::DrawCommand;
use super::state::SimState;
use super::world::Contacts;

/// Input commands for a single frame
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameInput {
    /// Spawn one ball this frame (a key-press edge, not a held key)
    pub spawn: bool,
}

/// Summary of one frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameStats {
    /// Index of the frame just simulated (first frame is 1)
    pub frame: u64,
    pub balls: usize,
    pub bricks: usize,
    pub contacts: Contacts,
    /// Bricks removed from the field this frame
    pub pruned: usize,
}

/// Everything the host needs after a frame
#[derive(Debug, Clone, Default)]
pub struct FrameOutput {
    /// Ball polygons first, then brick squares
    pub commands: Vec<DrawCommand>,
    pub stats: FrameStats,
}

/// Advance the simulation by one presented frame
pub fn tick(state: &mut SimState, input: &FrameInput) -> FrameOutput {
    state.frame += 1;

    if input.spawn {
        state.spawn_ball();
    }

    let mut commands = Vec::with_capacity(state.world.len() + state.field.len());

    let contacts = state.world.advance_frame(
        &mut state.field,
        &state.tuning,
        &mut state.rng,
        &mut commands,
    );

    let pruned = state.field.prune_inactive();
    state.field.draw(&mut commands);

    if pruned > 0 && state.field.is_empty() {
        log::info!("Frame {}: last brick destroyed", state.frame);
    }

    FrameOutput {
        commands,
        stats: FrameStats {
            frame: state.frame,
            balls: state.world.len(),
            bricks: state.field.len(),
            contacts,
            pruned,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::Tuning;

    const SPAWN: FrameInput = FrameInput { spawn: true };

    #[test]
    fn test_first_frame_draws_pyramid() {
        let mut state = SimState::new(12345, Tuning::default());
        let out = tick(&mut state, &FrameInput::default());
        assert_eq!(out.stats.frame, 1);
        assert_eq!(out.stats.balls, 0);
        assert_eq!(out.stats.bricks, 15);
        assert_eq!(out.commands.len(), 15);
        assert!(out.commands.iter().all(|c| matches!(c, DrawCommand::Square { .. })));
    }

    #[test]
    fn test_spawn_then_balls_drawn_before_bricks() {
        let mut state = SimState::new(12345, Tuning::default());
        let out = tick(&mut state, &SPAWN);
        assert_eq!(out.stats.balls, 1);
        assert!(matches!(out.commands[0], DrawCommand::Polygon { .. }));
        assert!(out.commands[1..].iter().all(|c| matches!(c, DrawCommand::Square { .. })));
    }

    #[test]
    fn test_three_spawn_events() {
        let mut state = SimState::new(7, Tuning::default());
        for _ in 0..3 {
            tick(&mut state, &SPAWN);
        }
        assert_eq!(state.world.len(), 3);
    }

    #[test]
    fn test_determinism() {
        // Two states with same seed should produce identical results
        let mut state1 = SimState::new(99999, Tuning::default());
        let mut state2 = SimState::new(99999, Tuning::default());

        for frame in 0..600 {
            let input = FrameInput {
                spawn: frame % 25 == 0,
            };
            let a = tick(&mut state1, &input);
            let b = tick(&mut state2, &input);
            assert_eq!(a.commands, b.commands);
            assert_eq!(a.stats, b.stats);
        }
    }

    #[test]
    fn test_empty_field_keeps_running() {
        let mut state = SimState::new(3, Tuning::default());
        for brick in state.field.iter_mut() {
            while brick.is_active() {
                brick.demote();
                brick.on_hit(state.tuning.min_brick_half_width, &mut state.rng);
            }
        }
        tick(&mut state, &SPAWN);
        assert!(state.field.is_empty());

        let start = state.world.balls()[0].pos();
        let mut moved = false;
        for _ in 0..50 {
            let out = tick(&mut state, &FrameInput::default());
            assert_eq!(out.stats.bricks, 0);
            assert_eq!(out.commands.len(), 1);
            moved |= state.world.balls()[0].pos() != start;
        }
        assert!(moved);
    }

    #[test]
    fn test_long_run_keeps_invariants() {
        let mut state = SimState::new(2024, Tuning::default());
        let mut destroyed = 0;
        let mut pruned = 0;
        for frame in 0..5000 {
            let out = tick(&mut state, &FrameInput { spawn: frame % 50 == 0 });
            destroyed += out.stats.contacts.destroyed as usize;
            pruned += out.stats.pruned;
            assert!(state.field.iter().all(|b| b.is_active()));
        }
        assert_eq!(destroyed, pruned);
        assert_eq!(state.field.len() + pruned, 15);
        assert_eq!(state.world.len(), 100);

        let t = state.tuning;
        for ball in state.world.balls() {
            let r = ball.radius();
            assert!(ball.speed() >= t.min_speed && ball.speed() <= t.max_speed);
            assert!(ball.pos().x.abs() <= 1.0 - r && ball.pos().y.abs() <= 1.0 - r);
        }
    }
}
