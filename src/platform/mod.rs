//! Platform abstraction layer
//!
//! The simulation never touches a window. A [`Host`] supplies:
//! - Frame cadence (one `run` iteration per presented frame)
//! - The spawn key level and the close request
//! - Presentation of the frame's draw commands

pub mod headless;
pub mod input;

pub use headless::ScriptedHost;
pub use input::EdgeTrigger;

use crate::sim::{DrawCommand, FrameInput, FrameStats, SimState, tick};

/// The application shell around the simulation
pub trait Host {
    /// Checked once per frame boundary
    fn close_requested(&self) -> bool;

    /// Whether the spawn key is currently held
    fn spawn_pressed(&mut self) -> bool;

    /// Whether the spawn key went down and back up since the last frame.
    /// A level poll misses such a tap, so `run` counts it as a press on its own.
    fn spawn_tapped(&mut self) -> bool {
        false
    }

    /// Show one frame's draw commands (ball polygons, then brick squares)
    fn present(&mut self, commands: &[DrawCommand], stats: &FrameStats);
}

/// Drive frames until the host asks to close. Returns the number of frames run.
pub fn run<H: Host + ?Sized>(host: &mut H, state: &mut SimState) -> u64 {
    let mut spawn_key = EdgeTrigger::default();
    let mut frames = 0;

    while !host.close_requested() {
        let pressed = spawn_key.update(host.spawn_pressed());
        let tapped = host.spawn_tapped();
        let input = FrameInput {
            spawn: pressed || tapped,
        };
        let out = tick(state, &input);
        host.present(&out.commands, &out.stats);
        frames += 1;
    }

    log::info!(
        "Stopped after {} frames: {} balls, {} bricks",
        frames,
        state.world.len(),
        state.field.len()
    );
    frames
}
