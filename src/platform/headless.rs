//! Windowless host that replays a fixed key script

use std::collections::BTreeSet;

use super::Host;
use crate::sim::{DrawCommand, FrameStats};

/// Holds or taps the spawn key on listed frames and closes after `frames` frames.
#[derive(Debug, Clone, Default)]
pub struct ScriptedHost {
    frames: u64,
    held_on: BTreeSet<u64>,
    tapped_on: BTreeSet<u64>,
    presented: u64,
    last_commands: Vec<DrawCommand>,
    last_stats: FrameStats,
}

impl ScriptedHost {
    pub fn new(frames: u64) -> Self {
        Self {
            frames,
            ..Default::default()
        }
    }

    /// Hold the spawn key during these frames (0-based)
    pub fn press_on(mut self, frames: impl IntoIterator<Item = u64>) -> Self {
        self.held_on.extend(frames);
        self
    }

    /// Press and release the key within these frames (0-based)
    pub fn tap_on(mut self, frames: impl IntoIterator<Item = u64>) -> Self {
        self.tapped_on.extend(frames);
        self
    }

    /// Tap the key every `every` frames starting at frame 0
    pub fn tap_every(self, every: u64) -> Self {
        if every == 0 {
            return self;
        }
        let frames = self.frames;
        self.tap_on((0..frames).step_by(every as usize))
    }

    pub fn presented(&self) -> u64 {
        self.presented
    }

    pub fn last_commands(&self) -> &[DrawCommand] {
        &self.last_commands
    }

    pub fn last_stats(&self) -> &FrameStats {
        &self.last_stats
    }
}

impl Host for ScriptedHost {
    fn close_requested(&self) -> bool {
        self.presented >= self.frames
    }

    fn spawn_pressed(&mut self) -> bool {
        self.held_on.contains(&self.presented)
    }

    fn spawn_tapped(&mut self) -> bool {
        self.tapped_on.contains(&self.presented)
    }

    fn present(&mut self, commands: &[DrawCommand], stats: &FrameStats) {
        self.last_commands.clear();
        self.last_commands.extend_from_slice(commands);
        self.last_stats = *stats;
        self.presented += 1;

        if stats.frame % 600 == 0 {
            log::info!(
                "Frame {}: {} balls, {} bricks",
                stats.frame,
                stats.balls,
                stats.bricks
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn script(host: &mut ScriptedHost, frames: u64) -> Vec<(bool, bool)> {
        let stats = FrameStats::default();
        (0..frames)
            .map(|_| {
                let keys = (host.spawn_pressed(), host.spawn_tapped());
                host.present(&[], &stats);
                keys
            })
            .collect()
    }

    #[test]
    fn test_tap_every() {
        let mut host = ScriptedHost::new(10).tap_every(4);
        let expected: Vec<(bool, bool)> = (0..10).map(|i| (false, i % 4 == 0)).collect();
        assert_eq!(script(&mut host, 10), expected);
    }

    #[test]
    fn test_tap_every_zero_never_presses() {
        let mut host = ScriptedHost::new(5).tap_every(0);
        assert!(script(&mut host, 5).iter().all(|&keys| keys == (false, false)));
    }

    #[test]
    fn test_held_frames_are_levels() {
        let mut host = ScriptedHost::new(4).press_on(1..3);
        let held: Vec<bool> = script(&mut host, 4).iter().map(|k| k.0).collect();
        assert_eq!(held, vec![false, true, true, false]);
        assert!(host.close_requested());
    }
}
