//! Key level to key edge conversion

/// Reports true only on the frame a key goes from released to pressed
#[derive(Debug, Clone, Copy, Default)]
pub struct EdgeTrigger {
    held: bool,
}

impl EdgeTrigger {
    pub fn update(&mut self, pressed: bool) -> bool {
        let edge = pressed && !self.held;
        self.held = pressed;
        edge
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rising_edges_only() {
        let mut key = EdgeTrigger::default();
        let levels = [false, true, true, true, false, true, false, false];
        let edges: Vec<bool> = levels.iter().map(|&l| key.update(l)).collect();
        assert_eq!(edges, vec![false, true, false, false, false, true, false, false]);
        // Released on the last frame, so the next press is an edge again
        assert!(key.update(true));
    }
}
