//! The brick field: layout and per-frame pruning

use glam::Vec2;

use super::brick::{Brick, BrickKind};
use super::draw::DrawSink;
use super::rng::RandomSource;
use super::state::Tuning;
use crate::consts::*;

/// Owns every brick. Order is insertion order (bottom row first).
#[derive(Debug, Clone, Default)]
pub struct BrickField {
    bricks: Vec<Brick>,
}

impl BrickField {
    pub fn new(bricks: Vec<Brick>) -> Self {
        Self { bricks }
    }

    /// Build the pyramid: `PYRAMID_ROWS` rows, the bottom row widest and
    /// each row above one brick shorter and indented half a column.
    /// Even columns of the bottom row are reflective.
    pub fn pyramid<R: RandomSource + ?Sized>(tuning: &Tuning, rng: &mut R) -> Self {
        let mut bricks = Vec::with_capacity(PYRAMID_ROWS * (PYRAMID_ROWS + 1) / 2);

        for row in 0..PYRAMID_ROWS {
            let in_row = PYRAMID_ROWS - row;
            let start_x = PYRAMID_BASE_X + row as f32 * PYRAMID_ROW_INDENT;
            let y = PYRAMID_BASE_Y + row as f32 * PYRAMID_ROW_SPACING;

            for col in 0..in_row {
                let x = start_x + col as f32 * PYRAMID_COLUMN_SPACING;
                let kind = if row == 0 && col % 2 == 0 {
                    BrickKind::Reflective
                } else {
                    BrickKind::Destructible
                };
                let color = rng.color();
                bricks.push(Brick::new(kind, Vec2::new(x, y), tuning.brick_half_width, color));
            }
        }

        log::debug!("Built pyramid with {} bricks", bricks.len());
        Self { bricks }
    }

    pub fn push(&mut self, brick: Brick) {
        self.bricks.push(brick);
    }

    pub fn len(&self) -> usize {
        self.bricks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bricks.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Brick> {
        self.bricks.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Brick> {
        self.bricks.iter_mut()
    }

    /// Drop every inactive brick, keeping the order of the rest.
    /// Returns how many were removed.
    pub fn prune_inactive(&mut self) -> usize {
        let before = self.bricks.len();
        self.bricks.retain(Brick::is_active);
        let removed = before - self.bricks.len();
        if removed > 0 {
            log::debug!("Pruned {} bricks, {} left", removed, self.bricks.len());
        }
        removed
    }

    pub fn for_each_active(&self, mut f: impl FnMut(&Brick)) {
        self.bricks.iter().filter(|b| b.is_active()).for_each(|b| f(b));
    }

    /// Queue a square for every remaining brick, in order
    pub fn draw<S: DrawSink + ?Sized>(&self, sink: &mut S) {
        self.for_each_active(|brick| brick.draw(sink));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::draw::{DrawCommand, Rgb};
    use crate::sim::rng::{ScriptedRng, SimRng};

    #[test]
    fn test_pyramid_layout() {
        let field = BrickField::pyramid(&Tuning::default(), &mut SimRng::new(1));
        assert_eq!(field.len(), 15);

        let rows: Vec<f32> = field.iter().map(|b| b.pos.y).collect();
        let count_at = |y: f32| rows.iter().filter(|&&r| (r - y).abs() < 1e-6).count();
        assert_eq!(count_at(-0.25), 5);
        assert_eq!(count_at(0.0), 4);
        assert_eq!(count_at(0.25), 3);
        assert_eq!(count_at(0.5), 2);
        assert_eq!(count_at(0.75), 1);

        let xs: Vec<f32> = field.iter().take(5).map(|b| b.pos.x).collect();
        assert_eq!(xs, vec![-0.5, -0.25, 0.0, 0.25, 0.5]);
        let apex = field.iter().last().map(|b| b.pos);
        assert_eq!(apex, Some(Vec2::new(0.0, 0.75)));
    }

    #[test]
    fn test_pyramid_kinds() {
        let field = BrickField::pyramid(&Tuning::default(), &mut SimRng::new(1));
        let kinds: Vec<BrickKind> = field.iter().map(|b| b.kind).collect();
        use BrickKind::*;
        assert_eq!(
            &kinds[..5],
            &[Reflective, Destructible, Reflective, Destructible, Reflective]
        );
        assert!(kinds[5..].iter().all(|k| *k == Destructible));
        assert!(field.iter().all(|b| b.is_active() && b.half_width() == BRICK_HALF_WIDTH));
    }

    #[test]
    fn test_pyramid_colors_come_from_rng() {
        let units: Vec<f32> = (0..45).map(|i| i as f32 / 45.0).collect();
        let mut rng = ScriptedRng::new().with_units(units);
        let field = BrickField::pyramid(&Tuning::default(), &mut rng);
        assert!(rng.is_drained());
        let first = field.iter().next().map(|b| b.color);
        assert_eq!(first, Some(Rgb::new(0.0, 1.0 / 45.0, 2.0 / 45.0)));
    }

    #[test]
    fn test_prune_removes_only_inactive() {
        let mut field = BrickField::default();
        let mut rng = ScriptedRng::new();
        field.push(Brick::new(BrickKind::Destructible, Vec2::new(-0.5, 0.0), 0.1, Rgb::default()));
        field.push(Brick::new(BrickKind::Destructible, Vec2::ZERO, 0.016, Rgb::default()));
        field.push(Brick::new(BrickKind::Reflective, Vec2::new(0.5, 0.0), 0.1, Rgb::default()));

        for brick in field.iter_mut() {
            brick.on_hit(MIN_BRICK_HALF_WIDTH, &mut rng);
        }
        assert_eq!(field.len(), 3);
        assert_eq!(field.prune_inactive(), 1);
        assert_eq!(field.len(), 2);
        let xs: Vec<f32> = field.iter().map(|b| b.pos.x).collect();
        assert_eq!(xs, vec![-0.5, 0.5]);
        assert_eq!(field.prune_inactive(), 0);
    }

    #[test]
    fn test_draw_in_order() {
        let field = BrickField::new(vec![
            Brick::new(BrickKind::Destructible, Vec2::new(1.0, 0.0), 0.1, Rgb::default()),
            Brick::new(BrickKind::Destructible, Vec2::new(2.0, 0.0), 0.0, Rgb::default()),
            Brick::new(BrickKind::Reflective, Vec2::new(3.0, 0.0), 0.1, Rgb::default()),
        ]);
        let mut sink: Vec<DrawCommand> = Vec::new();
        field.draw(&mut sink);
        let centers: Vec<f32> = sink
            .iter()
            .map(|cmd| match cmd {
                DrawCommand::Square { center, .. } => center.x,
                DrawCommand::Polygon { center, .. } => center.x,
            })
            .collect();
        assert_eq!(centers, vec![1.0, 3.0]);
    }
}
