use std::collections::HashSet;

use crate::components::CellPos;
use crate::level::MazeGrid;

/// Score added per pickup eaten.
pub const PICKUP_UNIT: u32 = 1;
/// Multiplier applied to the score for display only.
pub const DISPLAY_FACTOR: u32 = 10;

#[derive(Clone, Debug)]
pub struct PickupField {
    remaining: HashSet<CellPos>,
    initial: usize,
}

impl PickupField {
    /// One pickup on every open or junction cell outside the pen.
    pub fn seed(grid: &MazeGrid) -> Self {
        let remaining: HashSet<CellPos> = grid
            .cells()
            .filter(|(_, cell)| cell.holds_pickup())
            .map(|(pos, _)| pos)
            .collect();
        let initial = remaining.len();
        Self { remaining, initial }
    }

    pub fn from_cells(cells: impl IntoIterator<Item = CellPos>) -> Self {
        let remaining: HashSet<CellPos> = cells.into_iter().collect();
        let initial = remaining.len();
        Self { remaining, initial }
    }

    pub fn contains(&self, cell: CellPos) -> bool {
        self.remaining.contains(&cell)
    }

    /// Removes the pickup at `cell`. True only the first time.
    pub fn take(&mut self, cell: CellPos) -> bool {
        self.remaining.remove(&cell)
    }

    pub fn remaining(&self) -> usize {
        self.remaining.len()
    }

    pub fn eaten(&self) -> usize {
        self.initial - self.remaining.len()
    }

    pub fn is_empty(&self) -> bool {
        self.remaining.is_empty()
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Score(u32);

impl Score {
    pub fn add_pickup(&mut self) {
        self.0 = self.0.saturating_add(PICKUP_UNIT);
    }

    pub fn value(self) -> u32 {
        self.0
    }

    pub fn display(self) -> u32 {
        self.0.saturating_mul(DISPLAY_FACTOR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classic_maze_has_205_pickups() {
        let field = PickupField::seed(&MazeGrid::classic());
        assert_eq!(field.remaining(), 205);
        assert!(!field.contains(CellPos::new(9, 10)));
        assert!(!field.contains(CellPos::new(0, 0)));
        assert!(field.contains(CellPos::new(9, 12)));
    }

    #[test]
    fn each_pickup_is_taken_once() {
        let mut field = PickupField::from_cells([CellPos::new(1, 1), CellPos::new(2, 1)]);
        assert!(field.take(CellPos::new(1, 1)));
        assert!(!field.take(CellPos::new(1, 1)));
        assert_eq!(field.remaining(), 1);
        assert_eq!(field.eaten(), 1);
    }

    #[test]
    fn display_score_is_ten_times_the_score() {
        let mut score = Score::default();
        for _ in 0..205 {
            score.add_pickup();
        }
        assert_eq!(score.value(), 205);
        assert_eq!(score.display(), 2050);
    }
}
