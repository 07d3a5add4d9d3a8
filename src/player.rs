use crate::components::{Direction, Mover, Position};
use crate::level::MazeGrid;
use crate::motion::{legal_directions, try_step};

/// The player-controlled actor with buffered turning.
///
/// `pending` is the standing intent from input. It is only adopted as the
/// active heading at a cell-aligned position where it is legal, and it stays
/// pending until then.
#[derive(Clone, Debug)]
pub struct Player {
    pos: Position,
    pending: Option<Direction>,
    active: Option<Direction>,
}

impl Player {
    pub fn new(spawn: Position) -> Self {
        Self {
            pos: spawn,
            pending: None,
            active: None,
        }
    }

    pub fn position(&self) -> Position {
        self.pos
    }

    pub fn pending_direction(&self) -> Option<Direction> {
        self.pending
    }

    pub fn active_direction(&self) -> Option<Direction> {
        self.active
    }

    pub fn request_direction(&mut self, dir: Direction) {
        self.pending = Some(dir);
    }

    /// Adopts the pending direction if the player sits exactly on a cell and
    /// the cell ahead is open. A request into a wall leaves `active` alone.
    fn apply_pending(&mut self, grid: &MazeGrid) {
        let Some(want) = self.pending else {
            return;
        };
        if self.active == Some(want) || !grid.is_aligned(self.pos) {
            return;
        }
        if legal_directions(grid, self.pos, Mover::Player).contains(&want) {
            self.active = Some(want);
        }
    }

    /// One gameplay tick. Returns whether the player moved.
    pub fn update(&mut self, grid: &MazeGrid) -> bool {
        self.apply_pending(grid);
        match self.active {
            Some(dir) => try_step(grid, &mut self.pos, dir, Mover::Player),
            None => false,
        }
    }
}
