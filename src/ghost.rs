use log::debug;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::components::{CellPos, Direction, Mover, Position};
use crate::level::{Cell, MazeGrid};
use crate::motion::try_step;

/// How far a junction scan looks along each direction.
pub const SCAN_REACH: usize = 8;

/// The side of the gate the pen lies on in the classic maze.
pub const PEN_SIDE: Direction = Direction::Down;

#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum GhostKind {
    Cyan,
    Red,
    Yellow,
    Pink,
}

pub const GHOST_SPAWNS: [(GhostKind, Position); 4] = [
    (GhostKind::Cyan, Position::new(200, 250)),
    (GhostKind::Red, Position::new(225, 200)),
    (GhostKind::Yellow, Position::new(225, 250)),
    (GhostKind::Pink, Position::new(250, 250)),
];

#[derive(Clone, Debug)]
pub struct Ghost {
    kind: GhostKind,
    pos: Position,
    heading: Option<Direction>,
}

impl Ghost {
    pub fn new(kind: GhostKind, spawn: Position) -> Self {
        Self {
            kind,
            pos: spawn,
            heading: None,
        }
    }

    pub fn with_heading(mut self, heading: Direction) -> Self {
        self.heading = Some(heading);
        self
    }

    pub fn kind(&self) -> GhostKind {
        self.kind
    }

    pub fn position(&self) -> Position {
        self.pos
    }

    pub fn heading(&self) -> Option<Direction> {
        self.heading
    }

    /// One gameplay tick: re-pick the heading on an aligned junction, then step.
    pub fn update(&mut self, grid: &MazeGrid, rng: &mut impl Rng) -> bool {
        if grid.is_aligned(self.pos) {
            if let Some(cell) = grid.cell_of(self.pos) {
                let is_junction = grid.get(cell).map_or(false, Cell::is_junction);
                if is_junction {
                    let exits = junction_exits(grid, cell);
                    if let Some(&dir) = exits.choose(rng) {
                        if self.heading != Some(dir) {
                            debug!(
                                "{:?} ghost turns {} at ({}, {}) from {:?}",
                                self.kind, dir, cell.col, cell.row, exits
                            );
                        }
                        self.heading = Some(dir);
                    }
                }
            }
        }

        match self.heading {
            Some(dir) => try_step(grid, &mut self.pos, dir, Mover::Ghost),
            None => false,
        }
    }
}

/// Exits from a junction, found by looking along each direction for the next
/// decision point.
///
/// Open cells are walked over. The first junction or gate makes the
/// direction an exit, the first wall rules it out. A gate adjacent on the
/// pen side counts as a wall so ghosts never walk back into the pen.
pub fn junction_exits(grid: &MazeGrid, at: CellPos) -> Vec<Direction> {
    let gate_closed = grid
        .neighbour(at, PEN_SIDE, 1)
        .and_then(|c| grid.get(c))
        == Some(Cell::GhostGate);

    let mut exits = Vec::with_capacity(4);
    for dir in Direction::ALL {
        for distance in 1..=SCAN_REACH {
            let Some(cell) = grid.neighbour(at, dir, distance).and_then(|c| grid.get(c)) else {
                break;
            };
            match cell {
                Cell::Open => continue,
                Cell::Wall => break,
                Cell::GhostGate if gate_closed => break,
                Cell::GhostGate | Cell::Junction | Cell::PenJunction => {
                    exits.push(dir);
                    break;
                }
            }
        }
    }
    exits
}
