//! Pixel-by-pixel stepping shared by the player and the ghosts.
//!
//! An actor is a square the size of one cell anchored at its top-left pixel.
//! A step is legal when every cell touched by the actor's leading edge after
//! the step is passable for that mover.

use crate::components::{Direction, Mover, Position};
use crate::level::MazeGrid;

pub fn can_step(grid: &MazeGrid, pos: Position, dir: Direction, mover: Mover) -> bool {
    let size = grid.cell_size();
    let next = pos.nudged(dir);
    let far = size - 1;

    let (a, b) = match dir {
        Direction::Up => ((next.x, next.y), (next.x + far, next.y)),
        Direction::Down => ((next.x, next.y + far), (next.x + far, next.y + far)),
        Direction::Left => ((next.x, next.y), (next.x, next.y + far)),
        Direction::Right => ((next.x + far, next.y), (next.x + far, next.y + far)),
    };

    [a, b].iter().all(|&(x, y)| {
        grid.cell_of_pixel(x, y)
            .and_then(|cell| grid.get(cell))
            .map_or(false, |cell| cell.is_passable_for(mover))
    })
}

/// Moves `pos` one pixel along `dir` when the way is clear. Returns whether it moved.
pub fn try_step(grid: &MazeGrid, pos: &mut Position, dir: Direction, mover: Mover) -> bool {
    if !can_step(grid, *pos, dir, mover) {
        return false;
    }
    *pos = pos.nudged(dir);
    true
}

pub fn legal_directions(grid: &MazeGrid, pos: Position, mover: Mover) -> Vec<Direction> {
    Direction::ALL
        .iter()
        .copied()
        .filter(|&dir| can_step(grid, pos, dir, mover))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::CellPos;
    use crate::level::{Cell, PLAYER_SPAWN};

    #[test]
    fn spawn_has_horizontal_exits_only() {
        let grid = MazeGrid::classic();
        let dirs = legal_directions(&grid, PLAYER_SPAWN, Mover::Player);
        assert_eq!(dirs, vec![Direction::Left, Direction::Right]);
    }

    #[test]
    fn blocked_step_leaves_position_alone() {
        let grid = MazeGrid::classic();
        let mut pos = PLAYER_SPAWN;
        assert!(!try_step(&grid, &mut pos, Direction::Up, Mover::Player));
        assert_eq!(pos, PLAYER_SPAWN);
        assert!(try_step(&grid, &mut pos, Direction::Right, Mover::Player));
        assert_eq!(pos, Position::new(226, 300));
    }

    #[test]
    fn gate_blocks_player_but_not_ghost() {
        let grid = MazeGrid::classic();
        let below_gate = grid.cell_origin(CellPos::new(9, 10));
        assert!(!can_step(&grid, below_gate, Direction::Up, Mover::Player));
        assert!(can_step(&grid, below_gate, Direction::Up, Mover::Ghost));
    }

    #[test]
    fn mid_corridor_steps_only_along_the_corridor() {
        let grid = MazeGrid::classic();
        let pos = Position::new(237, 300);
        assert!(can_step(&grid, pos, Direction::Left, Mover::Player));
        assert!(can_step(&grid, pos, Direction::Right, Mover::Player));
        assert!(!can_step(&grid, pos, Direction::Up, Mover::Player));
        assert!(!can_step(&grid, pos, Direction::Down, Mover::Player));
    }

    #[test]
    fn never_enters_a_wall() {
        let grid = MazeGrid::classic();
        for (cell, kind) in grid.cells() {
            if !kind.is_passable_for(Mover::Ghost) {
                continue;
            }
            for mover in [Mover::Player, Mover::Ghost] {
                for dir in Direction::ALL {
                    let mut pos = grid.cell_origin(cell);
                    for _ in 0..grid.cell_size() * 2 {
                        if !try_step(&grid, &mut pos, dir, mover) {
                            break;
                        }
                    }
                    let size = grid.cell_size();
                    for (x, y) in [
                        (pos.x, pos.y),
                        (pos.x + size - 1, pos.y),
                        (pos.x, pos.y + size - 1),
                        (pos.x + size - 1, pos.y + size - 1),
                    ] {
                        let touched = grid.cell_of_pixel(x, y).and_then(|c| grid.get(c));
                        assert_ne!(touched, Some(Cell::Wall));
                        assert!(touched.is_some());
                    }
                }
            }
        }
    }
}
