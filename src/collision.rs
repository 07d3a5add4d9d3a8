use crate::components::{CellPos, Position};
use crate::level::MazeGrid;
use crate::pickups::{PickupField, Score};

/// Strict axis-aligned overlap of two actor-sized squares; touching edges do not count.
pub fn overlaps(a: Position, b: Position, size: i32) -> bool {
    a.x < b.x + size && b.x < a.x + size && a.y < b.y + size && b.y < a.y + size
}

/// Cells covered by an actor-sized square at `pos`.
fn covered_cells(grid: &MazeGrid, pos: Position) -> Vec<CellPos> {
    let far = grid.cell_size() - 1;
    let mut cells = Vec::with_capacity(4);
    for (x, y) in [
        (pos.x, pos.y),
        (pos.x + far, pos.y),
        (pos.x, pos.y + far),
        (pos.x + far, pos.y + far),
    ] {
        if let Some(cell) = grid.cell_of_pixel(x, y) {
            if !cells.contains(&cell) {
                cells.push(cell);
            }
        }
    }
    cells
}

/// Eats every remaining pickup the player overlaps, scoring each once.
/// Returns how many were eaten.
pub fn check_pickup(
    grid: &MazeGrid,
    player: Position,
    field: &mut PickupField,
    score: &mut Score,
) -> usize {
    let mut eaten = 0;
    for cell in covered_cells(grid, player) {
        if field.take(cell) {
            score.add_pickup();
            eaten += 1;
        }
    }
    eaten
}

pub fn check_loss(
    grid: &MazeGrid,
    player: Position,
    ghosts: impl IntoIterator<Item = Position>,
) -> bool {
    let size = grid.cell_size();
    ghosts.into_iter().any(|ghost| overlaps(player, ghost, size))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn touching_edges_do_not_overlap() {
        assert!(!overlaps(Position::new(0, 0), Position::new(25, 0), 25));
        assert!(overlaps(Position::new(0, 0), Position::new(24, 0), 25));
        assert!(overlaps(Position::new(0, 0), Position::new(24, 24), 25));
        assert!(!overlaps(Position::new(0, 0), Position::new(24, 25), 25));
    }

    #[test]
    fn pickup_counts_once() {
        let grid = MazeGrid::classic();
        let mut field = PickupField::seed(&grid);
        let mut score = Score::default();
        let spawn = grid.cell_origin(CellPos::new(9, 12));
        assert_eq!(check_pickup(&grid, spawn, &mut field, &mut score), 1);
        assert_eq!(check_pickup(&grid, spawn, &mut field, &mut score), 0);
        assert_eq!(score.value(), 1);
        assert_eq!(field.remaining(), 204);
    }

    #[test]
    fn straddling_player_eats_both_cells() {
        let grid = MazeGrid::classic();
        let mut field = PickupField::seed(&grid);
        let mut score = Score::default();
        let between = Position::new(230, 300);
        assert_eq!(check_pickup(&grid, between, &mut field, &mut score), 2);
        assert!(!field.contains(CellPos::new(9, 12)));
        assert!(!field.contains(CellPos::new(10, 12)));
        assert_eq!(score.value(), 2);
    }

    #[test]
    fn loss_needs_real_overlap() {
        let grid = MazeGrid::classic();
        let player = Position::new(225, 300);
        assert!(!check_loss(&grid, player, [Position::new(250, 300)]));
        assert!(check_loss(
            &grid,
            player,
            [Position::new(100, 100), Position::new(249, 300)]
        ));
        assert!(!check_loss(&grid, player, std::iter::empty()));
    }
}
