use crate::components::{CellPos, Direction, Mover, Position};
use crate::error::MazeError;

pub const CELL_SIZE: i32 = 25;
pub const PLAYER_SPAWN: Position = Position::new(225, 300);

/// 0 open, 1 wall, 2 ghost gate, 3 junction, 4 junction inside the ghost pen.
#[rustfmt::skip]
pub const CLASSIC_MAZE: [[u8; 19]; 22] = [
    [1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1],
    [1, 0, 0, 0, 3, 0, 0, 0, 3, 1, 3, 0, 0, 0, 3, 0, 0, 0, 1],
    [1, 0, 1, 1, 0, 1, 1, 1, 0, 1, 0, 1, 1, 1, 0, 1, 1, 0, 1],
    [1, 0, 1, 1, 0, 1, 1, 1, 0, 1, 0, 1, 1, 1, 0, 1, 1, 0, 1],
    [1, 3, 0, 0, 3, 0, 3, 0, 3, 0, 3, 0, 3, 0, 3, 0, 0, 3, 1],
    [1, 0, 1, 1, 0, 1, 0, 1, 1, 1, 1, 1, 0, 1, 0, 1, 1, 0, 1],
    [1, 3, 0, 0, 3, 1, 3, 0, 3, 1, 3, 0, 3, 1, 3, 0, 0, 3, 1],
    [1, 0, 1, 1, 0, 1, 1, 1, 0, 1, 0, 1, 1, 1, 0, 1, 1, 0, 1],
    [1, 3, 3, 1, 0, 1, 3, 0, 3, 3, 3, 0, 3, 1, 0, 1, 3, 3, 1],
    [1, 1, 0, 1, 0, 1, 0, 1, 2, 2, 2, 1, 0, 1, 0, 1, 0, 1, 1],
    [1, 3, 3, 0, 3, 0, 3, 1, 4, 4, 4, 1, 3, 0, 3, 0, 3, 3, 1],
    [1, 0, 1, 1, 0, 1, 0, 1, 1, 1, 1, 1, 0, 1, 0, 1, 1, 0, 1],
    [1, 0, 1, 3, 3, 1, 3, 0, 0, 0, 0, 0, 3, 1, 3, 3, 1, 0, 1],
    [1, 0, 1, 1, 0, 1, 0, 1, 1, 1, 1, 1, 0, 1, 0, 1, 1, 0, 1],
    [1, 3, 0, 0, 3, 0, 0, 0, 3, 1, 3, 0, 0, 0, 3, 3, 0, 3, 1],
    [1, 0, 1, 1, 0, 1, 1, 1, 3, 1, 3, 1, 1, 1, 0, 1, 1, 0, 1],
    [1, 3, 3, 1, 3, 3, 3, 0, 0, 0, 0, 0, 3, 3, 3, 1, 3, 3, 1],
    [1, 1, 0, 1, 0, 1, 0, 1, 1, 1, 1, 1, 0, 1, 0, 1, 0, 1, 1],
    [1, 3, 3, 0, 3, 1, 3, 0, 3, 1, 3, 0, 3, 1, 3, 0, 3, 3, 1],
    [1, 0, 1, 1, 1, 1, 1, 1, 0, 1, 0, 1, 1, 1, 1, 1, 1, 0, 1],
    [1, 0, 0, 0, 0, 0, 0, 0, 3, 0, 3, 0, 0, 0, 0, 0, 0, 0, 1],
    [1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1],
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cell {
    Open,
    Wall,
    GhostGate,
    Junction,
    PenJunction,
}

impl Cell {
    pub fn from_code(code: u8) -> Option<Cell> {
        match code {
            0 => Some(Cell::Open),
            1 => Some(Cell::Wall),
            2 => Some(Cell::GhostGate),
            3 => Some(Cell::Junction),
            4 => Some(Cell::PenJunction),
            _ => None,
        }
    }

    /// Passable for the player.
    pub fn is_passable(self) -> bool {
        matches!(self, Cell::Open | Cell::Junction | Cell::PenJunction)
    }

    pub fn is_passable_for(self, mover: Mover) -> bool {
        match mover {
            Mover::Player => self.is_passable(),
            Mover::Ghost => self.is_passable() || self == Cell::GhostGate,
        }
    }

    pub fn is_junction(self) -> bool {
        matches!(self, Cell::Junction | Cell::PenJunction)
    }

    /// Cells that start the game holding a pickup.
    pub fn holds_pickup(self) -> bool {
        matches!(self, Cell::Open | Cell::Junction)
    }
}

/// Immutable cell grid plus the pixel geometry used to address it.
#[derive(Clone, Debug)]
pub struct MazeGrid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
    cell_size: i32,
    origin: Position,
}

impl MazeGrid {
    pub fn from_codes<R: AsRef<[u8]>>(
        rows: &[R],
        cell_size: i32,
        origin: Position,
    ) -> Result<MazeGrid, MazeError> {
        let height = rows.len();
        let width = rows.first().map(|r| r.as_ref().len()).unwrap_or(0);
        if height == 0 || width == 0 || cell_size <= 0 {
            return Err(MazeError::Empty);
        }

        let mut cells = Vec::with_capacity(width * height);
        for (row, codes) in rows.iter().enumerate() {
            let codes = codes.as_ref();
            if codes.len() != width {
                return Err(MazeError::RaggedRow {
                    row,
                    expected: width,
                    found: codes.len(),
                });
            }
            for (col, &code) in codes.iter().enumerate() {
                let cell = Cell::from_code(code).ok_or(MazeError::UnknownCode { code, col, row })?;
                cells.push(cell);
            }
        }

        Ok(MazeGrid {
            width,
            height,
            cells,
            cell_size,
            origin,
        })
    }

    pub fn classic() -> MazeGrid {
        let mut cells = Vec::with_capacity(19 * 22);
        for row in CLASSIC_MAZE.iter() {
            for &code in row.iter() {
                cells.push(Cell::from_code(code).unwrap_or(Cell::Wall));
            }
        }
        MazeGrid {
            width: 19,
            height: 22,
            cells,
            cell_size: CELL_SIZE,
            origin: Position::new(0, 0),
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn cell_size(&self) -> i32 {
        self.cell_size
    }

    pub fn origin(&self) -> Position {
        self.origin
    }

    pub fn cell_at(&self, col: usize, row: usize) -> Result<Cell, MazeError> {
        self.get(CellPos::new(col, row))
            .ok_or(MazeError::OutOfBounds { col, row })
    }

    pub fn get(&self, pos: CellPos) -> Option<Cell> {
        if pos.col >= self.width || pos.row >= self.height {
            return None;
        }
        self.cells.get(pos.row * self.width + pos.col).copied()
    }

    /// The cell `distance` steps away along `dir`, if it lies inside the grid.
    pub fn neighbour(&self, pos: CellPos, dir: Direction, distance: usize) -> Option<CellPos> {
        let (col, row) = match dir {
            Direction::Up => (pos.col, pos.row.checked_sub(distance)?),
            Direction::Down => (pos.col, pos.row.checked_add(distance)?),
            Direction::Left => (pos.col.checked_sub(distance)?, pos.row),
            Direction::Right => (pos.col.checked_add(distance)?, pos.row),
        };
        if col >= self.width || row >= self.height {
            return None;
        }
        Some(CellPos::new(col, row))
    }

    /// Maps a single pixel to the cell containing it.
    pub fn cell_of_pixel(&self, x: i32, y: i32) -> Option<CellPos> {
        let col = (x - self.origin.x).div_euclid(self.cell_size);
        let row = (y - self.origin.y).div_euclid(self.cell_size);
        if col < 0 || row < 0 {
            return None;
        }
        let pos = CellPos::new(col as usize, row as usize);
        if pos.col >= self.width || pos.row >= self.height {
            return None;
        }
        Some(pos)
    }

    /// The cell holding an actor's top-left corner.
    pub fn cell_of(&self, pos: Position) -> Option<CellPos> {
        self.cell_of_pixel(pos.x, pos.y)
    }

    /// The cell an actor is visually closest to.
    pub fn nearest_cell(&self, pos: Position) -> Option<CellPos> {
        let half = self.cell_size / 2;
        self.cell_of_pixel(pos.x + half, pos.y + half)
    }

    pub fn cell_origin(&self, cell: CellPos) -> Position {
        Position::new(
            self.origin.x + cell.col as i32 * self.cell_size,
            self.origin.y + cell.row as i32 * self.cell_size,
        )
    }

    pub fn is_aligned(&self, pos: Position) -> bool {
        (pos.x - self.origin.x).rem_euclid(self.cell_size) == 0
            && (pos.y - self.origin.y).rem_euclid(self.cell_size) == 0
    }

    pub fn cells(&self) -> impl Iterator<Item = (CellPos, Cell)> + '_ {
        let width = self.width;
        self.cells
            .iter()
            .enumerate()
            .map(move |(idx, &cell)| (CellPos::new(idx % width, idx / width), cell))
    }
}
