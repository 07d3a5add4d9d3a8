use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        };
        f.write_str(name)
    }
}

/// Pixel coordinates of an actor's top-left corner.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// One pixel further along `dir`.
    pub fn nudged(self, dir: Direction) -> Position {
        let (dx, dy) = dir.delta();
        Position {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// Grid coordinates: column then row.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellPos {
    pub col: usize,
    pub row: usize,
}

impl CellPos {
    pub const fn new(col: usize, row: usize) -> Self {
        Self { col, row }
    }
}

/// Who is asking to move. Ghosts may cross the pen gate, the player may not.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mover {
    Player,
    Ghost,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nudged_moves_one_pixel() {
        let p = Position::new(25, 50);
        assert_eq!(p.nudged(Direction::Up), Position::new(25, 49));
        assert_eq!(p.nudged(Direction::Right), Position::new(26, 50));
    }
}
