use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MazeError {
    /// A cell lookup fell outside the grid.
    OutOfBounds { col: usize, row: usize },
    /// The maze table held a code outside 0..=4.
    UnknownCode { code: u8, col: usize, row: usize },
    RaggedRow { row: usize, expected: usize, found: usize },
    Empty,
}

impl fmt::Display for MazeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MazeError::OutOfBounds { col, row } => {
                write!(f, "cell ({}, {}) is outside the maze", col, row)
            }
            MazeError::UnknownCode { code, col, row } => {
                write!(f, "unknown maze code {} at ({}, {})", code, col, row)
            }
            MazeError::RaggedRow { row, expected, found } => write!(
                f,
                "maze row {} has {} cells, expected {}",
                row, found, expected
            ),
            MazeError::Empty => f.write_str("maze has no cells"),
        }
    }
}

impl Error for MazeError {}
