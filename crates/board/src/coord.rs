use std::fmt;

/// A position (row, col) inside a 3×3 grid, used both for sub-boards within
/// the meta-board and for cells within a sub-board.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct Coord {
    row: u8,
    col: u8,
}

impl Coord {
    pub const TOP_LEFT: Coord = Coord { row: 0, col: 0 };
    pub const CENTER: Coord = Coord { row: 1, col: 1 };
    pub const BOTTOM_RIGHT: Coord = Coord { row: 2, col: 2 };

    /// Creates a coordinate, returning None if either component is out of range.
    #[inline]
    pub const fn new(row: u8, col: u8) -> Option<Self> {
        if row < 3 && col < 3 {
            Some(Coord { row, col })
        } else {
            None
        }
    }

    /// Creates a coordinate without bounds checking.
    #[inline]
    pub const fn new_unchecked(row: u8, col: u8) -> Self {
        debug_assert!(row < 3 && col < 3);
        Coord { row, col }
    }

    #[inline]
    pub const fn row(self) -> usize {
        self.row as usize
    }

    #[inline]
    pub const fn col(self) -> usize {
        self.col as usize
    }

    /// Row-major index (0-8).
    #[inline]
    pub const fn index(self) -> usize {
        (self.row * 3 + self.col) as usize
    }

    /// All nine coordinates in row-major order.
    pub fn all() -> impl Iterator<Item = Coord> {
        (0..9u8).map(|i| Coord {
            row: i / 3,
            col: i % 3,
        })
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// A move: the sub-board it targets and the cell played inside it.
///
/// The cell coordinate doubles as the sub-board the opponent is sent to.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Move {
    pub board: Coord,
    pub cell: Coord,
}

impl Move {
    pub const fn new(board: Coord, cell: Coord) -> Self {
        Self { board, cell }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.cell, self.board)
    }
}
