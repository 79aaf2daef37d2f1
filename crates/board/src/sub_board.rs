use uttt_core::{Outcome, Player};

use crate::status::{scan, Mark, Status};
use crate::Coord;

/// One of the nine 3×3 cell grids composing the meta-board.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Default)]
pub struct SubBoard {
    /// Cells in row-major order; `None` is empty.
    cells: [Option<Player>; 9],
}

impl SubBoard {
    /// Create an empty sub-board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a sub-board from rows of cells.
    pub fn from_rows(rows: [[Option<Player>; 3]; 3]) -> Self {
        let mut board = Self::new();
        for coord in Coord::all() {
            board.cells[coord.index()] = rows[coord.row()][coord.col()];
        }
        board
    }

    /// Get the mark at a cell, if any.
    pub fn get(&self, cell: Coord) -> Option<Player> {
        self.cells[cell.index()]
    }

    pub fn is_empty_at(&self, cell: Coord) -> bool {
        self.cells[cell.index()].is_none()
    }

    /// Place a mark. Cells never change once set.
    pub(crate) fn set(&mut self, cell: Coord, player: Player) {
        debug_assert!(
            self.is_empty_at(cell),
            "cell {} is already taken by {:?}",
            cell,
            self.cells[cell.index()]
        );
        self.cells[cell.index()] = Some(player);
    }

    /// Empty cells in row-major order.
    pub fn empty_cells(&self) -> impl Iterator<Item = Coord> + '_ {
        Coord::all().filter(move |c| self.is_empty_at(*c))
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| c.is_some())
    }

    /// Evaluate win / draw status from the raw cells.
    pub fn status(&self) -> Status {
        scan(&self.cells.map(Mark::from))
    }

    /// Shorthand for `status().outcome`.
    pub fn outcome(&self) -> Outcome {
        self.status().outcome
    }
}
