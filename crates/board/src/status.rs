//! Eight-line status evaluation shared by sub-boards and the meta-board.

use uttt_core::{Outcome, Player};

/// Rows, then columns, then the two diagonals (row-major cell indices).
const LINES: [[usize; 3]; 8] = [
    [0, 1, 2], // top row
    [3, 4, 5], // middle row
    [6, 7, 8], // bottom row
    [0, 3, 6], // left column
    [1, 4, 7], // center column
    [2, 5, 8], // right column
    [0, 4, 8], // main diagonal
    [2, 4, 6], // anti-diagonal
];

/// Status of a 3×3 grid.
///
/// `winnable_x` / `winnable_o` record whether some line still holds no
/// opposing mark. They are informational; nothing in move generation or
/// scoring reads them.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub struct Status {
    pub outcome: Outcome,
    pub winnable_x: bool,
    pub winnable_o: bool,
}

impl Status {
    /// Status of an empty grid.
    pub const UNFINISHED: Status = Status {
        outcome: Outcome::Unfinished,
        winnable_x: true,
        winnable_o: true,
    };

    pub fn is_unfinished(&self) -> bool {
        self.outcome == Outcome::Unfinished
    }

    /// Whether `player` still has an unblocked line.
    pub fn winnable_by(&self, player: Player) -> bool {
        match player {
            Player::X => self.winnable_x,
            Player::O => self.winnable_o,
        }
    }
}

impl Default for Status {
    fn default() -> Self {
        Self::UNFINISHED
    }
}

/// What the line scan sees in one slot of the grid.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub(crate) enum Mark {
    /// Still playable: an empty cell or an unfinished sub-board.
    Open,
    /// Owned by a player: a played cell or a won sub-board.
    Taken(Player),
    /// Closed but owned by nobody: a drawn sub-board.
    Dead,
}

impl From<Option<Player>> for Mark {
    fn from(cell: Option<Player>) -> Self {
        match cell {
            Some(player) => Mark::Taken(player),
            None => Mark::Open,
        }
    }
}

impl From<Outcome> for Mark {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Unfinished => Mark::Open,
            Outcome::Won(player) => Mark::Taken(player),
            Outcome::Draw => Mark::Dead,
        }
    }
}

/// Scan the eight lines of a row-major grid.
///
/// The first completed line decides the outcome, X checked before O on each
/// line. A decided grid reports only the winner as still winnable.
pub(crate) fn scan(grid: &[Mark; 9]) -> Status {
    let mut winnable_x = false;
    let mut winnable_o = false;

    for line in LINES {
        let mut crosses = 0;
        let mut circles = 0;
        for &i in &line {
            match grid[i] {
                Mark::Taken(Player::X) => crosses += 1,
                Mark::Taken(Player::O) => circles += 1,
                Mark::Open | Mark::Dead => {}
            }
        }

        if crosses == 3 {
            return Status {
                outcome: Outcome::Won(Player::X),
                winnable_x: true,
                winnable_o: false,
            };
        }
        if circles == 3 {
            return Status {
                outcome: Outcome::Won(Player::O),
                winnable_x: false,
                winnable_o: true,
            };
        }
        if circles == 0 {
            winnable_x = true;
        }
        if crosses == 0 {
            winnable_o = true;
        }
    }

    let outcome = if grid.contains(&Mark::Open) {
        Outcome::Unfinished
    } else {
        Outcome::Draw
    };

    Status {
        outcome,
        winnable_x,
        winnable_o,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const E: Mark = Mark::Open;
    const X: Mark = Mark::Taken(Player::X);
    const O: Mark = Mark::Taken(Player::O);
    const D: Mark = Mark::Dead;

    #[test]
    fn test_empty_grid() {
        assert_eq!(scan(&[E; 9]), Status::UNFINISHED);
    }

    #[test]
    fn test_every_line_wins() {
        for player in [Player::X, Player::O] {
            for line in LINES {
                let mut grid = [E; 9];
                for i in line {
                    grid[i] = Mark::Taken(player);
                }
                let status = scan(&grid);
                assert_eq!(status.outcome, Outcome::Won(player));
                assert!(status.winnable_by(player));
                assert!(!status.winnable_by(player.opposite()));
            }
        }
    }

    #[test]
    fn test_win_flags_ignore_open_lines() {
        // O wins the left column while X still has open lines elsewhere;
        // a decided grid reports only the winner as winnable.
        // O X .
        // O X .
        // O . .
        let grid = [O, X, E, O, X, E, O, E, E];
        let status = scan(&grid);
        assert_eq!(status.outcome, Outcome::Won(Player::O));
        assert_eq!((status.winnable_x, status.winnable_o), (false, true));

        // X . .
        // X O .
        // X O .
        let grid = [X, E, E, X, O, E, X, O, E];
        let status = scan(&grid);
        assert_eq!(status.outcome, Outcome::Won(Player::X));
        assert_eq!((status.winnable_x, status.winnable_o), (true, false));
    }

    #[test]
    fn test_full_grid_without_line_is_draw() {
        // X O X
        // X O O
        // O X X
        let grid = [X, O, X, X, O, O, O, X, X];
        let status = scan(&grid);
        assert_eq!(status.outcome, Outcome::Draw);
        assert!(!status.winnable_x);
        assert!(!status.winnable_o);
    }

    #[test]
    fn test_winnable_flags() {
        // X . .
        // . O .
        // . . .
        // Every line through neither mark keeps both sides alive.
        let grid = [X, E, E, E, O, E, E, E, E];
        let status = scan(&grid);
        assert_eq!(status.outcome, Outcome::Unfinished);
        assert!(status.winnable_by(Player::X));
        assert!(status.winnable_by(Player::O));
    }

    #[test]
    fn test_winnable_blocked_for_x() {
        // O sits on every line X could still complete.
        // X O X
        // O O X
        // X X O
        let grid = [X, O, X, O, O, X, X, X, O];
        let status = scan(&grid);
        assert_eq!(status.outcome, Outcome::Draw);
        assert!(!status.winnable_x);
    }

    #[test]
    fn test_dead_slots_block_lines() {
        // Drawn sub-boards count for nobody and are not open.
        let grid = [X, X, D, D, O, O, O, D, X];
        let status = scan(&grid);
        assert_eq!(status.outcome, Outcome::Draw);
    }

    #[test]
    fn test_first_line_decides() {
        // Unreachable in play, but the scan order is part of the contract:
        // top row (X) is checked before the middle row (O).
        let grid = [X, X, X, O, O, O, E, E, E];
        assert_eq!(scan(&grid).outcome, Outcome::Won(Player::X));
    }

    #[test]
    fn test_mark_conversions() {
        assert_eq!(Mark::from(None), Mark::Open);
        assert_eq!(Mark::from(Some(Player::X)), X);
        assert_eq!(Mark::from(Outcome::Unfinished), Mark::Open);
        assert_eq!(Mark::from(Outcome::Won(Player::O)), O);
        assert_eq!(Mark::from(Outcome::Draw), Mark::Dead);
    }
}
