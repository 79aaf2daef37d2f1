//! The full Ultimate Tic-Tac-Toe position.

use uttt_core::{Outcome, Player, Result, UtttError};

use crate::status::{scan, Mark, Status};
use crate::{Coord, Move, SubBoard};

/// The meta-board: nine sub-boards plus whose turn it is, which sub-board
/// the next move is sent to, and a cached status per sub-board.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub struct MetaBoard {
    /// Sub-boards in row-major order.
    boards: [SubBoard; 9],

    /// Player to move.
    next_player: Player,

    /// Cell coordinate of the previous move; selects the forced sub-board.
    required: Coord,

    /// Status of each sub-board, updated on every move into it.
    status_cache: [Status; 9],
}

impl MetaBoard {
    /// The starting position: empty, X to move, forced into the center.
    pub fn new() -> Self {
        Self {
            boards: [SubBoard::new(); 9],
            next_player: Player::X,
            required: Coord::CENTER,
            status_cache: [Status::UNFINISHED; 9],
        }
    }

    /// Build a position from explicit sub-boards. The status cache is
    /// computed from the boards, so it starts consistent.
    pub fn from_parts(boards: [SubBoard; 9], next_player: Player, required: Coord) -> Self {
        let status_cache = boards.map(|b| b.status());
        Self {
            boards,
            next_player,
            required,
            status_cache,
        }
    }

    pub fn next_player(&self) -> Player {
        self.next_player
    }

    /// The coordinate naming the sub-board the next move is sent to.
    pub fn required(&self) -> Coord {
        self.required
    }

    pub fn sub_board(&self, board: Coord) -> &SubBoard {
        &self.boards[board.index()]
    }

    /// Cached status of one sub-board.
    pub fn sub_status(&self, board: Coord) -> Status {
        self.status_cache[board.index()]
    }

    /// Mark at a cell of a sub-board.
    pub fn cell(&self, board: Coord, cell: Coord) -> Option<Player> {
        self.boards[board.index()].get(cell)
    }

    /// Overall status, derived from the cached sub-board outcomes only.
    pub fn overall_status(&self) -> Status {
        scan(&self.status_cache.map(|s| Mark::from(s.outcome)))
    }

    /// Shorthand for `overall_status().outcome`.
    pub fn outcome(&self) -> Outcome {
        self.overall_status().outcome
    }

    /// True when the forced sub-board is decided and any open sub-board
    /// may be played.
    pub fn is_free_move(&self) -> bool {
        !self.sub_status(self.required).is_unfinished()
    }

    /// Legal moves in meta row-major, then cell row-major order.
    ///
    /// Empty exactly when the game is over.
    pub fn legal_moves(&self) -> Vec<Move> {
        let mut moves = Vec::new();
        if self.outcome().is_terminal() {
            return moves;
        }

        if self.is_free_move() {
            for board in Coord::all() {
                if !self.sub_status(board).is_unfinished() {
                    continue;
                }
                moves.extend(
                    self.sub_board(board)
                        .empty_cells()
                        .map(|cell| Move::new(board, cell)),
                );
            }
        } else {
            let board = self.required;
            moves.extend(
                self.sub_board(board)
                    .empty_cells()
                    .map(|cell| Move::new(board, cell)),
            );
        }
        moves
    }

    /// Whether `mv` is one of the moves `legal_moves` would return.
    pub fn is_legal(&self, mv: Move) -> bool {
        if self.outcome().is_terminal() {
            return false;
        }
        if !self.sub_status(mv.board).is_unfinished() {
            return false;
        }
        if !self.is_free_move() && mv.board != self.required {
            return false;
        }
        self.sub_board(mv.board).is_empty_at(mv.cell)
    }

    /// Apply a move in place.
    ///
    /// The move must come from [`MetaBoard::legal_moves`]; legality is not
    /// checked here. Use [`MetaBoard::play_checked`] for untrusted moves.
    pub fn play(&mut self, mv: Move) {
        let index = mv.board.index();
        self.boards[index].set(mv.cell, self.next_player);
        self.status_cache[index] = self.boards[index].status();
        self.next_player = self.next_player.opposite();
        self.required = mv.cell;
    }

    /// Apply a move after validating it against the current rules.
    pub fn play_checked(&mut self, mv: Move) -> Result<()> {
        if !self.is_legal(mv) {
            return Err(UtttError::IllegalMove(format!(
                "{} by {} (forced board {})",
                mv, self.next_player, self.required
            )));
        }
        self.play(mv);
        Ok(())
    }

    /// Number of marks on the whole board.
    pub fn move_count(&self) -> usize {
        self.boards.iter().map(|b| 9 - b.empty_cells().count()).sum()
    }
}

impl Default for MetaBoard {
    fn default() -> Self {
        Self::new()
    }
}
