//! Implementation of the core Game trait for Ultimate Tic-Tac-Toe.

use uttt_core::{Game, Outcome, Player};

use crate::{MetaBoard, Move};

/// Ultimate Tic-Tac-Toe game implementation.
#[derive(Clone, Copy, Debug, Default)]
pub struct UltimateTicTacToe;

impl Game for UltimateTicTacToe {
    type State = MetaBoard;
    type Action = Move;

    fn initial_state(&self) -> MetaBoard {
        MetaBoard::new()
    }

    fn legal_actions(&self, state: &MetaBoard) -> Vec<Move> {
        state.legal_moves()
    }

    fn apply(&self, state: &mut MetaBoard, action: Move) {
        state.play(action)
    }

    fn status(&self, state: &MetaBoard) -> Outcome {
        state.outcome()
    }

    fn to_move(&self, state: &MetaBoard) -> Player {
        state.next_player()
    }
}
