use std::fmt::Debug;
use std::hash::Hash;

use crate::{Outcome, Player};

/// A two-player game abstraction for Monte Carlo move selection.
///
/// Rollouts and the explorer only ever talk to a game through this trait,
/// which keeps them testable on tiny games as well as on the full board.
pub trait Game: Clone + Send + Sync {
    /// The game state (e.g., an Ultimate Tic-Tac-Toe meta-board)
    type State: Clone + Send;

    /// A game action (e.g., a target sub-board plus a cell inside it)
    type Action: Clone + Copy + Send + Eq + Hash + Debug;

    /// Returns the initial game state
    fn initial_state(&self) -> Self::State;

    /// Returns all legal actions from the given state, in a fixed,
    /// reproducible order. Empty exactly when the state is terminal.
    fn legal_actions(&self, state: &Self::State) -> Vec<Self::Action>;

    /// Applies an action in place.
    ///
    /// The action must come from `legal_actions` for this state; no
    /// validation is performed here.
    fn apply(&self, state: &mut Self::State, action: Self::Action);

    /// Returns the current status of the game.
    fn status(&self, state: &Self::State) -> Outcome;

    /// Returns the player who moves next.
    fn to_move(&self, state: &Self::State) -> Player;

    /// Returns true if the game has ended (win or draw)
    fn is_terminal(&self, state: &Self::State) -> bool {
        self.status(state).is_terminal()
    }
}
