//! Random playouts.
//!
//! A rollout copies a position and plays uniformly random legal moves until
//! the game ends. Repeating it builds an outcome histogram.

use rand::Rng;
use uttt_core::{Game, Histogram, Outcome};

/// Runs random playouts with its own random number generator.
pub struct Simulator<R: Rng> {
    rng: R,
}

impl<R: Rng> Simulator<R> {
    /// Create a new simulator.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Play one random game from `initial_state` to the end.
    ///
    /// Returns the terminal outcome. `Outcome::Unfinished` only comes back
    /// if the game offered no moves in a non-terminal state, which is a bug
    /// in the game implementation.
    pub fn rollout<G: Game>(&mut self, game: &G, initial_state: &G::State) -> Outcome {
        let mut state = initial_state.clone();

        loop {
            let status = game.status(&state);
            if status.is_terminal() {
                return status;
            }

            let legal_actions = game.legal_actions(&state);
            if legal_actions.is_empty() {
                return status;
            }

            let idx = self.rng.gen_range(0..legal_actions.len());
            game.apply(&mut state, legal_actions[idx]);
        }
    }

    /// Run `n` independent rollouts from the same position.
    ///
    /// The histogram always sums to `n`.
    pub fn simulate<G: Game>(&mut self, game: &G, state: &G::State, n: usize) -> Histogram {
        let mut histogram = Histogram::new();
        for _ in 0..n {
            histogram.record(self.rollout(game, state));
        }
        histogram
    }
}
