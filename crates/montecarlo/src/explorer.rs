//! Move explorer: flat Monte Carlo move selection.
//!
//! For every legal move, apply it to a copy of the position, run an equal
//! share of the rollout budget from there, and score the move as
//! `wins(mover) - wins(opponent)`. The highest score wins; ties go to the
//! move that comes first in the game's move order.

use crate::{config::ExploreConfig, rollout::Simulator};
use rand::Rng;
use tracing::{debug, trace};
use uttt_core::{Game, Result, UtttError};

/// Result of exploring one position.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Exploration<A> {
    /// Move with the highest score (first one on ties).
    pub best_action: A,

    /// Score of `best_action`.
    pub best_score: i64,

    /// Every candidate with its score, in legal-move order.
    pub scores: Vec<(A, i64)>,

    /// Rollouts run after each candidate.
    pub rollouts_per_move: usize,
}

/// Pick the highest-scoring entry, keeping the earliest one on ties.
fn first_best<A: Copy>(scores: &[(A, i64)]) -> Option<(A, i64)> {
    let mut best: Option<(A, i64)> = None;
    for &(action, score) in scores {
        match best {
            Some((_, best_score)) if score <= best_score => {}
            _ => best = Some((action, score)),
        }
    }
    best
}

/// Flat Monte Carlo explorer.
///
/// Generic over the random number generator so that runs can be seeded.
pub struct Explorer<R: Rng> {
    config: ExploreConfig,
    simulator: Simulator<R>,
}

impl<R: Rng> Explorer<R> {
    /// Create a new explorer.
    pub fn new(config: ExploreConfig, rng: R) -> Self {
        Self {
            config,
            simulator: Simulator::new(rng),
        }
    }

    /// Score every legal move of `state` and return the best one.
    ///
    /// # Errors
    /// Returns `UtttError::NoLegalMoves` if `state` is terminal.
    pub fn explore<G: Game>(
        &mut self,
        game: &G,
        state: &G::State,
    ) -> Result<Exploration<G::Action>> {
        let moves = game.legal_actions(state);
        if moves.is_empty() {
            return Err(UtttError::NoLegalMoves);
        }

        let rollouts_per_move = self.config.simulations_per_move(moves.len());
        let mover = game.to_move(state);

        let scores: Vec<(G::Action, i64)> = moves
            .into_iter()
            .map(|action| {
                let mut child = state.clone();
                game.apply(&mut child, action);
                let histogram = self.simulator.simulate(game, &child, rollouts_per_move);
                let score = histogram.net_wins(mover);
                trace!(?action, score, %histogram, "scored candidate");
                (action, score)
            })
            .collect();

        // INVARIANT: moves was non-empty, so scores is too
        let (best_action, best_score) =
            first_best(&scores).expect("BUG: no scored candidates for a non-empty move list");

        debug!(
            ?best_action,
            best_score,
            candidates = scores.len(),
            rollouts_per_move,
            "explored position"
        );

        Ok(Exploration {
            best_action,
            best_score,
            scores,
            rollouts_per_move,
        })
    }

    /// Convenience wrapper returning only the chosen move.
    pub fn best_action<G: Game>(&mut self, game: &G, state: &G::State) -> Result<G::Action> {
        self.explore(game, state).map(|e| e.best_action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use uttt_core::{Outcome, Player};

    // One-move test game: the mover picks a door, each door leads to a
    // fixed result.
    #[derive(Clone)]
    struct Doors(Vec<Outcome>);

    #[derive(Clone, PartialEq, Eq, Debug)]
    struct DoorsState {
        opened: Option<usize>,
        current: Player,
    }

    impl Game for Doors {
        type State = DoorsState;
        type Action = usize;

        fn initial_state(&self) -> Self::State {
            DoorsState {
                opened: None,
                current: Player::X,
            }
        }

        fn legal_actions(&self, state: &Self::State) -> Vec<usize> {
            match state.opened {
                Some(_) => Vec::new(),
                None => (0..self.0.len()).collect(),
            }
        }

        fn apply(&self, state: &mut Self::State, action: usize) {
            state.opened = Some(action);
            state.current = state.current.opposite();
        }

        fn status(&self, state: &Self::State) -> Outcome {
            match state.opened {
                Some(door) => self.0[door],
                None => Outcome::Unfinished,
            }
        }

        fn to_move(&self, state: &Self::State) -> Player {
            state.current
        }
    }

    fn explorer(simulations: usize) -> Explorer<ChaCha8Rng> {
        Explorer::new(
            ExploreConfig::with_simulations(simulations),
            ChaCha8Rng::seed_from_u64(42),
        )
    }

    #[test]
    fn test_first_best_keeps_earliest_tie() {
        let scores = vec![('a', 1), ('b', 3), ('c', 3), ('d', -2)];
        assert_eq!(first_best(&scores), Some(('b', 3)));
        assert_eq!(first_best::<char>(&[]), None);
    }

    #[test]
    fn test_first_best_all_negative() {
        let scores = vec![('a', -10), ('b', -10), ('c', -11)];
        assert_eq!(first_best(&scores), Some(('a', -10)));
    }

    #[test]
    fn test_picks_winning_door() {
        let game = Doors(vec![
            Outcome::Draw,
            Outcome::Won(Player::O),
            Outcome::Won(Player::X),
        ]);
        let state = game.initial_state();

        let result = explorer(30).explore(&game, &state).unwrap();

        assert_eq!(result.best_action, 2);
        assert_eq!(result.rollouts_per_move, 10);
        assert_eq!(result.scores, vec![(0, 0), (1, -10), (2, 10)]);
        assert_eq!(result.best_score, 10);
    }

    #[test]
    fn test_scores_from_movers_perspective() {
        // Same doors, but O is choosing.
        let game = Doors(vec![
            Outcome::Won(Player::X),
            Outcome::Won(Player::O),
            Outcome::Draw,
        ]);
        let state = DoorsState {
            opened: None,
            current: Player::O,
        };

        let result = explorer(300).explore(&game, &state).unwrap();
        assert_eq!(result.best_action, 1);
        assert_eq!(result.best_score, 100);
    }

    #[test]
    fn test_tie_goes_to_first_move() {
        let game = Doors(vec![Outcome::Draw; 5]);
        let result = explorer(50).explore(&game, &game.initial_state()).unwrap();
        assert_eq!(result.best_action, 0);
        assert!(result.scores.iter().all(|(_, s)| *s == 0));
    }

    #[test]
    fn test_budget_smaller_than_move_count() {
        // Zero rollouts per move: every score is 0 and the first move wins.
        let game = Doors(vec![Outcome::Won(Player::O), Outcome::Won(Player::X)]);
        let result = explorer(1).explore(&game, &game.initial_state()).unwrap();
        assert_eq!(result.rollouts_per_move, 0);
        assert_eq!(result.best_action, 0);
    }

    #[test]
    fn test_single_losing_move_still_chosen() {
        let game = Doors(vec![Outcome::Won(Player::O)]);
        let result = explorer(20).explore(&game, &game.initial_state()).unwrap();
        assert_eq!(result.best_action, 0);
        assert_eq!(result.best_score, -20);
    }

    #[test]
    fn test_terminal_state_is_error() {
        let game = Doors(vec![Outcome::Draw]);
        let mut state = game.initial_state();
        game.apply(&mut state, 0);

        let err = explorer(10).explore(&game, &state).unwrap_err();
        assert_eq!(err, UtttError::NoLegalMoves);
    }

    #[test]
    fn test_best_action_wrapper() {
        let game = Doors(vec![Outcome::Draw, Outcome::Won(Player::X)]);
        let action = explorer(10).best_action(&game, &game.initial_state()).unwrap();
        assert_eq!(action, 1);
    }
}
