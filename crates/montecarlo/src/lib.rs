//! Flat Monte Carlo move selection.
//!
//! This crate scores every legal move of a position by random playouts and
//! picks the best one. It works with any game implementing the
//! `uttt_core::Game` trait.
//!
//! There is no search tree: each candidate move gets an equal share of the
//! rollout budget, and its score is the net number of wins for the player
//! who made it.
//!
//! # Example
//!
//! ```
//! use uttt_board::UltimateTicTacToe;
//! use uttt_core::Game;
//! use uttt_montecarlo::{ExploreConfig, Explorer};
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//!
//! let game = UltimateTicTacToe;
//! let state = game.initial_state();
//!
//! let config = ExploreConfig::with_simulations(90);
//! let mut explorer = Explorer::new(config, ChaCha8Rng::seed_from_u64(42));
//!
//! let result = explorer.explore(&game, &state).expect("start position has moves");
//! println!("Best move: {}", result.best_action);
//! assert_eq!(result.scores.len(), 9);
//! ```

pub mod config;
pub mod explorer;
pub mod rollout;

pub use config::ExploreConfig;
pub use explorer::{Exploration, Explorer};
pub use rollout::Simulator;
