//! Ultimate Tic-Tac-Toe Core - Game abstractions and common types
//!
//! This crate provides the `Game` trait that the rollout simulator and the
//! move explorer are written against, together with the outcome types shared
//! by every layer of the workspace.
//!
//! # Types
//!
//! - [`Game`] - Trait for game implementations
//! - [`Player`] - The two sides, X moves first
//! - [`Outcome`] - Terminal status of a board (or `Unfinished`)
//! - [`Histogram`] - Occurrence count per outcome

mod error;
mod game;
mod types;

pub use error::{Result, UtttError};
pub use game::Game;
pub use types::{Histogram, Outcome, Player};
