//! Shared outcome types.
//!
//! These types are used by every layer:
//! - Player: the side that owns a mark
//! - Outcome: terminal status of a board, or `Unfinished`
//! - Histogram: occurrence counts per outcome, as produced by rollouts
//!   and by the match runner

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the two players. X always moves first.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
pub enum Player {
    X,
    O,
}

impl Player {
    /// Get the opposing player.
    pub fn opposite(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::X => write!(f, "X"),
            Player::O => write!(f, "O"),
        }
    }
}

/// Status of a sub-board, of the meta-board, or of a whole game.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Default, Serialize, Deserialize)]
pub enum Outcome {
    #[default]
    Unfinished,
    Won(Player),
    Draw,
}

impl Outcome {
    /// All outcomes, in histogram bucket order.
    pub const ALL: [Outcome; 4] = [
        Outcome::Unfinished,
        Outcome::Won(Player::X),
        Outcome::Won(Player::O),
        Outcome::Draw,
    ];

    /// True for a win or a draw.
    pub fn is_terminal(self) -> bool {
        !matches!(self, Outcome::Unfinished)
    }

    /// The winner, if any.
    pub fn winner(self) -> Option<Player> {
        match self {
            Outcome::Won(player) => Some(player),
            _ => None,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Unfinished => write!(f, "unfinished"),
            Outcome::Won(player) => write!(f, "{} won", player),
            Outcome::Draw => write!(f, "draw"),
        }
    }
}

/// Occurrence count for each of the four outcomes.
///
/// A correct rollout or match run never records `Unfinished`; the bucket
/// exists so that a bug shows up in the numbers instead of disappearing.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub struct Histogram {
    pub unfinished: u64,
    pub x_won: u64,
    pub o_won: u64,
    pub draw: u64,
}

impl Histogram {
    /// Create an empty histogram.
    pub fn new() -> Self {
        Self::default()
    }

    /// Increment the bucket for `outcome`.
    pub fn record(&mut self, outcome: Outcome) {
        *self.bucket_mut(outcome) += 1;
    }

    /// Count for a single outcome.
    pub fn get(&self, outcome: Outcome) -> u64 {
        match outcome {
            Outcome::Unfinished => self.unfinished,
            Outcome::Won(Player::X) => self.x_won,
            Outcome::Won(Player::O) => self.o_won,
            Outcome::Draw => self.draw,
        }
    }

    /// Number of wins for `player`.
    pub fn wins(&self, player: Player) -> u64 {
        self.get(Outcome::Won(player))
    }

    /// Wins for `player` minus wins for the opponent. Draws and
    /// unfinished games do not count.
    pub fn net_wins(&self, player: Player) -> i64 {
        self.wins(player) as i64 - self.wins(player.opposite()) as i64
    }

    /// Sum of all buckets.
    pub fn total(&self) -> u64 {
        self.unfinished + self.x_won + self.o_won + self.draw
    }

    /// Add every bucket of `other` into `self`.
    pub fn merge(&mut self, other: &Histogram) {
        for outcome in Outcome::ALL {
            *self.bucket_mut(outcome) += other.get(outcome);
        }
    }

    /// Iterate over `(outcome, count)` in bucket order.
    pub fn iter(&self) -> impl Iterator<Item = (Outcome, u64)> + '_ {
        Outcome::ALL.into_iter().map(move |o| (o, self.get(o)))
    }

    fn bucket_mut(&mut self, outcome: Outcome) -> &mut u64 {
        match outcome {
            Outcome::Unfinished => &mut self.unfinished,
            Outcome::Won(Player::X) => &mut self.x_won,
            Outcome::Won(Player::O) => &mut self.o_won,
            Outcome::Draw => &mut self.draw,
        }
    }
}

impl fmt::Display for Histogram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "X won: {}, O won: {}, draw: {}, unfinished: {}",
            self.x_won, self.o_won, self.draw, self.unfinished
        )
    }
}
