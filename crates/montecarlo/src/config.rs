//! Explorer configuration parameters.

use uttt_core::{Result, UtttError};

/// Explorer configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExploreConfig {
    /// Total rollouts spent on one move decision, split evenly across the
    /// legal moves (integer division; the remainder is not played).
    pub simulations: usize,
}

impl Default for ExploreConfig {
    fn default() -> Self {
        Self {
            simulations: 100_000,
        }
    }
}

impl ExploreConfig {
    /// Create a new config with the specified rollout budget.
    pub fn with_simulations(simulations: usize) -> Self {
        Self { simulations }
    }

    /// Rollouts each candidate gets when there are `num_moves` of them.
    pub fn simulations_per_move(&self, num_moves: usize) -> usize {
        if num_moves == 0 {
            0
        } else {
            self.simulations / num_moves
        }
    }

    /// Reject budgets that cannot produce a decision.
    pub fn validate(&self) -> Result<()> {
        if self.simulations == 0 {
            return Err(UtttError::InvalidConfig(
                "simulations must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
