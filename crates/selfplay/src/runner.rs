//! Concurrent match runner.
//!
//! A fixed number of worker threads each play full games with the flat
//! Monte Carlo explorer driving both sides. Finished games go through a
//! rendezvous channel to a single aggregator thread, which is the only
//! writer of the outcome histogram.

use anyhow::{anyhow, Context, Result};
use clap::ValueEnum;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::Serialize;
use std::sync::mpsc::{self, Receiver, SyncSender};
use std::thread;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};
use uttt_core::{Game, Histogram, Outcome, UtttError};
use uttt_montecarlo::{ExploreConfig, Explorer};

/// What to do with `games % workers` when games do not split evenly.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RemainderPolicy {
    /// Every worker plays `games / workers`; the rest are not played.
    #[default]
    Drop,
    /// The first `games % workers` workers play one extra game.
    Distribute,
}

/// Settings for one self-play run.
#[derive(Clone, Debug)]
pub struct RunConfig {
    pub workers: usize,
    pub games: usize,
    /// Rollout budget per move decision, identical for both players.
    pub simulations: usize,
    pub seed: u64,
    pub remainder: RemainderPolicy,
}

impl RunConfig {
    /// Reject settings that would divide by zero or never pick a move.
    pub fn validate(&self) -> uttt_core::Result<()> {
        if self.workers == 0 {
            return Err(UtttError::InvalidConfig(
                "workers must be at least 1".to_string(),
            ));
        }
        self.explore_config().validate()
    }

    pub fn explore_config(&self) -> ExploreConfig {
        ExploreConfig::with_simulations(self.simulations)
    }

    /// Number of games assigned to `worker`.
    pub fn games_for_worker(&self, worker: usize) -> usize {
        let base = self.games / self.workers;
        match self.remainder {
            RemainderPolicy::Drop => base,
            RemainderPolicy::Distribute => base + usize::from(worker < self.games % self.workers),
        }
    }

    /// Games that will actually be played.
    pub fn scheduled_games(&self) -> usize {
        (0..self.workers).map(|w| self.games_for_worker(w)).sum()
    }

    /// Games requested but never played.
    pub fn dropped_games(&self) -> usize {
        self.games - self.scheduled_games()
    }

    /// Deterministic per-worker seed.
    fn worker_seed(&self, worker: usize) -> u64 {
        self.seed.wrapping_add(worker as u64 * 1000)
    }
}

/// A finished game as sent to the aggregator.
#[derive(Clone, Debug)]
pub struct MatchRecord<S> {
    pub outcome: Outcome,
    pub plies: usize,
    pub final_state: S,
}

/// Aggregated result of a run.
#[derive(Clone, Debug)]
pub struct RunSummary<S> {
    pub histogram: Histogram,
    pub games_played: usize,
    pub games_dropped: usize,
    pub total_plies: usize,
    pub elapsed: Duration,
    /// Final position of the last game the aggregator received.
    pub last_final_state: Option<S>,
}

impl<S> RunSummary<S> {
    pub fn mean_plies(&self) -> f64 {
        if self.games_played == 0 {
            0.0
        } else {
            self.total_plies as f64 / self.games_played as f64
        }
    }
}

/// Play one game to the end, both sides choosing moves with `explorer`.
pub fn play_match<G: Game, R: Rng>(
    game: &G,
    explorer: &mut Explorer<R>,
) -> uttt_core::Result<MatchRecord<G::State>> {
    let mut state = game.initial_state();
    let mut plies = 0;

    while !game.is_terminal(&state) {
        let action = explorer.best_action(game, &state)?;
        game.apply(&mut state, action);
        plies += 1;
    }

    Ok(MatchRecord {
        outcome: game.status(&state),
        plies,
        final_state: state,
    })
}

fn run_worker<G: Game>(
    game: &G,
    config: &RunConfig,
    worker: usize,
    results: SyncSender<MatchRecord<G::State>>,
) -> Result<usize> {
    let games = config.games_for_worker(worker);
    let rng = ChaCha8Rng::seed_from_u64(config.worker_seed(worker));
    let mut explorer = Explorer::new(config.explore_config(), rng);

    for index in 0..games {
        let record = play_match(game, &mut explorer)
            .with_context(|| format!("worker {} failed in game {}", worker, index))?;
        debug!(
            worker,
            game = index,
            outcome = %record.outcome,
            plies = record.plies,
            "match finished"
        );
        results
            .send(record)
            .map_err(|_| anyhow!("aggregator stopped before worker {} finished", worker))?;
    }
    Ok(games)
}

fn aggregate<S>(results: Receiver<MatchRecord<S>>) -> (Histogram, usize, Option<S>) {
    let mut histogram = Histogram::new();
    let mut total_plies = 0;
    let mut last = None;

    for record in results {
        histogram.record(record.outcome);
        total_plies += record.plies;
        last = Some(record.final_state);
        debug!(completed = histogram.total(), "aggregated result");
    }
    (histogram, total_plies, last)
}

/// Run `config.games` self-play games across `config.workers` threads.
///
/// Returns once every worker has finished and the aggregator has drained
/// the channel.
pub fn run_matches<G: Game>(game: &G, config: &RunConfig) -> Result<RunSummary<G::State>> {
    config.validate().context("invalid run configuration")?;

    let games_dropped = config.dropped_games();
    if games_dropped > 0 {
        warn!(
            games = config.games,
            workers = config.workers,
            games_dropped,
            "games do not divide evenly across workers; remainder is not played"
        );
    }
    info!(
        workers = config.workers,
        games = config.scheduled_games(),
        simulations = config.simulations,
        seed = config.seed,
        "starting self-play"
    );

    let start = Instant::now();
    let (tx, rx) = mpsc::sync_channel::<MatchRecord<G::State>>(0);

    let (worker_results, aggregated) = thread::scope(|scope| {
        let aggregator = scope.spawn(move || aggregate(rx));

        let handles: Vec<_> = (0..config.workers)
            .map(|worker| {
                let tx = tx.clone();
                scope.spawn(move || run_worker(game, config, worker, tx))
            })
            .collect();
        // Workers hold the only senders now; the channel closes when the
        // last one finishes.
        drop(tx);

        let worker_results: Vec<Result<usize>> = handles
            .into_iter()
            .enumerate()
            .map(|(worker, handle)| {
                handle
                    .join()
                    .map_err(|_| anyhow!("worker {} panicked", worker))
                    .and_then(|r| r)
            })
            .collect();
        let aggregated = aggregator
            .join()
            .map_err(|_| anyhow!("aggregator panicked"));

        (worker_results, aggregated)
    });

    let mut games_played = 0;
    for result in worker_results {
        games_played += result?;
    }
    let (histogram, total_plies, last_final_state) = aggregated?;

    debug_assert_eq!(histogram.total(), games_played as u64);
    let summary = RunSummary {
        histogram,
        games_played,
        games_dropped,
        total_plies,
        elapsed: start.elapsed(),
        last_final_state,
    };

    info!(
        games = summary.games_played,
        x_won = summary.histogram.x_won,
        o_won = summary.histogram.o_won,
        draw = summary.histogram.draw,
        elapsed_secs = summary.elapsed.as_secs_f64(),
        "self-play finished"
    );
    Ok(summary)
}
