//! Ultimate Tic-Tac-Toe self-play.
//!
//! Plays a batch of games across worker threads with the flat Monte Carlo
//! explorer on both sides and reports how the games ended.

mod runner;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use runner::{run_matches, RemainderPolicy, RunConfig, RunSummary};
use serde::Serialize;
use uttt_board::{MetaBoard, UltimateTicTacToe};
use uttt_core::{Histogram, Outcome, Player};
use uttt_montecarlo::ExploreConfig;

/// Concurrent Monte Carlo self-play for Ultimate Tic-Tac-Toe.
#[derive(Parser, Debug)]
#[command(name = "uttt-selfplay")]
#[command(about = "Play Ultimate Tic-Tac-Toe games with flat Monte Carlo on both sides")]
struct Cli {
    /// Number of worker threads.
    #[arg(short, long, default_value_t = 25)]
    workers: usize,

    /// Total number of games to play.
    #[arg(short, long, default_value_t = 25)]
    games: usize,

    /// Rollouts per move decision, split evenly across the legal moves.
    #[arg(short, long, default_value_t = ExploreConfig::default().simulations)]
    simulations: usize,

    /// Base random seed; each worker derives its own from it.
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// How to handle games that do not divide evenly across workers.
    #[arg(long, value_enum, default_value_t = RemainderPolicy::Drop)]
    remainder: RemainderPolicy,

    /// Log level when RUST_LOG is not set.
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Output format for the results.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Print the final position of one finished game.
    #[arg(long)]
    show_board: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

impl Cli {
    fn run_config(&self) -> RunConfig {
        RunConfig {
            workers: self.workers,
            games: self.games,
            simulations: self.simulations,
            seed: self.seed,
            remainder: self.remainder,
        }
    }
}

/// Machine-readable run report.
#[derive(Serialize, Debug)]
struct Report {
    workers: usize,
    simulations: usize,
    seed: u64,
    remainder: RemainderPolicy,
    games_played: usize,
    games_dropped: usize,
    histogram: Histogram,
    mean_plies: f64,
    elapsed_secs: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    final_board: Option<String>,
}

impl Report {
    fn new(config: &RunConfig, summary: &RunSummary<MetaBoard>, show_board: bool) -> Self {
        Self {
            workers: config.workers,
            simulations: config.simulations,
            seed: config.seed,
            remainder: config.remainder,
            games_played: summary.games_played,
            games_dropped: summary.games_dropped,
            histogram: summary.histogram,
            mean_plies: summary.mean_plies(),
            elapsed_secs: summary.elapsed.as_secs_f64(),
            final_board: show_board
                .then(|| summary.last_final_state.map(|b| b.to_string()))
                .flatten(),
        }
    }
}

/// Logs go to stderr so stdout only carries results.
fn init_tracing(level: &str) -> Result<()> {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .with_context(|| format!("invalid log level: {}", level))?;

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init()
        .context("failed to install tracing subscriber")?;

    Ok(())
}

fn percent(count: u64, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        count as f64 / total as f64 * 100.0
    }
}

fn print_text(config: &RunConfig, summary: &RunSummary<MetaBoard>, show_board: bool) {
    let total = summary.games_played;

    println!("Ultimate Tic-Tac-Toe self-play");
    println!("================================================");
    println!(
        "Workers: {}  Simulations/move: {}  Seed: {}",
        config.workers, config.simulations, config.seed
    );
    println!(
        "Games played: {}  Dropped: {}",
        summary.games_played, summary.games_dropped
    );
    println!("------------------------------------------------");
    for outcome in [
        Outcome::Won(Player::X),
        Outcome::Won(Player::O),
        Outcome::Draw,
        Outcome::Unfinished,
    ] {
        let count = summary.histogram.get(outcome);
        println!(
            "{:<12} {:>6} ({:.1}%)",
            format!("{}:", outcome),
            count,
            percent(count, total)
        );
    }
    println!("------------------------------------------------");
    println!("Average game length: {:.1} plies", summary.mean_plies());
    println!("Completed in {:.2}s", summary.elapsed.as_secs_f64());

    if show_board {
        if let Some(board) = &summary.last_final_state {
            println!("\nFinal position ({}):", board.outcome());
            println!("{}", board);
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.log_level)?;

    let config = cli.run_config();
    let summary = run_matches(&UltimateTicTacToe, &config).context("self-play run failed")?;

    match cli.format {
        OutputFormat::Text => print_text(&config, &summary, cli.show_board),
        OutputFormat::Json => {
            let report = Report::new(&config, &summary, cli.show_board);
            let json = serde_json::to_string_pretty(&report).context("failed to encode report")?;
            println!("{}", json);
        }
    }

    Ok(())
}
