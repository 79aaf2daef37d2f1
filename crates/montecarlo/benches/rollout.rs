use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use uttt_board::{MetaBoard, UltimateTicTacToe};
use uttt_core::Game;
use uttt_montecarlo::{ExploreConfig, Explorer, Simulator};

fn bench_move_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("uttt_movegen");
    group.bench_function("legal_moves_start", |b| {
        let board = MetaBoard::new();
        b.iter(|| board.legal_moves());
    });
    group.bench_function("play_first_move", |b| {
        let board = MetaBoard::new();
        let mv = board.legal_moves()[0];
        b.iter_batched(
            || board,
            |mut state| {
                state.play(mv);
                state
            },
            BatchSize::SmallInput,
        );
    });
    group.finish();
}

fn bench_rollouts(c: &mut Criterion) {
    let mut group = c.benchmark_group("uttt_rollout");
    let game = UltimateTicTacToe;
    let state = game.initial_state();

    group.bench_function("single_rollout", |b| {
        let mut sim = Simulator::new(ChaCha8Rng::seed_from_u64(42));
        b.iter(|| sim.rollout(&game, &state));
    });

    group.bench_function("simulate_100", |b| {
        let mut sim = Simulator::new(ChaCha8Rng::seed_from_u64(42));
        b.iter(|| sim.simulate(&game, &state, 100));
    });

    group.finish();
}

fn bench_explore(c: &mut Criterion) {
    let mut group = c.benchmark_group("uttt_explore");
    group.sample_size(20);
    let game = UltimateTicTacToe;
    let state = game.initial_state();

    group.bench_function("explore_900", |b| {
        let mut explorer = Explorer::new(
            ExploreConfig::with_simulations(900),
            ChaCha8Rng::seed_from_u64(7),
        );
        b.iter(|| explorer.explore(&game, &state));
    });

    group.finish();
}

criterion_group!(benches, bench_move_generation, bench_rollouts, bench_explore);
criterion_main!(benches);
