use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_chase::core::GameState;
use tui_chase::types::{Direction, OPPONENT_INTERVAL_MS};

fn bench_tick(c: &mut Criterion) {
    let mut state = GameState::new(12345);

    c.bench_function("game_tick_16ms", |b| {
        b.iter(|| {
            if state.game_over() {
                state.reset();
            }
            state.tick(black_box(16));
        })
    });
}

fn bench_opponent_walk(c: &mut Criterion) {
    let mut state = GameState::new(12345);

    c.bench_function("opponent_walk", |b| {
        b.iter(|| {
            if state.game_over() {
                state.reset();
            }
            state.tick(black_box(OPPONENT_INTERVAL_MS));
        })
    });
}

fn bench_move_player(c: &mut Criterion) {
    let mut state = GameState::new(12345);

    c.bench_function("move_player", |b| {
        b.iter(|| {
            if state.game_over() {
                state.reset();
            }
            state.move_player(black_box(Direction::Right));
            state.take_cues();
        })
    });
}

fn bench_reset(c: &mut Criterion) {
    let mut state = GameState::new(12345);

    c.bench_function("reset", |b| {
        b.iter(|| {
            state.reset();
        })
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_opponent_walk,
    bench_move_player,
    bench_reset
);
criterion_main!(benches);
