use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use tui_blockfall::core::{Board, RandomSource};
use tui_blockfall::engine::{GameConfig, GameEngine};
use tui_blockfall::types::{Color, FRAME_MS};

fn new_engine() -> GameEngine<RandomSource<StdRng>> {
    GameEngine::new(GameConfig::default(), RandomSource::seeded(12345))
}

fn bench_advance(c: &mut Criterion) {
    let mut engine = new_engine();

    c.bench_function("advance_16ms", |b| {
        b.iter(|| {
            if engine.game_over() {
                engine.reset();
            }
            engine.advance(black_box(FRAME_MS));
        })
    });
}

fn bench_tick(c: &mut Criterion) {
    let mut engine = new_engine();

    c.bench_function("tick", |b| {
        b.iter(|| {
            if engine.game_over() {
                engine.reset();
            }
            engine.tick();
        })
    });
}

fn bench_line_clear(c: &mut Criterion) {
    c.bench_function("clear_4_lines", |b| {
        b.iter(|| {
            let mut board = Board::new();
            // Fill bottom 4 rows
            for row in 16..20 {
                for col in 0..10 {
                    board.set(row, col, Some(Color::CYAN));
                }
            }
            black_box(board.clear_full_rows());
        })
    });
}

fn bench_reset(c: &mut Criterion) {
    let mut engine = new_engine();

    c.bench_function("reset", |b| {
        b.iter(|| {
            engine.reset();
        })
    });
}

fn bench_try_move(c: &mut Criterion) {
    let mut engine = new_engine();

    c.bench_function("try_move", |b| {
        b.iter(|| {
            engine.try_move(black_box(1), 0);
            engine.try_move(black_box(-1), 0);
        })
    });
}

fn bench_try_rotate(c: &mut Criterion) {
    let mut engine = new_engine();

    c.bench_function("try_rotate", |b| {
        b.iter(|| {
            engine.try_rotate();
        })
    });
}

criterion_group!(
    benches,
    bench_advance,
    bench_tick,
    bench_line_clear,
    bench_reset,
    bench_try_move,
    bench_try_rotate
);
criterion_main!(benches);
