use amazons_core::*;
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn full_cycle(c: &mut Criterion) {
    c.bench_function("move_and_fire_cycle", |b| {
        b.iter(|| {
            let mut game = GameController::new(GameConfig::default()).unwrap();
            for coords in [(3, 0), (3, 1), (3, 1), (2, 1)] {
                black_box(game.handle_selection(black_box(coords)).unwrap());
            }
            game
        })
    });
}

fn queen_line_highlight(c: &mut Criterion) {
    let config = GameConfig::new(DEFAULT_SIZE, DEFAULT_TEAMS).with_reach(Reach::QueenLine);
    let board = Board::new(&config).unwrap();

    c.bench_function("queen_line_highlight_toggle", |b| {
        b.iter_batched_ref(
            || board.clone(),
            |board| {
                board.highlight_reachable(black_box((3, 0)), true).unwrap();
                board.highlight_reachable(black_box((3, 0)), false).unwrap()
            },
            criterion::BatchSize::SmallInput,
        )
    });
}

criterion_group!(benches, full_cycle, queen_line_highlight);
criterion_main!(benches);
