use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use strictly_tictactoe::{Board, COMPUTER, Minimax, Player, exhaustive_search, minimax_search};

fn bench_hard_vs_hard_game() {
    let mut board = Board::new();
    let mut mover = Player::X;
    while let Ok(result) = Minimax::new(mover).search(&board) {
        board = board.place(*result.position(), mover).unwrap();
        mover = mover.opponent();
    }
}

fn minimax_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("minimax");

    let opening: Board = "X________".parse().unwrap();
    let mid_game: Board = "X_O/_X_/___".parse().unwrap();

    group.bench_function("alpha_beta_after_opening", |b| {
        b.iter(|| minimax_search(black_box(&opening)))
    });

    group.bench_function("exhaustive_after_opening", |b| {
        b.iter(|| exhaustive_search(black_box(&opening), COMPUTER))
    });

    group.bench_function("alpha_beta_mid_game", |b| {
        b.iter(|| minimax_search(black_box(&mid_game)))
    });

    group.bench_function("hard_vs_hard_game", |b| b.iter(bench_hard_vs_hard_game));

    group.finish();
}

criterion_group!(benches, minimax_bench);
criterion_main!(benches);
