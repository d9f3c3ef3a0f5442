use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use tictactoe_common::games::SessionRng;
use tictactoe_common::games::tictactoe::{
    Board, FULL_DEPTH, Mark, Side, TieBreak, minimax, select_move_with,
};

fn bench_select_move_empty_board(c: &mut Criterion) {
    c.bench_function("select_move_empty_board", |b| {
        let mut rng = SessionRng::new(42);
        let board = Board::new();
        b.iter(|| select_move_with(black_box(&board), TieBreak::Sequential, &mut rng))
    });
}

fn bench_select_move_mid_game(c: &mut Criterion) {
    c.bench_function("select_move_mid_game", |b| {
        let mut rng = SessionRng::new(42);
        let board = Board::from_values(&[-1, 0, 0, 0, 1, 0, 0, 0, -1]).unwrap();
        b.iter(|| select_move_with(black_box(&board), TieBreak::Uniform, &mut rng))
    });
}

fn bench_minimax_after_centre_opening(c: &mut Criterion) {
    c.bench_function("minimax_after_centre_opening", |b| {
        let mut board = Board::new();
        board.place(4, Mark::Computer).unwrap();
        b.iter(|| minimax(black_box(&mut board), Side::Player, FULL_DEPTH))
    });
}

fn bench_full_self_play(c: &mut Criterion) {
    c.bench_function("full_self_play", |b| {
        let mut rng = SessionRng::new(7);
        b.iter(|| {
            // The mover always plays as the computer on a mirrored board.
            let mut board = Board::new();
            while let Ok(cell) = select_move_with(&board, TieBreak::Sequential, &mut rng) {
                board.place(cell, Mark::Computer).unwrap();
                board = board.mirrored();
            }
            board
        })
    });
}

criterion_group!(
    benches,
    bench_select_move_empty_board,
    bench_select_move_mid_game,
    bench_minimax_after_centre_opening,
    bench_full_self_play
);
criterion_main!(benches);
