use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use tictactoe_engine::SessionRng;
use tictactoe_engine::tictactoe::{
    choose_move, choose_move_parallel, play_match, Board, MatchSettings, OpponentKind, Player,
};

fn mid_game_board() -> Board {
    let mut board = Board::empty();
    for (index, player) in [(0, Player::One), (4, Player::Two), (8, Player::One)] {
        board = board.with_mark(index, player);
    }
    board
}

fn bench_self_play_game() {
    let settings = MatchSettings {
        first_player: Player::Two,
        opponent: OpponentKind::Perfect,
        parallel: false,
    };
    let mut rng = SessionRng::new(0);
    let result = play_match(black_box(&settings), &mut rng).unwrap();
    black_box(result);
}

fn minimax_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("minimax");
    group.sample_size(20);

    let empty = Board::empty();
    group.bench_function("single_move_empty", |b| {
        b.iter(|| choose_move(black_box(&empty)))
    });

    group.bench_function("single_move_empty_parallel", |b| {
        b.iter(|| choose_move_parallel(black_box(&empty)))
    });

    let mid_game = mid_game_board();
    group.bench_function("single_move_mid_game", |b| {
        b.iter(|| choose_move(black_box(&mid_game)))
    });

    group.bench_function("self_play_game", |b| b.iter(bench_self_play_game));

    group.finish();
}

criterion_group!(benches, minimax_bench);
criterion_main!(benches);
