use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tetris3d::core::{Board, Game, GameConfig};
use tetris3d::types::{PieceKind, Rotation, TICK_MS};

fn bench_tick(c: &mut Criterion) {
    let mut game = Game::new(GameConfig::default()).unwrap();

    c.bench_function("game_tick_16ms", |b| {
        b.iter(|| {
            if game.is_over() {
                game = Game::new(GameConfig::default()).unwrap();
            }
            let _ = game.tick(black_box(TICK_MS));
        })
    });
}

fn bench_line_clear(c: &mut Criterion) {
    c.bench_function("delete_one_line", |b| {
        b.iter(|| {
            let mut board = Board::new();
            // Two I pieces and an O complete the bottom row.
            let _ = board.store_piece(-1, 11, PieceKind::I, Rotation::North);
            let _ = board.store_piece(2, 11, PieceKind::I, Rotation::North);
            let _ = board.store_piece(-2, 9, PieceKind::O, Rotation::North);
            black_box(board.delete_possible_lines());
        })
    });
}

fn bench_is_possible_movement(c: &mut Criterion) {
    let mut board = Board::new();
    let _ = board.store_piece(0, 9, PieceKind::T, Rotation::South);

    c.bench_function("is_possible_movement", |b| {
        b.iter(|| {
            black_box(board.is_possible_movement(
                black_box(1),
                black_box(6),
                PieceKind::L,
                Rotation::East,
            ))
        })
    });
}

fn bench_drop(c: &mut Criterion) {
    c.bench_function("drop_until_over", |b| {
        b.iter(|| {
            let mut game = Game::new(GameConfig::default()).unwrap();
            while !game.is_over() {
                let _ = game.drop_piece();
            }
            black_box(game.pieces_placed())
        })
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_line_clear,
    bench_is_possible_movement,
    bench_drop
);
criterion_main!(benches);
