//! Game loop tests - spawning, movement, gravity, locking and game over

use tetris3d::core::pieces::{occupied_cells, top_row};
use tetris3d::core::{ActivePiece, Board, Game, GameConfig};
use tetris3d::types::{GameAction, PieceKind, Rotation, WAIT_TIME_MS};

fn new_game(seed: u32) -> Game {
    Game::new(GameConfig {
        seed,
        ..GameConfig::default()
    })
    .unwrap()
}

#[test]
fn test_same_seed_same_game() {
    let mut a = new_game(77);
    let mut b = new_game(77);

    for _ in 0..20 {
        assert_eq!(a.active(), b.active());
        assert_eq!(a.next(), b.next());
        let ea = a.drop_piece().unwrap();
        let eb = b.drop_piece().unwrap();
        assert_eq!(ea, eb);
        if a.is_over() {
            break;
        }
    }
    assert_eq!(a.board(), b.board());
}

#[test]
fn test_spawn_is_centered_and_on_board() {
    let board = Board::new();
    let piece = ActivePiece::spawn(PieceKind::I, Rotation::North, &board);
    // width / 2 + x offset = 3 - 2
    assert_eq!(piece.x, 1);
    assert_eq!(piece.y + top_row(PieceKind::I, Rotation::North).unwrap() as i32, 0);
    assert!(piece.fits(&board));
}

#[test]
fn test_fresh_game_state() {
    let game = new_game(1);
    assert!(!game.is_over());
    assert_eq!(game.pieces_placed(), 0);
    assert_eq!(game.lines_cleared(), 0);
    assert_eq!(game.board().filled_count(), 0);
    assert!(game.active().fits(game.board()));
}

#[test]
fn test_moves_stop_at_walls() {
    let mut game = new_game(5);

    let mut lefts = 0;
    while game.move_left() {
        lefts += 1;
        assert!(lefts < 10);
    }
    let at_wall = game.active();
    assert!(!game.move_left());
    assert_eq!(game.active(), at_wall);
    assert!(!game
        .board()
        .is_possible_movement(at_wall.x - 1, at_wall.y, at_wall.kind, at_wall.rotation));

    let mut rights = 0;
    while game.move_right() {
        rights += 1;
        assert!(rights < 10);
    }
    assert!(rights > 0);
}

#[test]
fn test_rotate_advances_rotation_when_it_fits() {
    let mut game = new_game(11);
    // Give the piece room to turn.
    game.move_down();
    game.move_down();

    let before = game.active();
    if game.rotate() {
        assert_eq!(game.active().rotation, before.rotation.rotate_cw());
        assert_eq!((game.active().x, game.active().y), (before.x, before.y));
    } else {
        assert_eq!(game.active(), before);
    }
}

#[test]
fn test_drop_piece_locks_and_spawns_next() {
    let mut game = new_game(3);
    let (next_kind, next_rotation) = game.next();

    let event = game.drop_piece().unwrap().expect("piece should lock");
    assert_eq!(event.lines_cleared, 0);
    assert!(!event.game_over);
    assert_eq!(game.pieces_placed(), 1);
    assert_eq!(game.board().filled_count(), 4);

    // The stored cells are exactly the piece's blocks.
    let p = event.piece;
    for (row, col) in occupied_cells(p.kind, p.rotation) {
        assert_eq!(
            game.board().is_free_block(p.x + col as i32, p.y + row as i32),
            Ok(false)
        );
    }
    // It fell all the way: one row lower would leave the board.
    assert!(game.board().is_out_of_bounds(
        p.x,
        p.y + 1 + occupied_cells(p.kind, p.rotation)
            .iter()
            .map(|&(row, _)| row as i32)
            .max()
            .unwrap()
    ));

    assert_eq!(game.active().kind, next_kind);
    assert_eq!(game.active().rotation, next_rotation);
}

#[test]
fn test_gravity_moves_one_row_per_wait_time() {
    let mut game = new_game(8);
    let start = game.active();

    assert_eq!(game.tick(WAIT_TIME_MS / 2).unwrap(), None);
    assert_eq!(game.active(), start);

    assert_eq!(game.tick(WAIT_TIME_MS / 2).unwrap(), None);
    assert_eq!(game.active().y, start.y + 1);

    assert_eq!(game.tick(WAIT_TIME_MS * 2).unwrap(), None);
    assert_eq!(game.active().y, start.y + 3);
}

#[test]
fn test_gravity_eventually_locks() {
    let mut game = new_game(21);
    let mut locked = None;
    for _ in 0..20 {
        if let Some(event) = game.tick(WAIT_TIME_MS).unwrap() {
            locked = Some(event);
            break;
        }
    }
    let event = locked.expect("piece should lock within the board height");
    assert_eq!(game.pieces_placed(), 1);
    assert_eq!(game.board().filled_count(), 4);
    assert!(!event.game_over);
}

#[test]
fn test_stacking_in_place_ends_the_game() {
    let mut game = new_game(2);
    let mut guard = 0;
    while !game.is_over() {
        game.drop_piece().unwrap();
        guard += 1;
        assert!(guard < 100, "game never ended");
    }

    assert!(game.is_over());
    // Nothing moves once the game is over.
    let frozen = game.active();
    assert!(!game.move_left());
    assert!(!game.move_down());
    assert_eq!(game.tick(WAIT_TIME_MS * 10).unwrap(), None);
    assert_eq!(game.drop_piece().unwrap(), None);
    assert_eq!(game.active(), frozen);
}

#[test]
fn test_apply_action_dispatch() {
    let mut game = new_game(4);
    let start = game.active();

    assert_eq!(game.apply_action(GameAction::MoveDown).unwrap(), None);
    assert_eq!(game.active().y, start.y + 1);

    let event = game.apply_action(GameAction::Drop).unwrap();
    assert!(event.is_some());
    assert_eq!(game.pieces_placed(), 1);
}

#[test]
fn test_line_bookkeeping_over_random_games() {
    for seed in 1..20 {
        let mut game = new_game(seed);
        let mut cleared = 0;
        let mut step = seed;

        while !game.is_over() && game.pieces_placed() < 200 {
            // Spread pieces across the well so rows actually complete.
            step = step.wrapping_mul(1103515245).wrapping_add(12345);
            for _ in 0..(step >> 16) % 4 {
                game.rotate();
            }
            let shift = ((step >> 20) % 7) as i32 - 3;
            for _ in 0..shift.abs() {
                if shift < 0 {
                    game.move_left();
                } else {
                    game.move_right();
                }
            }

            let event = game.drop_piece().unwrap().unwrap();
            cleared += event.lines_cleared;
            for y in 0..game.board().height() {
                assert!(!game.board().is_row_full(y), "seed {} row {}", seed, y);
            }
        }

        assert_eq!(game.lines_cleared() as usize, cleared, "seed {}", seed);
    }
}
