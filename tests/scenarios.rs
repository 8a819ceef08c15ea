use std::time::Duration;

use falling_blocks::collision::is_valid;
use falling_blocks::frame::{compose, DrawCommand, GAME_OVER_TEXT};
use falling_blocks::gravity::GravityTimer;
use falling_blocks::{ActivePiece, Board, Game, PieceColor, Position, ShapeKind, Step};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn seeded(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

#[test]
fn o_piece_falls_to_the_floor_and_locks() {
    let mut game = Game::with_rng(10, 20, seeded(0));
    game.spawn_shape(ShapeKind::O.shape());
    assert_eq!(game.piece().unwrap().anchor, Position::new(0, 4));

    for _ in 0..18 {
        assert_eq!(game.move_down(), Step::Moved);
    }
    assert_eq!(game.piece().unwrap().anchor, Position::new(18, 4));

    assert_eq!(game.move_down(), Step::Locked { lines_cleared: 0 });
    for (row, col) in [(18, 4), (18, 5), (19, 4), (19, 5)] {
        assert_eq!(game.board().cell(row, col), Some(PieceColor::Yellow));
    }
    assert_eq!(game.board().rows().flatten().filter(|c| c.is_some()).count(), 4);
    assert_eq!(game.piece().unwrap().anchor.row, 0);
    assert!(!game.is_over());
}

#[test]
fn filling_the_last_gap_clears_the_row() {
    let mut board = Board::new(10, 20);
    board.lock((0..9).map(|col| (19, col, PieceColor::Green)));
    let mut game = Game::with_board(board, seeded(1));

    game.spawn_shape(ShapeKind::I.shape());
    assert!(game.rotate());
    while game.move_right() {}
    assert_eq!(game.piece().unwrap().anchor, Position::new(0, 9));

    let mut step = game.move_down();
    while step == Step::Moved {
        step = game.move_down();
    }
    assert_eq!(step, Step::Locked { lines_cleared: 1 });
    assert_eq!(game.lines_cleared(), 1);

    // Three cells of the upright I remain and drop by one row.
    let board = game.board();
    for row in 17..20 {
        assert_eq!(board.cell(row, 9), Some(PieceColor::Cyan));
    }
    assert_eq!(board.rows().flatten().filter(|c| c.is_some()).count(), 3);
}

#[test]
fn full_top_row_ends_the_game_for_every_shape() {
    let mut board = Board::new(10, 20);
    board.lock((0..10).map(|col| (0, col, PieceColor::Red)));

    for kind in [
        ShapeKind::I,
        ShapeKind::O,
        ShapeKind::S,
        ShapeKind::Z,
        ShapeKind::T,
        ShapeKind::L,
        ShapeKind::J,
    ] {
        let piece = ActivePiece::spawn(kind.shape(), board.width());
        assert!(!is_valid(&piece.matrix, piece.anchor, &board), "{kind:?}");
    }

    for seed in 0..20 {
        let game = Game::with_board(board.clone(), seeded(seed));
        assert!(game.is_over(), "seed {seed}");
    }
}

#[test]
fn gravity_timer_drives_the_fall() {
    let mut game = Game::with_rng(10, 20, seeded(2));
    game.spawn_shape(ShapeKind::O.shape());
    let mut gravity = GravityTimer::new(Duration::from_millis(500));

    let frame = Duration::from_millis(50);
    let mut ticks = 0;
    while ticks < 18 {
        for _ in 0..gravity.advance(frame) {
            assert_eq!(game.tick(), Step::Moved);
            ticks += 1;
        }
    }
    assert_eq!(game.piece().unwrap().anchor.row, 18);
}

#[test]
fn unattended_game_tops_out() {
    let mut game = Game::with_rng(10, 20, seeded(42));
    let mut ticks = 0;
    while !game.is_over() {
        game.tick();
        ticks += 1;
        assert!(ticks < 10_000, "game never ended");
    }

    assert_eq!(game.tick(), Step::Ignored);
    let commands = compose(&game);
    assert_eq!(
        commands.last(),
        Some(&DrawCommand::ShowText { text: GAME_OVER_TEXT })
    );
}
