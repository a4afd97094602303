use engine::{GameLogic, HeadlessRunner};
use tetris::logic::{TetrisInput, TetrisLogic};
use tetris::state::{
    BOARD_HEIGHT, LEFT_LIMIT, Orientation, PIECE_START_X, PIECE_START_Y, Piece, Pieces,
    RIGHT_LIMIT, TetrisState,
};

fn falling(runner: &HeadlessRunner<TetrisLogic>) -> Piece {
    *runner.state().falling_piece().expect("falling piece")
}

#[test]
fn rotating_twice_restores_the_piece() {
    let mut runner = HeadlessRunner::new(TetrisLogic);
    let before = falling(&runner);

    runner.step(TetrisInput::Rotate);
    let turned = falling(&runner);
    assert_eq!(turned.orientation(), Orientation::Vertical);
    assert_eq!((turned.width(), turned.height()), (43, 159));

    runner.step(TetrisInput::Rotate);
    let after = falling(&runner);
    assert_eq!(after.orientation(), before.orientation());
    assert_eq!((after.width(), after.height()), (before.width(), before.height()));
    assert_eq!((after.x, after.y), (before.x, before.y));
}

#[test]
fn flat_piece_stops_at_the_right_limit() {
    let mut runner = HeadlessRunner::new(TetrisLogic);
    runner.repeat(TetrisInput::MoveRight, 100);
    let piece = falling(&runner);
    assert_eq!(piece.x, 440);
    assert!(piece.x + piece.width() < RIGHT_LIMIT);
}

#[test]
fn flat_piece_stops_at_the_left_limit() {
    let mut runner = HeadlessRunner::new(TetrisLogic);
    runner.repeat(TetrisInput::MoveLeft, 100);
    // The left bound is measured from the right edge, so a flat piece overhangs column 104.
    let piece = falling(&runner);
    assert_eq!(piece.x, -50);
    assert!(piece.x + piece.width() > LEFT_LIMIT);
}

#[test]
fn upright_piece_has_its_own_limits() {
    let mut runner = HeadlessRunner::new(TetrisLogic);
    runner.step(TetrisInput::Rotate);

    runner.repeat(TetrisInput::MoveRight, 100);
    assert_eq!(falling(&runner).x, 550);

    runner.repeat(TetrisInput::MoveLeft, 100);
    assert_eq!(falling(&runner).x, 70);
}

#[test]
fn lateral_moves_never_cross_the_bounds() {
    let mut runner = HeadlessRunner::new(TetrisLogic);
    let mut noise = 0x9E37_79B9_7F4A_7C15_u64;
    for _ in 0..2000 {
        noise ^= noise << 13;
        noise ^= noise >> 7;
        noise ^= noise << 17;
        let input = match noise % 5 {
            0 => TetrisInput::Rotate,
            1 | 2 => TetrisInput::MoveLeft,
            _ => TetrisInput::MoveRight,
        };
        let before = falling(&runner);
        runner.step(input);
        let after = falling(&runner);

        if after.x > before.x {
            assert!(after.x + after.width() < RIGHT_LIMIT, "moved right to {}", after.x);
        }
        if after.x < before.x {
            assert!(after.x + after.width() > LEFT_LIMIT, "moved left to {}", after.x);
        }
    }
}

#[test]
fn piece_keeps_falling_past_the_board() {
    let mut runner = HeadlessRunner::new(TetrisLogic);
    let ticks = 2 * BOARD_HEIGHT as usize;
    runner.repeat(TetrisInput::Tick, ticks);

    let piece = falling(&runner);
    assert_eq!(piece.y, PIECE_START_Y + ticks as i32);
    assert!(piece.y > BOARD_HEIGHT);
    assert!(!piece.placed);
    assert_eq!(runner.state().pieces().pieces().len(), 1);
}

#[test]
fn inputs_do_nothing_without_a_falling_piece() {
    let mut resting = Piece::line();
    resting.placed = true;
    let mut pieces = Pieces::default();
    pieces.add_piece(resting);
    let start = TetrisState::with_pieces(pieces);
    let mut runner = HeadlessRunner::from_state(TetrisLogic, start.clone());

    runner.run([
        TetrisInput::MoveLeft,
        TetrisInput::MoveRight,
        TetrisInput::Rotate,
        TetrisInput::Tick,
    ]);

    assert_eq!(runner.state().pieces(), start.pieces());
    assert!(runner.state().falling_piece().is_none());
}

#[test]
fn moves_and_descent_combine() {
    let logic = TetrisLogic;
    let mut state = logic.initial_state();
    for input in [
        TetrisInput::MoveRight,
        TetrisInput::Tick,
        TetrisInput::MoveLeft,
        TetrisInput::MoveLeft,
        TetrisInput::Tick,
    ] {
        state = logic.step(&state, input);
    }
    let piece = state.falling_piece().expect("falling piece");
    assert_eq!((piece.x, piece.y), (PIECE_START_X - 10, PIECE_START_Y + 2));
    assert_eq!(state.ticks(), 2);
}
