use engine::GameLogic;

use crate::state::TetrisState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TetrisInput {
    Tick,
    MoveLeft,
    MoveRight,
    Rotate,
}

pub fn apply(state: &mut TetrisState, input: TetrisInput) {
    match input {
        TetrisInput::Tick => state.tick(),
        TetrisInput::MoveLeft => {
            state.move_left();
        }
        TetrisInput::MoveRight => {
            state.move_right();
        }
        TetrisInput::Rotate => {
            state.rotate();
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct TetrisLogic;

impl GameLogic for TetrisLogic {
    type State = TetrisState;
    type Input = TetrisInput;

    fn initial_state(&self) -> Self::State {
        TetrisState::new()
    }

    fn step(&self, state: &Self::State, input: Self::Input) -> Self::State {
        let mut next = state.clone();
        apply(&mut next, input);
        next
    }
}
