use engine::GameLogic;

use crate::settings::FlappyTuning;
use crate::state::FlappyState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlappyInput {
    /// One fixed-rate update.
    Tick,
    /// Any key press.
    Key,
}

pub fn apply(state: &mut FlappyState, input: FlappyInput) {
    match input {
        FlappyInput::Tick => state.tick(),
        FlappyInput::Key => state.press_key(),
    }
}

#[derive(Debug, Clone)]
pub struct FlappyLogic {
    tuning: FlappyTuning,
    seed: u64,
}

impl FlappyLogic {
    pub fn new(tuning: FlappyTuning, seed: u64) -> Self {
        Self { tuning, seed }
    }
}

impl GameLogic for FlappyLogic {
    type State = FlappyState;
    type Input = FlappyInput;

    fn initial_state(&self) -> Self::State {
        FlappyState::new(self.tuning, self.seed)
    }

    fn step(&self, state: &Self::State, input: Self::Input) -> Self::State {
        let mut next = state.clone();
        apply(&mut next, input);
        next
    }
}
