pub mod app;
pub mod assets;
pub mod frame_hash;
pub mod graphics;
pub mod rect;
pub mod settings;
pub mod surface;
pub mod timer;

use std::collections::VecDeque;

/// Bounded frame-by-frame history of game states.
///
/// Headless runs keep the most recent `capacity` states so tests can assert properties over every
/// tick without the history growing with the length of the run.
#[derive(Debug)]
pub struct TimeMachine<State> {
    states: VecDeque<State>,
    capacity: usize,
    frame: usize,
}

impl<State> TimeMachine<State> {
    pub const DEFAULT_CAPACITY: usize = 4096;

    pub fn new(initial_state: State) -> Self {
        Self::with_capacity(initial_state, Self::DEFAULT_CAPACITY)
    }

    fn with_capacity(initial_state: State, capacity: usize) -> Self {
        let capacity = capacity.max(1);
        let mut states = VecDeque::with_capacity(capacity.min(Self::DEFAULT_CAPACITY));
        states.push_back(initial_state);
        Self {
            states,
            capacity,
            frame: 0,
        }
    }

    /// Total number of frames recorded since creation (not capped by `capacity`).
    pub fn frame(&self) -> usize {
        self.frame
    }

    pub fn state(&self) -> &State {
        // `states` always holds at least the latest state.
        &self.states[self.states.len() - 1]
    }

    /// Retained states, oldest first. The last entry is the current state.
    pub fn history(&self) -> &VecDeque<State> {
        &self.states
    }

    pub fn record(&mut self, state: State) -> usize {
        if self.states.len() == self.capacity {
            self.states.pop_front();
        }
        self.states.push_back(state);
        self.frame += 1;
        self.frame
    }
}

pub trait GameLogic {
    type State;
    type Input;

    fn initial_state(&self) -> Self::State;
    fn step(&self, state: &Self::State, input: Self::Input) -> Self::State;
}

#[derive(Debug)]
pub struct HeadlessRunner<G: GameLogic> {
    game: G,
    timemachine: TimeMachine<G::State>,
}

impl<G: GameLogic> HeadlessRunner<G> {
    pub fn new(game: G) -> Self {
        let initial_state = game.initial_state();
        Self {
            game,
            timemachine: TimeMachine::new(initial_state),
        }
    }

    /// Starts from an explicit state instead of `GameLogic::initial_state`.
    pub fn from_state(game: G, state: G::State) -> Self {
        Self {
            game,
            timemachine: TimeMachine::new(state),
        }
    }

    pub fn frame(&self) -> usize {
        self.timemachine.frame()
    }

    pub fn state(&self) -> &G::State {
        self.timemachine.state()
    }

    pub fn history(&self) -> &VecDeque<G::State> {
        self.timemachine.history()
    }

    pub fn step(&mut self, input: G::Input) -> usize {
        let next_state = self.game.step(self.timemachine.state(), input);
        self.timemachine.record(next_state)
    }

    pub fn run<I>(&mut self, inputs: I) -> usize
    where
        I: IntoIterator<Item = G::Input>,
    {
        let mut last_frame = self.frame();
        for input in inputs {
            last_frame = self.step(input);
        }
        last_frame
    }

    /// Feeds the same input `count` times, e.g. to advance a number of ticks.
    pub fn repeat(&mut self, input: G::Input, count: usize) -> usize
    where
        G::Input: Clone,
    {
        self.run(std::iter::repeat(input).take(count))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Additive;

    impl GameLogic for Additive {
        type State = i32;
        type Input = i32;

        fn initial_state(&self) -> Self::State {
            0
        }

        fn step(&self, state: &Self::State, input: Self::Input) -> Self::State {
            *state + input
        }
    }

    #[test]
    fn timemachine_drops_oldest_state_at_capacity() {
        let mut tm = TimeMachine::with_capacity(0, 3);
        tm.record(1);
        tm.record(2);
        assert_eq!(tm.history(), &[0, 1, 2]);

        tm.record(3);
        assert_eq!(tm.history(), &[1, 2, 3]);
        assert_eq!(tm.state(), &3);
        assert_eq!(tm.frame(), 3);
    }

    #[test]
    fn long_runs_keep_only_the_newest_states_in_order() {
        let mut tm = TimeMachine::with_capacity(0, 4);
        for value in 1..=10_000 {
            tm.record(value);
        }
        assert_eq!(tm.history().len(), 4);
        assert_eq!(tm.history(), &[9_997, 9_998, 9_999, 10_000]);
        assert_eq!(tm.state(), &10_000);
        assert_eq!(tm.frame(), 10_000);
    }

    #[test]
    fn runner_steps_and_records_history() {
        let mut runner = HeadlessRunner::new(Additive);
        runner.run([1, 2, 3]);
        assert_eq!(runner.frame(), 3);
        assert_eq!(runner.state(), &6);
        assert_eq!(runner.history(), &[0, 1, 3, 6]);
    }

    #[test]
    fn runner_repeat_feeds_input_n_times() {
        let mut runner = HeadlessRunner::from_state(Additive, 10);
        let frame = runner.repeat(2, 5);
        assert_eq!(frame, 5);
        assert_eq!(runner.state(), &20);
    }
}
