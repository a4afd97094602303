use engine::app::GameApp;
use engine::graphics::Renderer2d;
use winit::event::VirtualKeyCode;

use crate::logic::{TetrisInput, apply};
use crate::render::draw_frame;
use crate::sprites::TetrisSprites;
use crate::state::TetrisState;

pub struct TetrisApp {
    sprites: TetrisSprites,
}

impl TetrisApp {
    pub fn new(sprites: TetrisSprites) -> Self {
        Self { sprites }
    }
}

pub fn input_for_key(key: VirtualKeyCode) -> Option<TetrisInput> {
    match key {
        VirtualKeyCode::Left => Some(TetrisInput::MoveLeft),
        VirtualKeyCode::Right => Some(TetrisInput::MoveRight),
        VirtualKeyCode::Up => Some(TetrisInput::Rotate),
        _ => None,
    }
}

impl GameApp for TetrisApp {
    type State = TetrisState;

    fn init_state(&mut self) -> Self::State {
        TetrisState::new()
    }

    fn handle_key(&mut self, state: &mut Self::State, key: VirtualKeyCode) {
        if let Some(input) = input_for_key(key) {
            apply(state, input);
            if let Some(piece) = state.falling_piece() {
                log::debug!(
                    "{input:?} -> piece at ({}, {}) {:?}",
                    piece.x,
                    piece.y,
                    piece.orientation()
                );
            }
        }
    }

    fn tick(&mut self, state: &mut Self::State) {
        apply(state, TetrisInput::Tick);
    }

    fn render(&self, state: &Self::State, gfx: &mut dyn Renderer2d) {
        draw_frame(gfx, state, &self.sprites);
    }
}
