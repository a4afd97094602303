use engine::app::GameApp;
use engine::graphics::Renderer2d;

use crate::logic::{FlappyInput, apply};
use crate::render::draw_frame;
use crate::settings::FlappyTuning;
use crate::sprites::FlappySprites;
use crate::state::FlappyState;

pub struct FlappyApp {
    tuning: FlappyTuning,
    seed: u64,
    sprites: FlappySprites,
}

impl FlappyApp {
    pub fn new(tuning: FlappyTuning, seed: u64, sprites: FlappySprites) -> Self {
        Self {
            tuning,
            seed,
            sprites,
        }
    }
}

/// Every typed character flaps; there is no dedicated jump key. Keys that type nothing (Shift,
/// Ctrl, arrows, function keys) never reach the game.
pub fn input_for_char(_ch: char) -> FlappyInput {
    FlappyInput::Key
}

impl GameApp for FlappyApp {
    type State = FlappyState;

    fn init_state(&mut self) -> Self::State {
        FlappyState::new(self.tuning, self.seed)
    }

    fn handle_char(&mut self, state: &mut Self::State, ch: char) {
        let was_over = state.is_game_over();
        apply(state, input_for_char(ch));
        if was_over {
            log::info!("restarted");
        }
    }

    fn tick(&mut self, state: &mut Self::State) {
        let was_over = state.is_game_over();
        apply(state, FlappyInput::Tick);
        if !was_over && state.is_game_over() {
            log::info!(
                "game over after {} ticks, score {}",
                state.ticks(),
                state.display_score()
            );
        }
    }

    fn render(&self, state: &Self::State, gfx: &mut dyn Renderer2d) {
        draw_frame(gfx, state, &self.sprites);
    }
}
