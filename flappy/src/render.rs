use engine::graphics::{GLYPH_H, Renderer2d, WHITE};
use engine::rect::Rect;

use crate::sprites::FlappySprites;
use crate::state::{BOARD_HEIGHT, BOARD_WIDTH, FlappyState};

pub const HUD_TEXT_SCALE: u32 = 4;

// Baselines of the HUD lines; the block font draws from its top-left corner.
const SCORE_POS: (u32, u32) = (10, 35);
const GAME_OVER_POS: (u32, u32) = (100, 300);

pub fn board_rect() -> Rect {
    Rect::from_size(BOARD_WIDTH as u32, BOARD_HEIGHT as u32)
}

pub fn hud_text(state: &FlappyState) -> String {
    if state.is_game_over() {
        format!("Game over: {}", state.display_score())
    } else {
        state.display_score().to_string()
    }
}

pub fn draw_frame(gfx: &mut dyn Renderer2d, state: &FlappyState, sprites: &FlappySprites) {
    gfx.draw_sprite(board_rect(), &sprites.background);
    gfx.draw_sprite(state.bird().rect(), &sprites.bird);
    for pipe in state.pipes() {
        gfx.draw_sprite(pipe.rect(), sprites.pipe(pipe.kind));
    }

    let (x, baseline) = if state.is_game_over() {
        GAME_OVER_POS
    } else {
        SCORE_POS
    };
    let top = baseline.saturating_sub(GLYPH_H * HUD_TEXT_SCALE);
    gfx.draw_text_scaled(x, top, &hud_text(state), WHITE, HUD_TEXT_SCALE);
}
