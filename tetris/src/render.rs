use engine::graphics::{GLYPH_H, Renderer2d, WHITE};
use engine::rect::Rect;

use crate::sprites::TetrisSprites;
use crate::state::{BOARD_HEIGHT, BOARD_WIDTH, TetrisState};

pub const HUD_TEXT_SCALE: u32 = 4;

/// Static side-panel labels as `(text, x, baseline)`.
pub const LABELS: [(&str, u32, u32); 3] = [
    ("SCORE 000", 840, 150),
    ("NEXT", 880, 270),
    ("SAVE", 880, 630),
];

pub const PIECE_MARKER: &str = "@";

pub fn board_rect() -> Rect {
    Rect::from_size(BOARD_WIDTH as u32, BOARD_HEIGHT as u32)
}

fn text_top(baseline: i32) -> Option<u32> {
    let top = baseline - (GLYPH_H * HUD_TEXT_SCALE) as i32;
    u32::try_from(top).ok()
}

pub fn draw_frame(gfx: &mut dyn Renderer2d, state: &TetrisState, sprites: &TetrisSprites) {
    gfx.draw_sprite(board_rect(), &sprites.background);

    for (text, x, baseline) in LABELS {
        if let Some(top) = text_top(baseline as i32) {
            gfx.draw_text_scaled(x, top, text, WHITE, HUD_TEXT_SCALE);
        }
    }

    for piece in state.pieces().pieces() {
        // The block font takes unsigned coordinates, so a marker above or left of the board is skipped.
        if let (Ok(x), Some(top)) = (u32::try_from(piece.x), text_top(piece.y)) {
            gfx.draw_text_scaled(x, top, PIECE_MARKER, WHITE, HUD_TEXT_SCALE);
        }
        gfx.draw_sprite(piece.rect(), sprites.line(piece.orientation()));
    }
}
