use engine::assets::{AssetDir, AssetError, Sprite};

use crate::state::Orientation;

pub const BACKGROUND_FILE: &str = "boardbackground.png";
pub const LINE_HORIZONTAL_FILE: &str = "linepiece1.png";
pub const LINE_VERTICAL_FILE: &str = "linepiece2.png";

#[derive(Debug, Clone)]
pub struct TetrisSprites {
    pub background: Sprite,
    pub line_horizontal: Sprite,
    pub line_vertical: Sprite,
}

impl TetrisSprites {
    pub fn load(dir: &AssetDir) -> Result<Self, AssetError> {
        Ok(Self {
            background: dir.load_sprite(BACKGROUND_FILE)?,
            line_horizontal: dir.load_sprite(LINE_HORIZONTAL_FILE)?,
            line_vertical: dir.load_sprite(LINE_VERTICAL_FILE)?,
        })
    }

    pub fn line(&self, orientation: Orientation) -> &Sprite {
        match orientation {
            Orientation::Horizontal => &self.line_horizontal,
            Orientation::Vertical => &self.line_vertical,
        }
    }
}
