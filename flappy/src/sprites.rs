use engine::assets::{AssetDir, AssetError, Sprite};

use crate::state::PipeKind;

pub const BACKGROUND_FILE: &str = "flappybirdbg.png";
pub const BIRD_FILE: &str = "flappybird.png";
pub const TOP_PIPE_FILE: &str = "toppipe.png";
pub const BOTTOM_PIPE_FILE: &str = "bottompipe.png";

#[derive(Debug, Clone)]
pub struct FlappySprites {
    pub background: Sprite,
    pub bird: Sprite,
    pub top_pipe: Sprite,
    pub bottom_pipe: Sprite,
}

impl FlappySprites {
    pub fn load(dir: &AssetDir) -> Result<Self, AssetError> {
        Ok(Self {
            background: dir.load_sprite(BACKGROUND_FILE)?,
            bird: dir.load_sprite(BIRD_FILE)?,
            top_pipe: dir.load_sprite(TOP_PIPE_FILE)?,
            bottom_pipe: dir.load_sprite(BOTTOM_PIPE_FILE)?,
        })
    }

    pub fn pipe(&self, kind: PipeKind) -> &Sprite {
        match kind {
            PipeKind::Top => &self.top_pipe,
            PipeKind::Bottom => &self.bottom_pipe,
        }
    }
}
