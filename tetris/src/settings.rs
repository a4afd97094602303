use engine::settings::{Sanitize, VideoSettings, default_version};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TetrisSettings {
    #[serde(default = "default_version")]
    pub version: u32,
    #[serde(default)]
    pub video: VideoSettings,
}

impl Default for TetrisSettings {
    fn default() -> Self {
        Self {
            version: default_version(),
            video: VideoSettings::default(),
        }
    }
}

impl Sanitize for TetrisSettings {
    fn sanitized(mut self) -> Self {
        self.version = default_version();
        self.video = self.video.sanitized();
        self
    }
}
