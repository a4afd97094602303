use std::time::Duration;

use engine::settings::{Sanitize, VideoSettings, default_version};
use engine::timer::{DEFAULT_TICK_HZ, ticks_for};
use serde::{Deserialize, Serialize};

use crate::state::{BIRD_HEIGHT, BOARD_HEIGHT};

pub const GRAVITY: i32 = 3;
pub const JUMP_VELOCITY: i32 = -90;
pub const PIPE_SPEED: i32 = -4;
pub const PIPE_GAP: i32 = BOARD_HEIGHT / 4;
pub const SPAWN_INTERVAL: Duration = Duration::from_millis(1500);

/// Physics and pacing knobs, all counted in ticks. Defaults reproduce the classic feel at 60 ticks
/// per second; `video.tick_hz` only changes how fast those ticks run.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct FlappyTuning {
    /// Added to the bird's `y` every tick.
    pub gravity: i32,
    /// One-tick impulse applied on a key press (negative is up).
    pub jump_velocity: i32,
    /// Added to every pipe's `x` every tick.
    pub pipe_speed: i32,
    /// Vertical opening between the top and bottom pipe of a pair.
    pub pipe_gap: i32,
    /// Pair spacing on screen is `spawn_interval_ticks * -pipe_speed` pixels at any tick rate.
    pub spawn_interval_ticks: u32,
}

impl Default for FlappyTuning {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            jump_velocity: JUMP_VELOCITY,
            pipe_speed: PIPE_SPEED,
            pipe_gap: PIPE_GAP,
            spawn_interval_ticks: ticks_for(SPAWN_INTERVAL, DEFAULT_TICK_HZ),
        }
    }
}

impl Sanitize for FlappyTuning {
    fn sanitized(mut self) -> Self {
        self.gravity = self.gravity.clamp(0, 32);
        self.jump_velocity = self.jump_velocity.clamp(-BOARD_HEIGHT / 2, 0);
        self.pipe_speed = self.pipe_speed.clamp(-64, -1);
        self.pipe_gap = self.pipe_gap.clamp(BIRD_HEIGHT + 1, BOARD_HEIGHT);
        self.spawn_interval_ticks = self.spawn_interval_ticks.max(1);
        self
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FlappySettings {
    #[serde(default = "default_version")]
    pub version: u32,
    #[serde(default)]
    pub tuning: FlappyTuning,
    #[serde(default)]
    pub video: VideoSettings,
    /// Fixed seed for pipe heights; random per launch when absent.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for FlappySettings {
    fn default() -> Self {
        Self {
            version: default_version(),
            tuning: FlappyTuning::default(),
            video: VideoSettings::default(),
            seed: None,
        }
    }
}

impl Sanitize for FlappySettings {
    fn sanitized(mut self) -> Self {
        self.version = default_version();
        self.tuning = self.tuning.sanitized();
        self.video = self.video.sanitized();
        self
    }
}
