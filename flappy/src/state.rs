use engine::{rect::Rect, timer::TickTimer};
use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::settings::FlappyTuning;

pub const BOARD_WIDTH: i32 = 360;
pub const BOARD_HEIGHT: i32 = 640;

pub const BIRD_WIDTH: i32 = 34;
pub const BIRD_HEIGHT: i32 = 24;
pub const BIRD_START_X: i32 = BOARD_WIDTH / 8;
pub const BIRD_START_Y: i32 = BOARD_HEIGHT / 2;

pub const PIPE_WIDTH: i32 = 64;
pub const PIPE_HEIGHT: i32 = 512;

/// Each pipe of a pair is worth half a point, so clearing a pair scores 1.
pub const SCORE_PER_PIPE: f64 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bird {
    pub x: i32,
    pub y: i32,
}

impl Bird {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, BIRD_WIDTH as u32, BIRD_HEIGHT as u32)
    }
}

impl Default for Bird {
    fn default() -> Self {
        Self::new(BIRD_START_X, BIRD_START_Y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PipeKind {
    Top,
    Bottom,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pipe {
    pub kind: PipeKind,
    pub x: i32,
    pub y: i32,
    /// Set once the bird has flown past the pipe's right edge.
    pub passed: bool,
}

impl Pipe {
    /// A fresh pipe entering at the right edge of the board.
    pub const fn new(kind: PipeKind, y: i32) -> Self {
        Self {
            kind,
            x: BOARD_WIDTH,
            y,
            passed: false,
        }
    }

    pub const fn at(kind: PipeKind, x: i32, y: i32) -> Self {
        Self {
            kind,
            x,
            y,
            passed: false,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, PIPE_WIDTH as u32, PIPE_HEIGHT as u32)
    }

    pub fn right_edge(&self) -> i32 {
        self.x + PIPE_WIDTH
    }
}

#[derive(Debug, Clone)]
pub struct FlappyState {
    tuning: FlappyTuning,
    bird: Bird,
    /// One-frame jump impulse, consumed by the next tick.
    velocity: i32,
    /// Never culled: pipes that scroll off the left edge stay in the list.
    pipes: Vec<Pipe>,
    score: f64,
    game_over: bool,
    running: bool,
    spawn_timer: TickTimer,
    ticks: u64,
    rng: StdRng,
}

impl FlappyState {
    pub fn new(tuning: FlappyTuning, seed: u64) -> Self {
        Self {
            tuning,
            bird: Bird::default(),
            velocity: 0,
            pipes: Vec::new(),
            score: 0.0,
            game_over: false,
            running: true,
            spawn_timer: TickTimer::new(tuning.spawn_interval_ticks),
            ticks: 0,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn bird(&self) -> Bird {
        self.bird
    }

    pub fn set_bird(&mut self, bird: Bird) {
        self.bird = bird;
    }

    pub fn velocity(&self) -> i32 {
        self.velocity
    }

    pub fn pipes(&self) -> &[Pipe] {
        &self.pipes
    }

    pub fn pipes_mut(&mut self) -> &mut Vec<Pipe> {
        &mut self.pipes
    }

    pub fn score(&self) -> f64 {
        self.score
    }

    /// Score as shown in the HUD (whole pairs cleared).
    pub fn display_score(&self) -> u64 {
        self.score as u64
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// Whether the tick timer is running. Both timers stop on game over.
    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn spawn_timer(&self) -> &TickTimer {
        &self.spawn_timer
    }

    /// Ticks simulated since the last (re)start.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Advances the simulation by one tick. Does nothing while the timers are stopped.
    pub fn tick(&mut self) {
        if !self.running {
            return;
        }
        self.ticks += 1;

        self.bird.y = (self.bird.y + self.velocity + self.tuning.gravity).max(0);
        self.velocity = 0;

        for pipe in &mut self.pipes {
            pipe.x += self.tuning.pipe_speed;
        }

        if self.bird.y > BOARD_HEIGHT {
            self.game_over = true;
        }

        let bird = self.bird.rect();
        for pipe in &mut self.pipes {
            if !pipe.passed && self.bird.x > pipe.right_edge() {
                pipe.passed = true;
                self.score += SCORE_PER_PIPE;
            }

            if bird.intersects(&pipe.rect()) {
                self.game_over = true;
            }
        }

        if self.game_over {
            self.stop_timers();
            return;
        }

        if self.spawn_timer.advance() {
            self.spawn_pipes();
        }
    }

    /// Any key: queue a jump, and restart if the game is over.
    pub fn press_key(&mut self) {
        self.velocity = self.tuning.jump_velocity;
        if self.game_over {
            self.restart();
        }
    }

    pub fn restart(&mut self) {
        self.game_over = false;
        self.velocity = 0;
        self.score = 0.0;
        self.pipes.clear();
        self.bird = Bird::default();
        self.ticks = 0;
        self.running = true;
        self.spawn_timer.restart();
    }

    /// Spawns a pipe pair at a random height; returns the top pipe's `y`.
    pub fn spawn_pipes(&mut self) -> i32 {
        let top_y = self.random_pipe_offset();
        self.spawn_pipes_at(top_y);
        top_y
    }

    /// Spawns a top pipe at `top_y` and its bottom partner one gap below it.
    pub fn spawn_pipes_at(&mut self, top_y: i32) {
        self.pipes.push(Pipe::new(PipeKind::Top, top_y));
        self.pipes.push(Pipe::new(
            PipeKind::Bottom,
            top_y + PIPE_HEIGHT + self.tuning.pipe_gap,
        ));
    }

    /// Uniform in `(-PIPE_HEIGHT * 3/4, -PIPE_HEIGHT / 4]`.
    fn random_pipe_offset(&mut self) -> i32 {
        let quarter = (PIPE_HEIGHT / 4) as f64;
        let half = (PIPE_HEIGHT / 2) as f64;
        let roll: f64 = self.rng.gen_range(0.0..1.0);
        (-quarter - roll * half) as i32
    }

    fn stop_timers(&mut self) {
        self.running = false;
        self.spawn_timer.stop();
    }
}
