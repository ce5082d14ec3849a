use crate::components::Side;
use crate::params::Params;
use glam::Vec2;
use thiserror::Error;

/// Construction-time configuration problems. Checked once by `Engine::new`
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("playfield must have positive finite size, got {width}x{height}")]
    InvalidPlayfield { width: f32, height: f32 },
    #[error("paddle must have positive finite size, got {width}x{height}")]
    InvalidPaddleSize { width: f32, height: f32 },
    #[error("paddle height {paddle} does not fit playfield height {playfield}")]
    PaddleTooTall { paddle: f32, playfield: f32 },
    #[error("paddles at margin {margin} do not fit playfield width {playfield}")]
    PaddlesDoNotFit { margin: f32, playfield: f32 },
    #[error("paddle step must be positive and finite, got {0}")]
    InvalidPaddleStep(f32),
    #[error("ball must have positive finite size, got {0}")]
    InvalidBallSize(f32),
    #[error("ball speed components must be non-zero and finite, got ({x}, {y})")]
    InvalidBallSpeed { x: f32, y: f32 },
    #[error("winning score must be at least 1")]
    ZeroWinningScore,
}

fn positive(v: f32) -> bool {
    v.is_finite() && v > 0.0
}

/// Game configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub playfield_width: f32,
    pub playfield_height: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_margin: f32,
    pub paddle_step: f32,
    pub ball_size: f32,
    pub ball_speed: Vec2,
    pub win_score: u8,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            playfield_width: Params::PLAYFIELD_WIDTH,
            playfield_height: Params::PLAYFIELD_HEIGHT,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            paddle_margin: Params::PADDLE_MARGIN,
            paddle_step: Params::PADDLE_STEP,
            ball_size: Params::BALL_SIZE,
            ball_speed: Vec2::new(Params::BALL_SPEED_X, Params::BALL_SPEED_Y),
            win_score: Params::WIN_SCORE,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !positive(self.playfield_width) || !positive(self.playfield_height) {
            return Err(ConfigError::InvalidPlayfield {
                width: self.playfield_width,
                height: self.playfield_height,
            });
        }
        if !positive(self.paddle_width) || !positive(self.paddle_height) {
            return Err(ConfigError::InvalidPaddleSize {
                width: self.paddle_width,
                height: self.paddle_height,
            });
        }
        if self.paddle_height > self.playfield_height {
            return Err(ConfigError::PaddleTooTall {
                paddle: self.paddle_height,
                playfield: self.playfield_height,
            });
        }
        if !self.paddle_margin.is_finite()
            || self.paddle_margin < 0.0
            || 2.0 * (self.paddle_margin + self.paddle_width) > self.playfield_width
        {
            return Err(ConfigError::PaddlesDoNotFit {
                margin: self.paddle_margin,
                playfield: self.playfield_width,
            });
        }
        if !positive(self.paddle_step) {
            return Err(ConfigError::InvalidPaddleStep(self.paddle_step));
        }
        if !positive(self.ball_size) {
            return Err(ConfigError::InvalidBallSize(self.ball_size));
        }
        if !self.ball_speed.is_finite() || self.ball_speed.x == 0.0 || self.ball_speed.y == 0.0
        {
            return Err(ConfigError::InvalidBallSpeed {
                x: self.ball_speed.x,
                y: self.ball_speed.y,
            });
        }
        if self.win_score == 0 {
            return Err(ConfigError::ZeroWinningScore);
        }
        Ok(())
    }

    /// Get X position (left edge) for the paddle on a given side
    pub fn paddle_x(&self, side: Side) -> f32 {
        match side {
            Side::Player => self.paddle_margin,
            Side::Ai => self.playfield_width - self.paddle_margin - self.paddle_width,
        }
    }

    /// Paddle Y (top edge) that vertically centers it in the playfield
    pub fn paddle_spawn_y(&self) -> f32 {
        self.playfield_height / 2.0 - self.paddle_height / 2.0
    }

    /// Top-left corner that centers the ball in the playfield
    pub fn ball_spawn(&self) -> Vec2 {
        Vec2::new(
            self.playfield_width / 2.0 - self.ball_size / 2.0,
            self.playfield_height / 2.0 - self.ball_size / 2.0,
        )
    }

    /// Clamp paddle Y to playfield bounds
    pub fn clamp_paddle_y(&self, y: f32) -> f32 {
        y.clamp(0.0, self.playfield_height - self.paddle_height)
    }
}
